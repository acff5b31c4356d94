//! Plain-text renderer for the terminal browser.

use std::fmt::Write;

use super::{Screen, SiteInfo};

/// Render a full page: header, then the screen.
pub fn render_page(site: &SiteInfo, screen: &Screen<'_>) -> String {
    let mut out = String::new();
    let header = format!("{} | {}", site.title, site.tagline);
    let _ = writeln!(out, "{}", header);
    let _ = writeln!(out, "{}", "=".repeat(header.chars().count()));
    out.push('\n');
    out.push_str(&render(screen));
    out
}

/// Render just the main region
pub fn render(screen: &Screen<'_>) -> String {
    let mut out = String::new();

    match screen {
        Screen::Blank => {}
        Screen::Spinner => {
            let _ = writeln!(out, "Loading...");
        }
        Screen::ErrorBanner { message } => {
            let _ = writeln!(out, "Error");
            let _ = writeln!(out, "{}", message);
        }
        Screen::EmptyList { heading, placeholder } => {
            let _ = writeln!(out, "{}", heading);
            let _ = writeln!(out, "{}", "-".repeat(heading.chars().count()));
            let _ = writeln!(out, "{}", placeholder);
        }
        Screen::PostGrid { heading, cards } => {
            let _ = writeln!(out, "{}", heading);
            let _ = writeln!(out, "{}", "-".repeat(heading.chars().count()));
            for card in cards {
                let _ = writeln!(out, "[{}] {}  {}", card.position, card.title, card.affordance);
            }
        }
        Screen::PostDetail {
            back_label,
            title,
            body_html,
        } => {
            let _ = writeln!(out, "{}", back_label);
            out.push('\n');
            let _ = writeln!(out, "# {}", title);
            out.push('\n');
            // Markup passes through untouched
            let _ = writeln!(out, "{}", body_html);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{PostCard, BACK_LABEL, EMPTY_PLACEHOLDER, LIST_HEADING, READ_MORE};

    #[test]
    fn test_render_grid() {
        let screen = Screen::PostGrid {
            heading: LIST_HEADING,
            cards: vec![
                PostCard {
                    position: 1,
                    uid: "a1",
                    title: "Hello",
                    affordance: READ_MORE,
                },
                PostCard {
                    position: 2,
                    uid: "a2",
                    title: "World",
                    affordance: READ_MORE,
                },
            ],
        };

        let text = render(&screen);
        assert!(text.starts_with("Latest Posts\n------------\n"));
        assert!(text.contains("[1] Hello  Read more →\n"));
        assert!(text.contains("[2] World  Read more →\n"));
    }

    #[test]
    fn test_render_empty_list() {
        let text = render(&Screen::EmptyList {
            heading: LIST_HEADING,
            placeholder: EMPTY_PLACEHOLDER,
        });
        assert!(text.contains(EMPTY_PLACEHOLDER));
        assert!(!text.contains('['));
    }

    #[test]
    fn test_render_detail() {
        let text = render(&Screen::PostDetail {
            back_label: BACK_LABEL,
            title: "Hello",
            body_html: "<p>Hi</p>",
        });
        assert_eq!(text, "← Back to all posts\n\n# Hello\n\n<p>Hi</p>\n");
    }

    #[test]
    fn test_render_page_header() {
        let page = render_page(&SiteInfo::default(), &Screen::Spinner);
        assert!(page.starts_with("My Tech Blog | Powered by Contentstack\n"));
        assert!(page.ends_with("Loading...\n"));
    }
}
