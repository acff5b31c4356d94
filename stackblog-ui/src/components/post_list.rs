//! Post List Components
//!
//! Grid of clickable post summaries, and its empty-collection placeholder.

use leptos::*;

use stackblog::{PostCard, ViewEvent};

use crate::state::use_blog_state;

/// Owned copy of a grid card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub uid: String,
    pub title: String,
    pub affordance: &'static str,
}

impl From<&PostCard<'_>> for Card {
    fn from(card: &PostCard<'_>) -> Self {
        Self {
            uid: card.uid.to_string(),
            title: card.title.to_string(),
            affordance: card.affordance,
        }
    }
}

/// Grid of post summaries; clicking one opens it
#[component]
pub fn PostList(
    heading: &'static str,
    cards: Vec<Card>,
) -> impl IntoView {
    let state = use_blog_state();

    view! {
        <div class="space-y-6">
            <h2 class="text-3xl font-bold border-b pb-4 mb-6">{heading}</h2>
            <ul class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {cards.into_iter().map(|card| {
                    let uid = card.uid;
                    view! {
                        <li
                            on:click=move |_| {
                                state.dispatch(ViewEvent::Select(uid.clone()));
                            }
                            class="bg-white p-6 rounded-lg shadow-md hover:shadow-xl transition-shadow duration-300 cursor-pointer group"
                        >
                            <h3 class="text-xl font-semibold text-blue-600 group-hover:text-blue-800 transition-colors">
                                {card.title}
                            </h3>
                            <span class="text-sm text-slate-400 mt-4 block">{card.affordance}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}

/// Shown when the fetch succeeded with no posts
#[component]
pub fn EmptyPostList(
    heading: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h2 class="text-3xl font-bold border-b pb-4 mb-6">{heading}</h2>
            <p>{placeholder}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackblog::render::READ_MORE;

    #[test]
    fn test_card_from_post_card() {
        let card = Card::from(&PostCard {
            position: 1,
            uid: "a1",
            title: "Hello",
            affordance: READ_MORE,
        });
        assert_eq!(card.uid, "a1");
        assert_eq!(card.title, "Hello");
        assert_eq!(card.affordance, READ_MORE);
    }
}
