//! Blog View
//!
//! Renders whichever screen the current view state maps to.

use leptos::*;

use stackblog::{screen, Screen};

use super::post_list::Card;
use super::{EmptyPostList, ErrorBanner, Loading, PostDetail, PostList};
use crate::state::use_blog_state;

/// Main content region
#[component]
pub fn BlogView() -> impl IntoView {
    let state = use_blog_state();

    move || {
        state.view.with(|current| match screen(current) {
            Screen::Blank => ().into_view(),
            Screen::Spinner => view! { <Loading /> }.into_view(),
            Screen::ErrorBanner { message } => view! {
                <ErrorBanner message=message />
            }.into_view(),
            Screen::EmptyList { heading, placeholder } => view! {
                <EmptyPostList heading=heading placeholder=placeholder />
            }.into_view(),
            Screen::PostGrid { heading, cards } => {
                let cards: Vec<Card> = cards.iter().map(Card::from).collect();
                view! { <PostList heading=heading cards=cards /> }.into_view()
            }
            Screen::PostDetail { back_label, title, body_html } => view! {
                <PostDetail back_label=back_label title=title body_html=body_html />
            }.into_view(),
        })
    }
}
