//! View state machine.
//!
//! One tagged union replaces independent loading/error/selection flags, so
//! states like "loading and failed" cannot be represented.

use std::sync::Arc;

use crate::content::BlogPost;
use crate::error::{FetchError, LoadError, SdkInitializationError};

/// The fetched collection, shared by `List` and `Detail`
pub type Posts = Arc<[BlogPost]>;

/// What the presentation layer renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Uninitialized,
    Loading,
    /// Terminal for the session
    Error(String),
    List(Posts),
    /// `selected` indexes into `posts`, so the post is always one that was fetched
    Detail { posts: Posts, selected: usize },
}

/// Inputs to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// App start
    Start,
    InitFailed(SdkInitializationError),
    FetchFailed(FetchError),
    FetchSucceeded(Vec<BlogPost>),
    /// User picks a post by uid
    Select(String),
    /// User asks to return to the list
    Back,
}

impl From<LoadError> for ViewEvent {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Init(e) => ViewEvent::InitFailed(e),
            LoadError::Fetch(e) => ViewEvent::FetchFailed(e),
        }
    }
}

impl ViewState {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Uninitialized => "uninitialized",
            ViewState::Loading => "loading",
            ViewState::Error(_) => "error",
            ViewState::List(_) => "list",
            ViewState::Detail { .. } => "detail",
        }
    }

    /// The retained collection, in `List` and `Detail`
    pub fn posts(&self) -> Option<&Posts> {
        match self {
            ViewState::List(posts) | ViewState::Detail { posts, .. } => Some(posts),
            _ => None,
        }
    }

    /// The post shown in `Detail`
    pub fn selected_post(&self) -> Option<&BlogPost> {
        match self {
            ViewState::Detail { posts, selected } => posts.get(*selected),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ViewState::Error(_))
    }

    /// Apply `event` in place
    pub fn apply(&mut self, event: ViewEvent) {
        let current = std::mem::take(self);
        *self = transition(current, event);
    }
}

/// Next state for `(state, event)`.
///
/// Total: pairs outside the transition table leave the state unchanged.
pub fn transition(state: ViewState, event: ViewEvent) -> ViewState {
    match (state, event) {
        (ViewState::Uninitialized, ViewEvent::Start) => ViewState::Loading,

        (ViewState::Loading, ViewEvent::InitFailed(e)) => {
            ViewState::Error(LoadError::Init(e).user_message().to_string())
        }
        (ViewState::Loading, ViewEvent::FetchFailed(e)) => {
            ViewState::Error(LoadError::Fetch(e).user_message().to_string())
        }
        (ViewState::Loading, ViewEvent::FetchSucceeded(posts)) => ViewState::List(posts.into()),

        (ViewState::List(posts), ViewEvent::Select(uid)) => {
            match posts.iter().position(|p| p.uid == uid) {
                Some(selected) => ViewState::Detail { posts, selected },
                None => {
                    tracing::debug!(%uid, "Ignoring selection of unknown post");
                    ViewState::List(posts)
                }
            }
        }

        (ViewState::Detail { posts, .. }, ViewEvent::Back) => ViewState::List(posts),

        (state, event) => {
            tracing::debug!(state = state.name(), ?event, "Ignoring event");
            state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FETCH_FAILURE_MESSAGE, INIT_FAILURE_MESSAGE};

    fn sample_posts() -> Vec<BlogPost> {
        vec![
            BlogPost::new("a1", "Hello", "/hello", "<p>Hi</p>"),
            BlogPost::new("a2", "World", "/world", "<p>Bye</p>"),
        ]
    }

    #[test]
    fn test_load_error_maps_to_failure_event() {
        let init: ViewEvent = LoadError::Init(SdkInitializationError::MissingCredential("api_key")).into();
        assert_eq!(
            init,
            ViewEvent::InitFailed(SdkInitializationError::MissingCredential("api_key"))
        );

        let fetch: ViewEvent = LoadError::Fetch(FetchError::Unauthorized(401)).into();
        assert_eq!(fetch, ViewEvent::FetchFailed(FetchError::Unauthorized(401)));
        assert_eq!(
            transition(ViewState::Loading, fetch),
            ViewState::Error(FETCH_FAILURE_MESSAGE.to_string())
        );
    }

    fn loaded() -> ViewState {
        transition(
            transition(ViewState::Uninitialized, ViewEvent::Start),
            ViewEvent::FetchSucceeded(sample_posts()),
        )
    }

    #[test]
    fn test_start_enters_loading() {
        assert_eq!(
            transition(ViewState::Uninitialized, ViewEvent::Start),
            ViewState::Loading
        );
    }

    #[test]
    fn test_init_failure_is_error() {
        let next = transition(
            ViewState::Loading,
            ViewEvent::InitFailed(SdkInitializationError::MissingCredential("api_key")),
        );
        assert_eq!(next, ViewState::Error(INIT_FAILURE_MESSAGE.to_string()));
    }

    #[test]
    fn test_fetch_failure_is_error() {
        let next = transition(
            ViewState::Loading,
            ViewEvent::FetchFailed(FetchError::Unauthorized(401)),
        );
        assert_eq!(next, ViewState::Error(FETCH_FAILURE_MESSAGE.to_string()));
    }

    #[test]
    fn test_fetch_success_keeps_order() {
        let state = loaded();
        let titles: Vec<_> = state.posts().unwrap().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Hello", "World"]);
    }

    #[test]
    fn test_empty_fetch_is_list() {
        let state = transition(ViewState::Loading, ViewEvent::FetchSucceeded(Vec::new()));
        assert!(matches!(&state, ViewState::List(posts) if posts.is_empty()));
    }

    #[test]
    fn test_select_and_back_share_collection() {
        let list = loaded();
        let original = Arc::clone(list.posts().unwrap());

        let detail = transition(list, ViewEvent::Select("a2".into()));
        assert_eq!(detail.selected_post().unwrap().title, "World");

        let back = transition(detail, ViewEvent::Back);
        match back {
            ViewState::List(posts) => assert!(Arc::ptr_eq(&posts, &original)),
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_select_unknown_uid_is_ignored() {
        let list = loaded();
        let next = transition(list.clone(), ViewEvent::Select("zz".into()));
        assert_eq!(next, list);
    }

    #[test]
    fn test_error_is_terminal() {
        let error = ViewState::Error(FETCH_FAILURE_MESSAGE.to_string());
        for event in [
            ViewEvent::Start,
            ViewEvent::FetchSucceeded(sample_posts()),
            ViewEvent::Select("a1".into()),
            ViewEvent::Back,
        ] {
            assert_eq!(transition(error.clone(), event), error);
        }
    }

    #[test]
    fn test_out_of_table_events_are_noops() {
        assert_eq!(
            transition(ViewState::Uninitialized, ViewEvent::Back),
            ViewState::Uninitialized
        );
        assert_eq!(
            transition(ViewState::Loading, ViewEvent::Select("a1".into())),
            ViewState::Loading
        );

        let list = loaded();
        assert_eq!(transition(list.clone(), ViewEvent::Back), list);
        assert_eq!(
            transition(list.clone(), ViewEvent::FetchSucceeded(Vec::new())),
            list
        );

        let detail = transition(loaded(), ViewEvent::Select("a1".into()));
        assert_eq!(
            transition(detail.clone(), ViewEvent::Select("a2".into())),
            detail
        );
    }

    #[test]
    fn test_apply_in_place() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::Start);
        state.apply(ViewEvent::FetchSucceeded(sample_posts()));
        state.apply(ViewEvent::Select("a1".into()));
        assert_eq!(state.name(), "detail");
        assert_eq!(state.selected_post().unwrap().body, "<p>Hi</p>");
    }
}
