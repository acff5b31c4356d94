//! Blog session
//!
//! Runs the load lifecycle (build the client, then query once) and feeds
//! user interaction into the view state machine. A session makes at most one
//! client and one fetch; there is no retry and no refetch.

use crate::content::{fetch_posts, ClientFactory, Credentials, BLOG_POST_CATEGORY};
use crate::error::LoadError;
use crate::view::{ViewEvent, ViewState};

/// Build the client, then fetch `category` with it.
///
/// Returns the client (when construction succeeded) and the event that ends
/// the `Loading` phase. Both failure kinds map to the same terminal state.
pub async fn load<F>(
    factory: &F,
    credentials: &Credentials,
    category: &str,
) -> (Option<F::Client>, ViewEvent)
where
    F: ClientFactory + ?Sized,
{
    let client = match factory.create(credentials).await {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize content client");
            return (None, LoadError::from(e).into());
        }
    };

    let event = match fetch_posts(&client, category).await {
        Ok(posts) => ViewEvent::FetchSucceeded(posts),
        Err(e) => LoadError::from(e).into(),
    };

    (Some(client), event)
}

/// One application session
pub struct BlogSession<F: ClientFactory> {
    factory: F,
    credentials: Credentials,
    category: String,
    /// Kept for the session's lifetime once built
    client: Option<F::Client>,
    state: ViewState,
}

impl<F: ClientFactory> BlogSession<F> {
    pub fn new(factory: F, credentials: Credentials) -> Self {
        Self {
            factory,
            credentials,
            category: BLOG_POST_CATEGORY.to_string(),
            client: None,
            state: ViewState::Uninitialized,
        }
    }

    /// Query a different content type
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn client(&self) -> Option<&F::Client> {
        self.client.as_ref()
    }

    /// Run the load lifecycle. Only the first call does anything.
    pub async fn start(&mut self) -> &ViewState {
        if self.state != ViewState::Uninitialized {
            tracing::debug!(state = self.state.name(), "Session already started");
            return &self.state;
        }

        self.dispatch(ViewEvent::Start);

        let (client, event) = load(&self.factory, &self.credentials, &self.category).await;
        self.client = client;
        self.dispatch(event);

        &self.state
    }

    /// Open the post with `uid`
    pub fn select(&mut self, uid: &str) -> &ViewState {
        self.dispatch(ViewEvent::Select(uid.to_string()));
        &self.state
    }

    /// Open the post at 1-based `position` in the list
    pub fn select_position(&mut self, position: usize) -> &ViewState {
        let uid = match &self.state {
            ViewState::List(posts) => position
                .checked_sub(1)
                .and_then(|i| posts.get(i))
                .map(|post| post.uid.clone()),
            _ => None,
        };

        match uid {
            Some(uid) => self.select(&uid),
            None => {
                tracing::debug!(position, "No post at position");
                &self.state
            }
        }
    }

    /// Return to the list
    pub fn back(&mut self) -> &ViewState {
        self.dispatch(ViewEvent::Back);
        &self.state
    }

    /// Feed an event to the state machine
    pub fn dispatch(&mut self, event: ViewEvent) {
        let before = self.state.name();
        self.state.apply(event);
        tracing::debug!(from = before, to = self.state.name(), "View transition");
    }
}
