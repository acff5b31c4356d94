//! Global Application State
//!
//! The view state lives in a single Leptos signal; every change goes through
//! the core state machine.

use leptos::*;

use stackblog::{load, ClientFactory, Credentials, SiteInfo, ViewEvent, ViewState, BLOG_POST_CATEGORY};

/// State provided to all components
#[derive(Clone, Copy)]
pub struct BlogState {
    /// Current view
    pub view: RwSignal<ViewState>,
    /// Header text
    pub site: StoredValue<SiteInfo>,
}

/// Provide blog state to the component tree
pub fn provide_blog_state(site: SiteInfo) -> BlogState {
    let state = BlogState {
        view: create_rw_signal(ViewState::Uninitialized),
        site: store_value(site),
    };

    provide_context(state);
    state
}

/// Blog state from context
pub fn use_blog_state() -> BlogState {
    use_context::<BlogState>().expect("BlogState not found")
}

impl BlogState {
    /// Feed an event to the state machine.
    ///
    /// Returns false when the signal has been disposed (the app was
    /// unmounted while a fetch was in flight); the event is dropped.
    pub fn dispatch(&self, event: ViewEvent) -> bool {
        self.view.try_update(|view| view.apply(event)).is_some()
    }

    /// Run the load lifecycle once for this session.
    ///
    /// Returns false, without building a client, when the session has
    /// already left `Uninitialized`.
    pub fn start<F>(&self, factory: F, credentials: Credentials) -> bool
    where
        F: ClientFactory + 'static,
        F::Client: 'static,
    {
        if !self.view.with_untracked(|view| *view == ViewState::Uninitialized) {
            return false;
        }

        self.dispatch(ViewEvent::Start);

        let state = *self;
        spawn_local(async move {
            // The client is dropped here: nothing queries again this session
            let (_client, event) = load(&factory, &credentials, BLOG_POST_CATEGORY).await;

            if let ViewEvent::FetchSucceeded(posts) = &event {
                web_sys::console::log_1(&format!("Loaded {} posts", posts.len()).into());
            } else {
                web_sys::console::error_1(&format!("Loading posts failed: {:?}", event).into());
            }

            if !state.dispatch(event) {
                web_sys::console::warn_1(&"Discarding load result for unmounted view".into());
            }
        });

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use async_trait::async_trait;
    use gloo_timers::future::TimeoutFuture;
    use stackblog::{BlogPost, ContentClient, FetchError, SdkInitializationError};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    struct OnePostClient;

    #[async_trait(?Send)]
    impl ContentClient for OnePostClient {
        async fn query(&self, _category: &str) -> Result<Vec<BlogPost>, FetchError> {
            Ok(vec![BlogPost::new("a1", "Hello", "/hello", "<p>Hi</p>")])
        }
    }

    #[derive(Clone, Default)]
    struct CountingFactory {
        created: Rc<Cell<usize>>,
    }

    #[async_trait(?Send)]
    impl ClientFactory for CountingFactory {
        type Client = OnePostClient;

        async fn create(&self, _credentials: &Credentials) -> Result<OnePostClient, SdkInitializationError> {
            self.created.set(self.created.get() + 1);
            Ok(OnePostClient)
        }
    }

    fn credentials() -> Credentials {
        Credentials::new("blt123", "cs456", "production")
    }

    async fn settle(state: BlogState) {
        for _ in 0..50 {
            if state.view.with_untracked(|view| *view != ViewState::Loading) {
                return;
            }
            TimeoutFuture::new(10).await;
        }
    }

    #[wasm_bindgen_test]
    fn test_dispatch_after_dispose_is_dropped() {
        let runtime = create_runtime();
        let state = provide_blog_state(SiteInfo::default());

        assert!(state.dispatch(ViewEvent::Start));
        assert_eq!(state.view.get_untracked(), ViewState::Loading);

        state.view.dispose();
        assert!(!state.dispatch(ViewEvent::Back));

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn test_start_builds_one_client() {
        let runtime = create_runtime();
        let state = provide_blog_state(SiteInfo::default());
        let factory = CountingFactory::default();
        let created = factory.created.clone();

        assert!(state.start(factory.clone(), credentials()));
        assert!(!state.start(factory, credentials()));

        settle(state).await;
        assert_eq!(created.get(), 1);
        assert!(matches!(state.view.get_untracked(), ViewState::List(posts) if posts.len() == 1));

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn test_load_result_after_unmount_is_discarded() {
        let runtime = create_runtime();
        let state = provide_blog_state(SiteInfo::default());
        let factory = CountingFactory::default();
        let created = factory.created.clone();

        assert!(state.start(factory, credentials()));
        state.view.dispose();

        TimeoutFuture::new(50).await;
        assert_eq!(created.get(), 1);
        assert!(!state.dispatch(ViewEvent::Back));

        runtime.dispose();
    }
}
