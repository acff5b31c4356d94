//! The session's single content query.

use super::{BlogPost, ContentClient};
use crate::error::FetchError;

/// Query every entry of `category` through `client`.
///
/// One attempt, no retry. An empty result is a success.
pub async fn fetch_posts<C>(client: &C, category: &str) -> Result<Vec<BlogPost>, FetchError>
where
    C: ContentClient + ?Sized,
{
    tracing::info!(category, "Fetching entries");

    match client.query(category).await {
        Ok(posts) => {
            tracing::info!(category, count = posts.len(), "Fetched entries");
            Ok(posts)
        }
        Err(e) => {
            tracing::error!(category, error = %e, "Error fetching entries");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;

    struct RecordingClient {
        seen: RefCell<Vec<String>>,
        result: Result<Vec<BlogPost>, FetchError>,
    }

    #[async_trait(?Send)]
    impl ContentClient for RecordingClient {
        async fn query(&self, category: &str) -> Result<Vec<BlogPost>, FetchError> {
            self.seen.borrow_mut().push(category.to_string());
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_fetch_passes_category_and_result() {
        let client = RecordingClient {
            seen: RefCell::new(Vec::new()),
            result: Ok(vec![BlogPost::new("a1", "Hello", "/hello", "<p>Hi</p>")]),
        };

        let posts = fetch_posts(&client, "blog_post").await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(*client.seen.borrow(), vec!["blog_post".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_through_trait_object() {
        let client: Box<dyn ContentClient> = Box::new(RecordingClient {
            seen: RefCell::new(Vec::new()),
            result: Err(FetchError::Network("connection refused".into())),
        });

        let err = fetch_posts(client.as_ref(), "blog_post").await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
