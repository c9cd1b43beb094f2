//! Prompt context loading.
//!
//! Gathers the five optional content collections that ground the assistant.
//! Each configured endpoint gets one request with an independent timeout; a
//! slow or failing source is absorbed into an empty list so that it can
//! never block the others or surface as a user-visible error.

use async_trait::async_trait;
use folio_core::config::ContentEndpoints;
use folio_core::content::{DataEnvelope, PromptContext};
use folio_core::error::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Per-request timeout applied to each content fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches the raw record list from one content endpoint.
///
/// The trait exists so the loader can be exercised without a network; the
/// production implementation is [`HttpContentFetcher`].
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Returns the records inside the endpoint's `{ "data": [...] }` envelope.
    async fn fetch_records(&self, url: &str) -> Result<Vec<serde_json::Value>>;
}

/// reqwest-backed fetcher for the content API.
#[derive(Clone, Default)]
pub struct HttpContentFetcher {
    client: Client,
}

impl HttpContentFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentFetcher for HttpContentFetcher {
    async fn fetch_records(&self, url: &str) -> Result<Vec<serde_json::Value>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let envelope: DataEnvelope<serde_json::Value> = response.json().await?;
        Ok(envelope.data)
    }
}

/// Loads a [`PromptContext`] by fanning out over the configured endpoints.
///
/// All five fetches run concurrently and the load completes only once every
/// one of them has resolved, successfully or by falling back to empty.
pub struct PromptContextLoader {
    fetcher: Arc<dyn ContentFetcher>,
    endpoints: ContentEndpoints,
    timeout: Duration,
}

impl PromptContextLoader {
    /// Creates a loader backed by the HTTP fetcher.
    pub fn new(endpoints: ContentEndpoints) -> Self {
        Self::with_fetcher(endpoints, Arc::new(HttpContentFetcher::new()))
    }

    /// Creates a loader backed by the given fetcher.
    pub fn with_fetcher(endpoints: ContentEndpoints, fetcher: Arc<dyn ContentFetcher>) -> Self {
        Self {
            fetcher,
            endpoints,
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetches every configured source concurrently and combines the results.
    ///
    /// This never fails: an unreachable, slow, or malformed source simply
    /// contributes an empty list, logged at `warn` level.
    pub async fn load(&self) -> PromptContext {
        let (skills, projects, articles, blogs, courses) = tokio::join!(
            self.fetch_section("skills", self.endpoints.skills.as_deref()),
            self.fetch_section("projects", self.endpoints.projects.as_deref()),
            self.fetch_section("articles", self.endpoints.articles.as_deref()),
            self.fetch_section("blogs", self.endpoints.blogs.as_deref()),
            self.fetch_section("courses", self.endpoints.courses.as_deref()),
        );

        let context = PromptContext {
            skills,
            projects,
            articles,
            blogs,
            courses,
        };
        info!(
            skills = context.skills.len(),
            projects = context.projects.len(),
            articles = context.articles.len(),
            blogs = context.blogs.len(),
            courses = context.courses.len(),
            "prompt context loaded"
        );
        context
    }

    /// Fetches one source, decoding each record individually so a single
    /// malformed entry does not discard the rest.
    async fn fetch_section<T: DeserializeOwned>(&self, source: &str, url: Option<&str>) -> Vec<T> {
        let Some(url) = url else {
            return Vec::new();
        };

        let records = match tokio::time::timeout(self.timeout, self.fetcher.fetch_records(url))
            .await
        {
            Ok(Ok(records)) => records,
            Ok(Err(err)) => {
                warn!(source, error = %err, "content fetch failed; treating source as empty");
                return Vec::new();
            }
            Err(_) => {
                warn!(source, url, timeout_secs = self.timeout.as_secs_f64(), "content fetch timed out; treating source as empty");
                return Vec::new();
            }
        };

        records
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<T>(value) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(source, error = %err, "skipping malformed record");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::error::FolioError;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted per-URL behavior for tests.
    enum Reply {
        Records(Vec<serde_json::Value>),
        Error,
        Hang(Duration),
    }

    #[derive(Default)]
    struct ScriptedFetcher {
        replies: HashMap<String, Reply>,
        calls: AtomicUsize,
    }

    impl ScriptedFetcher {
        fn with(mut self, url: &str, reply: Reply) -> Self {
            self.replies.insert(url.to_string(), reply);
            self
        }
    }

    #[async_trait]
    impl ContentFetcher for ScriptedFetcher {
        async fn fetch_records(&self, url: &str) -> Result<Vec<serde_json::Value>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.replies.get(url) {
                Some(Reply::Records(records)) => Ok(records.clone()),
                Some(Reply::Error) => Err(FolioError::fetch("boom")),
                Some(Reply::Hang(duration)) => {
                    tokio::time::sleep(*duration).await;
                    Ok(Vec::new())
                }
                None => Err(FolioError::fetch(format!("unexpected url: {url}"))),
            }
        }
    }

    fn endpoints() -> ContentEndpoints {
        ContentEndpoints {
            skills: Some("mem://skills".to_string()),
            projects: Some("mem://projects".to_string()),
            articles: None,
            blogs: None,
            courses: None,
        }
    }

    #[tokio::test]
    async fn test_unconfigured_endpoints_are_not_fetched() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        let loader =
            PromptContextLoader::with_fetcher(ContentEndpoints::default(), fetcher.clone());

        let context = loader.load().await;

        assert!(context.is_empty());
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_successful_sources_populate_context() {
        let fetcher = Arc::new(
            ScriptedFetcher::default()
                .with(
                    "mem://skills",
                    Reply::Records(vec![
                        json!({"name": "Languages", "skillsList": [{"name": "Rust"}]}),
                    ]),
                )
                .with(
                    "mem://projects",
                    Reply::Records(vec![json!({"title": "Folio"})]),
                ),
        );
        let loader = PromptContextLoader::with_fetcher(endpoints(), fetcher);

        let context = loader.load().await;

        assert_eq!(context.skills.len(), 1);
        assert_eq!(context.skills[0].name.as_deref(), Some("Languages"));
        assert_eq!(context.projects.len(), 1);
        assert!(context.articles.is_empty());
    }

    #[tokio::test]
    async fn test_failing_source_is_absorbed_as_empty() {
        let fetcher = Arc::new(
            ScriptedFetcher::default()
                .with("mem://skills", Reply::Error)
                .with(
                    "mem://projects",
                    Reply::Records(vec![json!({"title": "Folio"})]),
                ),
        );
        let loader = PromptContextLoader::with_fetcher(endpoints(), fetcher);

        let context = loader.load().await;

        assert!(context.skills.is_empty());
        assert_eq!(context.projects.len(), 1);
    }

    #[tokio::test]
    async fn test_slow_source_times_out_without_blocking_others() {
        let fetcher = Arc::new(
            ScriptedFetcher::default()
                .with("mem://skills", Reply::Hang(Duration::from_secs(60)))
                .with(
                    "mem://projects",
                    Reply::Records(vec![json!({"title": "Folio"})]),
                ),
        );
        let loader = PromptContextLoader::with_fetcher(endpoints(), fetcher)
            .with_timeout(Duration::from_millis(50));

        let context = loader.load().await;

        assert!(context.skills.is_empty());
        assert_eq!(context.projects.len(), 1);
        assert_eq!(context.projects[0].title.as_deref(), Some("Folio"));
    }

    #[tokio::test]
    async fn test_malformed_records_are_skipped_individually() {
        let fetcher = Arc::new(ScriptedFetcher::default().with(
            "mem://projects",
            Reply::Records(vec![
                json!({"title": "Good", "technologies": ["Rust"]}),
                json!({"technologies": "not-an-array"}),
            ]),
        ));
        let loader = PromptContextLoader::with_fetcher(
            ContentEndpoints {
                projects: Some("mem://projects".to_string()),
                ..Default::default()
            },
            fetcher,
        );

        let context = loader.load().await;

        assert_eq!(context.projects.len(), 1);
        assert_eq!(context.projects[0].title.as_deref(), Some("Good"));
    }
}
