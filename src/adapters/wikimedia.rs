use crate::config::toml_config::WikimediaConfig;
use crate::domain::model::WikiArticle;
use crate::domain::ports::EncyclopediaResolver;
use crate::domain::selection::{CandidateSelector, FirstCandidate};
use crate::utils::error::{EtlError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;

/// Wikipedia page search through the Wikimedia core REST API.
pub struct WikimediaClient {
    client: Client,
    config: WikimediaConfig,
    selector: Arc<dyn CandidateSelector<SearchPage>>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    pages: Vec<SearchPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    pub key: Option<String>,
    pub title: Option<String>,
}

impl WikimediaClient {
    pub fn new(client: Client, config: WikimediaConfig) -> Self {
        Self {
            client,
            config,
            selector: Arc::new(FirstCandidate),
        }
    }

    pub fn with_selector(mut self, selector: Arc<dyn CandidateSelector<SearchPage>>) -> Self {
        self.selector = selector;
        self
    }

    fn search_url(&self) -> String {
        format!(
            "{}/{}/search/page",
            self.config.endpoint.trim_end_matches('/'),
            self.config.language
        )
    }
}

/// The article URL is always built from the page key, never taken from the response.
pub fn article_url(language: &str, key: &str) -> String {
    format!("https://{}.wikipedia.org/wiki/{}", language, key)
}

#[async_trait]
impl EncyclopediaResolver for WikimediaClient {
    async fn resolve_wiki(&self, query: &str) -> Result<WikiArticle> {
        tracing::debug!("Searching Wikipedia ({}) for '{}'", self.config.language, query);

        let response = self
            .client
            .get(self.search_url())
            .bearer_auth(&self.config.access_token)
            .query(&[("q", query), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?;

        let body: SearchResponse = response.json().await?;

        let not_found = || EtlError::NotFoundError {
            query: query.to_string(),
        };
        let page = self.selector.select(body.pages).ok_or_else(not_found)?;
        let (Some(title), Some(key)) = (page.title, page.key) else {
            return Err(not_found());
        };

        Ok(WikiArticle {
            url: article_url(&self.config.language, &key),
            title,
        })
    }
}
