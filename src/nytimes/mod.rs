use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::NytimesConfig;
use crate::sections::Section;

pub mod error;
pub mod types;


pub use error::{Result, UpstreamError};
pub use types::{Headline, RawArticle, SearchDoc, SearchPayload, SearchQuery, SearchResponse};

use types::TopStoriesPayload;

const SEARCH_FIELDS: &str = "headline,snippet,web_url,pub_date,lead_paragraph,source";

/// Where articles come from. Implementations perform one upstream call per
/// method invocation and never retry.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch_top_stories(&self, section: Section) -> Result<Vec<RawArticle>>;

    async fn search_articles(&self, query: &SearchQuery) -> Result<SearchPayload>;
}

pub struct NytClient {
    client: Client,
    api_key: String,
    top_stories_url: String,
    article_search_url: String,
}

impl NytClient {
    pub fn new(config: &NytimesConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            top_stories_url: config.top_stories_url.trim_end_matches('/').to_string(),
            article_search_url: config.article_search_url.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl NewsSource for NytClient {
    async fn fetch_top_stories(&self, section: Section) -> Result<Vec<RawArticle>> {
        let url = format!("{}/{}.json", self.top_stories_url, section.slug());
        let request = self
            .client
            .get(&url)
            .query(&[("api-key", self.api_key.as_str())]);

        let payload: TopStoriesPayload = self.get_json(request).await.map_err(|e| {
            tracing::error!(error = %e, %section, "failed to fetch top stories");
            e
        })?;

        let articles = payload
            .results
            .unwrap_or_default()
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<RawArticle>(value) {
                Ok(article) => Some(article),
                Err(e) => {
                    tracing::debug!(error = %e, %section, "skipping undecodable article");
                    None
                }
            })
            .collect();

        Ok(articles)
    }

    async fn search_articles(&self, query: &SearchQuery) -> Result<SearchPayload> {
        let mut params = vec![
            ("q", query.q.clone()),
            ("api-key", self.api_key.clone()),
            ("sort", query.sort.as_str().to_string()),
            ("fl", SEARCH_FIELDS.to_string()),
        ];

        if let Some(begin) = query.begin_date {
            params.push(("begin_date", begin.format("%Y%m%d").to_string()));
        }

        if let Some(end) = query.end_date {
            params.push(("end_date", end.format("%Y%m%d").to_string()));
        }

        if let Some(fq) = &query.filter_query {
            params.push(("fq", fq.clone()));
        }

        let request = self.client.get(&self.article_search_url).query(&params);

        self.get_json(request).await.map_err(|e| {
            tracing::error!(error = %e, q = %query.q, "article search failed");
            e
        })
    }
}
