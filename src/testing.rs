//! In-memory [`NewsSource`] used by the aggregator and route tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::nytimes::{NewsSource, RawArticle, Result, SearchPayload, SearchQuery, UpstreamError};
use crate::sections::Section;

#[derive(Default)]
pub struct StubSource {
    sections: HashMap<Section, std::result::Result<Vec<RawArticle>, u16>>,
    search: Option<std::result::Result<serde_json::Value, u16>>,
    delay: Option<Duration>,
    last_query: Mutex<Option<SearchQuery>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sections without an explicit response return no articles.
    pub fn section(mut self, section: Section, articles: Vec<RawArticle>) -> Self {
        self.sections.insert(section, Ok(articles));
        self
    }

    pub fn failing_section(mut self, section: Section, status: u16) -> Self {
        self.sections.insert(section, Err(status));
        self
    }

    pub fn every_section(mut self, articles: Vec<RawArticle>) -> Self {
        for section in Section::ALL {
            self.sections.insert(section, Ok(articles.clone()));
        }
        self
    }

    pub fn search_response(mut self, body: serde_json::Value) -> Self {
        self.search = Some(Ok(body));
        self
    }

    pub fn failing_search(mut self, status: u16) -> Self {
        self.search = Some(Err(status));
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn last_query(&self) -> Option<SearchQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

fn upstream_failure(status: u16) -> UpstreamError {
    UpstreamError::Status {
        status,
        body: "stubbed upstream failure".to_string(),
    }
}

#[async_trait]
impl NewsSource for StubSource {
    async fn fetch_top_stories(&self, section: Section) -> Result<Vec<RawArticle>> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.sections.get(&section) {
            Some(Ok(articles)) => Ok(articles.clone()),
            Some(Err(status)) => Err(upstream_failure(*status)),
            None => Ok(Vec::new()),
        }
    }

    async fn search_articles(&self, query: &SearchQuery) -> Result<SearchPayload> {
        *self.last_query.lock().unwrap() = Some(query.clone());

        match &self.search {
            Some(Ok(body)) => Ok(serde_json::from_value(body.clone()).unwrap()),
            Some(Err(status)) => Err(upstream_failure(*status)),
            None => Ok(SearchPayload::default()),
        }
    }
}

pub fn article(title: &str, published_date: &str) -> RawArticle {
    RawArticle {
        title: Some(title.to_string()),
        section: Some("arts".to_string()),
        url: Some(format!("https://www.nytimes.com/{}", title.replace(' ', "-"))),
        r#abstract: Some(format!("About {title}.")),
        published_date: Some(published_date.to_string()),
    }
}
