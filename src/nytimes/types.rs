use chrono::NaiveDate;
use serde::Deserialize;

use crate::validators::SortOrder;

/// A top-stories entry as returned upstream. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawArticle {
    pub title: Option<String>,
    pub section: Option<String>,
    pub url: Option<String>,
    pub r#abstract: Option<String>,
    pub published_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TopStoriesPayload {
    #[serde(default)]
    pub results: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub q: String,
    pub begin_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sort: SortOrder,
    pub filter_query: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchPayload {
    pub response: Option<SearchResponse>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    pub docs: Option<Vec<SearchDoc>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchDoc {
    pub headline: Option<Headline>,
    pub snippet: Option<String>,
    pub web_url: Option<String>,
    pub pub_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Headline {
    pub main: Option<String>,
}

impl SearchPayload {
    pub fn into_docs(self) -> Vec<SearchDoc> {
        self.response.and_then(|r| r.docs).unwrap_or_default()
    }
}
