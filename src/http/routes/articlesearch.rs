use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::global::Global;
use crate::http::error::{ApiError, ApiErrorCode};
use crate::nytimes::{SearchDoc, SearchQuery};
use crate::validators::{validate_date_range, SortOrder};

#[derive(Debug, Deserialize)]
pub struct ArticleSearchParams {
    q: Option<String>,
    /// `YYYY-MM-DD`
    begin_date: Option<NaiveDate>,
    /// `YYYY-MM-DD`
    end_date: Option<NaiveDate>,
    sort: Option<String>,
    /// Passed to the upstream as `fq`, e.g. `section_name:("Business")`.
    filter_query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ArticleSearchResult {
    pub headline: String,
    pub snippet: String,
    pub web_url: String,
    pub pub_date: String,
}

#[derive(Debug, Serialize)]
pub struct ArticleSearchResponse {
    pub results: Vec<ArticleSearchResult>,
}

impl From<SearchDoc> for ArticleSearchResult {
    fn from(doc: SearchDoc) -> Self {
        Self {
            headline: doc.headline.and_then(|h| h.main).unwrap_or_default(),
            snippet: doc.snippet.unwrap_or_default(),
            web_url: doc.web_url.unwrap_or_default(),
            pub_date: doc.pub_date.unwrap_or_default(),
        }
    }
}

impl ArticleSearchParams {
    fn into_search_query(self, today: NaiveDate) -> Result<SearchQuery, ApiError> {
        let q = self.q.filter(|q| !q.is_empty()).ok_or_else(|| {
            ApiError::unprocessable_entity(
                ApiErrorCode::INVALID_QUERY,
                "Query parameter 'q' is required and cannot be empty",
            )
        })?;

        validate_date_range(self.begin_date, self.end_date, today)?;

        let sort = self
            .sort
            .as_deref()
            .map(str::parse::<SortOrder>)
            .transpose()?
            .unwrap_or_default();

        Ok(SearchQuery {
            q,
            begin_date: self.begin_date,
            end_date: self.end_date,
            sort,
            filter_query: self.filter_query.filter(|fq| !fq.is_empty()),
        })
    }
}

/// GET /nytimes/articlesearch
#[tracing::instrument(skip(global))]
pub async fn article_search(
    State(global): State<Arc<Global>>,
    params: Result<Query<ArticleSearchParams>, QueryRejection>,
) -> Result<Json<ArticleSearchResponse>, ApiError> {
    let Query(params) = params.map_err(|e| {
        tracing::debug!(error = %e, "rejected search query string");
        ApiError::unprocessable_entity(ApiErrorCode::INVALID_QUERY, e.body_text())
    })?;

    let query = params.into_search_query(chrono::Utc::now().date_naive())?;

    let payload = global.news.search_articles(&query).await.map_err(|e| {
        tracing::error!(error = %e, "failed to search articles");
        ApiError::internal_server_error(
            ApiErrorCode::UPSTREAM_ERROR,
            format!("Error searching articles: {e}"),
        )
    })?;

    let results: Vec<ArticleSearchResult> = payload.into_docs().into_iter().map(Into::into).collect();

    tracing::info!(count = results.len(), "article search completed");

    Ok(Json(ArticleSearchResponse { results }))
}
