use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::global::Global;

pub mod articlesearch;
pub mod topstories;

pub fn routes() -> Router<Arc<Global>> {
    Router::new()
        .route("/topstories", get(topstories::get_top_stories))
        .route("/articlesearch", get(articlesearch::article_search))
}

#[derive(serde::Serialize)]
pub(crate) struct RootResponse {
    message: &'static str,
    version: &'static str,
    uptime: u64,
    endpoints: [&'static str; 2],
}

#[tracing::instrument(skip(global))]
pub(crate) async fn root(State(global): State<Arc<Global>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to NYTimes Article Microservice",
        version: env!("CARGO_PKG_VERSION"),
        uptime: global.started_at.elapsed().as_secs(),
        endpoints: ["/nytimes/topstories", "/nytimes/articlesearch"],
    })
}
