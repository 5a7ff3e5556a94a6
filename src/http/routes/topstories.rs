use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::global::Global;
use crate::topstories::{collect_top_stories, TopStoriesResponse};

/// GET /nytimes/topstories
///
/// The two most recent stories from each of arts, food, movies, travel and
/// science. Sections the upstream cannot serve are filled with placeholders,
/// so this always answers 200.
#[tracing::instrument(skip(global))]
pub async fn get_top_stories(State(global): State<Arc<Global>>) -> Json<TopStoriesResponse> {
    let stories = collect_top_stories(global.news.as_ref(), chrono::Utc::now()).await;

    tracing::info!("top stories assembled");

    Json(stories)
}
