//! JSON API
//!
//! Every view model the HTML page draws is also available as JSON, together
//! with the select-control options and a health summary.

use std::str::FromStr;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::data::{DatasetSummary, SelectOptions};
use crate::views::{self, RenderedView, Selection, View};
use crate::web::AppState;

#[derive(Debug, Serialize)]
pub struct ApiView {
    pub slug: &'static str,
    pub label: &'static str,
}

impl From<View> for ApiView {
    fn from(view: View) -> Self {
        Self {
            slug: view.slug(),
            label: view.label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiHealth {
    pub status: &'static str,
    pub version: &'static str,
    pub loaded_at: DateTime<Utc>,
    pub counts: DatasetSummary,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/views", get(list_views))
        .route("/views/{view}", get(get_view))
        .route("/options", get(get_options))
        .route("/health", get(get_health))
}

async fn list_views() -> Json<Vec<ApiView>> {
    Json(View::ALL.into_iter().map(ApiView::from).collect())
}

async fn get_view(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(selection): Query<Selection>,
) -> Result<Json<RenderedView>, StatusCode> {
    let view = View::from_str(&slug).map_err(|e| {
        debug!("{}", e);
        StatusCode::NOT_FOUND
    })?;

    let datasets = state.store.snapshot();
    Ok(Json(views::render(view, &datasets, &selection, &state.config)))
}

async fn get_options(State(state): State<AppState>) -> Json<SelectOptions> {
    Json(state.store.snapshot().select_options())
}

async fn get_health(State(state): State<AppState>) -> Json<ApiHealth> {
    let datasets = state.store.snapshot();
    Json(ApiHealth {
        status: "ok",
        version: crate::VERSION,
        loaded_at: datasets.loaded_at,
        counts: datasets.summary(),
    })
}
