use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{Path, Query, State},
    http::{Method, StatusCode},
    response::{Html, Redirect},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use crate::config::ExplorerConfig;
use crate::data::DataStore;
use crate::views::{self, Selection, View};
use crate::{api, html};

/// Shared by every request; the datasets behind the store are read-only
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DataStore>,
    pub config: Arc<ExplorerConfig>,
}

impl AppState {
    pub fn new(store: DataStore, config: ExplorerConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds.into());

    Router::new()
        .route("/", get(|| async { Redirect::to("/map") }))
        .route("/{view}", get(page))
        .nest("/api", api::router())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(cors)
        .with_state(state)
}

async fn page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(selection): Query<Selection>,
) -> Result<Html<String>, StatusCode> {
    let view = View::from_str(&slug).map_err(|e| {
        debug!("{}", e);
        StatusCode::NOT_FOUND
    })?;

    let datasets = state.store.snapshot();
    let rendered = views::render(view, &datasets, &selection, &state.config);
    let page = html::render_page(&rendered).map_err(|e| {
        error!("Failed to render {} page: {}", view, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Html(page))
}

/// Serve the dashboard until Ctrl-C
pub async fn run(config: ExplorerConfig, store: DataStore) -> Result<()> {
    let addr = config.bind_address();
    let port = config.server.port;
    let app = app(AppState::new(store, config));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    tracing::info!("Dashboard running at http://localhost:{}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("Server error")?;

    tracing::info!("Dashboard shut down");
    Ok(())
}
