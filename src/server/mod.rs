//! HTTP Server
//!
//! Routes:
//! - `GET /` - the embedded gallery page
//! - `GET /api/gallery` - current view as JSON
//! - `POST /api/event` - apply a UI event, respond with the updated view
//! - `GET /images/{*path}` - serve one image from inside the root folder
//!
//! All gallery state lives in [`AppState`] behind a mutex; every event is
//! answered with a full view so the page never drifts from the model.

use axum::{
    extract::{Path as UrlPath, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::handlers::{self, UiEvent};
use crate::logic::path;
use crate::model::Model;
use crate::ui::{self, GalleryView};

/// Shared server state: the folder being browsed, the loaded
/// configuration, and the gallery model.
pub struct AppState {
    pub root: PathBuf,
    pub config: Config,
    pub model: Mutex<Model>,
}

impl AppState {
    /// Create state for a root folder with an empty gallery sized from
    /// the configuration defaults.
    pub fn new(root: PathBuf, config: Config) -> Self {
        let model = Model::new(config.default_columns, config.default_page_size);
        Self {
            root,
            config,
            model: Mutex::new(model),
        }
    }
}

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(gallery_page))
        .route("/api/gallery", get(get_gallery))
        .route("/api/event", post(post_event))
        .route("/images/{*path}", get(get_image))
        .with_state(state)
}

/// Serve the gallery until the listener closes.
pub async fn serve(listener: tokio::net::TcpListener, state: Arc<AppState>) -> anyhow::Result<()> {
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

async fn gallery_page() -> Html<&'static str> {
    Html(ui::page::GALLERY_PAGE)
}

async fn get_gallery(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GalleryView>, StatusCode> {
    // A recompute can hold the lock across a filesystem scan, so wait
    // for it off the async workers
    let view = tokio::task::spawn_blocking(move || {
        let model = state
            .model
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        ui::build_view(&model, &state.root, &state.config)
    })
    .await
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Json(view))
}

async fn post_event(
    State(state): State<Arc<AppState>>,
    Json(event): Json<UiEvent>,
) -> Result<Json<GalleryView>, StatusCode> {
    // Pattern events hit the filesystem, so run off the async workers
    let view = tokio::task::spawn_blocking(move || {
        let mut model = state
            .model
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        handlers::apply_event(&mut model, &state.root, &state.config, event);
        ui::build_view(&model, &state.root, &state.config)
    })
    .await
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Json(view))
}

// Whole-file read rather than a body stream: the files are local
// images, small enough that one buffered read per request is fine
async fn get_image(
    State(state): State<Arc<AppState>>,
    UrlPath(requested): UrlPath<String>,
) -> Response {
    let Some(file) = path::resolve_image_path(&state.root, &requested) else {
        crate::log_debug(&format!("rejected image request: {}", requested));
        return StatusCode::NOT_FOUND.into_response();
    };
    match tokio::fs::read(&file).await {
        Ok(bytes) => {
            ([(header::CONTENT_TYPE, path::content_type_for(&file))], bytes).into_response()
        }
        Err(err) => {
            crate::log_debug(&format!("failed to read {}: {}", file.display(), err));
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_sizes_model_from_config() {
        let config = Config::default();
        let state = AppState::new(PathBuf::from("/tmp"), config.clone());

        let model = state.model.lock().unwrap();
        assert_eq!(model.filters.len(), config.default_columns);
        assert_eq!(model.page.page_size, config.default_page_size);
        assert_eq!(model.page.active_page, 1);
    }
}
