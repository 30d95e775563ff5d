use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;

use crate::Error;
use crate::chapter::{Chapter, list_chapters};
use crate::server::AppState;

pub type HtmlResult = Result<Html<String>, (StatusCode, Html<String>)>;

/// Map a library error to a status code and a rendered error page.
pub fn error_response(state: &AppState, err: Error) -> (StatusCode, Html<String>) {
    let status = match &err {
        Error::ChapterNotFound(_) => StatusCode::NOT_FOUND,
        _ => {
            tracing::error!("Request failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let reason = status.canonical_reason().unwrap_or("Error");
    let message = err.to_string();

    let body = state
        .views
        .error(status.as_u16(), reason, &message)
        .unwrap_or(message);
    (status, Html(body))
}

/// `GET /`
pub async fn index(State(state): State<Arc<AppState>>) -> HtmlResult {
    let chapters =
        list_chapters(&state.config.chapters_dir).map_err(|e| error_response(&state, e))?;
    let html = state
        .views
        .index(&chapters)
        .map_err(|e| error_response(&state, e))?;
    Ok(Html(html))
}

/// `GET /chap/{n}`
pub async fn chapter(State(state): State<Arc<AppState>>, Path(n): Path<u32>) -> HtmlResult {
    let config = &state.config;
    let chapter = Chapter::read(
        &config.chapters_dir,
        &config.static_dir,
        &config.static_url_path,
        n,
    )
    .map_err(|e| error_response(&state, e))?;

    let html = state
        .views
        .chapter(&chapter)
        .map_err(|e| error_response(&state, e))?;
    Ok(Html(html))
}
