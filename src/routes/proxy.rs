//! EPUB delivery proxy
//!
//! Relays an upstream EPUB download so the reading engine can fetch books
//! from hosts that do not send CORS headers. The relay rewrites the content
//! type, since the Gutenberg cache serves EPUBs as `application/octet-stream`.

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use futures::TryStreamExt;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::state::AppState;

pub const EPUB_CONTENT_TYPE: &str = "application/epub+zip";
const EPUB_FILENAME: &str = "book.epub";

#[derive(Debug, Deserialize)]
pub struct ProxyParams {
    url: Option<String>,
}

/// Create the proxy router
pub fn router() -> Router<AppState> {
    Router::new().route("/proxy-epub", get(proxy_epub))
}

/// Relay the EPUB at `url`.
///
/// The upstream body is streamed through without buffering; a fetch that
/// fails outright or answers non-2xx becomes a 500 with a plain-text body.
async fn proxy_epub(
    State(state): State<AppState>,
    Query(params): Query<ProxyParams>,
) -> Result<Response> {
    let url = params
        .url
        .filter(|u| !u.is_empty())
        .ok_or(AppError::MissingUrl)?;

    tracing::info!(%url, "proxying EPUB");

    let upstream = state
        .http()
        .get(&url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(AppError::UpstreamFetch)?;

    let mut response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, EPUB_CONTENT_TYPE)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", EPUB_FILENAME),
        );
    if let Some(len) = upstream.content_length() {
        response = response.header(header::CONTENT_LENGTH, HeaderValue::from(len));
    }

    let stream = upstream.bytes_stream().inspect_err(|err| {
        tracing::error!(error = %err, "EPUB relay interrupted mid-stream");
    });

    Ok(response
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::Internal(e.to_string()))?)
}
