use crate::infra::AppState;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use school_search::pipeline::{resolve_schools, SchoolSearchResult};

#[derive(Debug, Deserialize)]
pub(crate) struct SearchParams {
    #[serde(default)]
    pub(crate) q: Option<String>,
}

pub(crate) fn router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/schools/search",
            axum::routing::get(school_search_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Forwards the query to the upstream directory and resolves the returned
/// page into canonical schools. An upstream failure is answered with the
/// empty substitute result rather than an error.
pub(crate) async fn school_search_endpoint(
    Extension(state): Extension<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        let payload = json!({ "error": "query parameter q cannot be empty" });
        return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
    }

    let result = match state.directory.search(query) {
        Ok(page) => SchoolSearchResult {
            schools: resolve_schools(page.records),
            page_info: page.page_info,
        },
        Err(err) => {
            warn!(%err, query, "directory search failed; substituting empty result");
            SchoolSearchResult::empty()
        }
    };

    (StatusCode::OK, Json(result)).into_response()
}
