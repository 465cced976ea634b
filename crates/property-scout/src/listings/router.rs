use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use super::search::{generate, SearchQuery};
use crate::config::SearchConfig;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub offset: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Router exposing the ranked listing search.
pub fn listing_router(settings: SearchConfig) -> Router {
    Router::new()
        .route("/search", get(search_handler))
        .with_state(Arc::new(settings))
}

pub(crate) async fn search_handler(
    State(settings): State<Arc<SearchConfig>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let offset = params.offset.unwrap_or(0);
    let limit = settings.resolve_limit(params.limit);

    match SearchQuery::new(&params.q, offset, limit) {
        Ok(query) => {
            info!(suburb = query.suburb(), offset, limit, "serving listing search");
            let results = generate(&query);
            (StatusCode::OK, axum::Json(results)).into_response()
        }
        Err(error) => {
            warn!(%error, "rejected listing search");
            let payload = json!({
                "error": error.to_string(),
                "properties": [],
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}
