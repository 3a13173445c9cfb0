//! JSON passthrough API.
//!
//! Stateless mirrors of the two catalog query shapes for clients that
//! want data instead of HTML. These bypass the state machines.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use marquee_search::client::CatalogClient;
use marquee_search::errors::CatalogError;
use marquee_search::types::SearchQuery;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::server::AppState;

/// Query parameters for `/api/search`.
#[derive(Debug, Deserialize)]
pub struct ApiSearchParams {
    /// Free-text search terms.
    pub query: String,
    /// Optional kind filter, "movie" or "series".
    pub kind: Option<String>,
    /// Optional 4-digit release year.
    pub year: Option<String>,
    /// Page to fetch, defaults to 1.
    pub page: Option<u32>,
}

/// Maps a catalog failure onto an HTTP status.
fn error_status(error: &CatalogError) -> StatusCode {
    match error {
        CatalogError::InvalidQuery { .. } => StatusCode::BAD_REQUEST,
        CatalogError::Service { .. } => StatusCode::NOT_FOUND,
        CatalogError::Transport { .. } | CatalogError::Parse { .. } => StatusCode::BAD_GATEWAY,
    }
}

fn error_response(error: &CatalogError) -> (StatusCode, Json<Value>) {
    (
        error_status(error),
        Json(json!({ "error": error.to_string() })),
    )
}

/// Runs a paged search and returns the result page as JSON.
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<ApiSearchParams>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let query = SearchQuery {
        text: params.query,
        kind: params.kind.as_deref().and_then(|kind| kind.parse().ok()),
        year: params.year,
    };
    let page = params.page.unwrap_or(1);

    let results = state
        .catalog()
        .search(&query, page)
        .await
        .map_err(|e| error_response(&e))?;

    Ok(Json(json!({
        "items": results.items,
        "total_count": results.total_count,
        "total_pages": results.total_pages(),
        "page": results.page,
    })))
}

/// Fetches one title's full record as JSON.
pub async fn api_title(
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let detail = state
        .catalog()
        .detail(&imdb_id)
        .await
        .map_err(|e| error_response(&e))?;

    Ok(Json(json!(detail)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_error_taxonomy() {
        let invalid = CatalogError::InvalidQuery {
            reason: "empty".to_string(),
        };
        let service = CatalogError::Service {
            message: "Movie not found!".to_string(),
        };
        let transport = CatalogError::Transport {
            reason: "HTTP 503".to_string(),
        };
        let parse = CatalogError::Parse {
            reason: "bad body".to_string(),
        };

        assert_eq!(error_status(&invalid), StatusCode::BAD_REQUEST);
        assert_eq!(error_status(&service), StatusCode::NOT_FOUND);
        assert_eq!(error_status(&transport), StatusCode::BAD_GATEWAY);
        assert_eq!(error_status(&parse), StatusCode::BAD_GATEWAY);
    }
}
