//! JSON data API over the hotel store.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::time::Instant;

use crate::catalog::StoreError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::views::parse_hotel_id;

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

fn store_error_response(err: StoreError) -> Response {
    match err {
        StoreError::NotFound(_) => error_body(StatusCode::NOT_FOUND, "Hotel not found"),
        other => {
            tracing::error!(error = %other, "Hotel source failure");
            error_body(StatusCode::BAD_GATEWAY, "Error loading hotels")
        }
    }
}

/// GET /api/hotels
pub async fn list_hotels(State(state): State<AppState>) -> Response {
    let start = Instant::now();
    let response = match state.store.list_all().await {
        Ok(snapshot) => Json(snapshot.hotels().to_vec()).into_response(),
        Err(e) => store_error_response(e),
    };
    metrics::record_request("api_list", response.status().as_u16(), start);
    response
}

/// GET /api/hotels/{id}
pub async fn get_hotel(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let start = Instant::now();
    let response = match parse_hotel_id(&raw_id) {
        None => error_body(StatusCode::BAD_REQUEST, "Invalid hotel id"),
        Some(id) => match state.store.get_by_id(id).await {
            Ok(hotel) => Json(hotel).into_response(),
            Err(e) => store_error_response(e),
        },
    };
    metrics::record_request("api_detail", response.status().as_u16(), start);
    response
}
