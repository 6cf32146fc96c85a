use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use tracing::info;

use super::{json_response, path_id};
use crate::cache::LookupError;
use crate::error::AppError;
use crate::models::CreatedOrderBook;
use crate::state::AppState;

pub async fn create_orderbook(State(state): State<AppState>) -> Result<Response, AppError> {
    let orderbook_id = state.sessions.create_book();
    info!(orderbook_id = %orderbook_id, "order book created");

    json_response(StatusCode::CREATED, &CreatedOrderBook { orderbook_id }, true)
}

pub async fn orderbook_details(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let orderbook_id = path_id(path, LookupError::UnknownOrderBook)?;
    let book = state.sessions.lookup_book(&orderbook_id)?;
    json_response(StatusCode::OK, &book.snapshot(), false)
}

pub async fn market_view(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let orderbook_id = path_id(path, LookupError::UnknownOrderBook)?;
    let book = state.sessions.lookup_book(&orderbook_id)?;
    json_response(StatusCode::OK, &book.market_overview(), false)
}

/// `/orderbook/` and `/orderbook/marketview/` with nothing after the slash
pub async fn missing_orderbook_id() -> AppError {
    LookupError::MissingOrderBookId.into()
}
