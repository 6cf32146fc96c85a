use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use tracing::{info, warn};
use types::ids::{OrderBookId, OrderId};
use types::numeric::{Price, Quantity};

use super::{json_response, path_id};
use crate::cache::LookupError;
use crate::error::{AppError, OrderKind};
use crate::fields::{self, FormFields};
use crate::models::OrderStatus;
use crate::state::AppState;

pub async fn place_limit_order(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<Response, AppError> {
    // 1. Validate fields
    let side = fields::parse_side(form.value("side"))?;
    let quantity = Quantity::new(fields::parse_decimal("quantity", form.value("quantity"))?);
    let price = Price::new(fields::parse_decimal("price", form.value("price"))?);
    let orderbook_id = fields::require("orderbook_id", form.value("orderbook_id"))?;

    // 2. Resolve the session
    let book = state.sessions.lookup_book(orderbook_id)?;

    // 3. Match
    let order_id = OrderId::generate();
    let fill = book
        .process_limit_order(side, &order_id, quantity, price)
        .map_err(|source| {
            warn!(%orderbook_id, %source, "limit order rejected by engine");
            AppError::Engine {
                kind: OrderKind::Limit,
                source,
            }
        })?;

    // 4. Index the new order and every counterparty it touched
    let orderbook_id = OrderBookId::from(orderbook_id);
    state
        .sessions
        .associate_orders(&orderbook_id, std::iter::once(&order_id).chain(fill.orders().map(|o| &o.id)));

    info!(
        %orderbook_id,
        %order_id,
        ?side,
        %quantity,
        %price,
        done = fill.done.len(),
        partial = fill.partial.is_some(),
        "limit order placed"
    );
    json_response(StatusCode::OK, &OrderStatus::from(fill), true)
}

pub async fn place_market_order(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<Response, AppError> {
    let side = fields::parse_side(form.value("side"))?;
    let quantity = Quantity::new(fields::parse_decimal("quantity", form.value("quantity"))?);
    let orderbook_id = fields::require("orderbook_id", form.value("orderbook_id"))?;

    let book = state.sessions.lookup_book(orderbook_id)?;

    let fill = book.process_market_order(side, quantity).map_err(|source| {
        warn!(%orderbook_id, %source, "market order rejected by engine");
        AppError::Engine {
            kind: OrderKind::Market,
            source,
        }
    })?;

    let orderbook_id = OrderBookId::from(orderbook_id);
    state
        .sessions
        .associate_orders(&orderbook_id, fill.orders().map(|o| &o.id));

    info!(
        %orderbook_id,
        ?side,
        %quantity,
        done = fill.done.len(),
        quantity_left = %fill.quantity_left,
        "market order placed"
    );
    json_response(StatusCode::OK, &OrderStatus::from(fill), true)
}

pub async fn cancel_order(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<&'static str, AppError> {
    let order_id = form.value("order_id");
    let book = state.sessions.lookup_book_by_order(order_id)?;

    match book.cancel_order(&OrderId::from(order_id)) {
        Some(_) => {
            state.sessions.remove_order(order_id);
            info!(%order_id, "order canceled");
            Ok("Order Cancel request is successful.")
        }
        None => {
            warn!(%order_id, "engine refused cancel");
            Err(AppError::CancelRejected)
        }
    }
}

pub async fn order_details(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let order_id = path_id(path, LookupError::UnknownOrder)?;
    let book = state.sessions.lookup_book_by_order(&order_id)?;
    // A stale index entry: the order was consumed as a counterparty
    let order = book
        .order(&OrderId::from(order_id))
        .ok_or(LookupError::UnknownOrder)?;
    json_response(StatusCode::OK, &order, false)
}

/// `/order/` with nothing after the slash
pub async fn missing_order_id() -> AppError {
    LookupError::MissingOrderId.into()
}
