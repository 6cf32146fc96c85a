use crate::handlers::{self, order, orderbook};
use crate::state::AppState;
use axum::{
    routing::{any, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let orderbook_routes = Router::new()
        .route(
            "/orderbook/create",
            post(orderbook::create_orderbook).fallback(handlers::post_required),
        )
        .route(
            "/orderbook/{id}",
            get(orderbook::orderbook_details).fallback(handlers::get_required),
        )
        .route(
            "/orderbook/marketview/{id}",
            get(orderbook::market_view).fallback(handlers::get_required),
        )
        .route("/orderbook/", any(orderbook::missing_orderbook_id))
        .route("/orderbook/marketview/", any(orderbook::missing_orderbook_id));

    let order_routes = Router::new()
        .route(
            "/order/limit",
            post(order::place_limit_order).fallback(handlers::post_required),
        )
        .route(
            "/order/market",
            post(order::place_market_order).fallback(handlers::post_required),
        )
        .route(
            "/order/cancel",
            post(order::cancel_order).fallback(handlers::post_required),
        )
        .route(
            "/order/{id}",
            get(order::order_details).fallback(handlers::get_required),
        )
        .route("/order/", any(order::missing_order_id));

    Router::new()
        .merge(orderbook_routes)
        .merge(order_routes)
        .fallback(handlers::unmatched)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
