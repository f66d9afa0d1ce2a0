mod health;
mod orders;
mod routes;

pub use health::*;
pub use orders::*;
pub use routes::*;

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/orders", get(list_orders).post(create_order))
        .route("/api/orders/search", get(search_orders))
        .route("/api/orders/{id}", put(update_order).delete(delete_order))
        .route("/api/routes/optimize", get(optimize))
        .route("/api/routes/sample-orders", post(sample_orders))
        .with_state(state)
}
