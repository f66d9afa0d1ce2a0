use axum::{Json, extract::State};
use courier::orders;
use std::sync::Arc;
use tracing::info;

use crate::{
    dto::{OptimizedRouteDto, SampleOrdersDto},
    error::RouteError,
    state::AppState,
};

pub async fn optimize(State(state): State<Arc<AppState>>) -> Json<OptimizedRouteDto> {
    let orders = state.orders.read().await.list();
    let route = state.sequencer.sequence(&orders);
    info!("Optimized route for {} orders", route.len());
    Json(OptimizedRouteDto::from(&route))
}

/// Replaces every stored order with the fixed sample set.
pub async fn sample_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SampleOrdersDto>, RouteError> {
    let mut store = state.orders.write().await;
    store.clear();
    let orders = store
        .insert_many(orders::samples())
        .map_err(|err| RouteError::new("Server error while creating sample orders", err))?;
    Ok(Json(SampleOrdersDto {
        success: true,
        message: format!("Created {} sample orders for testing", orders.len()),
        orders,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{new_order, state};
    use courier::prelude::*;

    #[tokio::test]
    async fn optimize_empty_store() {
        let Json(body) = optimize(State(state())).await;
        assert!(body.success);
        assert!(body.data.is_empty());
        assert_eq!(body.total_orders, 0);
        assert_eq!(body.message, "Optimized route for 0 orders");
    }

    #[tokio::test]
    async fn optimize_orders_stops_by_distance() {
        let state = state();
        {
            let mut store = state.orders.write().await;
            for (name, longitude) in [("A", 0.0), ("B", 1.0), ("C", 5.0), ("D", 2.0)] {
                store
                    .insert(new_order(name, &format!("{name} Road"), 0.0, longitude))
                    .unwrap();
            }
        }
        let Json(body) = optimize(State(state)).await;
        let names: Vec<_> = body.data.iter().map(|s| s.customer_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "D", "C"]);
        assert_eq!(body.total_orders, 4);
        assert_eq!(body.message, "Optimized route for 4 orders");
    }

    #[tokio::test]
    async fn optimize_honours_configured_fallback() {
        let state = Arc::new(AppState::new(
            OrderStore::new(),
            Sequencer::new().with_fallback(Fallback::Unreachable),
        ));
        {
            let mut store = state.orders.write().await;
            store.insert(new_order("A", "1 A St", 0.0, 0.0)).unwrap();
            store
                .insert(NewOrder {
                    latitude: None,
                    longitude: None,
                    ..new_order("Nowhere", "2 B St", 0.0, 0.0)
                })
                .unwrap();
            store.insert(new_order("B", "3 C St", 0.0, 3.0)).unwrap();
        }
        let Json(body) = optimize(State(state)).await;
        let names: Vec<_> = body.data.iter().map(|s| s.customer_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "Nowhere"]);
    }

    #[tokio::test]
    async fn sample_orders_replace_existing() {
        let state = state();
        state
            .orders
            .write()
            .await
            .insert(new_order("Old", "1 Old St", 1.0, 1.0))
            .unwrap();

        let Json(body) = sample_orders(State(state.clone())).await.unwrap();
        assert!(body.success);
        assert_eq!(body.orders.len(), 5);
        assert_eq!(body.message, "Created 5 sample orders for testing");

        let stored = state.orders.read().await.list();
        assert_eq!(stored, body.orders);
        assert!(stored.iter().all(|o| o.customer_name != "Old"));
    }
}
