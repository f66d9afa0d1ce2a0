use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use courier::{orders, prelude::*};
use std::{collections::HashMap, sync::Arc};
use tracing::info;

use crate::{
    dto::{DeletedOrderDto, SearchHitDto},
    error::ApiError,
    state::AppState,
};

pub async fn list_orders(State(state): State<Arc<AppState>>) -> Json<Vec<Order>> {
    Json(state.orders.read().await.list())
}

pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewOrder>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let order = state.orders.write().await.insert(payload)?;
    info!("Created order {} for {}", order.id, order.customer_name);
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn search_orders(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SearchHitDto>>, ApiError> {
    let query = params.get("query").ok_or(orders::Error::EmptyQuery)?;
    let hits = state.orders.read().await.search(query)?;
    Ok(Json(hits.iter().map(SearchHitDto::from).collect()))
}

pub async fn update_order(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(patch): Json<OrderPatch>,
) -> Result<Json<Order>, ApiError> {
    let id: OrderId = id.parse()?;
    let order = state.orders.write().await.update(id, patch)?;
    Ok(Json(order))
}

pub async fn delete_order(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DeletedOrderDto>, ApiError> {
    let id: OrderId = id.parse()?;
    let order = state.orders.write().await.remove(id)?;
    info!("Deleted order {id}");
    Ok(Json(DeletedOrderDto {
        message: "Order deleted successfully".into(),
        order,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{new_order, state};
    use axum::response::IntoResponse;

    fn query(value: &str) -> Query<HashMap<String, String>> {
        Query(HashMap::from([("query".to_string(), value.to_string())]))
    }

    #[tokio::test]
    async fn create_then_list() {
        let state = state();
        let (status, Json(order)) = create_order(
            State(state.clone()),
            Json(new_order("Alice", "123 Main St", 40.0, -74.0)),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let Json(orders) = list_orders(State(state)).await;
        assert_eq!(orders, vec![order]);
    }

    #[tokio::test]
    async fn create_rejects_invalid_payload() {
        let err = create_order(State(state()), Json(NewOrder::default()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_wraps_hits() {
        let state = state();
        for (name, address) in [("Alice", "123 Main St"), ("Bob", "456 Oak Ave")] {
            state
                .orders
                .write()
                .await
                .insert(new_order(name, address, 1.0, 1.0))
                .unwrap();
        }
        let Json(hits) = search_orders(query("oak"), State(state)).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].source.customer_name, "Bob");
    }

    #[tokio::test]
    async fn search_requires_query() {
        let err = search_orders(Query(HashMap::new()), State(state()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = search_orders(query(" "), State(state())).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_existing_order() {
        let state = state();
        let order = state
            .orders
            .write()
            .await
            .insert(new_order("Alice", "123 Main St", 1.0, 1.0))
            .unwrap();
        let patch = OrderPatch {
            status: Some("shipped".into()),
            ..Default::default()
        };
        let Json(updated) = update_order(Path(order.id.to_string()), State(state), Json(patch))
            .await
            .unwrap();
        assert_eq!(updated.status, "shipped");
    }

    #[tokio::test]
    async fn update_with_null_clears_coordinates() {
        let state = state();
        let order = state
            .orders
            .write()
            .await
            .insert(new_order("Alice", "123 Main St", 1.0, 1.0))
            .unwrap();
        let patch: OrderPatch =
            serde_json::from_value(serde_json::json!({ "latitude": null, "longitude": null }))
                .unwrap();
        let Json(updated) = update_order(Path(order.id.to_string()), State(state), Json(patch))
            .await
            .unwrap();
        assert_eq!(updated.latitude, None);
        assert_eq!(updated.longitude, None);
        assert_eq!(updated.status, "pending");
    }

    #[test]
    fn patch_tells_absent_from_null() {
        let patch: OrderPatch =
            serde_json::from_value(serde_json::json!({ "status": "shipped" })).unwrap();
        assert_eq!(patch.latitude, None);

        let patch: OrderPatch =
            serde_json::from_value(serde_json::json!({ "latitude": null, "longitude": 2.5 }))
                .unwrap();
        assert_eq!(patch.latitude, Some(None));
        assert_eq!(patch.longitude, Some(Some(2.5)));
    }

    #[tokio::test]
    async fn update_unknown_and_malformed_ids() {
        let err = update_order(
            Path("000000000000000000000042".into()),
            State(state()),
            Json(OrderPatch::default()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err = update_order(
            Path("42".into()),
            State(state()),
            Json(OrderPatch::default()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_returns_removed_order() {
        let state = state();
        let order = state
            .orders
            .write()
            .await
            .insert(new_order("Alice", "123 Main St", 1.0, 1.0))
            .unwrap();
        let Json(body) = delete_order(Path(order.id.to_string()), State(state.clone()))
            .await
            .unwrap();
        assert_eq!(body.message, "Order deleted successfully");
        assert_eq!(body.order, order);
        assert!(state.orders.read().await.is_empty());

        let err = delete_order(Path(order.id.to_string()), State(state))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
