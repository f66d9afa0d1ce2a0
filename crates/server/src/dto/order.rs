use courier::prelude::*;
use serde::Serialize;

/// One search hit, shaped like a document index result.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHitDto {
    #[serde(rename = "_id")]
    pub id: OrderId,
    #[serde(rename = "_source")]
    pub source: Stop,
}

impl SearchHitDto {
    pub fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            source: order.to_stop(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeletedOrderDto {
    pub message: String,
    pub order: Order,
}
