use courier::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedRouteDto {
    pub success: bool,
    pub data: Vec<Stop>,
    pub total_orders: usize,
    pub message: String,
}

impl OptimizedRouteDto {
    pub fn from(route: &[Order]) -> Self {
        let data: Vec<Stop> = route.iter().map(Stop::from).collect();
        Self {
            success: true,
            total_orders: data.len(),
            message: format!("Optimized route for {} orders", data.len()),
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleOrdersDto {
    pub success: bool,
    pub message: String,
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDto {
    pub status: &'static str,
    pub uptime_seconds: u64,
    pub timestamp: String,
}
