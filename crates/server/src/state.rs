use courier::prelude::*;
use std::time::Instant;
use tokio::sync::RwLock;

pub struct AppState {
    pub orders: RwLock<OrderStore>,
    pub sequencer: Sequencer,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(orders: OrderStore, sequencer: Sequencer) -> Self {
        Self {
            orders: RwLock::new(orders),
            sequencer,
            started_at: Instant::now(),
        }
    }
}
