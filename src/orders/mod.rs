use std::{collections::BTreeMap, io};

use thiserror::Error;
use tracing::{debug, info};

mod models;
mod source;
pub use models::*;
pub use source::samples;

use crate::shared;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Order {0} not found")]
    NotFound(OrderId),
    #[error("Malformed order id: {0}")]
    MalformedId(String),
    #[error("Invalid order: {0}")]
    Invalid(String),
    #[error("Search query is required")]
    EmptyQuery,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// In-memory order book. Ids are handed out in increasing order, so
/// iteration follows insertion order.
#[derive(Debug, Clone)]
pub struct OrderStore {
    orders: BTreeMap<OrderId, Order>,
    next_id: u64,
}

impl Default for OrderStore {
    fn default() -> Self {
        Self {
            orders: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl OrderStore {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn list(&self) -> Vec<Order> {
        self.orders.values().cloned().collect()
    }

    pub fn get(&self, id: OrderId) -> Result<&Order, self::Error> {
        self.orders.get(&id).ok_or(self::Error::NotFound(id))
    }

    pub fn insert(&mut self, order: NewOrder) -> Result<Order, self::Error> {
        order.validate()?;
        let order = order.into_order(self.allocate_id());
        debug!("Inserted order {}", order.id);
        self.orders.insert(order.id, order.clone());
        Ok(order)
    }

    /// Inserts every order or none of them.
    pub fn insert_many(&mut self, orders: Vec<NewOrder>) -> Result<Vec<Order>, self::Error> {
        for order in orders.iter() {
            order.validate()?;
        }
        let inserted: Vec<Order> = orders
            .into_iter()
            .map(|order| order.into_order(self.allocate_id()))
            .collect();
        for order in inserted.iter() {
            self.orders.insert(order.id, order.clone());
        }
        info!("Inserted {} orders", inserted.len());
        Ok(inserted)
    }

    pub fn update(&mut self, id: OrderId, patch: OrderPatch) -> Result<Order, self::Error> {
        patch.validate()?;
        let order = self
            .orders
            .get_mut(&id)
            .ok_or(self::Error::NotFound(id))?;
        let mut updated = order.clone();
        patch.apply(&mut updated);
        if updated.latitude.is_some() != updated.longitude.is_some() {
            return Err(self::Error::Invalid(
                "latitude and longitude must be given together".into(),
            ));
        }
        *order = updated.clone();
        debug!("Updated order {id}");
        Ok(updated)
    }

    pub fn remove(&mut self, id: OrderId) -> Result<Order, self::Error> {
        let order = self.orders.remove(&id).ok_or(self::Error::NotFound(id))?;
        debug!("Removed order {id}");
        Ok(order)
    }

    pub fn clear(&mut self) {
        info!("Cleared {} orders", self.orders.len());
        self.orders.clear();
    }

    /// Orders whose customer name or delivery address matches `query`,
    /// case-insensitively.
    pub fn search(&self, query: &str) -> Result<Vec<Order>, self::Error> {
        let query = query.trim();
        if query.is_empty() {
            return Err(self::Error::EmptyQuery);
        }
        let pattern = shared::pattern(query)?;
        let orders: Vec<&Order> = self.orders.values().collect();
        Ok(shared::search(&pattern, &orders)
            .into_iter()
            .map(|order| (*order).clone())
            .collect())
    }

    fn allocate_id(&mut self) -> OrderId {
        let id = OrderId::new(self.next_id);
        self.next_id += 1;
        id
    }
}
