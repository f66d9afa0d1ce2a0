use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::{
    sequencer::{Stop, Waypoint},
    shared::{Searchable, geo::Coordinate},
};

use super::Error;

const ID_WIDTH: usize = 24;

/// Opaque order identifier, rendered as 24 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct OrderId(u64);

impl OrderId {
    pub(crate) const fn new(value: u64) -> Self {
        Self(value)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:0width$x}", self.0, width = ID_WIDTH)
    }
}

impl FromStr for OrderId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ID_WIDTH || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::MalformedId(s.to_string()));
        }
        let value = u128::from_str_radix(s, 16).map_err(|_| Error::MalformedId(s.to_string()))?;
        u64::try_from(value)
            .map(Self)
            .map_err(|_| Error::MalformedId(s.to_string()))
    }
}

impl From<OrderId> for String {
    fn from(value: OrderId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for OrderId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,
    pub customer_name: String,
    pub delivery_address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: String,
}

impl Order {
    pub fn to_stop(&self) -> Stop {
        Stop {
            customer_name: self.customer_name.clone(),
            delivery_address: self.delivery_address.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            status: self.status.clone(),
        }
    }
}

impl From<&Order> for Stop {
    fn from(value: &Order) -> Self {
        value.to_stop()
    }
}

impl Waypoint for Order {
    fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::try_new(self.latitude, self.longitude)
    }

    fn address(&self) -> &str {
        &self.delivery_address
    }
}

impl Searchable for Order {
    fn customer_name(&self) -> &str {
        &self.customer_name
    }

    fn delivery_address(&self) -> &str {
        &self.delivery_address
    }
}

/// Payload for a new order. Missing text fields default to empty and are
/// rejected by [`NewOrder::validate`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewOrder {
    pub customer_name: String,
    pub delivery_address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: String,
}

impl NewOrder {
    pub fn validate(&self) -> Result<(), Error> {
        require_text("customerName", &self.customer_name)?;
        require_text("deliveryAddress", &self.delivery_address)?;
        require_text("status", &self.status)?;
        if self.latitude.is_some() != self.longitude.is_some() {
            return Err(Error::Invalid(
                "latitude and longitude must be given together".into(),
            ));
        }
        check_latitude(self.latitude)?;
        check_longitude(self.longitude)
    }

    pub(crate) fn into_order(self, id: OrderId) -> Order {
        Order {
            id,
            customer_name: self.customer_name,
            delivery_address: self.delivery_address,
            latitude: self.latitude,
            longitude: self.longitude,
            status: self.status,
        }
    }
}

impl From<Stop> for NewOrder {
    fn from(value: Stop) -> Self {
        Self {
            customer_name: value.customer_name,
            delivery_address: value.delivery_address,
            latitude: value.latitude,
            longitude: value.longitude,
            status: value.status,
        }
    }
}

/// Partial update, only the given fields are overwritten.
///
/// Coordinates are doubly optional: an absent key leaves the stored value
/// alone, an explicit `null` clears it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderPatch {
    pub customer_name: Option<String>,
    pub delivery_address: Option<String>,
    #[serde(
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub latitude: Option<Option<f64>>,
    #[serde(
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub longitude: Option<Option<f64>>,
    pub status: Option<String>,
}

impl OrderPatch {
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(value) = &self.customer_name {
            require_text("customerName", value)?;
        }
        if let Some(value) = &self.delivery_address {
            require_text("deliveryAddress", value)?;
        }
        if let Some(value) = &self.status {
            require_text("status", value)?;
        }
        check_latitude(self.latitude.flatten())?;
        check_longitude(self.longitude.flatten())
    }

    pub(crate) fn apply(self, order: &mut Order) {
        if let Some(value) = self.customer_name {
            order.customer_name = value;
        }
        if let Some(value) = self.delivery_address {
            order.delivery_address = value;
        }
        if let Some(value) = self.latitude {
            order.latitude = value;
        }
        if let Some(value) = self.longitude {
            order.longitude = value;
        }
        if let Some(value) = self.status {
            order.status = value;
        }
    }
}

/// Marks a key as present, so `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn require_text(field: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        Err(Error::Invalid(format!("{field} is required")))
    } else {
        Ok(())
    }
}

fn check_latitude(value: Option<f64>) -> Result<(), Error> {
    check_range("latitude", value, 90.0)
}

fn check_longitude(value: Option<f64>) -> Result<(), Error> {
    check_range("longitude", value, 180.0)
}

fn check_range(field: &str, value: Option<f64>, limit: f64) -> Result<(), Error> {
    match value {
        Some(value) if !value.is_finite() || value.abs() > limit => Err(Error::Invalid(format!(
            "{field} must be between -{limit} and {limit}"
        ))),
        _ => Ok(()),
    }
}
