pub mod orders;
pub mod sequencer;
pub mod shared;

pub mod prelude {
    pub use crate::orders::{NewOrder, Order, OrderId, OrderPatch, OrderStore};
    pub use crate::sequencer::{Fallback, Sequencer, Stop, Waypoint, distance, sequence};
    pub use crate::shared::geo::{Coordinate, Distance};
}
