mod order;
mod route;

pub use order::*;
pub use route::*;
