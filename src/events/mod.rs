//! Interaction events consumed by the aggregation pass

mod id;
mod load;
mod models;

pub use id::Id;
pub use load::{load_events, parse_events};
pub use models::{millis_to_datetime, Event};
