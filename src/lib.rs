pub mod error;
pub mod export;
pub mod geometry;
pub mod itinerary;
pub mod metrics;
pub mod sequencer;
pub mod server;
pub mod toggle;
pub mod tour;

pub use error::{Error, Result};
pub use geometry::{distance, Position};
pub use metrics::{
    estimate_walking_time, format_distance, format_distance_with_precision, total_distance,
};
pub use sequencer::optimize_route;
pub use toggle::RouteView;
pub use tour::{
    stop::{Stop, StopId},
    Tour,
};
