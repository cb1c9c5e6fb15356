//! Descriptive statistics over a filtered trip dataset.
//!
//! Every reporter is a pure function from trips to a small result struct;
//! "most common" values are `None` when there is nothing to count.

pub mod duration;
pub mod frequency;
pub mod station;
pub mod time;
pub mod user;

pub use duration::{DurationStats, duration_stats};
pub use station::{StationStats, station_stats};
pub use time::{TimeStats, time_stats};
pub use user::{UserStats, user_stats};
