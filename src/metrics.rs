//! Route aggregates and their display strings.

use chrono::TimeDelta;
use itertools::Itertools;

use crate::{error::Result, geometry::distance, tour::stop::Stop};

pub const WALKING_SPEED_KMH: f64 = 5.0;
pub const DEFAULT_DISTANCE_PRECISION: usize = 2;

/// Sum of great-circle distances between consecutive stops. Pairs where either
/// stop has no position contribute nothing.
pub fn total_distance(stops: &[Stop]) -> Result<f64> {
    let mut sum = 0.0;
    for (from, to) in stops.iter().tuple_windows() {
        if let (Some(a), Some(b)) = (from.position, to.position) {
            sum += distance(a, b)?;
        }
    }
    Ok(sum)
}

pub fn format_distance(km: f64) -> String {
    format_distance_with_precision(km, DEFAULT_DISTANCE_PRECISION)
}

/// Whole metres below one kilometre, otherwise kilometres with `precision` decimals.
pub fn format_distance_with_precision(km: f64, precision: usize) -> String {
    if km < 1.0 {
        format!("{}m", (km * 1000.0).round() as i64)
    } else {
        format!("{km:.precision$}km")
    }
}

pub(crate) fn walking_minutes(km: f64) -> i64 {
    (km / WALKING_SPEED_KMH * 60.0).round().max(0.0) as i64
}

/// Time to walk `km` at [`WALKING_SPEED_KMH`], rounded to whole minutes.
pub fn walking_time(km: f64) -> TimeDelta {
    TimeDelta::try_minutes(walking_minutes(km)).unwrap_or(TimeDelta::MAX)
}

pub fn estimate_walking_time(km: f64) -> String {
    format_walking_time(walking_time(km))
}

pub fn format_walking_time(time: TimeDelta) -> String {
    let minutes = time.num_minutes();
    match minutes {
        m if m < 1 => "< 1 min".to_owned(),
        1 => "1 min".to_owned(),
        m if m < 60 => format!("{m} min"),
        m => format!("{}h {}min", m / 60, m % 60),
    }
}
