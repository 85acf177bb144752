use serde::Serialize;
use tracing::info;

use crate::{
    error::Result,
    geometry::distance,
    metrics::{
        estimate_walking_time, format_distance_with_precision, total_distance, walking_minutes,
        WALKING_SPEED_KMH,
    },
    sequencer::optimize_route,
    tour::{
        stop::{Stop, StopId},
        Tour,
    },
};

pub const DEFAULT_VISIT_MINUTES: u32 = 5;

/// The walk into one stop of a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub stop_id: StopId,
    pub name: String,
    pub from_previous: Option<StopId>,
    pub distance_km: f64,
    pub walking_minutes: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationSummary {
    pub walking_minutes: i64,
    pub visit_minutes: i64,
    pub total_minutes: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub total_distance_km: f64,
    pub total_distance: String,
    pub walking_time: String,
    pub duration: DurationSummary,
}

/// A tour in the order it should be walked, with everything needed to show it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub tour: Tour,
    pub optimized: bool,
    pub summary: RouteSummary,
    pub legs: Vec<Leg>,
}

impl Itinerary {
    /// Builds the itinerary for `tour`, sequencing its stops first when
    /// `optimize` is set. `precision` is the number of decimals used for
    /// kilometre distances.
    pub fn plan(tour: &Tour, optimize: bool, precision: usize) -> Result<Self> {
        let stops = if optimize {
            let stops = optimize_route(&tour.stops)?;
            let before_km = total_distance(&tour.stops)?;
            let after_km = total_distance(&stops)?;
            info!(
                tour_id = %tour.tour_id,
                stops = stops.len(),
                before_km,
                after_km,
                "optimized route"
            );
            stops
        } else {
            tour.stops.clone()
        };

        let total_km = total_distance(&stops)?;
        let summary = RouteSummary {
            total_distance_km: total_km,
            total_distance: format_distance_with_precision(total_km, precision),
            walking_time: estimate_walking_time(total_km),
            duration: duration_summary(&stops, total_km),
        };
        let legs = legs(&stops)?;

        Ok(Self {
            tour: Tour {
                stops,
                ..tour.clone()
            },
            optimized: optimize,
            summary,
            legs,
        })
    }
}

pub fn legs(route: &[Stop]) -> Result<Vec<Leg>> {
    let mut legs = Vec::with_capacity(route.len());
    let mut previous: Option<&Stop> = None;

    for stop in route.iter() {
        let distance_km = match (previous.and_then(|p| p.position), stop.position) {
            (Some(a), Some(b)) => distance(a, b)?,
            _ => 0.0,
        };

        legs.push(Leg {
            stop_id: stop.id.clone(),
            name: stop.name().to_owned(),
            from_previous: previous.map(|p| p.id.clone()),
            distance_km,
            walking_minutes: (distance_km / WALKING_SPEED_KMH * 600.0).round() / 10.0,
        });
        previous = Some(stop);
    }

    Ok(legs)
}

pub fn duration_summary(route: &[Stop], total_km: f64) -> DurationSummary {
    let walking = walking_minutes(total_km);
    let visits: i64 = route
        .iter()
        .map(|s| i64::from(s.details.visit_minutes.unwrap_or(DEFAULT_VISIT_MINUTES)))
        .sum();

    DurationSummary {
        walking_minutes: walking,
        visit_minutes: visits,
        total_minutes: walking + visits,
    }
}
