//! Visiting order for a tour's stops.
//!
//! [`optimize_route`] is a greedy nearest-neighbour walk from the first stop.
//! It is a heuristic: the resulting order is usually short but never
//! guaranteed to be the shortest possible route.

use tracing::debug;

use crate::{
    error::Result,
    geometry::{distance, Position},
    tour::stop::Stop,
};

fn leg_length(from: Option<Position>, to: Option<Position>) -> Result<f64> {
    match (from, to) {
        (Some(a), Some(b)) => distance(a, b),
        _ => Ok(f64::INFINITY),
    }
}

/// Reorders `stops` by repeatedly walking to the closest unvisited stop.
///
/// The first stop is never moved and routes of two stops or fewer are returned
/// as-is. Ties go to the stop listed earliest. Stops without a position count as
/// infinitely far away, so they end up last in their original relative order.
pub fn optimize_route(stops: &[Stop]) -> Result<Vec<Stop>> {
    if stops.len() <= 2 {
        return Ok(stops.to_vec());
    }

    let mut remaining: Vec<&Stop> = stops[1..].iter().collect();
    let mut result = Vec::with_capacity(stops.len());
    let mut current = &stops[0];
    result.push(current.clone());

    while !remaining.is_empty() {
        let mut nearest_idx = 0;
        let mut nearest_dist = f64::INFINITY;

        for (i, stop) in remaining.iter().enumerate() {
            let d = leg_length(current.position, stop.position)?;
            if d < nearest_dist {
                nearest_idx = i;
                nearest_dist = d;
            }
        }

        if nearest_dist.is_infinite() {
            debug!(
                from = %current.id,
                to = %remaining[nearest_idx].id,
                "no reachable stop, keeping input order"
            );
        }

        current = remaining.remove(nearest_idx);
        result.push(current.clone());
    }

    Ok(result)
}
