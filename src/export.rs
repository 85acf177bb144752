use anyhow::Context;
use geo_types::Point;
use serde::Serialize;

use crate::{
    itinerary::legs,
    tour::stop::{Stop, StopId},
};

#[derive(Serialize)]
struct RouteStop {
    id: StopId,
    name: String,
    #[serde(serialize_with = "geojson::ser::serialize_geometry")]
    geometry: Point,
    order: usize,
    distance_from_previous_km: f64,
}

/// Positioned stops of `route` as a GeoJSON FeatureCollection, in route order.
pub fn to_geojson(route: &[Stop]) -> anyhow::Result<String> {
    let legs = legs(route)?;

    let features: Vec<RouteStop> = route
        .iter()
        .zip(legs)
        .enumerate()
        .filter_map(|(order, (stop, leg))| {
            stop.position.map(|pos| RouteStop {
                id: stop.id.clone(),
                name: stop.name().to_owned(),
                geometry: pos.into(),
                order,
                distance_from_previous_km: leg.distance_km,
            })
        })
        .collect();

    geojson::ser::to_feature_collection_string(&features).context("Failed to serialize")
}
