use walking_tour_routing::{
    export::to_geojson, itinerary::Itinerary, optimize_route, total_distance, RouteView, StopId,
    Tour,
};

const FIXTURE: &str = "./tests/data/nyc_classics.json";

fn ids(stops: &[walking_tour_routing::Stop]) -> Vec<&str> {
    stops.iter().map(|s| s.id.as_str()).collect()
}

#[test]
fn reads_tour_file() {
    let tour = Tour::read(FIXTURE).unwrap();
    assert_eq!(tour.tour_id, "nyc-classics");
    assert_eq!(tour.stops.len(), 6);
    assert!(tour.stops[3].position.is_none());
}

#[test]
fn reads_first_json_in_directory() {
    let tour = Tour::read("./tests/data").unwrap();
    assert_eq!(tour.tour_id, "nyc-classics");
}

#[test]
fn missing_tour_reports_path() {
    let err = Tour::read("./tests/data/nope.json").unwrap_err();
    assert!(format!("{err:#}").contains("nope.json"));
}

#[test]
fn manhattan_route_walks_south_to_north() {
    let tour = Tour::read(FIXTURE).unwrap();
    let route = optimize_route(&tour.stops).unwrap();

    assert_eq!(
        ids(&route),
        ["liberty", "memorial", "bridge", "empire", "times", "storyteller"]
    );
    assert!(total_distance(&route).unwrap() < total_distance(&tour.stops).unwrap());
}

#[test]
fn itinerary_counts_every_stop_visit() {
    let tour = Tour::read(FIXTURE).unwrap();
    let plan = Itinerary::plan(&tour, true, 2).unwrap();

    // 15 + 20 + four stops at the default 5 minutes
    assert_eq!(plan.summary.duration.visit_minutes, 55);
    assert_eq!(
        plan.summary.duration.total_minutes,
        plan.summary.duration.walking_minutes + 55
    );
    assert_eq!(plan.legs.last().unwrap().stop_id, StopId::new("storyteller"));
    assert_eq!(plan.legs.last().unwrap().distance_km, 0.0);
}

#[test]
fn toggling_a_loaded_tour_restores_file_order() {
    let tour = Tour::read(FIXTURE).unwrap();
    let view = RouteView::new(tour.stops.clone());

    let optimized = view.toggled().unwrap();
    assert_ne!(optimized.current(), tour.stops.as_slice());

    let restored = optimized.toggled().unwrap();
    assert_eq!(restored.current(), tour.stops.as_slice());
    assert!(!restored.is_optimized());
}

#[test]
fn geojson_skips_unplaced_stops() {
    let tour = Tour::read(FIXTURE).unwrap();
    let json = to_geojson(&tour.stops).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["type"], "FeatureCollection");
    assert_eq!(value["features"].as_array().unwrap().len(), 5);
}
