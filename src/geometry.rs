use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        let pos = Self { lat, lng };
        pos.validate()?;
        Ok(pos)
    }

    /// Fails unless both components are finite and inside the valid degree ranges.
    pub fn validate(&self) -> Result<()> {
        let lat_ok = self.lat.is_finite() && (-90.0..=90.0).contains(&self.lat);
        let lng_ok = self.lng.is_finite() && (-180.0..=180.0).contains(&self.lng);

        if lat_ok && lng_ok {
            Ok(())
        } else {
            Err(Error::invalid_coordinate(self.lat, self.lng))
        }
    }
}

impl From<Position> for Point {
    fn from(pos: Position) -> Self {
        Point::new(pos.lng, pos.lat)
    }
}

/// Great-circle distance in kilometres (haversine).
pub fn distance(a: Position, b: Position) -> Result<f64> {
    a.validate()?;
    b.validate()?;

    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let sin_lat = (d_lat / 2.0).sin();
    let sin_lng = (d_lng / 2.0).sin();

    let h = sin_lat * sin_lat
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * sin_lng * sin_lng;
    // rounding can push h a hair past 1 for antipodal points
    let h = h.clamp(0.0, 1.0);

    Ok(2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(lat: f64, lng: f64) -> Position {
        Position::new(lat, lng).unwrap()
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = pos(40.7128, -74.0060);
        assert_eq!(distance(a, a).unwrap(), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let d = distance(pos(0.0, 0.0), pos(0.0, 1.0)).unwrap();
        // 2 * pi * R / 360
        assert!((d - 111.19492664455873).abs() < 1e-9);
    }

    #[test]
    fn distance_between_manhattan_landmarks() {
        let liberty = pos(40.6892, -74.0445);
        let empire = pos(40.7484, -73.9857);
        let d = distance(liberty, empire).unwrap();
        assert!((d - 8.25).abs() < 0.05, "got {d}");
    }

    #[test]
    fn antipodal_points_are_half_circumference_apart() {
        let d = distance(pos(0.0, 0.0), pos(0.0, 180.0)).unwrap();
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let bad = Position { lat: 91.0, lng: 0.0 };
        let err = distance(bad, pos(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, Error::InvalidCoordinate { lat, .. } if lat == 91.0));
    }

    #[test]
    fn rejects_nan_longitude() {
        let bad = Position { lat: 0.0, lng: f64::NAN };
        assert!(matches!(
            distance(pos(0.0, 0.0), bad),
            Err(Error::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn accepts_range_boundaries() {
        assert!(Position::new(90.0, 180.0).is_ok());
        assert!(Position::new(-90.0, -180.0).is_ok());
        assert!(Position::new(-90.0001, 0.0).is_err());
        assert!(Position::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn converts_to_point_as_lng_lat() {
        let p: Point = pos(40.0, -74.0).into();
        assert_eq!(p.x(), -74.0);
        assert_eq!(p.y(), 40.0);
    }
}
