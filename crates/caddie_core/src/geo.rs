//! Geodetic utilities
//!
//! Spherical-Earth math on WGS84 lat/lng degrees. Distances are yards,
//! angles are compass degrees (0 = north, clockwise).
//!
//! Polygon tests treat longitude as x and latitude as y, which is accurate
//! enough at golf-hole scale.

use std::f64::consts::PI;

use crate::engine::constants::geodesy::{EARTH_RADIUS_YARDS, ELLIPSE_POINTS};
use crate::models::GeoPoint;

/// Great-circle distance in yards, rounded to the nearest yard.
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    (EARTH_RADIUS_YARDS * c).round()
}

/// Forward projection: the point `distance_yards` from `origin` along `bearing_deg`.
///
/// A zero distance returns `origin` unchanged. Negative distances project
/// along the reciprocal bearing.
pub fn project_point(origin: GeoPoint, bearing_deg: f64, distance_yards: f64) -> GeoPoint {
    if distance_yards == 0.0 {
        return origin;
    }

    let delta = distance_yards / EARTH_RADIUS_YARDS;
    let theta = bearing_deg.to_radians();
    let lat1 = origin.lat.to_radians();
    let lng1 = origin.lng.to_radians();

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
    let lng2 = lng1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    GeoPoint::new(lat2.to_degrees(), normalize_longitude(lng2.to_degrees()))
}

/// Initial compass bearing from `a` to `b`, in [0, 360).
pub fn bearing_between(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();
    normalize_bearing(y.atan2(x).to_degrees())
}

/// Ray-casting point-in-polygon test.
///
/// Fewer than 3 vertices is never a hit. Points exactly on an edge may go
/// either way.
pub fn point_in_polygon(point: GeoPoint, polygon: &[GeoPoint]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (xi, yi) = (polygon[i].lng, polygon[i].lat);
        let (xj, yj) = (polygon[j].lng, polygon[j].lat);

        if (yi > point.lat) != (yj > point.lat)
            && point.lng < (xj - xi) * (point.lat - yi) / (yj - yi) + xi
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Closed polygon approximating a rotated ellipse around `center`.
///
/// The semi-major axis runs along `bearing_deg` (carry direction) and the
/// semi-minor axis perpendicular to it (offline direction). The first vertex
/// is repeated at the end to close the ring.
pub fn ellipse_boundary(
    center: GeoPoint,
    bearing_deg: f64,
    semi_major_yards: f64,
    semi_minor_yards: f64,
    num_points: usize,
) -> Vec<GeoPoint> {
    let n = num_points.max(3);
    let mut ring = Vec::with_capacity(n + 1);

    for i in 0..n {
        let t = 2.0 * PI * i as f64 / n as f64;
        let along = semi_major_yards * t.cos();
        let across = semi_minor_yards * t.sin();

        let radius = along.hypot(across);
        let local_angle = across.atan2(along).to_degrees();
        ring.push(project_point(center, bearing_deg + local_angle, radius));
    }

    if let Some(first) = ring.first().copied() {
        ring.push(first);
    }
    ring
}

/// [`ellipse_boundary`] with the default vertex count.
pub fn ellipse_boundary_default(
    center: GeoPoint,
    bearing_deg: f64,
    semi_major_yards: f64,
    semi_minor_yards: f64,
) -> Vec<GeoPoint> {
    ellipse_boundary(center, bearing_deg, semi_major_yards, semi_minor_yards, ELLIPSE_POINTS)
}

/// Shift `point` sideways relative to `bearing_deg`: positive is right, negative is left.
pub fn offset_perpendicular(point: GeoPoint, bearing_deg: f64, yards: f64) -> GeoPoint {
    if yards >= 0.0 {
        project_point(point, bearing_deg + 90.0, yards)
    } else {
        project_point(point, bearing_deg - 90.0, -yards)
    }
}

/// Vertex average. `None` for an empty polygon.
pub fn polygon_centroid(polygon: &[GeoPoint]) -> Option<GeoPoint> {
    if polygon.is_empty() {
        return None;
    }
    let n = polygon.len() as f64;
    let (lat, lng) = polygon.iter().fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));
    Some(GeoPoint::new(lat / n, lng / n))
}

/// Wrap any angle into [0, 360).
#[inline]
pub fn normalize_bearing(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Smallest signed difference `to - from` in (-180, 180].
#[inline]
pub fn bearing_difference(from: f64, to: f64) -> f64 {
    let diff = normalize_bearing(to - from);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

#[inline]
fn normalize_longitude(deg: f64) -> f64 {
    (deg + 540.0).rem_euclid(360.0) - 180.0
}
