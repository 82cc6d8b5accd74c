//! Hole geometry as supplied by the course data store.
//!
//! All coordinates are WGS84 degrees. The engine treats these types as
//! read-only input and never mutates them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Tee or pin location with optional elevation (feet).
///
/// Elevation is carried for renderers; the engine does not model slope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevatedPoint {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
}

impl ElevatedPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng, elevation: None }
    }

    #[inline]
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// Named waypoint on a hole (layup zone, dogleg corner, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub point: GeoPoint,
}

/// Hazard category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardKind {
    Bunker,
    Water,
    #[serde(alias = "ob")]
    OutOfBounds,
    Trees,
    Rough,
    #[serde(other)]
    Other,
}

impl HazardKind {
    /// Stroke cost used when course data does not specify one.
    pub fn default_penalty(&self) -> f64 {
        match self {
            Self::Water => 1.0,
            Self::OutOfBounds => 2.0,
            Self::Bunker => 0.3,
            Self::Trees => 0.5,
            Self::Rough => 0.2,
            Self::Other => 0.5,
        }
    }
}

impl fmt::Display for HazardKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Bunker => "bunker",
            Self::Water => "water",
            Self::OutOfBounds => "OB",
            Self::Trees => "trees",
            Self::Rough => "rough",
            Self::Other => "hazard",
        };
        f.write_str(name)
    }
}

/// A hazard polygon with its stroke penalty.
///
/// Polygons with fewer than 3 vertices are inert: they never register a
/// collision.
///
/// `penalty` may be omitted in JSON; the kind's default is used then.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawHazard")]
pub struct HazardFeature {
    #[serde(rename = "type")]
    pub kind: HazardKind,
    pub polygon: Vec<GeoPoint>,
    pub penalty: f64,
}

#[derive(Deserialize)]
struct RawHazard {
    #[serde(rename = "type")]
    kind: HazardKind,
    #[serde(default)]
    polygon: Vec<GeoPoint>,
    #[serde(default)]
    penalty: Option<f64>,
}

impl From<RawHazard> for HazardFeature {
    fn from(raw: RawHazard) -> Self {
        let penalty = raw.penalty.unwrap_or_else(|| raw.kind.default_penalty());
        Self { kind: raw.kind, polygon: raw.polygon, penalty }
    }
}

impl HazardFeature {
    pub fn new(kind: HazardKind, polygon: Vec<GeoPoint>) -> Self {
        Self { kind, polygon, penalty: kind.default_penalty() }
    }

    pub fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }

    /// Whether the polygon has enough vertices to take part in collision checks.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.polygon.len() >= 3
    }
}

/// Full geometry of a single hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleGeometry {
    #[serde(default = "default_hole_number")]
    pub number: u8,
    pub par: u8,
    pub tee: ElevatedPoint,
    pub pin: ElevatedPoint,
    /// Stored heading in degrees. Advisory only: shot bearings are always
    /// recomputed from tee and pin.
    #[serde(default)]
    pub heading: Option<f64>,
    #[serde(default)]
    pub center_line: Vec<GeoPoint>,
    #[serde(default)]
    pub targets: Vec<Target>,
    #[serde(default)]
    pub hazards: Vec<HazardFeature>,
    #[serde(default)]
    pub fairway: Vec<GeoPoint>,
    #[serde(default)]
    pub green: Vec<GeoPoint>,
}

fn default_hole_number() -> u8 {
    1
}

impl HoleGeometry {
    /// Minimal hole with only tee, pin and par.
    pub fn new(number: u8, par: u8, tee: GeoPoint, pin: GeoPoint) -> Self {
        Self {
            number,
            par,
            tee: ElevatedPoint::new(tee.lat, tee.lng),
            pin: ElevatedPoint::new(pin.lat, pin.lng),
            heading: None,
            center_line: Vec::new(),
            targets: Vec::new(),
            hazards: Vec::new(),
            fairway: Vec::new(),
            green: Vec::new(),
        }
    }

    pub fn with_hazard(mut self, hazard: HazardFeature) -> Self {
        self.hazards.push(hazard);
        self
    }

    pub fn with_target(mut self, name: impl Into<String>, point: GeoPoint) -> Self {
        self.targets.push(Target { name: name.into(), point });
        self
    }

    pub fn with_green(mut self, green: Vec<GeoPoint>) -> Self {
        self.green = green;
        self
    }

    /// Hazards that can register collisions (3+ vertices).
    pub fn active_hazards(&self) -> impl Iterator<Item = &HazardFeature> {
        self.hazards.iter().filter(|h| h.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hazard_default_penalties() {
        let water = HazardFeature::new(HazardKind::Water, vec![]);
        assert_eq!(water.penalty, 1.0);
        assert!(!water.is_active());

        let ob = HazardFeature::new(HazardKind::OutOfBounds, vec![]).with_penalty(1.5);
        assert_eq!(ob.penalty, 1.5);
    }

    #[test]
    fn test_hazard_kind_deserialize() {
        let kind: HazardKind = serde_json::from_str("\"ob\"").unwrap();
        assert_eq!(kind, HazardKind::OutOfBounds);
        let kind: HazardKind = serde_json::from_str("\"native_area\"").unwrap();
        assert_eq!(kind, HazardKind::Other);
        assert_eq!(HazardKind::Water.to_string(), "water");
    }

    #[test]
    fn test_hole_deserialize_with_defaults() {
        let json = r#"{
            "par": 4,
            "tee": {"lat": 40.0, "lng": -75.0, "elevation": 120.0},
            "pin": {"lat": 40.003, "lng": -75.0}
        }"#;
        let hole: HoleGeometry = serde_json::from_str(json).unwrap();
        assert_eq!(hole.number, 1);
        assert_eq!(hole.tee.elevation, Some(120.0));
        assert!(hole.hazards.is_empty());
        assert!(hole.heading.is_none());
    }

    #[test]
    fn test_hazard_penalty_falls_back_to_kind() {
        let json = r#"[
            {"type": "water", "polygon": []},
            {"type": "bunker", "polygon": [], "penalty": 0.5}
        ]"#;
        let hazards: Vec<HazardFeature> = serde_json::from_str(json).unwrap();
        assert_eq!(hazards[0].penalty, 1.0);
        assert_eq!(hazards[1].penalty, 0.5);
    }

    #[test]
    fn test_active_hazards_skip_degenerate() {
        let hole = HoleGeometry::new(1, 3, GeoPoint::new(0.0, 0.0), GeoPoint::new(0.001, 0.0))
            .with_hazard(HazardFeature::new(
                HazardKind::Bunker,
                vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.1, 0.1)],
            ))
            .with_hazard(HazardFeature::new(
                HazardKind::Water,
                vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.1, 0.0), GeoPoint::new(0.1, 0.1)],
            ));
        let active: Vec<_> = hole.active_hazards().collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].kind, HazardKind::Water);
    }
}
