//! Area of interest geometry drawn on the map.
//!
//! The draw tool emits GeoJSON in `[longitude, latitude]` order while the
//! map widget expects overlay bounds as `[latitude, longitude]` pairs.
//! [`Geometry`] keeps the former and [`Bounds`] the latter.

use crate::VmonError;
use geojson::{GeoJson, Value};
use serde::{Deserialize, Serialize};

/// Number of ring points needed to pick two opposite corners (index 0 and 2).
pub const MIN_RING_POINTS: usize = 3;

/// A single ring vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// A polygon or rectangle area of interest, stored as its exterior ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    ring: Vec<LonLat>,
}

impl Geometry {
    pub fn from_ring(ring: Vec<LonLat>) -> Self {
        Self { ring }
    }

    /// Build from raw `[lon, lat]` pairs.
    pub fn from_coordinates(coordinates: &[[f64; 2]]) -> Self {
        Self {
            ring: coordinates
                .iter()
                .map(|[lon, lat]| LonLat::new(*lon, *lat))
                .collect(),
        }
    }

    /// Parse the GeoJSON emitted by the draw tool.
    ///
    /// Accepts a `Feature`, a bare geometry, or a `FeatureCollection` (the
    /// first polygon feature wins). Only the exterior ring is kept.
    pub fn parse_geojson(text: &str) -> Result<Self, VmonError> {
        let geojson = text.parse::<GeoJson>()?;
        let value = match geojson {
            GeoJson::Geometry(geometry) => geometry.value,
            GeoJson::Feature(feature) => feature
                .geometry
                .map(|g| g.value)
                .ok_or_else(|| VmonError::UnsupportedGeometry("feature without geometry".into()))?,
            GeoJson::FeatureCollection(collection) => collection
                .features
                .into_iter()
                .filter_map(|f| f.geometry.map(|g| g.value))
                .find(|v| matches!(v, Value::Polygon(_)))
                .ok_or_else(|| {
                    VmonError::UnsupportedGeometry("collection without a polygon".into())
                })?,
        };
        Self::from_value(value)
    }

    fn from_value(value: Value) -> Result<Self, VmonError> {
        match value {
            Value::Polygon(rings) => {
                let exterior = rings
                    .into_iter()
                    .next()
                    .ok_or_else(|| VmonError::UnsupportedGeometry("empty polygon".into()))?;
                let ring = exterior
                    .into_iter()
                    .filter(|position| position.len() >= 2)
                    .map(|position| LonLat::new(position[0], position[1]))
                    .collect();
                Ok(Self { ring })
            }
            other => Err(VmonError::UnsupportedGeometry(
                geometry_kind(&other).to_string(),
            )),
        }
    }

    pub fn ring(&self) -> &[LonLat] {
        &self.ring
    }

    /// Overlay bounds from the ring's designated corners (points 0 and 2).
    ///
    /// For a rectangle drawn by the draw tool these are opposite corners.
    /// Polygons use the same points, so the overlay may not cover the
    /// whole shape.
    pub fn overlay_bounds(&self) -> Result<Bounds, VmonError> {
        if self.ring.len() < MIN_RING_POINTS {
            return Err(VmonError::RingTooShort {
                needed: MIN_RING_POINTS,
                found: self.ring.len(),
            });
        }
        let a = self.ring[0];
        let b = self.ring[2];
        Ok(Bounds([a.lat, a.lon], [b.lat, b.lon]))
    }

    /// Axis-aligned envelope of every ring point.
    pub fn envelope(&self) -> Option<Bounds> {
        let first = self.ring.first()?;
        let (mut min_lat, mut max_lat) = (first.lat, first.lat);
        let (mut min_lon, mut max_lon) = (first.lon, first.lon);
        for p in &self.ring[1..] {
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
            min_lon = min_lon.min(p.lon);
            max_lon = max_lon.max(p.lon);
        }
        Some(Bounds([min_lat, min_lon], [max_lat, max_lon]))
    }
}

fn geometry_kind(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// Two corner coordinates as `[lat, lon]` pairs, serialized the way the map
/// widget takes image overlay bounds.
///
/// Corners are stored as given; they are not reordered into south-west and
/// north-east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds(pub [f64; 2], pub [f64; 2]);

impl Bounds {
    fn lat_range(&self) -> (f64, f64) {
        (self.0[0].min(self.1[0]), self.0[0].max(self.1[0]))
    }

    fn lon_range(&self) -> (f64, f64) {
        (self.0[1].min(self.1[1]), self.0[1].max(self.1[1]))
    }

    /// True if the two boxes share any area or edge.
    pub fn intersects(&self, other: &Bounds) -> bool {
        let (a_lat_min, a_lat_max) = self.lat_range();
        let (b_lat_min, b_lat_max) = other.lat_range();
        let (a_lon_min, a_lon_max) = self.lon_range();
        let (b_lon_min, b_lon_max) = other.lon_range();
        a_lat_min <= b_lat_max
            && b_lat_min <= a_lat_max
            && a_lon_min <= b_lon_max
            && b_lon_min <= a_lon_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECTANGLE: [[f64; 2]; 5] = [[10.0, 10.0], [10.0, 20.0], [20.0, 20.0], [20.0, 10.0], [10.0, 10.0]];

    #[test]
    fn overlay_bounds_use_points_zero_and_two() {
        let aoi = Geometry::from_coordinates(&RECTANGLE);
        let bounds = aoi.overlay_bounds().unwrap();
        assert_eq!(bounds, Bounds([10.0, 10.0], [20.0, 20.0]));
    }

    #[test]
    fn overlay_bounds_swap_to_lat_lon() {
        let aoi = Geometry::from_coordinates(&[[-122.5, 37.7], [-122.5, 37.9], [-122.3, 37.9]]);
        let bounds = aoi.overlay_bounds().unwrap();
        assert_eq!(bounds.0, [37.7, -122.5]);
        assert_eq!(bounds.1, [37.9, -122.3]);
    }

    #[test]
    fn short_ring_is_rejected() {
        let aoi = Geometry::from_coordinates(&[[0.0, 0.0], [1.0, 1.0]]);
        match aoi.overlay_bounds() {
            Err(VmonError::RingTooShort { needed, found }) => {
                assert_eq!(needed, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected RingTooShort, got {:?}", other),
        }
    }

    #[test]
    fn parse_draw_tool_feature() {
        let json = r#"{
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[10,10],[10,20],[20,20],[20,10],[10,10]]]
            }
        }"#;
        let aoi = Geometry::parse_geojson(json).unwrap();
        assert_eq!(aoi, Geometry::from_coordinates(&RECTANGLE));
    }

    #[test]
    fn parse_bare_polygon_and_collection() {
        let bare = r#"{"type":"Polygon","coordinates":[[[0,0],[0,1],[1,1],[0,0]]]}"#;
        assert_eq!(Geometry::parse_geojson(bare).unwrap().ring().len(), 4);

        let collection = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[5,5]}},
            {"type":"Feature","properties":{},"geometry":{"type":"Polygon","coordinates":[[[1,2],[3,4],[5,6],[1,2]]]}}
        ]}"#;
        let aoi = Geometry::parse_geojson(collection).unwrap();
        assert_eq!(aoi.ring()[1], LonLat::new(3.0, 4.0));
    }

    #[test]
    fn parse_rejects_non_polygons() {
        let point = r#"{"type":"Point","coordinates":[5,5]}"#;
        assert!(matches!(
            Geometry::parse_geojson(point),
            Err(VmonError::UnsupportedGeometry(kind)) if kind == "Point"
        ));
        assert!(matches!(
            Geometry::parse_geojson("not json"),
            Err(VmonError::GeoJson(_))
        ));
    }

    #[test]
    fn envelope_and_intersection() {
        let aoi = Geometry::from_coordinates(&[[10.0, 10.0], [15.0, 25.0], [20.0, 12.0]]);
        let envelope = aoi.envelope().unwrap();
        assert_eq!(envelope, Bounds([10.0, 10.0], [25.0, 20.0]));

        let overlapping = Bounds([24.0, 19.0], [30.0, 30.0]);
        let disjoint = Bounds([-10.0, -10.0], [-5.0, -5.0]);
        assert!(envelope.intersects(&overlapping));
        assert!(!envelope.intersects(&disjoint));
        assert!(Geometry::from_ring(Vec::new()).envelope().is_none());
    }
}
