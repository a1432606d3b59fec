//! Spatial extent extractor: bounding box and boundary geometry.

use geocr_core::{to_wkt, Coordinate};
use serde_json::Number;

use crate::model::{BoundingRectangle, Granule, Point};

/// Spatial information of a granule. At least one field is present.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialInfo {
    /// `[west, south, east, north]`.
    pub bbox: Option<[Number; 4]>,
    /// WKT polygon of the first boundary ring.
    pub geometry: Option<String>,
}

/// Read `SpatialExtent.HorizontalSpatialDomain`.
///
/// Returns `None` when neither a bounding rectangle nor a non-empty first
/// polygon boundary exists.
pub fn extract_spatial(granule: &Granule) -> Option<SpatialInfo> {
    let domain = granule
        .spatial_extent
        .as_ref()?
        .horizontal_spatial_domain
        .as_ref()?;

    let bbox = domain.bounding_rectangle.as_ref().map(BoundingRectangle::bbox);

    let geometry = domain
        .geometry
        .as_ref()
        .and_then(|geometry| geometry.gpolygons.first())
        .and_then(|polygon| polygon.boundary.as_ref())
        .filter(|boundary| !boundary.points.is_empty())
        .map(|boundary| {
            let ring: Vec<Coordinate> = boundary.points.iter().map(Point::coordinate).collect();
            to_wkt(&ring)
        });

    if bbox.is_none() && geometry.is_none() {
        return None;
    }
    Some(SpatialInfo { bbox, geometry })
}

impl BoundingRectangle {
    /// Bounds in `[west, south, east, north]` order, missing bounds
    /// replaced by the globe extrema.
    pub fn bbox(&self) -> [Number; 4] {
        let or = |bound: &Option<Number>, extremum: i64| {
            bound.clone().unwrap_or_else(|| Number::from(extremum))
        };
        [
            or(&self.west_bounding_coordinate, -180),
            or(&self.south_bounding_coordinate, -90),
            or(&self.east_bounding_coordinate, 180),
            or(&self.north_bounding_coordinate, 90),
        ]
    }
}

impl Point {
    fn coordinate(&self) -> Coordinate {
        Coordinate {
            longitude: self.longitude.clone(),
            latitude: self.latitude.clone(),
        }
    }
}
