//! Geographic bounds computation over weather sample points.
//!
//! Bounds are the minimal enclosing lon/lat rectangle of a sample set and
//! feed both overlay placement and the camera fit.

use serde::{Deserialize, Serialize};

use crate::error::{AtlasError, Result};

/// A single weather sample at a geographic position.
///
/// Points are built from one query response, used for one render cycle,
/// and discarded when the next query supersedes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Longitude in degrees, [-180, 180]
    pub longitude: f64,
    /// Latitude in degrees, [-90, 90]
    pub latitude: f64,
    /// The sampled value in the variable's display unit
    pub value: f64,
    /// Hover label, e.g. "Tair: 23.45 °C"
    pub title: String,
}

/// Minimal enclosing lon/lat rectangle of a non-empty sample set.
///
/// Invariant: `west <= east` and `south <= north`. A single point yields
/// degenerate (zero-area) bounds, which is valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub west: f64,
    pub east: f64,
    pub south: f64,
    pub north: f64,
}

impl GeoBounds {
    /// Bounds of a regular grid given its coordinate axes.
    ///
    /// Fails with `EmptyInput` if either axis is empty. The axes need not
    /// be sorted.
    pub fn from_axes(longitudes: &[f64], latitudes: &[f64]) -> Result<Self> {
        if longitudes.is_empty() || latitudes.is_empty() {
            return Err(AtlasError::EmptyInput {
                message: "cannot compute bounds over empty coordinate axes".to_string(),
            });
        }
        let mut bounds = GeoBounds {
            west: f64::INFINITY,
            east: f64::NEG_INFINITY,
            south: f64::INFINITY,
            north: f64::NEG_INFINITY,
        };
        for &lon in longitudes {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(AtlasError::InvalidCoordinates {
                    message: format!("longitude {} is outside the range -180 to 180", lon),
                });
            }
            bounds.west = bounds.west.min(lon);
            bounds.east = bounds.east.max(lon);
        }
        for &lat in latitudes {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(AtlasError::InvalidCoordinates {
                    message: format!("latitude {} is outside the range -90 to 90", lat),
                });
            }
            bounds.south = bounds.south.min(lat);
            bounds.north = bounds.north.max(lat);
        }
        Ok(bounds)
    }

    /// The midpoint of the rectangle, as (lon, lat).
    pub fn center(&self) -> (f64, f64) {
        ((self.west + self.east) / 2.0, (self.south + self.north) / 2.0)
    }

    /// Whether the rectangle has zero area (single point or a line).
    pub fn is_degenerate(&self) -> bool {
        self.west == self.east || self.south == self.north
    }
}

/// Compute the minimal enclosing bounds of a sample set in one pass.
///
/// Fails with `EmptyInput` on an empty slice and `InvalidCoordinates` if
/// any point lies outside [-180, 180] x [-90, 90] (a NaN coordinate also
/// fails this check).
pub fn compute_bounds(points: &[SamplePoint]) -> Result<GeoBounds> {
    let first = points.first().ok_or_else(|| AtlasError::EmptyInput {
        message: "cannot compute bounds over zero sample points".to_string(),
    })?;

    validate_point(first)?;
    let mut bounds = GeoBounds {
        west: first.longitude,
        east: first.longitude,
        south: first.latitude,
        north: first.latitude,
    };

    for point in &points[1..] {
        validate_point(point)?;
        bounds.west = bounds.west.min(point.longitude);
        bounds.east = bounds.east.max(point.longitude);
        bounds.south = bounds.south.min(point.latitude);
        bounds.north = bounds.north.max(point.latitude);
    }

    Ok(bounds)
}

fn validate_point(point: &SamplePoint) -> Result<()> {
    if !(-180.0..=180.0).contains(&point.longitude) {
        return Err(AtlasError::InvalidCoordinates {
            message: format!(
                "longitude {} is outside the range -180 to 180",
                point.longitude
            ),
        });
    }
    if !(-90.0..=90.0).contains(&point.latitude) {
        return Err(AtlasError::InvalidCoordinates {
            message: format!(
                "latitude {} is outside the range -90 to 90",
                point.latitude
            ),
        });
    }
    Ok(())
}
