//! Overlay placement for the map surface's image-layer primitive.
//!
//! The image layer wants the four corner coordinates of the overlay in a
//! fixed order; the camera fit carries the bounds plus a fixed padding and
//! accompanies the placement without altering it.

use serde::{Deserialize, Serialize};

use super::bounds::GeoBounds;

/// Padding in screen units applied when fitting the camera to bounds.
pub const CAMERA_PADDING: u32 = 50;

/// A (longitude, latitude) overlay corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corner {
    pub longitude: f64,
    pub latitude: f64,
}

/// The four corners of an image overlay, in the order the image layer
/// expects: top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayPlacement {
    pub corners: [Corner; 4],
}

impl OverlayPlacement {
    pub fn top_left(&self) -> Corner {
        self.corners[0]
    }

    pub fn top_right(&self) -> Corner {
        self.corners[1]
    }

    pub fn bottom_right(&self) -> Corner {
        self.corners[2]
    }

    pub fn bottom_left(&self) -> Corner {
        self.corners[3]
    }
}

/// Camera-fit guidance handed to the map alongside a placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraFit {
    pub bounds: GeoBounds,
    pub padding: u32,
}

/// Map bounds to the four overlay corners.
///
/// Degenerate bounds (a single point or a line) yield coincident corners;
/// the renderer decides whether to skip the zero-area overlay or expand it
/// by an epsilon.
pub fn place_overlay(bounds: &GeoBounds) -> OverlayPlacement {
    let corner = |longitude: f64, latitude: f64| Corner {
        longitude,
        latitude,
    };
    OverlayPlacement {
        corners: [
            corner(bounds.west, bounds.north),
            corner(bounds.east, bounds.north),
            corner(bounds.east, bounds.south),
            corner(bounds.west, bounds.south),
        ],
    }
}

/// Camera-fit guidance for the given bounds with the fixed padding.
pub fn camera_fit(bounds: &GeoBounds) -> CameraFit {
    CameraFit {
        bounds: *bounds,
        padding: CAMERA_PADDING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FLORIDA: GeoBounds = GeoBounds {
        west: -87.6,
        east: -80.0,
        south: 24.5,
        north: 31.0,
    };

    #[test]
    fn test_place_overlay_corner_order() {
        let placement = place_overlay(&FLORIDA);
        let lonlat = |c: Corner| (c.longitude, c.latitude);
        assert_eq!(lonlat(placement.top_left()), (-87.6, 31.0));
        assert_eq!(lonlat(placement.top_right()), (-80.0, 31.0));
        assert_eq!(lonlat(placement.bottom_right()), (-80.0, 24.5));
        assert_eq!(lonlat(placement.bottom_left()), (-87.6, 24.5));
    }

    #[test]
    fn test_place_overlay_shares_edges() {
        let placement = place_overlay(&FLORIDA);
        let [tl, tr, br, bl] = placement.corners;
        // top edge shares north, bottom edge shares south
        assert_eq!(tl.latitude, tr.latitude);
        assert_eq!(br.latitude, bl.latitude);
        // left edge shares west, right edge shares east
        assert_eq!(tl.longitude, bl.longitude);
        assert_eq!(tr.longitude, br.longitude);
    }

    #[test]
    fn test_place_overlay_degenerate_point() {
        let bounds = GeoBounds {
            west: -76.6,
            east: -76.6,
            south: 39.3,
            north: 39.3,
        };
        let placement = place_overlay(&bounds);
        for corner in placement.corners {
            assert_eq!((corner.longitude, corner.latitude), (-76.6, 39.3));
        }
    }

    #[test]
    fn test_camera_fit_padding() {
        let fit = camera_fit(&FLORIDA);
        assert_eq!(fit.bounds, FLORIDA);
        assert_eq!(fit.padding, 50);
    }
}
