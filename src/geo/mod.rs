//! Geographic primitives: sample points, bounds and overlay placement.

pub mod bounds;
pub mod overlay;

pub use bounds::{compute_bounds, GeoBounds, SamplePoint};
pub use overlay::{camera_fit, place_overlay, CameraFit, Corner, OverlayPlacement, CAMERA_PADDING};
