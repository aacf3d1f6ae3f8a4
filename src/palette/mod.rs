//! Color gradients for weather overlays and legends.
//!
//! One static lookup table per scheme; lookup is total and unknown names
//! fall back to the default gradient.

pub mod gradient;
pub mod scheme;

pub use gradient::{lerp_color, Gradient, GradientStop, Rgba};
pub use scheme::ColorScheme;
