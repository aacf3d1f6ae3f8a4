//! Data-only presentation records consumed by the UI layer.

pub mod legend;
pub mod popup;
pub mod scene;
pub mod state;

pub use legend::{format_legend, Legend, LegendPanel};
pub use popup::{format_popup, point_title, Popup};
pub use scene::{build_scene, MapScene, OverlayLayer, SceneOptions};
pub use state::RenderState;
