//! # nldas-atlas
//!
//! Map-overlay placement, color gradients and legend data for NLDAS-3
//! weather queries.
//!
//! The crate sits between a natural-language weather query endpoint and an
//! interactive map surface: it fetches one answered query, computes the
//! exact geographic bounds of the returned weather grid, places the
//! pre-rendered overlay image on the map, and emits data-only legend and
//! popup records any rendering layer can consume.
//!
//! ## Architecture
//!
//! - **Client layer**: one-shot HTTP JSON calls to the query/search
//!   endpoints; failures propagate, nothing is retried here.
//! - **Geo layer**: minimal enclosing bounds over sample points or grid
//!   axes, four-corner overlay placement, camera fit.
//! - **Presentation layer**: static color gradients per weather variable,
//!   legend panels, hover popups, and a last-query-wins render state.

pub mod client;
pub mod config;
pub mod error;
pub mod geo;
pub mod logging;
pub mod palette;
pub mod render;
pub mod variable;

pub use client::{AtlasClient, Position, QueryResponse, SearchResult, WeatherData};
pub use config::Config;
pub use error::{AtlasError, Result};
pub use geo::{
    camera_fit, compute_bounds, place_overlay, CameraFit, GeoBounds, OverlayPlacement, SamplePoint,
};
pub use logging::{generate_request_id, init_tracing, log_timed_operation};
pub use palette::{ColorScheme, Gradient, GradientStop, Rgba};
pub use render::{
    build_scene, format_legend, format_popup, Legend, LegendPanel, MapScene, RenderState,
    SceneOptions,
};
pub use variable::WeatherVariable;
