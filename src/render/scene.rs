//! Map scene assembly.
//!
//! Turns one query response's weather grid into everything the map surface
//! needs for a render: camera, overlay placement, sampled hover points,
//! gradient scheme and legend panel.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::client::WeatherData;
use crate::error::Result;
use crate::geo::{camera_fit, place_overlay, CameraFit, GeoBounds, OverlayPlacement, SamplePoint};
use crate::palette::ColorScheme;
use crate::render::legend::{format_legend, Legend, LegendPanel};
use crate::render::popup::point_title;
use crate::variable::WeatherVariable;

/// Presentation knobs for scene assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneOptions {
    /// Initial zoom level for the camera
    pub zoom: u8,
    /// Basemap style name
    pub style: String,
    /// Keep every Nth grid point (per axis) for hover interactivity
    pub sample_stride: usize,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            zoom: 7,
            style: "satellite".to_string(),
            sample_stride: 5,
        }
    }
}

/// A pre-rendered image overlay and where to pin it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayLayer {
    pub url: String,
    pub placement: OverlayPlacement,
}

/// Everything the UI layer needs for one render cycle.
///
/// Scenes are request-scoped: the next query's scene replaces this one
/// wholesale (see [`crate::render::state::RenderState`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapScene {
    /// Camera center as (lon, lat)
    pub center: (f64, f64),
    pub zoom: u8,
    pub style: String,
    pub bounds: GeoBounds,
    pub camera: CameraFit,
    /// Present when the response carried a pre-rendered overlay image
    pub overlay: Option<OverlayLayer>,
    /// Downsampled grid points for hover popups
    pub data_points: Vec<SamplePoint>,
    pub scheme: ColorScheme,
    pub value_range: (f64, f64),
    pub legend: LegendPanel,
}

/// Build a scene from one query response.
///
/// The grid's coordinate axes define the bounds and overlay placement.
/// Hover points are sampled every `sample_stride` cells, skipping cells
/// with no data. An empty grid fails with `EmptyInput` so the caller can
/// show its "no data" state.
pub fn build_scene(
    data: &WeatherData,
    overlay_url: Option<&str>,
    options: &SceneOptions,
) -> Result<MapScene> {
    let bounds = GeoBounds::from_axes(&data.longitude, &data.latitude)?;

    let variable = WeatherVariable::from_nldas_name(&data.variable);
    if variable.is_none() {
        warn!(
            variable = %data.variable,
            "Unknown NLDAS variable, falling back to the default scheme"
        );
    }

    let data_points = sample_points(data, variable, options.sample_stride.max(1));
    debug!(
        point_count = data_points.len(),
        stride = options.sample_stride,
        "Sampled hover points"
    );

    let values: Vec<f64> = data_points.iter().map(|p| p.value).collect();
    let (scheme, value_range) = match variable {
        Some(var) => (var.color_scheme(), var.value_range(&values)?),
        None => (ColorScheme::Default, fallback_range(&values)?),
    };

    let legend = format_legend(&Legend {
        title: legend_title(&data.variable, &data.unit),
        date: data.date.clone(),
        region: data.region.clone(),
        value_range,
        scheme,
    })?;

    Ok(MapScene {
        center: bounds.center(),
        zoom: options.zoom,
        style: options.style.clone(),
        bounds,
        camera: camera_fit(&bounds),
        overlay: overlay_url.map(|url| OverlayLayer {
            url: url.to_string(),
            placement: place_overlay(&bounds),
        }),
        data_points,
        scheme,
        value_range,
        legend,
    })
}

/// Downsample the grid to every Nth cell per axis, dropping missing cells.
fn sample_points(
    data: &WeatherData,
    variable: Option<WeatherVariable>,
    stride: usize,
) -> Vec<SamplePoint> {
    let mut points = Vec::new();
    for (i, row) in data.data_values.iter().enumerate().step_by(stride) {
        let Some(&latitude) = data.latitude.get(i) else {
            continue;
        };
        for (j, cell) in row.iter().enumerate().step_by(stride) {
            let Some(&longitude) = data.longitude.get(j) else {
                continue;
            };
            let Some(value) = *cell else {
                continue;
            };
            if value.is_nan() {
                continue;
            }
            let title = match variable {
                Some(var) => point_title(var, value),
                None => format!("{}: {:.2} {}", data.variable, value, data.unit),
            };
            points.push(SamplePoint {
                longitude,
                latitude,
                value,
                title,
            });
        }
    }
    points
}

fn legend_title(variable: &str, unit: &str) -> String {
    if unit.is_empty() {
        variable.to_string()
    } else {
        format!("{} ({})", variable, unit)
    }
}

fn fallback_range(values: &[f64]) -> Result<(f64, f64)> {
    let first = values.first().ok_or_else(|| crate::error::AtlasError::EmptyInput {
        message: "no valid data points in the weather grid".to_string(),
    })?;
    let mut min = *first;
    let mut max = *first;
    for &v in &values[1..] {
        min = min.min(v);
        max = max.max(v);
    }
    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AtlasError;
    use pretty_assertions::assert_eq;

    fn tair_grid() -> WeatherData {
        WeatherData {
            data_values: vec![
                vec![Some(18.0), Some(20.0), Some(22.0)],
                vec![Some(19.0), None, Some(23.0)],
                vec![Some(21.0), Some(24.0), Some(26.0)],
            ],
            longitude: vec![-87.6, -83.8, -80.0],
            latitude: vec![24.5, 27.75, 31.0],
            variable: "Tair".to_string(),
            unit: "°C".to_string(),
            date: "2023-05-12".to_string(),
            region: "florida".to_string(),
            center: None,
        }
    }

    #[test]
    fn test_build_scene_bounds_and_camera() {
        let scene = build_scene(&tair_grid(), None, &SceneOptions::default()).unwrap();
        assert_eq!(
            scene.bounds,
            GeoBounds {
                west: -87.6,
                east: -80.0,
                south: 24.5,
                north: 31.0,
            }
        );
        assert_eq!(scene.center, (-83.8, 27.75));
        assert_eq!(scene.camera.padding, 50);
        assert_eq!(scene.zoom, 7);
        assert_eq!(scene.style, "satellite");
    }

    #[test]
    fn test_build_scene_overlay_placement() {
        let scene = build_scene(
            &tair_grid(),
            Some("https://example.com/overlay.png"),
            &SceneOptions::default(),
        )
        .unwrap();
        let overlay = scene.overlay.unwrap();
        assert_eq!(overlay.url, "https://example.com/overlay.png");
        let tl = overlay.placement.top_left();
        assert_eq!((tl.longitude, tl.latitude), (-87.6, 31.0));
        let br = overlay.placement.bottom_right();
        assert_eq!((br.longitude, br.latitude), (-80.0, 24.5));
    }

    #[test]
    fn test_build_scene_scheme_and_legend() {
        let options = SceneOptions {
            sample_stride: 1,
            ..Default::default()
        };
        let scene = build_scene(&tair_grid(), None, &options).unwrap();
        assert_eq!(scene.scheme, ColorScheme::Temperature);
        assert_eq!(scene.value_range, (18.0, 26.0));
        assert_eq!(scene.legend.title, "Tair (°C)");
        assert_eq!(scene.legend.subtitle, "May 12, 2023 · florida");
        assert_eq!(scene.legend.min_label, "18.0");
        assert_eq!(scene.legend.max_label, "26.0");
    }

    #[test]
    fn test_sampling_skips_missing_cells() {
        let options = SceneOptions {
            sample_stride: 1,
            ..Default::default()
        };
        let scene = build_scene(&tair_grid(), None, &options).unwrap();
        // 9 cells, one None
        assert_eq!(scene.data_points.len(), 8);
        assert!(scene.data_points.iter().all(|p| !p.value.is_nan()));
        assert_eq!(scene.data_points[0].title, "Tair: 18.00 °C");
    }

    #[test]
    fn test_sampling_skips_nan_cells() {
        let mut data = tair_grid();
        data.data_values[0][0] = Some(f64::NAN);
        let options = SceneOptions {
            sample_stride: 1,
            ..Default::default()
        };
        let scene = build_scene(&data, None, &options).unwrap();
        // 9 cells, one None, one NaN
        assert_eq!(scene.data_points.len(), 7);
        assert!(scene.data_points.iter().all(|p| p.value.is_finite()));
        assert_eq!(scene.value_range, (19.0, 26.0));
        assert!(!scene.data_points.iter().any(|p| p.title.contains("NaN")));
    }

    #[test]
    fn test_sampling_stride() {
        let options = SceneOptions {
            sample_stride: 2,
            ..Default::default()
        };
        let scene = build_scene(&tair_grid(), None, &options).unwrap();
        // rows 0 and 2, columns 0 and 2
        assert_eq!(scene.data_points.len(), 4);
        let values: Vec<f64> = scene.data_points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![18.0, 22.0, 21.0, 26.0]);
    }

    #[test]
    fn test_unknown_variable_falls_back_to_default_scheme() {
        let mut data = tair_grid();
        data.variable = "Mystery".to_string();
        data.unit = "u".to_string();
        let scene = build_scene(&data, None, &SceneOptions::default()).unwrap();
        assert_eq!(scene.scheme, ColorScheme::Default);
        assert_eq!(scene.data_points[0].title, "Mystery: 18.00 u");
    }

    #[test]
    fn test_empty_grid_is_empty_input() {
        let data = WeatherData {
            data_values: vec![],
            longitude: vec![],
            latitude: vec![],
            variable: "Tair".to_string(),
            unit: "°C".to_string(),
            date: "2023-05-12".to_string(),
            region: "florida".to_string(),
            center: None,
        };
        assert!(matches!(
            build_scene(&data, None, &SceneOptions::default()),
            Err(AtlasError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_all_missing_cells_is_empty_input() {
        let mut data = tair_grid();
        for row in &mut data.data_values {
            for cell in row {
                *cell = None;
            }
        }
        assert!(matches!(
            build_scene(&data, None, &SceneOptions::default()),
            Err(AtlasError::EmptyInput { .. })
        ));
    }
}
