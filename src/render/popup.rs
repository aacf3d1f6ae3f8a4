//! Popup content for a hovered sample point.

use serde::{Deserialize, Serialize};

use crate::geo::SamplePoint;
use crate::palette::{Gradient, Rgba};
use crate::variable::WeatherVariable;

/// Data-only popup record for one sample point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Popup {
    /// Headline, e.g. "Tair: 23.45 °C"
    pub title: String,
    /// Position label, e.g. "27.750°N, 83.800°W"
    pub location: String,
    /// The point's color under the active gradient, for the popup accent
    pub accent: Rgba,
}

/// Hover title for a sampled value, two decimals plus the display unit.
pub fn point_title(variable: WeatherVariable, value: f64) -> String {
    let unit = variable.display_unit();
    if unit.is_empty() {
        format!("{}: {:.2}", variable.nldas_name(), value)
    } else {
        format!("{}: {:.2} {}", variable.nldas_name(), value, unit)
    }
}

/// Build the popup record for a point, coloring the accent from the
/// gradient over the given value range.
pub fn format_popup(point: &SamplePoint, gradient: &Gradient, min: f64, max: f64) -> Popup {
    Popup {
        title: point.title.clone(),
        location: location_label(point.longitude, point.latitude),
        accent: gradient.map(point.value, min, max),
    }
}

fn location_label(longitude: f64, latitude: f64) -> String {
    let ns = if latitude < 0.0 { "S" } else { "N" };
    let ew = if longitude < 0.0 { "W" } else { "E" };
    format!(
        "{:.3}°{}, {:.3}°{}",
        latitude.abs(),
        ns,
        longitude.abs(),
        ew
    )
}
