//! Legend presentation data.
//!
//! The legend is emitted as a data-only record (title, subtitle, swatch
//! stops, boundary labels) so any rendering layer can lay it out without
//! the core embedding markup.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AtlasError, Result};
use crate::palette::{ColorScheme, GradientStop};

/// The inputs for one legend: what is shown, when, where and over what
/// value range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    /// Display title, e.g. "Tair (°C)"
    pub title: String,
    /// Date of the rendered data, e.g. "2023-05-12"
    pub date: String,
    /// Region name, e.g. "florida"
    pub region: String,
    /// (min, max) of the displayed values; min must not exceed max
    pub value_range: (f64, f64),
    /// Scheme whose gradient backs the swatch
    pub scheme: ColorScheme,
}

/// A fully formatted legend panel, ready for layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendPanel {
    pub title: String,
    pub subtitle: String,
    pub swatch: Vec<GradientStop>,
    pub min_label: String,
    pub max_label: String,
}

/// Format a legend into its presentation record.
///
/// Fails with `InvalidRange` if the value range is inverted; the caller
/// disables the legend panel in that case.
pub fn format_legend(legend: &Legend) -> Result<LegendPanel> {
    let (min, max) = legend.value_range;
    if min > max {
        return Err(AtlasError::InvalidRange { min, max });
    }

    Ok(LegendPanel {
        title: legend.title.clone(),
        subtitle: format!("{} · {}", display_date(&legend.date), legend.region),
        swatch: legend.scheme.gradient().stops().to_vec(),
        min_label: format!("{:.1}", min),
        max_label: format!("{:.1}", max),
    })
}

/// Render an ISO date as "May 12, 2023"; anything unparseable is shown
/// verbatim.
fn display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}
