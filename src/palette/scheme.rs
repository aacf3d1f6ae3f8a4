//! The closed color-scheme enumeration and its gradient lookup.
//!
//! Lookup is total: unrecognized scheme names fall back to the default
//! gradient rather than failing. That fallback is policy, not an error
//! path, so the UI always has something to render.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::gradient::{self, Gradient};

/// Named color schemes for the weather overlay and legend swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Temperature,
    Precipitation,
    Drought,
    Default,
}

impl ColorScheme {
    /// The static gradient table for this scheme.
    pub fn gradient(&self) -> &'static Gradient {
        match self {
            ColorScheme::Temperature => &gradient::TEMPERATURE,
            ColorScheme::Precipitation => &gradient::PRECIPITATION,
            ColorScheme::Drought => &gradient::DROUGHT,
            ColorScheme::Default => &gradient::DEFAULT,
        }
    }

    /// Resolve a scheme name, mapping anything unrecognized to `Default`.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "temperature" => ColorScheme::Temperature,
            "precipitation" => ColorScheme::Precipitation,
            "drought" => ColorScheme::Drought,
            _ => ColorScheme::Default,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorScheme::Temperature => "temperature",
            ColorScheme::Precipitation => "precipitation",
            ColorScheme::Drought => "drought",
            ColorScheme::Default => "default",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorScheme {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ColorScheme::from_name(s))
    }
}
