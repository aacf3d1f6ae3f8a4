//! NLDAS-3 variable model.
//!
//! Maps the common names people type ("temperature", "rain") to NLDAS
//! variable names, and carries the per-variable presentation policy: which
//! color scheme to use and how to derive the legend's value range.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AtlasError, Result};
use crate::palette::ColorScheme;

/// An NLDAS-3 forcing variable (plus the SPI3 drought index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherVariable {
    /// Air temperature (Tair)
    Tair,
    /// Precipitation (Rainf)
    Rainf,
    /// Specific humidity (Qair)
    Qair,
    /// Eastward wind component (Wind_E)
    WindE,
    /// Northward wind component (Wind_N)
    WindN,
    /// Surface pressure (PSurf)
    PSurf,
    /// Downward longwave radiation (LWdown)
    LWdown,
    /// Downward shortwave radiation (SWdown)
    SWdown,
    /// 3-month standardized precipitation index
    Spi3,
}

impl WeatherVariable {
    /// Resolve a common name ("temperature", "rain", ...) to a variable.
    pub fn from_common_name(name: &str) -> Option<Self> {
        let var = match name.to_lowercase().as_str() {
            "temperature" | "temp" | "air_temperature" => WeatherVariable::Tair,
            "precipitation" | "precip" | "rainfall" | "rain" => WeatherVariable::Rainf,
            "humidity" | "specific_humidity" | "moisture" => WeatherVariable::Qair,
            "wind" | "wind_speed" | "wind_east" => WeatherVariable::WindE,
            "wind_north" => WeatherVariable::WindN,
            "pressure" | "surface_pressure" => WeatherVariable::PSurf,
            "longwave" | "longwave_radiation" | "lw_radiation" => WeatherVariable::LWdown,
            "shortwave" | "shortwave_radiation" | "sw_radiation" => WeatherVariable::SWdown,
            "drought" | "spi" | "spi3" => WeatherVariable::Spi3,
            _ => return None,
        };
        Some(var)
    }

    /// Resolve an NLDAS dataset variable name ("Tair", "Rainf", ...).
    pub fn from_nldas_name(name: &str) -> Option<Self> {
        let var = match name {
            "Tair" => WeatherVariable::Tair,
            "Rainf" => WeatherVariable::Rainf,
            "Qair" => WeatherVariable::Qair,
            "Wind_E" => WeatherVariable::WindE,
            "Wind_N" => WeatherVariable::WindN,
            "PSurf" => WeatherVariable::PSurf,
            "LWdown" => WeatherVariable::LWdown,
            "SWdown" => WeatherVariable::SWdown,
            "SPI3" => WeatherVariable::Spi3,
            _ => return None,
        };
        Some(var)
    }

    /// The NLDAS dataset name for this variable.
    pub fn nldas_name(&self) -> &'static str {
        match self {
            WeatherVariable::Tair => "Tair",
            WeatherVariable::Rainf => "Rainf",
            WeatherVariable::Qair => "Qair",
            WeatherVariable::WindE => "Wind_E",
            WeatherVariable::WindN => "Wind_N",
            WeatherVariable::PSurf => "PSurf",
            WeatherVariable::LWdown => "LWdown",
            WeatherVariable::SWdown => "SWdown",
            WeatherVariable::Spi3 => "SPI3",
        }
    }

    /// Display unit after the standard post-processing (temperature is
    /// converted to Celsius, precipitation summed to millimetres).
    pub fn display_unit(&self) -> &'static str {
        match self {
            WeatherVariable::Tair => "°C",
            WeatherVariable::Rainf => "mm",
            WeatherVariable::Qair => "kg/kg",
            WeatherVariable::WindE | WeatherVariable::WindN => "m/s",
            WeatherVariable::PSurf => "Pa",
            WeatherVariable::LWdown | WeatherVariable::SWdown => "W/m^2",
            WeatherVariable::Spi3 => "",
        }
    }

    /// The color scheme used when rendering this variable.
    pub fn color_scheme(&self) -> ColorScheme {
        match self {
            WeatherVariable::Tair => ColorScheme::Temperature,
            WeatherVariable::Rainf => ColorScheme::Precipitation,
            WeatherVariable::Spi3 => ColorScheme::Drought,
            _ => ColorScheme::Default,
        }
    }

    /// The value range the legend and heat map are scaled to.
    ///
    /// SPI3 uses the fixed [-2.5, 2.5] index range. Precipitation anchors
    /// at zero and scales to the observed maximum. Everything else spans
    /// the observed data range.
    pub fn value_range(&self, values: &[f64]) -> Result<(f64, f64)> {
        if let WeatherVariable::Spi3 = self {
            return Ok((-2.5, 2.5));
        }
        if values.is_empty() {
            return Err(AtlasError::EmptyInput {
                message: format!(
                    "cannot derive a value range for {} from zero samples",
                    self.nldas_name()
                ),
            });
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values {
            min = min.min(v);
            max = max.max(v);
        }
        match self {
            WeatherVariable::Rainf => Ok((0.0, max)),
            _ => Ok((min, max)),
        }
    }
}

impl fmt::Display for WeatherVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nldas_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_common_name_mapping() {
        assert_eq!(
            WeatherVariable::from_common_name("temperature"),
            Some(WeatherVariable::Tair)
        );
        assert_eq!(
            WeatherVariable::from_common_name("rain"),
            Some(WeatherVariable::Rainf)
        );
        assert_eq!(
            WeatherVariable::from_common_name("Wind"),
            Some(WeatherVariable::WindE)
        );
        assert_eq!(WeatherVariable::from_common_name("dewpoint"), None);
    }

    #[test]
    fn test_nldas_name_round_trip() {
        for var in [
            WeatherVariable::Tair,
            WeatherVariable::Rainf,
            WeatherVariable::Qair,
            WeatherVariable::WindE,
            WeatherVariable::WindN,
            WeatherVariable::PSurf,
            WeatherVariable::LWdown,
            WeatherVariable::SWdown,
            WeatherVariable::Spi3,
        ] {
            assert_eq!(WeatherVariable::from_nldas_name(var.nldas_name()), Some(var));
        }
    }

    #[test]
    fn test_scheme_policy() {
        assert_eq!(
            WeatherVariable::Tair.color_scheme(),
            ColorScheme::Temperature
        );
        assert_eq!(
            WeatherVariable::Rainf.color_scheme(),
            ColorScheme::Precipitation
        );
        assert_eq!(WeatherVariable::Spi3.color_scheme(), ColorScheme::Drought);
        assert_eq!(WeatherVariable::PSurf.color_scheme(), ColorScheme::Default);
    }

    #[test]
    fn test_value_range_policy() {
        let values = [3.0, -1.5, 12.25];
        assert_eq!(
            WeatherVariable::Tair.value_range(&values).unwrap(),
            (-1.5, 12.25)
        );
        // precipitation anchors at zero
        assert_eq!(
            WeatherVariable::Rainf.value_range(&values).unwrap(),
            (0.0, 12.25)
        );
        // drought index is fixed regardless of data
        assert_eq!(WeatherVariable::Spi3.value_range(&[]).unwrap(), (-2.5, 2.5));
    }

    #[test]
    fn test_value_range_empty_input() {
        assert!(matches!(
            WeatherVariable::Tair.value_range(&[]),
            Err(AtlasError::EmptyInput { .. })
        ));
    }
}
