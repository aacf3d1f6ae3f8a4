//! Configuration management for nldas-atlas.
//!
//! Layered configuration with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AtlasError, Result};

/// Command-line arguments for nldas-atlas
#[derive(Parser, Debug)]
#[command(name = "nldas-atlas")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Natural-language weather query, e.g. "show temperature in Florida"
    pub query: String,

    /// URL of the query endpoint
    #[arg(long, env = "ATLAS_QUERY_URL")]
    pub query_url: Option<String>,

    /// URL of the search endpoint
    #[arg(long, env = "ATLAS_SEARCH_URL")]
    pub search_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "ATLAS_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Initial map zoom level
    #[arg(short, long, env = "ATLAS_ZOOM")]
    pub zoom: Option<u8>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "ATLAS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "ATLAS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// URL of the query endpoint
    #[serde(default = "default_query_url")]
    pub query_url: String,

    /// URL of the search endpoint
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Map presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Initial zoom level
    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Basemap style name
    #[serde(default = "default_style")]
    pub style: String,

    /// Keep every Nth grid point for hover interactivity
    #[serde(default = "default_sample_stride")]
    pub sample_stride: usize,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Endpoint configuration
    #[serde(default)]
    pub endpoints: EndpointConfig,

    /// Map presentation configuration
    #[serde(default)]
    pub map: MapConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    /// Returns the config and the query text from the command line.
    pub fn load() -> Result<(Self, String)> {
        let args = Args::parse();
        Self::from_args(args)
    }

    /// Build a config from already-parsed arguments.
    pub fn from_args(args: Args) -> Result<(Self, String)> {
        let mut config = Config::default();

        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        if let Some(query_url) = args.query_url {
            config.endpoints.query_url = query_url;
        }
        if let Some(search_url) = args.search_url {
            config.endpoints.search_url = search_url;
        }
        if let Some(timeout_secs) = args.timeout_secs {
            config.endpoints.timeout_secs = timeout_secs;
        }
        if let Some(zoom) = args.zoom {
            config.map.zoom = zoom;
        }
        config.log_level = args.log_level;

        Ok((config, args.query))
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.endpoints = other.endpoints;
        self.map = other.map;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("query_url", &self.endpoints.query_url),
            ("search_url", &self.endpoints.search_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AtlasError::Config {
                    message: format!("{} must be an http(s) URL, got: {}", name, url),
                });
            }
        }

        if self.endpoints.timeout_secs == 0 {
            return Err(AtlasError::Config {
                message: "Request timeout cannot be 0".to_string(),
            });
        }

        if !(1..=22).contains(&self.map.zoom) {
            return Err(AtlasError::Config {
                message: format!("Zoom level must be between 1 and 22, got: {}", self.map.zoom),
            });
        }

        if self.map.sample_stride == 0 {
            return Err(AtlasError::Config {
                message: "Sample stride cannot be 0".to_string(),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(AtlasError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoints: EndpointConfig::default(),
            map: MapConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            query_url: default_query_url(),
            search_url: default_search_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: default_zoom(),
            style: default_style(),
            sample_stride: default_sample_stride(),
        }
    }
}

// Default value functions for serde
fn default_query_url() -> String {
    "http://127.0.0.1:7071/api/query".to_string()
}

fn default_search_url() -> String {
    "http://127.0.0.1:7071/api/search".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_zoom() -> u8 {
    7
}

fn default_style() -> String {
    "satellite".to_string()
}

fn default_sample_stride() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoints.timeout_secs, 60);
        assert_eq!(config.map.zoom, 7);
        assert_eq!(config.map.style, "satellite");
        assert_eq!(config.map.sample_stride, 5);
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_merge() {
        let mut config1 = Config::default();
        let mut config2 = Config::default();

        config2.endpoints.query_url = "https://example.com/api/query".to_string();
        config2.map.zoom = 10;

        config1.merge(config2);

        assert_eq!(config1.endpoints.query_url, "https://example.com/api/query");
        assert_eq!(config1.map.zoom, 10);
    }

    #[test]
    fn test_config_validation() {
        // Test invalid URL
        let mut config = Config::default();
        config.endpoints.query_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        // Test invalid timeout
        let mut config = Config::default();
        config.endpoints.timeout_secs = 0;
        assert!(config.validate().is_err());

        // Test invalid zoom
        let mut config = Config::default();
        config.map.zoom = 0;
        assert!(config.validate().is_err());
        config.map.zoom = 23;
        assert!(config.validate().is_err());

        // Test invalid stride
        let mut config = Config::default();
        config.map.sample_stride = 0;
        assert!(config.validate().is_err());

        // Test invalid log level
        let mut config = Config::default();
        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "endpoints": { "query_url": "https://fn.example/api/query" },
            "map": { "zoom": 9 }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.endpoints.query_url, "https://fn.example/api/query");
        // unspecified fields keep their defaults
        assert_eq!(config.endpoints.timeout_secs, 60);
        assert_eq!(config.map.zoom, 9);
        assert_eq!(config.map.style, "satellite");
    }
}
