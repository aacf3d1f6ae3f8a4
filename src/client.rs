//! HTTP JSON client for the external query and search endpoints.
//!
//! The endpoints are collaborators, not part of this crate: the client
//! sends one request, deserializes the response, and propagates failures
//! without retrying.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AtlasError, Result};
use crate::logging::generate_request_id;

/// Body for the query endpoint.
#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

/// Body for the search endpoint.
#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    query: &'a str,
}

/// Envelope returned by the query endpoint.
#[derive(Debug, Deserialize)]
struct QueryEnvelope {
    response: QueryResponse,
}

/// The payload of one answered query.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    /// Response kind, e.g. "azure_maps_interactive" or "text"
    pub data_type: String,
    /// URL of a pre-rendered transparent overlay image, when present
    #[serde(default)]
    pub overlay_url: Option<String>,
    /// The weather grid backing the overlay, when present
    #[serde(default)]
    pub weather_data: Option<WeatherData>,
    /// Opaque map SDK configuration passed through to the UI
    #[serde(default)]
    pub map_config: Option<serde_json::Value>,
    /// Prose answer for non-map responses
    #[serde(default)]
    pub content: Option<String>,
}

/// A gridded weather variable for one date and region.
///
/// `data_values[i][j]` is the value at `latitude[i]`, `longitude[j]`;
/// `null` cells mark missing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub data_values: Vec<Vec<Option<f64>>>,
    pub longitude: Vec<f64>,
    pub latitude: Vec<f64>,
    pub variable: String,
    pub unit: String,
    pub date: String,
    pub region: String,
    #[serde(default)]
    pub center: Option<[f64; 2]>,
}

/// One location hit from the search endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Position {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    results: Vec<SearchResult>,
}

/// Client for the query/search endpoints.
#[derive(Debug, Clone)]
pub struct AtlasClient {
    http: reqwest::Client,
    query_url: String,
    search_url: String,
}

impl AtlasClient {
    /// Build a client from the endpoint configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.endpoints.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            query_url: config.endpoints.query_url.clone(),
            search_url: config.endpoints.search_url.clone(),
        })
    }

    /// Send a natural-language query and return the answered payload.
    pub async fn query(&self, text: &str) -> Result<QueryResponse> {
        let request_id = generate_request_id();
        let start_time = Instant::now();

        debug!(
            endpoint = %self.query_url,
            request_id = %request_id,
            "Sending query"
        );

        let envelope: QueryEnvelope = self
            .http
            .post(&self.query_url)
            .json(&QueryRequest { query: text })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info!(
            endpoint = %self.query_url,
            request_id = %request_id,
            duration_ms = start_time.elapsed().as_secs_f64() * 1000.0,
            data_type = %envelope.response.data_type,
            "Query answered"
        );

        Ok(envelope.response)
    }

    /// Search for a location by name.
    pub async fn search(&self, text: &str) -> Result<Vec<SearchResult>> {
        let request_id = generate_request_id();
        let start_time = Instant::now();

        debug!(
            endpoint = %self.search_url,
            request_id = %request_id,
            "Sending search"
        );

        let envelope: SearchEnvelope = self
            .http
            .post(&self.search_url)
            .json(&SearchRequest {
                kind: "search",
                query: text,
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info!(
            endpoint = %self.search_url,
            request_id = %request_id,
            duration_ms = start_time.elapsed().as_secs_f64() * 1000.0,
            result_count = envelope.results.len(),
            "Search answered"
        );

        Ok(envelope.results)
    }
}

impl QueryResponse {
    /// The weather grid, or `MalformedResponse` if a map-typed response
    /// arrived without one.
    pub fn weather_data_checked(&self) -> Result<&WeatherData> {
        self.weather_data
            .as_ref()
            .ok_or_else(|| AtlasError::MalformedResponse {
                message: format!(
                    "response of type {} has no weather_data field",
                    self.data_type
                ),
            })
    }
}
