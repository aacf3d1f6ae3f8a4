//! nldas-atlas - map scene builder for NLDAS-3 weather queries
//!
//! Sends one natural-language query to the configured endpoint, builds the
//! map scene for its answer, and prints the scene as JSON on stdout.

use anyhow::Context;
use tracing::{info, warn};

use nldas_atlas::render::{build_scene, SceneOptions};
use nldas_atlas::{init_tracing, log_timed_operation, AtlasClient, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, query) = Config::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    init_tracing(&config.log_level);
    info!("Starting nldas-atlas v{}", env!("CARGO_PKG_VERSION"));

    let client = AtlasClient::new(&config).context("failed to build HTTP client")?;

    let response = client
        .query(&query)
        .await
        .with_context(|| format!("query failed: {}", query))?;

    let Some(weather_data) = response.weather_data.as_ref() else {
        // Non-map answer: emit the prose content and stop.
        match response.content.as_deref() {
            Some(content) => println!("{}", content),
            None => warn!(data_type = %response.data_type, "Response carried no content"),
        }
        return Ok(());
    };

    let options = SceneOptions {
        zoom: config.map.zoom,
        style: config.map.style.clone(),
        sample_stride: config.map.sample_stride,
    };

    let scene = log_timed_operation("build_scene", || {
        build_scene(weather_data, response.overlay_url.as_deref(), &options)
    })
    .context("failed to build map scene")?;

    info!(
        region = %weather_data.region,
        variable = %weather_data.variable,
        point_count = scene.data_points.len(),
        overlay = scene.overlay.is_some(),
        "Scene ready"
    );

    let json = serde_json::to_string_pretty(&scene).context("failed to serialize scene")?;
    println!("{}", json);

    Ok(())
}
