//! Logging utilities for nldas-atlas.
//!
//! Structured tracing setup plus the small helpers the client and binary
//! use for request correlation and operation timing.

use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Initialize the tracing subscriber with the given log level.
/// `RUST_LOG` takes precedence when set.
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Log a fallible operation with timing and outcome in a single statement
pub fn log_timed_operation<F, T, E>(operation: &str, f: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    let start = Instant::now();
    let request_id = Uuid::new_v4();

    debug!(
        operation = operation,
        request_id = %request_id,
        "Starting operation"
    );

    let result = f();
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    if result.is_ok() {
        info!(
            operation = operation,
            request_id = %request_id,
            duration_ms = duration_ms,
            "Operation completed"
        );
    } else {
        warn!(
            operation = operation,
            request_id = %request_id,
            duration_ms = duration_ms,
            "Operation failed"
        );
    }

    result
}
