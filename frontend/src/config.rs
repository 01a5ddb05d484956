//! Application configuration.
//!
//! Everything here is fixed at compile time; the page reads no environment
//! and no config file.

use shared::ANALYZE_PATH;

/// Origin of the hosted inference service.
pub const BASE_URL: &str = "https://deepfake-image-analyzer.onrender.com";

/// Delay between two steps of the confidence counter, in milliseconds.
///
/// The counter moves one percent per tick, so a result of 87% takes 87 ticks.
pub const TICK_INTERVAL_MS: u32 = 10;

/// Shown in a blocking alert whenever an analysis fails, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Something went wrong!";

/// Name of the detector behind the service, shown in the info tooltip.
pub const MODEL_NAME: &str = "Deep-Fake-Detector-Model";

pub const MODEL_BLURB: &str =
    "Detects subtle inconsistencies in AI-generated images using a trained deep learning model.";

pub fn analyze_url() -> String {
    format!("{}{}", BASE_URL, ANALYZE_PATH)
}
