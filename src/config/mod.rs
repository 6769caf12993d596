//! Configuration loading and management for the estimate engine.
//!
//! This module loads estimator metadata and named rate profiles from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use cutting_estimator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded estimator: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EstimatorConfig, EstimatorMetadata, RateProfilesConfig};
