//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading estimator
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::RateProfile;

use super::types::{EstimatorConfig, EstimatorMetadata, RateProfilesConfig};

/// Loads and provides access to estimator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── estimator.yaml   # Company metadata and default profile name
/// └── rates.yaml       # Named rate profiles
/// ```
///
/// # Example
///
/// ```no_run
/// use cutting_estimator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let rates = loader.default_rate_profile();
/// println!("Technician rate: ${}", rates.technician_rate);
/// # Ok::<(), cutting_estimator::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EstimatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if a file is missing or invalid, if the default
    /// profile is not among the configured profiles, or if any rate is
    /// negative.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EstimatorMetadata>(&path.join("estimator.yaml"))?;
        let rates = Self::load_yaml::<RateProfilesConfig>(&path.join("rates.yaml"))?;

        Self::from_parts(metadata, rates)
    }

    /// Builds a loader from already-parsed configuration, validating it.
    pub fn from_parts(
        metadata: EstimatorMetadata,
        rates: RateProfilesConfig,
    ) -> EngineResult<Self> {
        for (name, profile) in &rates.profiles {
            Self::validate_profile(name, profile)?;
        }

        if !rates.profiles.contains_key(&metadata.default_profile) {
            return Err(EngineError::ProfileNotFound {
                name: metadata.default_profile.clone(),
            });
        }

        Ok(Self {
            config: EstimatorConfig::new(metadata, rates.profiles),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_profile(name: &str, profile: &RateProfile) -> EngineResult<()> {
        for (field, value) in profile.fields() {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidRateProfile {
                    field: format!("{}.{}", name, field),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying estimator configuration.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Returns the estimator metadata.
    pub fn metadata(&self) -> &EstimatorMetadata {
        self.config.metadata()
    }

    /// Gets a rate profile by name.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cutting_estimator::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// let rates = loader.rate_profile("standard")?;
    /// println!("Mileage rate: ${}", rates.mileage_rate);
    /// # Ok::<(), cutting_estimator::error::EngineError>(())
    /// ```
    pub fn rate_profile(&self, name: &str) -> EngineResult<RateProfile> {
        self.config
            .profiles()
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::ProfileNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the profile named by `default_profile`.
    ///
    /// Loading guarantees the default profile exists.
    pub fn default_rate_profile(&self) -> RateProfile {
        self.config
            .profiles()
            .get(&self.metadata().default_profile)
            .copied()
            .unwrap_or_default()
    }

    /// Returns the configured profile names in sorted order.
    pub fn profile_names(&self) -> Vec<&str> {
        self.config.profiles().keys().map(String::as_str).collect()
    }
}
