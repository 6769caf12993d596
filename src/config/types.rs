//! Configuration types for the estimate engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::models::RateProfile;

/// Metadata about the estimating company.
#[derive(Debug, Clone, Deserialize)]
pub struct EstimatorMetadata {
    /// The company or estimator name shown on quotes.
    pub name: String,
    /// The currency code all rates and amounts are expressed in.
    pub currency: String,
    /// The rate profile used when a request names none.
    pub default_profile: String,
}

/// Rate profiles configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RateProfilesConfig {
    /// Map of profile name to its rates.
    pub profiles: BTreeMap<String, RateProfile>,
}

/// The complete estimator configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    metadata: EstimatorMetadata,
    profiles: BTreeMap<String, RateProfile>,
}

impl EstimatorConfig {
    /// Creates a new EstimatorConfig from its component parts.
    pub fn new(metadata: EstimatorMetadata, profiles: BTreeMap<String, RateProfile>) -> Self {
        Self { metadata, profiles }
    }

    /// Returns the estimator metadata.
    pub fn metadata(&self) -> &EstimatorMetadata {
        &self.metadata
    }

    /// Returns all rate profiles, ordered by name.
    pub fn profiles(&self) -> &BTreeMap<String, RateProfile> {
        &self.profiles
    }
}
