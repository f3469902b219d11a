//! # Spejare Configuration
//!
//! Layered configuration for the capture pipeline.
//!
//! Hierarchy:
//! 1. Default values
//! 2. `config/spejare.yaml` — base settings. If missing, defaults are used.
//! 3. `SPEJARE_*` environment variables (`__` separates nesting).

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod capture;
mod error;
mod validation;

pub use capture::CaptureConfig;
pub use error::ConfigError;
pub use validation::validate_interface;

/// Top-level configuration container.
#[derive(Debug, Serialize, Deserialize, Validate, Default, Clone)]
pub struct SpejareConfig {
    /// Packet capture parameters.
    #[validate(nested)]
    pub capture: CaptureConfig,
}

impl SpejareConfig {
    /// Load configuration from the default file and environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(SpejareConfig::default()));

        if Path::new("config/spejare.yaml").exists() {
            figment = figment.merge(Yaml::file("config/spejare.yaml"));
        }

        figment
            .merge(Env::prefixed("SPEJARE_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }

    /// Load configuration from a specific path, for tests and validation.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        Figment::from(Serialized::defaults(SpejareConfig::default()))
            .merge(Yaml::file(path))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = SpejareConfig::default();
        config.validate().expect("default config should validate");
    }

    #[test]
    fn missing_file_is_reported() {
        let result = SpejareConfig::load_from_path("config/does-not-exist.yaml");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
