//! Configuration for the Larder subsystems. Every struct is
//! `#[serde(default)]` so partial TOML files work.

pub mod defaults;
pub mod expiry_config;
pub mod ingest_config;
pub mod retrieval_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{LarderError, LarderResult};

pub use expiry_config::ExpiryConfig;
pub use ingest_config::IngestConfig;
pub use retrieval_config::RetrievalConfig;

/// Aggregate configuration, loadable from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LarderConfig {
    pub ingest: IngestConfig,
    pub retrieval: RetrievalConfig,
    pub expiry: ExpiryConfig,
}

impl LarderConfig {
    /// Load from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> LarderResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| LarderError::InvalidConfig {
            message: format!("read {}: {e}", path.display()),
        })?;
        toml::from_str(&raw).map_err(|e| LarderError::InvalidConfig {
            message: format!("parse {}: {e}", path.display()),
        })
    }
}
