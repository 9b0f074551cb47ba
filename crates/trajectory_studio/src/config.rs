//! Studio Configuration
//!
//! Defaults, overridden by an optional JSON file, overridden by the
//! `--backend-url` flag / `TRAJECTORY_BACKEND_URL`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use trajectory_core::HttpSource;

use crate::cli::Cli;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StudioConfig {
    /// Where the training backend answers the GET.
    pub backend_url: String,
    pub timeout_secs: u64,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:80/".to_string(),
            timeout_secs: 10,
            window_width: 900.0,
            window_height: 1000.0,
        }
    }
}

impl StudioConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        serde_json::from_str(&data).with_context(|| format!("Invalid config {:?}", path))
    }

    /// Applies every configuration source in precedence order.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(url) = &cli.backend_url {
            config.backend_url = url.clone();
        }
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn http_source(&self) -> HttpSource {
        HttpSource::new(self.backend_url.clone(), self.timeout())
    }
}
