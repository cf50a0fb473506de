// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Pipeline configuration

use crate::geometry::MatchStrategy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "diredge.toml";

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Matching algorithm for dedup, edge counting and pairing
    pub strategy: MatchStrategy,
    /// Where `.face` files are written
    pub face_output_dir: PathBuf,
    /// Where `.diredge` files are written
    pub diredge_output_dir: PathBuf,
    /// Free-form lines at the top of every file header
    pub banner: Vec<String>,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            strategy: MatchStrategy::default(),
            face_output_dir: PathBuf::from("face_models"),
            diredge_output_dir: PathBuf::from("diredge_models"),
            banner: vec![format!("Generated by diredge {}", env!("CARGO_PKG_VERSION"))],
            log_level: None,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: PipelineConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `diredge.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config = if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.with_env_overrides()
    }

    /// Load an explicit config file, then apply environment overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file(path)?.with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(strategy) = std::env::var("DIREDGE_STRATEGY") {
            self.strategy = strategy
                .parse()
                .map_err(|e: String| anyhow::anyhow!("DIREDGE_STRATEGY: {}", e))?;
        }

        if let Ok(dir) = std::env::var("DIREDGE_FACE_DIR") {
            self.face_output_dir = PathBuf::from(dir);
        }

        if let Ok(dir) = std::env::var("DIREDGE_DIREDGE_DIR") {
            self.diredge_output_dir = PathBuf::from(dir);
        }

        if let Ok(level) = std::env::var("DIREDGE_LOG") {
            self.log_level = Some(level);
        }

        Ok(self)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }
}
