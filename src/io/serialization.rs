// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Settings file deserialization.
//!
//! The format is picked from the file extension: YAML for `.yaml`/`.yml`,
//! JSON for `.json`.

use crate::models::config::BrowserConfig;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Import settings from YAML format.
pub fn import_yaml(path: &Path) -> Result<BrowserConfig> {
    let yaml = std::fs::read_to_string(path)?;
    let config = serde_yaml::from_str(&yaml)?;
    Ok(config)
}

/// Import settings from JSON format.
pub fn import_json(path: &Path) -> Result<BrowserConfig> {
    let json = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&json)?;
    Ok(config)
}

/// Load settings, choosing the format from the extension.
pub fn load_config(path: &Path) -> Result<BrowserConfig> {
    let extension = path.extension().and_then(|s| s.to_str());
    let config = match extension {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        _ => bail!("Unsupported settings file extension: {:?}", extension),
    };
    config.with_context(|| format!("Failed to load settings from {}", path.display()))
}
