// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.showroom", "Showroom", "showroom"));

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const API_URL_ENV: &str = "SHOWROOM_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine platform-specific config dir")]
    NoConfigDir,

    #[error("failed to access config at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_token: Option<String>,
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or(ConfigError::NoConfigDir)?;
    Ok(proj.config_dir().join("config.json"))
}

impl Config {
    /// Missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let body = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, body).map_err(io_err)
    }

    /// Precedence: explicit flag, then `SHOWROOM_API_URL`, then the file, then the default.
    pub fn resolve_api_url(&self, flag: Option<&str>, env: Option<&str>) -> String {
        let picked = flag
            .or(env)
            .or(self.api_url.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        picked.trim_end_matches('/').to_string()
    }
}
