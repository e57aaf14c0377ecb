// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration file loading.
//!
//! The device table, group graph and exclusion list live in a TOML file,
//! `blynkctl.toml` in the working directory unless `BLYNKCTL_CONFIG` points
//! elsewhere. The file is read once per invocation and never written back.
//!
//! ```toml
//! server = "http://blynk-cloud.com"
//! exclude = ["temperature", "humidity"]
//!
//! [[devices]]
//! name = "bedroom_light"
//! pin = "V3"
//! token = "fdaf0fc3a7e94..."
//! default_state = 0
//! group = "bedroom"
//!
//! [[devices]]
//! name = "temperature"
//! pin = "V6"
//! token = "fdaf0fc3a7e94..."
//! group = "bedroom"
//!
//! [[groups]]
//! name = "bedroom"
//! subgroups = []
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable overriding the configuration file path.
pub const CONFIG_PATH_ENV: &str = "BLYNKCTL_CONFIG";

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "blynkctl.toml";

fn default_server() -> String {
    // The public cloud; self-hosted blynk-server instances go in the file.
    "http://blynk-cloud.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the Blynk server.
    #[serde(default = "default_server")]
    pub server: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Devices exempt from group-wide and `all` state changes.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// The device table, in resolution order.
    #[serde(default)]
    pub devices: Vec<DeviceConfig>,
    /// The group graph.
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

/// One device entry.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConfig {
    /// Unique device name used on the command line.
    pub name: String,
    /// Pin key understood by the server (e.g. `V3`, `d2`).
    pub pin: String,
    /// Per-device auth token.
    pub token: String,
    /// Wiring default state: `0` = active-high, `1` = active-low.
    /// Absent for pure sensors, which then must be listed in `exclude`.
    pub default_state: Option<u8>,
    /// Group/room the device belongs to.
    pub group: Option<String>,
}

/// One group entry.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupConfig {
    /// Unique group name.
    pub name: String,
    /// Child groups expanded recursively.
    #[serde(default)]
    pub subgroups: Vec<String>,
}

impl Config {
    /// Loads the configuration from the default path or `BLYNKCTL_CONFIG`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::from_path(&path)
    }

    /// Loads the configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed.
    pub fn from_path(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        let mut config = Self::from_toml(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("BLYNKCTL_SERVER") {
            self.server = val;
        }
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
