// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for `blynkctl`.
//!
//! This module provides the error hierarchy for failures across the tool:
//! configuration loading, target resolution, protocol communication, and
//! response parsing.

use thiserror::Error;

/// The main error type for this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while loading or validating the configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error occurred during HTTP communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A target name matched neither a device, a group, nor the "all" alias.
    #[error("unknown device or group: {0}")]
    UnknownDevice(String),

    /// The group graph contains a cycle through the named group.
    #[error("group graph contains a cycle through {0}")]
    CyclicGroup(String),

    /// The device has no wiring default state and cannot be switched.
    #[error("device {0} is not toggleable")]
    NotToggleable(String),

    /// The action token matched no known action and is not a numeric set-point.
    #[error("unrecognized action: {0}")]
    UnrecognizedAction(String),
}

/// Errors related to loading and validating the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path that was attempted.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML.
    #[error("malformed configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two devices share the same name.
    #[error("duplicate device name: {0}")]
    DuplicateDevice(String),

    /// Two groups share the same name.
    #[error("duplicate group name: {0}")]
    DuplicateGroup(String),

    /// A group lists a subgroup that is not declared.
    #[error("group {group} references unknown subgroup {subgroup}")]
    UnknownSubgroup {
        /// The declaring group.
        group: String,
        /// The missing child.
        subgroup: String,
    },

    /// A device has a default state outside `{0, 1}`.
    #[error("device {device} has invalid default state {value} (must be 0 or 1)")]
    InvalidDefaultState {
        /// The offending device.
        device: String,
        /// The declared value.
        value: u8,
    },

    /// A toggleable device is missing its default state.
    #[error("device {0} must declare a default state or be listed in exclude")]
    MissingDefaultState(String),
}

/// Errors related to HTTP communication with the Blynk server.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned HTTP {status} for pin {pin}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The pin the request addressed.
        pin: String,
    },

    /// The server rejected the auth token.
    #[error("authentication failed for pin {0}")]
    AuthenticationFailed(String),
}

/// Errors related to parsing pin read responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response body is not a non-empty array.
    #[error("expected a value array, got: {0}")]
    NotAnArray(String),

    /// The first array element is not numeric.
    #[error("pin value is not numeric: {0}")]
    NotNumeric(String),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
