// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `blynkctl` - control Blynk IoT devices from the command line.
//!
//! Devices on the Blynk platform are addressed by a pin and a per-device
//! auth token. This crate maps friendly device names (and groups of them)
//! onto those pins, issues one HTTP GET per read or write, and translates
//! between the logical on/off state the user means and the physical pin
//! level the wiring needs.
//!
//! # Supported Actions
//!
//! - **on / off / flip**: switch or invert devices, groups, or everything
//! - **just**: switch the named devices on and their group siblings off
//! - **status / print**: report states as JSON or as an aligned table
//! - **numeric set-points**: write an arbitrary value to an analog pin
//!
//! # Quick Start
//!
//! ```no_run
//! use blynkctl::action::Action;
//! use blynkctl::config::Config;
//! use blynkctl::engine::Engine;
//! use blynkctl::protocol::HttpConfig;
//! use blynkctl::registry::Registry;
//!
//! #[tokio::main]
//! async fn main() -> blynkctl::Result<()> {
//!     let config = Config::load()?;
//!     let registry = Registry::from_config(&config)?;
//!     let client = HttpConfig::new(&config.server)
//!         .with_timeout(config.timeout())
//!         .into_client()?;
//!
//!     let engine = Engine::new(&registry, &client);
//!     engine
//!         .execute(Action::Flip, &["bedroom_light".to_string()])
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! # Wiring Translation
//!
//! A relay wired as normally closed switches on when its pin goes LOW. Such
//! a device declares `default_state = 1` in the configuration, and every
//! binary read and write is XORed with that level, so `on` means on
//! regardless of the wiring. Analog values are never translated.

pub mod action;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod protocol;
pub mod registry;
pub mod report;
pub mod resolver;
pub mod types;

pub use action::Action;
pub use config::Config;
pub use engine::Engine;
pub use error::{ConfigError, Error, ParseError, ProtocolError, Result};
pub use protocol::{HttpClient, HttpConfig};
pub use registry::{Device, Registry};
pub use report::Report;
pub use resolver::resolve_targets;
pub use types::{PinValue, Wiring};
