// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The state engine: reads, writes and action execution.

use std::collections::HashSet;

use crate::action::Action;
use crate::error::{Error, Result};
use crate::protocol::HttpClient;
use crate::registry::Registry;
use crate::report::Report;
use crate::resolver::resolve_targets;
use crate::types::PinValue;

/// Executes actions against the registry through the HTTP transport.
///
/// One engine serves one invocation. Requests are issued strictly
/// sequentially in resolution order; a failure part-way through a
/// multi-device command leaves earlier devices already changed and later
/// ones untouched.
#[derive(Debug)]
pub struct Engine<'a> {
    registry: &'a Registry,
    client: &'a HttpClient,
}

impl<'a> Engine<'a> {
    /// Creates an engine over a registry and a transport.
    #[must_use]
    pub fn new(registry: &'a Registry, client: &'a HttpClient) -> Self {
        Self { registry, client }
    }

    /// Reads the logical state of a device.
    ///
    /// The wiring translation applies only when the raw reading is exactly
    /// 0 or 1 and the device is outside the exclusion set. Excluded devices
    /// are sensors, not actuators; their readings surface as raw physical
    /// values even when binary. Non-binary readings pass through for every
    /// device.
    ///
    /// # Errors
    ///
    /// Returns an error on an unknown device, a transport failure, or a
    /// malformed response.
    pub async fn read_state(&self, name: &str) -> Result<PinValue> {
        let device = self.registry.device(name)?;
        let raw = self.client.read_pin(device.token(), device.pin()).await?;
        if raw.is_binary() && !self.registry.is_excluded(name) {
            if let Some(wiring) = device.wiring() {
                return Ok(raw.normalize(wiring));
            }
        }
        Ok(raw)
    }

    /// Writes a logical state to a device, translating it for the wiring.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotToggleable`] for a device with no wiring default
    /// state, or an error on lookup/transport failure.
    pub async fn write_state(&self, name: &str, logical: PinValue) -> Result<()> {
        let device = self.registry.device(name)?;
        let wiring = device
            .wiring()
            .ok_or_else(|| Error::NotToggleable(name.to_string()))?;
        self.client
            .write_pin(device.token(), device.pin(), logical.normalize(wiring))
            .await
    }

    /// Writes a value to a device's pin verbatim, skipping the wiring
    /// translation. Used for analog set-points.
    ///
    /// # Errors
    ///
    /// Returns an error on lookup or transport failure.
    pub async fn write_raw(&self, name: &str, value: PinValue) -> Result<()> {
        let device = self.registry.device(name)?;
        self.client
            .write_pin(device.token(), device.pin(), value)
            .await
    }

    /// Inverts the logical state of a device.
    ///
    /// Two remote calls, read then write, with no atomicity between them:
    /// a concurrent external change in that window goes undetected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotToggleable`] when the current reading is not an
    /// integer, or an error on lookup/transport failure.
    pub async fn flip(&self, name: &str) -> Result<()> {
        let current = self.read_state(name).await?;
        let inverted = current
            .flipped()
            .ok_or_else(|| Error::NotToggleable(name.to_string()))?;
        self.write_state(name, inverted).await
    }

    /// Resolves the targets and executes the action against each device.
    ///
    /// Returns rendered output for `status` and `print`, `None` for
    /// state-changing actions.
    ///
    /// # Errors
    ///
    /// Propagates the first resolution, transport or parse error; devices
    /// already written to stay changed (no rollback).
    pub async fn execute(&self, action: Action, targets: &[String]) -> Result<Option<String>> {
        let resolved = resolve_targets(action, targets, self.registry)?;
        tracing::debug!(action = %action, devices = resolved.len(), "executing");

        match action {
            Action::Flip => {
                for name in &resolved {
                    self.flip(name).await?;
                }
                Ok(None)
            }
            Action::Off => {
                for name in &resolved {
                    self.write_state(name, PinValue::OFF).await?;
                }
                Ok(None)
            }
            Action::On => {
                for name in &resolved {
                    self.write_state(name, PinValue::ON).await?;
                }
                Ok(None)
            }
            Action::Just => {
                // On-writes first; off-writes go to the complement only, so
                // a named device is never clobbered back off.
                for name in &resolved {
                    self.write_state(name, PinValue::ON).await?;
                }
                for name in self.just_complement(&resolved)? {
                    self.write_state(&name, PinValue::OFF).await?;
                }
                Ok(None)
            }
            Action::Set(value) => {
                for name in &resolved {
                    self.write_raw(name, value).await?;
                }
                Ok(None)
            }
            Action::Status | Action::Print => {
                let mut report = Report::new();
                for name in &resolved {
                    report.push(name.clone(), self.read_state(name).await?);
                }
                let rendered = if action == Action::Status {
                    report.render_json()
                } else {
                    report.render_table()
                };
                Ok(Some(rendered))
            }
        }
    }

    /// Computes the devices `just` switches off: the recursive expansion of
    /// every named device's group, minus the named devices themselves and
    /// the exclusion set.
    fn just_complement(&self, named: &[String]) -> Result<Vec<String>> {
        let keep: HashSet<&str> = named.iter().map(String::as_str).collect();
        let mut complement = Vec::new();
        let mut seen = HashSet::new();
        for name in named {
            let Some(group) = self.registry.device(name)?.group() else {
                continue;
            };
            for member in self.registry.expand_group(group)? {
                if keep.contains(member.as_str()) || self.registry.is_excluded(&member) {
                    continue;
                }
                if seen.insert(member.clone()) {
                    complement.push(member);
                }
            }
        }
        Ok(complement)
    }
}
