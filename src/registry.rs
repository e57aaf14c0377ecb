// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The device registry: devices, the group graph and the exclusion set.
//!
//! Built once from [`Config`] at startup, then read-only for the rest of the
//! invocation. Everything that needs it takes a reference; tests construct
//! fixture registries from inline TOML.

use std::collections::{HashMap, HashSet};

use crate::config::{Config, DeviceConfig};
use crate::error::{ConfigError, Error, Result};
use crate::types::Wiring;

/// A registered device.
#[derive(Debug, Clone)]
pub struct Device {
    name: String,
    pin: String,
    token: String,
    wiring: Option<Wiring>,
    group: Option<String>,
}

impl Device {
    /// Returns the device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the pin key on the remote server.
    #[must_use]
    pub fn pin(&self) -> &str {
        &self.pin
    }

    /// Returns the auth token for this device.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the wiring polarity, if the device is toggleable.
    #[must_use]
    pub const fn wiring(&self) -> Option<Wiring> {
        self.wiring
    }

    /// Returns the group the device belongs to.
    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }
}

/// Immutable registry of devices, groups and exclusions.
#[derive(Debug, Clone)]
pub struct Registry {
    devices: Vec<Device>,
    index: HashMap<String, usize>,
    groups: HashMap<String, Vec<String>>,
    exclude: HashSet<String>,
}

impl Registry {
    /// Builds and validates the registry from a parsed configuration.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate device or group names, on a default
    /// state outside `{0, 1}`, on a device that is neither excluded nor
    /// wired, or on a subgroup reference to an undeclared group.
    pub fn from_config(config: &Config) -> std::result::Result<Self, ConfigError> {
        let exclude: HashSet<String> = config.exclude.iter().cloned().collect();

        let mut groups = HashMap::new();
        for group in &config.groups {
            if groups
                .insert(group.name.clone(), group.subgroups.clone())
                .is_some()
            {
                return Err(ConfigError::DuplicateGroup(group.name.clone()));
            }
        }
        for group in &config.groups {
            for subgroup in &group.subgroups {
                if !groups.contains_key(subgroup) {
                    return Err(ConfigError::UnknownSubgroup {
                        group: group.name.clone(),
                        subgroup: subgroup.clone(),
                    });
                }
            }
        }

        let mut devices = Vec::with_capacity(config.devices.len());
        let mut index = HashMap::new();
        for entry in &config.devices {
            let device = Self::build_device(entry, &exclude)?;
            if index.insert(device.name.clone(), devices.len()).is_some() {
                return Err(ConfigError::DuplicateDevice(device.name.clone()));
            }
            devices.push(device);
        }

        for name in &exclude {
            if !index.contains_key(name) {
                tracing::warn!(device = %name, "exclude entry matches no device");
            }
        }

        Ok(Self {
            devices,
            index,
            groups,
            exclude,
        })
    }

    fn build_device(
        entry: &DeviceConfig,
        exclude: &HashSet<String>,
    ) -> std::result::Result<Device, ConfigError> {
        let wiring = match entry.default_state {
            Some(level) => {
                Some(
                    Wiring::from_level(level).ok_or(ConfigError::InvalidDefaultState {
                        device: entry.name.clone(),
                        value: level,
                    })?,
                )
            }
            None if exclude.contains(&entry.name) => None,
            None => return Err(ConfigError::MissingDefaultState(entry.name.clone())),
        };
        Ok(Device {
            name: entry.name.clone(),
            pin: entry.pin.clone(),
            token: entry.token.clone(),
            wiring,
            group: entry.group.clone(),
        })
    }

    /// Looks up a device by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDevice`] when the name is not registered.
    pub fn device(&self, name: &str) -> Result<&Device> {
        self.index
            .get(name)
            .map(|&i| &self.devices[i])
            .ok_or_else(|| Error::UnknownDevice(name.to_string()))
    }

    /// Returns true if the name is a registered device.
    #[must_use]
    pub fn contains_device(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns true if the name is a declared group.
    #[must_use]
    pub fn is_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Returns true if the device sits in the exclusion set.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.contains(name)
    }

    /// Iterates over all device names in configuration order.
    pub fn device_names(&self) -> impl Iterator<Item = &str> {
        self.devices.iter().map(|d| d.name.as_str())
    }

    /// Expands a group into its device names, depth-first.
    ///
    /// Devices directly in the group come first, then each subgroup's
    /// recursive expansion in declaration order. Duplicates across
    /// overlapping subgroups are preserved; callers de-duplicate, since a
    /// device must not receive the same command twice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CyclicGroup`] when the traversal re-enters a group
    /// already on the current path.
    pub fn expand_group(&self, group: &str) -> Result<Vec<String>> {
        let mut path = Vec::new();
        let mut members = Vec::new();
        self.expand_into(group, &mut path, &mut members)?;
        Ok(members)
    }

    fn expand_into(
        &self,
        group: &str,
        path: &mut Vec<String>,
        members: &mut Vec<String>,
    ) -> Result<()> {
        if path.iter().any(|g| g == group) {
            return Err(Error::CyclicGroup(group.to_string()));
        }
        path.push(group.to_string());
        for device in &self.devices {
            if device.group.as_deref() == Some(group) {
                members.push(device.name.clone());
            }
        }
        if let Some(subgroups) = self.groups.get(group) {
            for subgroup in subgroups {
                self.expand_into(subgroup, path, members)?;
            }
        }
        path.pop();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn registry(toml: &str) -> Registry {
        Registry::from_config(&Config::from_toml(toml).unwrap()).unwrap()
    }

    const FIXTURE: &str = r#"
        exclude = ["temperature", "humidity"]

        [[devices]]
        name = "bedroom_light"
        pin = "V3"
        token = "tok-a"
        default_state = 0
        group = "bedroom"

        [[devices]]
        name = "kitchen_light"
        pin = "d2"
        token = "tok-b"
        default_state = 1
        group = "kitchen"

        [[devices]]
        name = "temperature"
        pin = "V6"
        token = "tok-c"
        group = "bedroom_warmth"

        [[devices]]
        name = "humidity"
        pin = "V5"
        token = "tok-c"
        group = "bedroom_damp"

        [[groups]]
        name = "bedroom"
        subgroups = ["bedroom_warmth"]

        [[groups]]
        name = "bedroom_warmth"
        subgroups = ["bedroom_damp"]

        [[groups]]
        name = "bedroom_damp"

        [[groups]]
        name = "kitchen"
    "#;

    #[test]
    fn lookup_known_device() {
        let registry = registry(FIXTURE);
        let device = registry.device("kitchen_light").unwrap();
        assert_eq!(device.pin(), "d2");
        assert_eq!(device.token(), "tok-b");
        assert_eq!(device.wiring(), Some(Wiring::ActiveLow));
        assert_eq!(device.group(), Some("kitchen"));
    }

    #[test]
    fn lookup_unknown_device() {
        let registry = registry(FIXTURE);
        assert!(matches!(
            registry.device("garage_light"),
            Err(Error::UnknownDevice(_))
        ));
    }

    #[test]
    fn sensors_have_no_wiring() {
        let registry = registry(FIXTURE);
        assert_eq!(registry.device("temperature").unwrap().wiring(), None);
        assert!(registry.is_excluded("temperature"));
        assert!(!registry.is_excluded("kitchen_light"));
    }

    #[test]
    fn expand_flat_group() {
        let registry = registry(FIXTURE);
        assert_eq!(
            registry.expand_group("kitchen").unwrap(),
            vec!["kitchen_light"]
        );
    }

    #[test]
    fn expand_nested_subgroups() {
        let registry = registry(FIXTURE);
        assert_eq!(
            registry.expand_group("bedroom").unwrap(),
            vec!["bedroom_light", "temperature", "humidity"]
        );
    }

    #[test]
    fn expand_preserves_duplicates_across_overlap() {
        let registry = registry(
            r#"
            [[devices]]
            name = "lamp"
            pin = "V1"
            token = "t"
            default_state = 0
            group = "corner"

            [[groups]]
            name = "living"
            subgroups = ["east", "west"]

            [[groups]]
            name = "east"
            subgroups = ["corner"]

            [[groups]]
            name = "west"
            subgroups = ["corner"]

            [[groups]]
            name = "corner"
            "#,
        );
        assert_eq!(registry.expand_group("living").unwrap(), vec!["lamp", "lamp"]);
    }

    #[test]
    fn expand_detects_cycles() {
        let registry = registry(
            r#"
            [[groups]]
            name = "a"
            subgroups = ["b"]

            [[groups]]
            name = "b"
            subgroups = ["a"]
            "#,
        );
        assert!(matches!(
            registry.expand_group("a"),
            Err(Error::CyclicGroup(_))
        ));
    }

    #[test]
    fn expand_detects_self_cycle() {
        let registry = registry(
            r#"
            [[groups]]
            name = "loop"
            subgroups = ["loop"]
            "#,
        );
        assert!(matches!(
            registry.expand_group("loop"),
            Err(Error::CyclicGroup(name)) if name == "loop"
        ));
    }

    #[test]
    fn duplicate_device_rejected() {
        let config = Config::from_toml(
            r#"
            [[devices]]
            name = "lamp"
            pin = "V1"
            token = "t"
            default_state = 0

            [[devices]]
            name = "lamp"
            pin = "V2"
            token = "t"
            default_state = 0
            "#,
        )
        .unwrap();
        assert!(matches!(
            Registry::from_config(&config),
            Err(ConfigError::DuplicateDevice(_))
        ));
    }

    #[test]
    fn invalid_default_state_rejected() {
        let config = Config::from_toml(
            r#"
            [[devices]]
            name = "lamp"
            pin = "V1"
            token = "t"
            default_state = 2
            "#,
        )
        .unwrap();
        assert!(matches!(
            Registry::from_config(&config),
            Err(ConfigError::InvalidDefaultState { value: 2, .. })
        ));
    }

    #[test]
    fn unexcluded_sensor_rejected() {
        let config = Config::from_toml(
            r#"
            [[devices]]
            name = "temperature"
            pin = "V6"
            token = "t"
            "#,
        )
        .unwrap();
        assert!(matches!(
            Registry::from_config(&config),
            Err(ConfigError::MissingDefaultState(_))
        ));
    }

    #[test]
    fn unknown_subgroup_rejected() {
        let config = Config::from_toml(
            r#"
            [[groups]]
            name = "bedroom"
            subgroups = ["attic"]
            "#,
        )
        .unwrap();
        assert!(matches!(
            Registry::from_config(&config),
            Err(ConfigError::UnknownSubgroup { .. })
        ));
    }

    #[test]
    fn device_names_keep_config_order() {
        let registry = registry(FIXTURE);
        let names: Vec<_> = registry.device_names().collect();
        assert_eq!(
            names,
            vec!["bedroom_light", "kitchen_light", "temperature", "humidity"]
        );
    }
}
