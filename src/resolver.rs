// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Target resolution: raw CLI targets to a concrete device list.

use std::collections::HashSet;

use crate::action::Action;
use crate::error::{Error, Result};
use crate::registry::Registry;

/// Aliases that select every registered device.
const ALL_ALIASES: [&str; 2] = ["all", "a"];

/// Resolves raw CLI targets into an ordered, de-duplicated device list.
///
/// Any `all`/`a` alias selects every registered device. A target naming a
/// group is replaced by its recursive expansion. Devices in the exclusion
/// set are dropped from group and `all` expansions unless the action is
/// read-only; naming an excluded device explicitly always keeps it.
///
/// # Errors
///
/// Returns [`Error::UnknownDevice`] for a target that is neither a device,
/// a group, nor the alias, and [`Error::CyclicGroup`] if a group expansion
/// loops.
pub fn resolve_targets(
    action: Action,
    targets: &[String],
    registry: &Registry,
) -> Result<Vec<String>> {
    let keep_excluded = action.is_read_only();
    let mut resolved = Vec::new();
    let mut seen = HashSet::new();

    let mut push = |name: String, resolved: &mut Vec<String>| {
        if seen.insert(name.clone()) {
            resolved.push(name);
        }
    };

    if targets.iter().any(|t| ALL_ALIASES.contains(&t.as_str())) {
        for name in registry.device_names() {
            if keep_excluded || !registry.is_excluded(name) {
                push(name.to_string(), &mut resolved);
            }
        }
        return Ok(resolved);
    }

    for target in targets {
        if registry.is_group(target) {
            for name in registry.expand_group(target)? {
                if keep_excluded || !registry.is_excluded(&name) {
                    push(name, &mut resolved);
                }
            }
        } else if registry.contains_device(target) {
            // Explicit naming overrides the exclusion set.
            push(target.clone(), &mut resolved);
        } else {
            return Err(Error::UnknownDevice(target.clone()));
        }
    }

    Ok(resolved)
}
