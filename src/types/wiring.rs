// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Relay wiring polarity.

use std::fmt;

/// How a device's relay is wired relative to its pin.
///
/// Relays wired as normally closed invert the relationship between the pin
/// level and the switched circuit: a physical LOW means the device is on.
/// The configuration file expresses this as the `default_state` field
/// (`0` = active-high, `1` = active-low), matching the level that the pin
/// rests at when the device is logically off.
///
/// # Examples
///
/// ```
/// use blynkctl::types::Wiring;
///
/// assert_eq!(Wiring::ActiveHigh.level(), 0);
/// assert_eq!(Wiring::ActiveLow.level(), 1);
/// assert_eq!(Wiring::from_level(1), Some(Wiring::ActiveLow));
/// assert_eq!(Wiring::from_level(2), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wiring {
    /// Pin HIGH switches the device on.
    ActiveHigh,
    /// Pin LOW switches the device on (normally-closed relay).
    ActiveLow,
}

impl Wiring {
    /// Returns the pin level the device rests at when logically off.
    #[must_use]
    pub const fn level(self) -> i64 {
        match self {
            Self::ActiveHigh => 0,
            Self::ActiveLow => 1,
        }
    }

    /// Maps a configured default-state value to a wiring polarity.
    ///
    /// Returns `None` for anything outside `{0, 1}`.
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::ActiveHigh),
            1 => Some(Self::ActiveLow),
            _ => None,
        }
    }
}

impl fmt::Display for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActiveHigh => write!(f, "active-high"),
            Self::ActiveLow => write!(f, "active-low"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_round_trip() {
        for wiring in [Wiring::ActiveHigh, Wiring::ActiveLow] {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let level = wiring.level() as u8;
            assert_eq!(Wiring::from_level(level), Some(wiring));
        }
    }

    #[test]
    fn from_level_rejects_out_of_range() {
        assert_eq!(Wiring::from_level(2), None);
        assert_eq!(Wiring::from_level(255), None);
    }

    #[test]
    fn display() {
        assert_eq!(Wiring::ActiveHigh.to_string(), "active-high");
        assert_eq!(Wiring::ActiveLow.to_string(), "active-low");
    }
}
