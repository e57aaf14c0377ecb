// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric pin values and the wiring translation applied to them.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::types::Wiring;

/// A value read from or written to a pin.
///
/// The remote API deals in plain numbers: `0`/`1` for switched relays,
/// arbitrary floats for analog channels (dimmers, sensor readings). Integer
/// values participate in the wiring translation; non-integer values never do.
///
/// # Examples
///
/// ```
/// use blynkctl::types::{PinValue, Wiring};
///
/// let on = PinValue::from(1.0);
/// assert_eq!(on.normalize(Wiring::ActiveLow), PinValue::from(0.0));
///
/// let setpoint = PinValue::from(2.5);
/// assert_eq!(setpoint.normalize(Wiring::ActiveLow), setpoint);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinValue(f64);

impl PinValue {
    /// Logical off.
    pub const OFF: Self = Self(0.0);
    /// Logical on.
    pub const ON: Self = Self(1.0);

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Returns the value as an integer if it represents one exactly.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_integer(&self) -> Option<i64> {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            Some(self.0 as i64)
        } else {
            None
        }
    }

    /// Returns true if the value is exactly 0 or 1.
    #[must_use]
    pub fn is_binary(&self) -> bool {
        matches!(self.as_integer(), Some(0 | 1))
    }

    /// Translates between logical and physical state for the given wiring.
    ///
    /// Integer values are XORed with the wiring level; the translation is its
    /// own inverse. Non-integer analog values pass through untouched.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn normalize(self, wiring: Wiring) -> Self {
        match self.as_integer() {
            Some(value) => Self((value ^ wiring.level()) as f64),
            None => self,
        }
    }

    /// Returns the boolean inverse of the value.
    ///
    /// Only integer values can be flipped; analog values return `None`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn flipped(self) -> Option<Self> {
        self.as_integer().map(|value| Self((value ^ 1) as f64))
    }
}

impl From<f64> for PinValue {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl FromStr for PinValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .map(Self)
            .map_err(|_| ParseError::NotNumeric(s.to_string()))
    }
}

impl fmt::Display for PinValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Switched pins print as bare integers, analog values keep the dot.
        match self.as_integer() {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_active_high_is_identity() {
        for raw in [0.0, 1.0, 5.0, -3.0] {
            let value = PinValue::from(raw);
            assert_eq!(value.normalize(Wiring::ActiveHigh), value);
        }
    }

    #[test]
    fn normalize_active_low_inverts_booleans() {
        assert_eq!(
            PinValue::OFF.normalize(Wiring::ActiveLow),
            PinValue::ON
        );
        assert_eq!(
            PinValue::ON.normalize(Wiring::ActiveLow),
            PinValue::OFF
        );
    }

    #[test]
    fn normalize_is_an_involution() {
        for raw in [0.0, 1.0, 7.0] {
            for wiring in [Wiring::ActiveHigh, Wiring::ActiveLow] {
                let value = PinValue::from(raw);
                assert_eq!(value.normalize(wiring).normalize(wiring), value);
            }
        }
    }

    #[test]
    fn normalize_never_touches_analog_values() {
        let setpoint = PinValue::from(2.5);
        assert_eq!(setpoint.normalize(Wiring::ActiveHigh), setpoint);
        assert_eq!(setpoint.normalize(Wiring::ActiveLow), setpoint);
    }

    #[test]
    fn binary_detection() {
        assert!(PinValue::from(0.0).is_binary());
        assert!(PinValue::from(1.0).is_binary());
        assert!(!PinValue::from(2.0).is_binary());
        assert!(!PinValue::from(0.5).is_binary());
    }

    #[test]
    fn flipped_inverts_integers() {
        assert_eq!(PinValue::OFF.flipped(), Some(PinValue::ON));
        assert_eq!(PinValue::ON.flipped(), Some(PinValue::OFF));
        assert_eq!(PinValue::from(2.5).flipped(), None);
    }

    #[test]
    fn parse_accepts_integers_and_floats() {
        assert_eq!("1".parse::<PinValue>().unwrap(), PinValue::ON);
        assert_eq!("23.5".parse::<PinValue>().unwrap(), PinValue::from(23.5));
        assert_eq!(" 0 ".parse::<PinValue>().unwrap(), PinValue::OFF);
    }

    #[test]
    fn parse_rejects_non_numbers() {
        assert!("warm".parse::<PinValue>().is_err());
        assert!(String::new().parse::<PinValue>().is_err());
    }

    #[test]
    fn display_drops_trailing_zero_fraction() {
        assert_eq!(PinValue::ON.to_string(), "1");
        assert_eq!(PinValue::from(23.5).to_string(), "23.5");
    }
}
