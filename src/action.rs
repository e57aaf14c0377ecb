// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The closed set of CLI actions and their prefix parser.

use std::fmt;

use crate::error::{Error, Result};
use crate::types::PinValue;

/// What an invocation asks the tool to do.
///
/// The final CLI token selects the action. Named actions are matched by the
/// shortest unambiguous case-sensitive prefix of the canonical word, so `f`,
/// `fl` and `flip` all flip, while `o` is rejected as ambiguous between `on`
/// and `off`. A token that matches no action but parses as a number becomes
/// an analog set-point.
///
/// # Examples
///
/// ```
/// use blynkctl::action::Action;
///
/// assert_eq!(Action::parse("f").unwrap(), Action::Flip);
/// assert_eq!(Action::parse("of").unwrap(), Action::Off);
/// assert!(matches!(Action::parse("22.5").unwrap(), Action::Set(_)));
/// assert!(Action::parse("o").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Invert every resolved device.
    Flip,
    /// Switch every resolved device off.
    Off,
    /// Switch every resolved device on.
    On,
    /// Switch the named devices on and everything else in their groups off.
    Just,
    /// Report resolved device states as JSON (bare value for one device).
    Status,
    /// Report resolved device states as an aligned table.
    Print,
    /// Write an arbitrary value verbatim to every resolved device.
    Set(PinValue),
}

const NAMED_ACTIONS: [(&str, Action); 6] = [
    ("flip", Action::Flip),
    ("off", Action::Off),
    ("on", Action::On),
    ("just", Action::Just),
    ("status", Action::Status),
    ("print", Action::Print),
];

impl Action {
    /// Parses the action token of an invocation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedAction`] when the token prefixes no
    /// action (or more than one) and does not parse as a number.
    pub fn parse(token: &str) -> Result<Self> {
        if !token.is_empty() {
            let mut matches = NAMED_ACTIONS
                .iter()
                .filter(|(word, _)| word.starts_with(token));
            if let Some((_, action)) = matches.next() {
                if matches.next().is_none() {
                    return Ok(*action);
                }
                return Err(Error::UnrecognizedAction(token.to_string()));
            }
        }
        token
            .parse::<PinValue>()
            .map(Action::Set)
            .map_err(|_| Error::UnrecognizedAction(token.to_string()))
    }

    /// Returns true for actions that only read device state.
    ///
    /// Read-only actions see excluded devices in group and `all` expansions;
    /// state-changing actions do not.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        matches!(self, Self::Status | Self::Print)
    }

    /// Returns the canonical action word.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Flip => "flip",
            Self::Off => "off",
            Self::On => "on",
            Self::Just => "just",
            Self::Status => "status",
            Self::Print => "print",
            Self::Set(_) => "set",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set(value) => write!(f, "set {value}"),
            _ => write!(f, "{}", self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_words_parse() {
        assert_eq!(Action::parse("flip").unwrap(), Action::Flip);
        assert_eq!(Action::parse("off").unwrap(), Action::Off);
        assert_eq!(Action::parse("on").unwrap(), Action::On);
        assert_eq!(Action::parse("just").unwrap(), Action::Just);
        assert_eq!(Action::parse("status").unwrap(), Action::Status);
        assert_eq!(Action::parse("print").unwrap(), Action::Print);
    }

    #[test]
    fn shortest_prefixes_parse() {
        assert_eq!(Action::parse("f").unwrap(), Action::Flip);
        assert_eq!(Action::parse("of").unwrap(), Action::Off);
        assert_eq!(Action::parse("j").unwrap(), Action::Just);
        assert_eq!(Action::parse("s").unwrap(), Action::Status);
        assert_eq!(Action::parse("p").unwrap(), Action::Print);
    }

    #[test]
    fn ambiguous_prefix_is_rejected() {
        assert!(matches!(
            Action::parse("o"),
            Err(Error::UnrecognizedAction(_))
        ));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(Action::parse("FLIP").is_err());
        assert!(Action::parse("On").is_err());
    }

    #[test]
    fn numeric_tokens_become_set_points() {
        assert_eq!(
            Action::parse("1").unwrap(),
            Action::Set(PinValue::from(1.0))
        );
        assert_eq!(
            Action::parse("22.5").unwrap(),
            Action::Set(PinValue::from(22.5))
        );
        assert_eq!(
            Action::parse("-3").unwrap(),
            Action::Set(PinValue::from(-3.0))
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(Action::parse("frobnicate").is_err());
        assert!(Action::parse("").is_err());
        assert!(Action::parse("statusx").is_err());
    }

    #[test]
    fn read_only_classification() {
        assert!(Action::Status.is_read_only());
        assert!(Action::Print.is_read_only());
        assert!(!Action::Flip.is_read_only());
        assert!(!Action::Set(PinValue::ON).is_read_only());
    }
}
