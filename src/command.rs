// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed pin requests and their wire format.
//!
//! The remote API has two endpoint shapes, both plain GET:
//!
//! - read: `{server}/{token}/get/{pin}`
//! - write: `{server}/{token}/update/{pin}?value={value}`

use crate::types::PinValue;

/// A single request against a pin.
///
/// # Examples
///
/// ```
/// use blynkctl::command::PinRequest;
/// use blynkctl::types::PinValue;
///
/// let read = PinRequest::read("V3");
/// assert_eq!(read.to_path("tok"), "tok/get/V3");
///
/// let write = PinRequest::write("d2", PinValue::ON);
/// assert_eq!(write.to_path("tok"), "tok/update/d2?value=1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PinRequest {
    /// Read the current pin value.
    Read {
        /// The pin key.
        pin: String,
    },
    /// Write a physical value to the pin.
    Write {
        /// The pin key.
        pin: String,
        /// The value to store.
        value: PinValue,
    },
}

impl PinRequest {
    /// Creates a read request.
    #[must_use]
    pub fn read(pin: impl Into<String>) -> Self {
        Self::Read { pin: pin.into() }
    }

    /// Creates a write request.
    #[must_use]
    pub fn write(pin: impl Into<String>, value: PinValue) -> Self {
        Self::Write {
            pin: pin.into(),
            value,
        }
    }

    /// Returns the pin the request addresses.
    #[must_use]
    pub fn pin(&self) -> &str {
        match self {
            Self::Read { pin } | Self::Write { pin, .. } => pin,
        }
    }

    /// Builds the URL path (relative to the server base) for this request.
    #[must_use]
    pub fn to_path(&self, token: &str) -> String {
        match self {
            Self::Read { pin } => format!("{token}/get/{}", urlencoding::encode(pin)),
            Self::Write { pin, value } => format!(
                "{token}/update/{}?value={}",
                urlencoding::encode(pin),
                urlencoding::encode(&value.to_string())
            ),
        }
    }
}
