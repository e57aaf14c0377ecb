// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for pin state handling.
//!
//! # Types
//!
//! - [`PinValue`] - numeric value read from or written to a pin
//! - [`Wiring`] - relay wiring polarity (active-high / active-low)

mod pin_value;
mod wiring;

pub use pin_value::PinValue;
pub use wiring::Wiring;
