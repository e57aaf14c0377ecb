// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport to the Blynk server.
//!
//! Every remote interaction is a single blocking-until-answered HTTP GET:
//! one request per pin read, one per pin write. There is no retry, backoff
//! or caching; a transport failure aborts the remaining work of the
//! current command.

mod http;

pub use http::{HttpClient, HttpConfig};
