// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status output rendering.

use crate::types::PinValue;

/// An ordered collection of device readings ready to render.
///
/// # Examples
///
/// ```
/// use blynkctl::report::Report;
/// use blynkctl::types::PinValue;
///
/// let mut report = Report::new();
/// report.push("bedroom_light", PinValue::ON);
/// report.push("temperature", PinValue::from(23.5));
///
/// assert_eq!(report.render_json(), r#"{"bedroom_light": 1, "temperature": 23.5}"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Report {
    entries: Vec<(String, PinValue)>,
}

impl Report {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one device reading.
    pub fn push(&mut self, name: impl Into<String>, value: PinValue) {
        self.entries.push((name.into(), value));
    }

    /// Returns the number of readings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the report holds no readings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the readings as a JSON object in insertion order.
    ///
    /// A report with exactly one reading renders as the bare value, so a
    /// single-device status stays pipeable.
    #[must_use]
    pub fn render_json(&self) -> String {
        if let [(_, value)] = self.entries.as_slice() {
            return value.to_string();
        }
        let fields: Vec<String> = self
            .entries
            .iter()
            .map(|(name, value)| {
                // Value::String handles the key escaping; PinValue's Display
                // is already a valid JSON number.
                let key = serde_json::Value::String(name.clone());
                format!("{key}: {value}")
            })
            .collect();
        format!("{{{}}}", fields.join(", "))
    }

    /// Renders the readings as an aligned name/value table.
    #[must_use]
    pub fn render_table(&self) -> String {
        let width = self
            .entries
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            + 1;
        let lines: Vec<String> = self
            .entries
            .iter()
            .map(|(name, value)| format!("{name:<width$}: {value}"))
            .collect();
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        let mut report = Report::new();
        report.push("bedroom_light", PinValue::ON);
        report.push("temperature", PinValue::from(23.5));
        report.push("hum", PinValue::OFF);
        report
    }

    #[test]
    fn json_object_keeps_insertion_order() {
        assert_eq!(
            sample().render_json(),
            r#"{"bedroom_light": 1, "temperature": 23.5, "hum": 0}"#
        );
    }

    #[test]
    fn json_single_reading_is_bare() {
        let mut report = Report::new();
        report.push("kitchen_light", PinValue::ON);
        assert_eq!(report.render_json(), "1");
    }

    #[test]
    fn json_empty_report() {
        assert_eq!(Report::new().render_json(), "{}");
    }

    #[test]
    fn json_escapes_names() {
        let mut report = Report::new();
        report.push("odd\"name", PinValue::OFF);
        report.push("other", PinValue::ON);
        assert_eq!(report.render_json(), r#"{"odd\"name": 0, "other": 1}"#);
    }

    #[test]
    fn table_pads_to_longest_name() {
        assert_eq!(
            sample().render_table(),
            "bedroom_light : 1\ntemperature   : 23.5\nhum           : 0"
        );
    }

    #[test]
    fn table_empty_report() {
        assert_eq!(Report::new().render_table(), "");
    }
}
