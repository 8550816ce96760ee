// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smoke detector snapshot.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::types::{AlarmState, BatteryHealth, UiColorState};

/// Point-in-time state of a Nest Protect smoke detector.
///
/// Every field is optional because the API omits values it does not know.
/// Field names follow the Nest API JSON document so a snapshot can be read
/// directly with [`SmokeDetector::from_json`].
///
/// # Examples
///
/// ```
/// use nestor_lib::data::SmokeDetector;
/// use nestor_lib::types::BatteryHealth;
///
/// let detector = SmokeDetector::from_json(r#"{
///     "device_id": "p1b1oySOcs_sbi4iczruW3Ou-iQr8PMV",
///     "battery_health": "replace",
///     "is_online": true
/// }"#).unwrap();
///
/// assert_eq!(detector.battery_health(), Some(BatteryHealth::Replace));
/// assert_eq!(detector.is_online(), Some(true));
/// assert!(detector.co_alarm_state().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmokeDetector {
    #[serde(default)]
    device_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    name_long: Option<String>,
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    structure_id: Option<String>,
    #[serde(default)]
    where_id: Option<String>,
    #[serde(default)]
    where_name: Option<String>,
    #[serde(default)]
    software_version: Option<String>,
    #[serde(default)]
    is_online: Option<bool>,
    #[serde(default, deserialize_with = "crate::types::deserialize_optional")]
    last_connection: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    co_alarm_state: Option<AlarmState>,
    #[serde(default)]
    smoke_alarm_state: Option<AlarmState>,
    #[serde(default)]
    battery_health: Option<BatteryHealth>,
    #[serde(default)]
    is_manual_test_active: Option<bool>,
    #[serde(default, deserialize_with = "crate::types::deserialize_optional")]
    last_manual_test_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    ui_color_state: Option<UiColorState>,
}

impl SmokeDetector {
    /// Starts building a snapshot field by field.
    #[must_use]
    pub fn builder() -> SmokeDetectorBuilder {
        SmokeDetectorBuilder::default()
    }

    /// Parses a snapshot from a Nest API JSON document.
    ///
    /// Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] if the document is not valid JSON, an
    /// enum value is not recognised, or a timestamp cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a snapshot from an already decoded JSON value.
    ///
    /// # Errors
    ///
    /// See [`from_json`](Self::from_json).
    pub fn from_value(value: serde_json::Value) -> Result<Self, ParseError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Nest device identifier.
    #[must_use]
    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    /// Short display name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Long display name, including the location.
    #[must_use]
    pub fn name_long(&self) -> Option<&str> {
        self.name_long.as_deref()
    }

    /// Device locale, e.g. `en-US`.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Identifier of the structure (home) the device belongs to.
    #[must_use]
    pub fn structure_id(&self) -> Option<&str> {
        self.structure_id.as_deref()
    }

    /// Identifier of the room the device is placed in.
    #[must_use]
    pub fn where_id(&self) -> Option<&str> {
        self.where_id.as_deref()
    }

    /// Display name of the room the device is placed in.
    #[must_use]
    pub fn where_name(&self) -> Option<&str> {
        self.where_name.as_deref()
    }

    /// Firmware version reported by the device.
    #[must_use]
    pub fn software_version(&self) -> Option<&str> {
        self.software_version.as_deref()
    }

    /// Connectivity flag; `None` when the cloud does not know.
    #[must_use]
    pub fn is_online(&self) -> Option<bool> {
        self.is_online
    }

    /// Time of the last successful connection to the cloud.
    #[must_use]
    pub fn last_connection(&self) -> Option<DateTime<FixedOffset>> {
        self.last_connection
    }

    /// Carbon monoxide alarm state.
    #[must_use]
    pub fn co_alarm_state(&self) -> Option<AlarmState> {
        self.co_alarm_state
    }

    /// Smoke alarm state.
    #[must_use]
    pub fn smoke_alarm_state(&self) -> Option<AlarmState> {
        self.smoke_alarm_state
    }

    /// Battery health.
    #[must_use]
    pub fn battery_health(&self) -> Option<BatteryHealth> {
        self.battery_health
    }

    /// Whether a manual test is running.
    #[must_use]
    pub fn is_manual_test_active(&self) -> Option<bool> {
        self.is_manual_test_active
    }

    /// Time of the last successful manual test.
    #[must_use]
    pub fn last_manual_test_time(&self) -> Option<DateTime<FixedOffset>> {
        self.last_manual_test_time
    }

    /// Color of the status ring.
    #[must_use]
    pub fn ui_color_state(&self) -> Option<UiColorState> {
        self.ui_color_state
    }
}

/// Builder for [`SmokeDetector`] snapshots.
///
/// Unset fields stay unknown.
///
/// # Examples
///
/// ```
/// use nestor_lib::data::SmokeDetector;
/// use nestor_lib::types::AlarmState;
///
/// let detector = SmokeDetector::builder()
///     .smoke_alarm_state(AlarmState::Ok)
///     .online(true)
///     .build();
///
/// assert_eq!(detector.smoke_alarm_state(), Some(AlarmState::Ok));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SmokeDetectorBuilder {
    inner: SmokeDetector,
}

impl SmokeDetectorBuilder {
    /// Sets the Nest device identifier.
    #[must_use]
    pub fn device_id(mut self, id: impl Into<String>) -> Self {
        self.inner.device_id = Some(id.into());
        self
    }

    /// Sets the short display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    /// Sets the long display name.
    #[must_use]
    pub fn name_long(mut self, name: impl Into<String>) -> Self {
        self.inner.name_long = Some(name.into());
        self
    }

    /// Sets the device locale.
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.inner.locale = Some(locale.into());
        self
    }

    /// Sets the structure identifier.
    #[must_use]
    pub fn structure_id(mut self, id: impl Into<String>) -> Self {
        self.inner.structure_id = Some(id.into());
        self
    }

    /// Sets the room identifier and name.
    #[must_use]
    pub fn location(mut self, where_id: impl Into<String>, where_name: impl Into<String>) -> Self {
        self.inner.where_id = Some(where_id.into());
        self.inner.where_name = Some(where_name.into());
        self
    }

    /// Sets the firmware version.
    #[must_use]
    pub fn software_version(mut self, version: impl Into<String>) -> Self {
        self.inner.software_version = Some(version.into());
        self
    }

    /// Sets the connectivity flag.
    #[must_use]
    pub fn online(mut self, online: bool) -> Self {
        self.inner.is_online = Some(online);
        self
    }

    /// Sets the last connection time.
    #[must_use]
    pub fn last_connection(mut self, at: DateTime<FixedOffset>) -> Self {
        self.inner.last_connection = Some(at);
        self
    }

    /// Sets the carbon monoxide alarm state.
    #[must_use]
    pub fn co_alarm_state(mut self, state: AlarmState) -> Self {
        self.inner.co_alarm_state = Some(state);
        self
    }

    /// Sets the smoke alarm state.
    #[must_use]
    pub fn smoke_alarm_state(mut self, state: AlarmState) -> Self {
        self.inner.smoke_alarm_state = Some(state);
        self
    }

    /// Sets the battery health.
    #[must_use]
    pub fn battery_health(mut self, health: BatteryHealth) -> Self {
        self.inner.battery_health = Some(health);
        self
    }

    /// Sets whether a manual test is running.
    #[must_use]
    pub fn manual_test_active(mut self, active: bool) -> Self {
        self.inner.is_manual_test_active = Some(active);
        self
    }

    /// Sets the last manual test time.
    #[must_use]
    pub fn last_manual_test_time(mut self, at: DateTime<FixedOffset>) -> Self {
        self.inner.last_manual_test_time = Some(at);
        self
    }

    /// Sets the status ring color.
    #[must_use]
    pub fn ui_color_state(mut self, color: UiColorState) -> Self {
        self.inner.ui_color_state = Some(color);
        self
    }

    /// Finishes the snapshot.
    #[must_use]
    pub fn build(self) -> SmokeDetector {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    const API_DOCUMENT: &str = r#"{
        "device_id": "p1b1oySOcs_sbi4iczruW3Ou-iQr8PMV",
        "locale": "en-US",
        "software_version": "1.01",
        "structure_id": "VqFabWH21nwVyd4RWgJgNb292wa7hG_dUwo2i2SG7j3-BOLY0BA4sw",
        "name": "Downstairs",
        "name_long": "Downstairs Nest Protect",
        "last_connection": "2016-10-31T23:59:59.000Z",
        "is_online": true,
        "battery_health": "ok",
        "co_alarm_state": "ok",
        "smoke_alarm_state": "warning",
        "is_manual_test_active": false,
        "last_manual_test_time": "2016-10-31T23:59:59.000Z",
        "ui_color_state": "yellow",
        "where_id": "UEjBJv-V8uL6IzN21AD4eQ",
        "where_name": "Downstairs",
        "unknown_future_field": 42
    }"#;

    #[test]
    fn parses_api_document() {
        let detector = SmokeDetector::from_json(API_DOCUMENT).unwrap();

        assert_eq!(detector.device_id(), Some("p1b1oySOcs_sbi4iczruW3Ou-iQr8PMV"));
        assert_eq!(detector.name(), Some("Downstairs"));
        assert_eq!(detector.name_long(), Some("Downstairs Nest Protect"));
        assert_eq!(detector.locale(), Some("en-US"));
        assert_eq!(detector.where_name(), Some("Downstairs"));
        assert_eq!(detector.software_version(), Some("1.01"));
        assert_eq!(detector.is_online(), Some(true));
        assert_eq!(detector.battery_health(), Some(BatteryHealth::Ok));
        assert_eq!(detector.co_alarm_state(), Some(AlarmState::Ok));
        assert_eq!(detector.smoke_alarm_state(), Some(AlarmState::Warning));
        assert_eq!(detector.is_manual_test_active(), Some(false));
        assert_eq!(detector.ui_color_state(), Some(UiColorState::Yellow));
        assert_eq!(detector.last_connection().unwrap().hour(), 23);
        assert!(detector.last_manual_test_time().is_some());
    }

    #[test]
    fn missing_and_null_fields_are_unknown() {
        let detector =
            SmokeDetector::from_json(r#"{"is_online": null, "battery_health": null}"#).unwrap();
        assert_eq!(detector, SmokeDetector::default());
    }

    #[test]
    fn rejects_unknown_enum_value() {
        let err = SmokeDetector::from_json(r#"{"co_alarm_state": "smoky"}"#).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn rejects_bad_timestamp() {
        assert!(SmokeDetector::from_json(r#"{"last_connection": "never"}"#).is_err());
    }

    #[test]
    fn from_value_matches_from_json() {
        let value: serde_json::Value = serde_json::from_str(API_DOCUMENT).unwrap();
        assert_eq!(
            SmokeDetector::from_value(value).unwrap(),
            SmokeDetector::from_json(API_DOCUMENT).unwrap()
        );
    }

    #[test]
    fn builder_sets_fields() {
        let detector = SmokeDetector::builder()
            .device_id("abc")
            .location("w1", "Hallway")
            .battery_health(BatteryHealth::Replace)
            .manual_test_active(true)
            .build();

        assert_eq!(detector.device_id(), Some("abc"));
        assert_eq!(detector.where_id(), Some("w1"));
        assert_eq!(detector.where_name(), Some("Hallway"));
        assert_eq!(detector.battery_health(), Some(BatteryHealth::Replace));
        assert_eq!(detector.is_manual_test_active(), Some(true));
        assert!(detector.is_online().is_none());
    }
}
