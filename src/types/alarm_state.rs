// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Alarm state reported for the smoke and carbon monoxide sensors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// State of a smoke or CO alarm.
///
/// The Nest API reports these as lowercase strings (`"ok"`, `"warning"`,
/// `"emergency"`). Channel states use the upper-case name.
///
/// # Examples
///
/// ```
/// use nestor_lib::types::AlarmState;
///
/// let state: AlarmState = "warning".parse().unwrap();
/// assert_eq!(state, AlarmState::Warning);
/// assert_eq!(state.as_str(), "WARNING");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlarmState {
    /// No alarm.
    Ok,
    /// Early warning, levels are rising.
    Warning,
    /// Alarm is sounding.
    Emergency,
}

impl AlarmState {
    /// Returns the channel state representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Emergency => "EMERGENCY",
        }
    }
}

impl fmt::Display for AlarmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlarmState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ok" => Ok(Self::Ok),
            "warning" => Ok(Self::Warning),
            "emergency" => Ok(Self::Emergency),
            _ => Err(ValueError::InvalidAlarmState(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_is_upper_case() {
        assert_eq!(AlarmState::Ok.as_str(), "OK");
        assert_eq!(AlarmState::Warning.as_str(), "WARNING");
        assert_eq!(AlarmState::Emergency.as_str(), "EMERGENCY");
    }

    #[test]
    fn from_str_ignores_case() {
        assert_eq!("OK".parse::<AlarmState>().unwrap(), AlarmState::Ok);
        assert_eq!(
            "Emergency".parse::<AlarmState>().unwrap(),
            AlarmState::Emergency
        );
    }

    #[test]
    fn from_str_invalid() {
        let err = "smoky".parse::<AlarmState>().unwrap_err();
        assert_eq!(err, ValueError::InvalidAlarmState("smoky".to_string()));
    }

    #[test]
    fn deserializes_api_values() {
        let state: AlarmState = serde_json::from_str("\"emergency\"").unwrap();
        assert_eq!(state, AlarmState::Emergency);
        assert!(serde_json::from_str::<AlarmState>("\"EMERGENCY\"").is_err());
    }
}
