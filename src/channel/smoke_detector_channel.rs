// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel set of a smoke detector thing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Channels exposed by a smoke detector. All are read-only.
///
/// # Examples
///
/// ```
/// use nestor_lib::channel::SmokeDetectorChannel;
///
/// let channel: SmokeDetectorChannel = "low_battery".parse().unwrap();
/// assert_eq!(channel, SmokeDetectorChannel::LowBattery);
/// assert!("humidity".parse::<SmokeDetectorChannel>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmokeDetectorChannel {
    /// Carbon monoxide alarm state.
    CoAlarmState,
    /// Last time the device talked to the cloud.
    LastConnection,
    /// Last successful manual test.
    LastManualTestTime,
    /// Battery needs replacing.
    LowBattery,
    /// A manual test is running.
    ManualTestActive,
    /// Smoke alarm state.
    SmokeAlarmState,
    /// Status ring color.
    UiColorState,
}

impl SmokeDetectorChannel {
    /// Every channel, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::CoAlarmState,
        Self::LastConnection,
        Self::LastManualTestTime,
        Self::LowBattery,
        Self::ManualTestActive,
        Self::SmokeAlarmState,
        Self::UiColorState,
    ];

    /// Returns the channel id used in channel UIDs.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::CoAlarmState => "co_alarm_state",
            Self::LastConnection => "last_connection",
            Self::LastManualTestTime => "last_manual_test_time",
            Self::LowBattery => "low_battery",
            Self::ManualTestActive => "manual_test_active",
            Self::SmokeAlarmState => "smoke_alarm_state",
            Self::UiColorState => "ui_color_state",
        }
    }
}

impl fmt::Display for SmokeDetectorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SmokeDetectorChannel {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|channel| channel.id() == s)
            .ok_or_else(|| ValueError::UnknownChannel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_parse_back() {
        let mut seen = std::collections::HashSet::new();
        for channel in SmokeDetectorChannel::ALL {
            assert!(seen.insert(channel.id()));
            assert_eq!(channel.id().parse::<SmokeDetectorChannel>().unwrap(), channel);
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn unknown_channel_is_error() {
        assert_eq!(
            "LOW_BATTERY".parse::<SmokeDetectorChannel>(),
            Err(ValueError::UnknownChannel("LOW_BATTERY".to_string()))
        );
    }

    #[test]
    fn serde_uses_channel_id() {
        let json = serde_json::to_string(&SmokeDetectorChannel::LastManualTestTime).unwrap();
        assert_eq!(json, "\"last_manual_test_time\"");
    }
}
