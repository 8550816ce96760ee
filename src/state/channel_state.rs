// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel state values.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Switch value of an on/off channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OnOff {
    /// Off.
    Off,
    /// On.
    On,
}

impl OnOff {
    /// Returns the host representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
        }
    }
}

impl From<bool> for OnOff {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl fmt::Display for OnOff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display value of a channel.
///
/// `Undefined` stands for "no value known" and is pushed instead of leaving
/// the channel empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelState {
    /// No value is known.
    Undefined,
    /// Free-form or enum-like text.
    String(String),
    /// A point in time.
    DateTime(DateTime<FixedOffset>),
    /// A switch value.
    OnOff(OnOff),
}

impl ChannelState {
    /// Text state from anything displayable, `Undefined` when absent.
    #[must_use]
    pub fn string<T: fmt::Display>(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, |v| Self::String(v.to_string()))
    }

    /// Date-time state, `Undefined` when absent.
    #[must_use]
    pub fn date_time(value: Option<DateTime<FixedOffset>>) -> Self {
        value.map_or(Self::Undefined, Self::DateTime)
    }

    /// Switch state, `Undefined` when absent.
    #[must_use]
    pub fn on_off(value: Option<bool>) -> Self {
        value.map_or(Self::Undefined, |v| Self::OnOff(v.into()))
    }

    /// Returns `true` for [`ChannelState::Undefined`].
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl fmt::Display for ChannelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("UNDEF"),
            Self::String(s) => f.write_str(s),
            Self::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Self::OnOff(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AlarmState;

    #[test]
    fn string_from_option() {
        assert_eq!(
            ChannelState::string(Some(AlarmState::Warning)),
            ChannelState::String("WARNING".to_string())
        );
        assert_eq!(ChannelState::string(None::<&str>), ChannelState::Undefined);
    }

    #[test]
    fn date_time_from_option() {
        let dt = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z").unwrap();
        assert_eq!(ChannelState::date_time(Some(dt)), ChannelState::DateTime(dt));
        assert!(ChannelState::date_time(None).is_undefined());
    }

    #[test]
    fn on_off_from_option() {
        assert_eq!(ChannelState::on_off(Some(false)), ChannelState::OnOff(OnOff::Off));
        assert!(ChannelState::on_off(None).is_undefined());
    }

    #[test]
    fn display() {
        assert_eq!(ChannelState::Undefined.to_string(), "UNDEF");
        assert_eq!(ChannelState::OnOff(OnOff::On).to_string(), "ON");
        let dt = DateTime::parse_from_rfc3339("2024-01-15T10:30:00+01:00").unwrap();
        assert_eq!(
            ChannelState::DateTime(dt).to_string(),
            "2024-01-15T10:30:00+01:00"
        );
    }
}
