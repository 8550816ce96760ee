// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color shown by the detector's status ring.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Color state of the device UI.
///
/// Gray means offline, green means ok, yellow is a warning and red an
/// emergency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiColorState {
    /// Offline or unknown.
    Gray,
    /// All good.
    Green,
    /// Warning.
    Yellow,
    /// Emergency.
    Red,
}

impl UiColorState {
    /// Returns the channel state representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gray => "GRAY",
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Red => "RED",
        }
    }
}

impl fmt::Display for UiColorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UiColorState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gray" => Ok(Self::Gray),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "red" => Ok(Self::Red),
            _ => Err(ValueError::InvalidUiColorState(s.to_string())),
        }
    }
}
