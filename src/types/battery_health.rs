// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Battery health of a smoke detector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Battery health as reported by the device.
///
/// # Examples
///
/// ```
/// use nestor_lib::types::BatteryHealth;
///
/// assert!(BatteryHealth::Replace.is_low());
/// assert!(!BatteryHealth::Ok.is_low());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatteryHealth {
    /// Battery is fine.
    Ok,
    /// Battery must be replaced.
    Replace,
}

impl BatteryHealth {
    /// Returns the upper-case name of the health value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Replace => "REPLACE",
        }
    }

    /// Returns `true` when the battery needs replacing.
    #[must_use]
    pub const fn is_low(&self) -> bool {
        matches!(self, Self::Replace)
    }
}

impl fmt::Display for BatteryHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BatteryHealth {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ok" => Ok(Self::Ok),
            "replace" => Ok(Self::Replace),
            _ => Err(ValueError::InvalidBatteryHealth(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_valid() {
        assert_eq!("ok".parse::<BatteryHealth>().unwrap(), BatteryHealth::Ok);
        assert_eq!(
            "REPLACE".parse::<BatteryHealth>().unwrap(),
            BatteryHealth::Replace
        );
    }

    #[test]
    fn from_str_invalid() {
        assert!(matches!(
            "dead".parse::<BatteryHealth>(),
            Err(ValueError::InvalidBatteryHealth(_))
        ));
    }

    #[test]
    fn display() {
        assert_eq!(BatteryHealth::Replace.to_string(), "REPLACE");
    }
}
