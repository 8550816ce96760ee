// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Commands issued by the host to a channel.
//!
//! Smoke detector channels are read-only, so the only command a handler acts
//! on is [`Command::Refresh`]. The other variants exist because hosts send
//! whatever an item is bound to; handlers are expected to ignore them.
//!
//! # Examples
//!
//! ```
//! use nestor_lib::command::Command;
//! use nestor_lib::state::OnOff;
//!
//! assert!(Command::Refresh.is_refresh());
//! assert!(!Command::OnOff(OnOff::On).is_refresh());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::OnOff;

/// A command received for a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Re-publish the current state without querying the device.
    Refresh,
    /// Switch on or off.
    OnOff(OnOff),
    /// Set a text value.
    String(String),
    /// Set a numeric value.
    Decimal(f64),
}

impl Command {
    /// Returns `true` if this is a refresh request.
    #[must_use]
    pub const fn is_refresh(&self) -> bool {
        matches!(self, Self::Refresh)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Refresh => f.write_str("REFRESH"),
            Self::OnOff(v) => write!(f, "{v}"),
            Self::String(s) => f.write_str(s),
            Self::Decimal(d) => write!(f, "{d}"),
        }
    }
}
