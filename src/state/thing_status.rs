// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connectivity status of a thing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of a thing as shown by the host.
///
/// A host starts in [`Initializing`](Self::Initializing) until the first
/// snapshot is applied. [`Unknown`](Self::Unknown) is only reached when a
/// snapshot lacks the online flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThingStatus {
    /// No snapshot applied yet.
    #[default]
    Initializing,
    /// Snapshot did not report connectivity.
    Unknown,
    /// Device is reachable.
    Online,
    /// Device is unreachable.
    Offline,
}

impl ThingStatus {
    /// Returns the host representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Initializing => "INITIALIZING",
            Self::Unknown => "UNKNOWN",
            Self::Online => "ONLINE",
            Self::Offline => "OFFLINE",
        }
    }
}

/// Maps a tri-state online flag onto a status.
impl From<Option<bool>> for ThingStatus {
    fn from(online: Option<bool>) -> Self {
        match online {
            None => Self::Unknown,
            Some(true) => Self::Online,
            Some(false) => Self::Offline,
        }
    }
}

impl fmt::Display for ThingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_online_flag() {
        assert_eq!(ThingStatus::from(None), ThingStatus::Unknown);
        assert_eq!(ThingStatus::from(Some(true)), ThingStatus::Online);
        assert_eq!(ThingStatus::from(Some(false)), ThingStatus::Offline);
    }

    #[test]
    fn default_is_initializing() {
        assert_eq!(ThingStatus::default(), ThingStatus::Initializing);
        assert_ne!(ThingStatus::default(), ThingStatus::from(None));
        assert_eq!(ThingStatus::Initializing.to_string(), "INITIALIZING");
    }
}
