// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host event types.

use serde::{Deserialize, Serialize};

use crate::channel::{ChannelUid, ThingUid};
use crate::state::{ChannelState, ThingStatus};

/// A push made by a host on behalf of a handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HostEvent {
    /// A channel state was published.
    StateUpdated {
        /// The channel.
        channel: ChannelUid,
        /// The published state.
        state: ChannelState,
    },

    /// The thing status was published.
    StatusChanged {
        /// The thing.
        thing: ThingUid,
        /// The new status.
        status: ThingStatus,
    },

    /// A thing property was set or removed.
    PropertyChanged {
        /// The thing.
        thing: ThingUid,
        /// Property name.
        name: String,
        /// New value, `None` when removed.
        value: Option<String>,
    },
}

impl HostEvent {
    /// Returns the UID of the thing the event belongs to.
    #[must_use]
    pub fn thing_uid(&self) -> &ThingUid {
        match self {
            Self::StateUpdated { channel, .. } => channel.thing_uid(),
            Self::StatusChanged { thing, .. } | Self::PropertyChanged { thing, .. } => thing,
        }
    }

    /// Returns `true` if this is a channel state event.
    #[must_use]
    pub fn is_state(&self) -> bool {
        matches!(self, Self::StateUpdated { .. })
    }

    /// Returns `true` if this is a status event.
    #[must_use]
    pub fn is_status(&self) -> bool {
        matches!(self, Self::StatusChanged { .. })
    }

    /// Returns `true` if this is a property event.
    #[must_use]
    pub fn is_property(&self) -> bool {
        matches!(self, Self::PropertyChanged { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::SmokeDetectorChannel;

    fn thing() -> ThingUid {
        "nest:smoke_detector:acc:abc".parse().unwrap()
    }

    #[test]
    fn thing_uid_extraction() {
        let state = HostEvent::StateUpdated {
            channel: ChannelUid::new(thing(), SmokeDetectorChannel::LowBattery),
            state: ChannelState::Undefined,
        };
        assert_eq!(state.thing_uid(), &thing());

        let property = HostEvent::PropertyChanged {
            thing: thing(),
            name: "firmwareVersion".to_string(),
            value: None,
        };
        assert_eq!(property.thing_uid(), &thing());
    }

    #[test]
    fn kind_predicates() {
        let status = HostEvent::StatusChanged {
            thing: thing(),
            status: ThingStatus::Offline,
        };
        assert!(status.is_status());
        assert!(!status.is_state());
        assert!(!status.is_property());
    }
}
