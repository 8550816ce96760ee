// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thing configuration for the in-memory host.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::channel::{ChannelId, ChannelUid, ThingUid};
use crate::event::DEFAULT_CHANNEL_CAPACITY;

fn default_event_capacity() -> NonZeroUsize {
    DEFAULT_CHANNEL_CAPACITY
}

/// Configuration of a thing hosted by [`MemoryHost`](super::MemoryHost).
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
///
/// use nestor_lib::channel::SmokeDetectorChannel;
/// use nestor_lib::host::ThingConfig;
///
/// let config = ThingConfig::new("nest:smoke_detector:acc:abc".parse().unwrap())
///     .with_label("Hallway Protect")
///     .with_linked_channel(SmokeDetectorChannel::LowBattery)
///     .with_event_capacity(NonZeroUsize::new(16).unwrap());
///
/// assert_eq!(config.linked_channels[0].as_str(), "low_battery");
/// ```
///
/// Configurations can also be read from JSON. Channel ids must be single
/// `[A-Za-z0-9_-]` segments and the event capacity must not be zero:
///
/// ```
/// use nestor_lib::host::ThingConfig;
///
/// let config: ThingConfig = serde_json::from_str(r#"{
///     "thing_uid": "nest:smoke_detector:acc:abc",
///     "linked_channels": ["co_alarm_state", "smoke_alarm_state"]
/// }"#).unwrap();
///
/// assert_eq!(config.event_capacity.get(), 256);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThingConfig {
    /// UID of the thing.
    pub thing_uid: ThingUid,
    /// Optional human readable label, used in log output.
    #[serde(default)]
    pub label: Option<String>,
    /// Ids of the channels linked to items at start-up.
    #[serde(default)]
    pub linked_channels: Vec<ChannelId>,
    /// Buffer size of the event bus.
    #[serde(default = "default_event_capacity")]
    pub event_capacity: NonZeroUsize,
}

impl ThingConfig {
    /// Creates a configuration with no linked channels.
    #[must_use]
    pub fn new(thing_uid: ThingUid) -> Self {
        Self {
            thing_uid,
            label: None,
            linked_channels: Vec::new(),
            event_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Links a channel by id. Duplicates are ignored.
    #[must_use]
    pub fn with_linked_channel(mut self, id: impl Into<ChannelId>) -> Self {
        let id = id.into();
        if !self.linked_channels.contains(&id) {
            self.linked_channels.push(id);
        }
        self
    }

    /// Links every channel in `ids`.
    #[must_use]
    pub fn with_linked_channels<I, C>(self, ids: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ChannelId>,
    {
        ids.into_iter()
            .fold(self, |config, id| config.with_linked_channel(id))
    }

    /// Sets the event bus capacity.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Channel UIDs of the linked channels.
    #[must_use]
    pub fn linked_channel_uids(&self) -> Vec<ChannelUid> {
        self.linked_channels
            .iter()
            .map(|id| ChannelUid::new(self.thing_uid.clone(), id.clone()))
            .collect()
    }
}
