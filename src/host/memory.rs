// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory host.

use std::collections::{BTreeMap, HashMap};
use std::marker::PhantomData;

use parking_lot::RwLock;
use tokio::sync::broadcast;

use crate::channel::{ChannelId, ChannelUid, ThingUid};
use crate::command::Command;
use crate::error::ValueError;
use crate::event::{EventBus, HostEvent};
use crate::handler::DeviceHandler;
use crate::state::{ChannelState, ThingStatus};

use super::{DeviceSyncHost, ThingConfig};

/// Mutable part of the host, guarded by a single lock.
#[derive(Debug)]
struct Inner<D> {
    last_update: Option<D>,
    status: ThingStatus,
    properties: BTreeMap<String, String>,
    channel_states: HashMap<ChannelUid, ChannelState>,
    /// Linked channels in link order.
    linked: Vec<ChannelUid>,
}

/// A host that keeps a thing's data in memory.
///
/// The host owns the handler `H` for snapshots of type `D`. New snapshots
/// enter through [`on_new_data`](Self::on_new_data), commands through
/// [`handle_command`](Self::handle_command). Every push is recorded and
/// broadcast on the host's [`EventBus`].
///
/// Locks are never held while the handler runs, so the handler may call back
/// into the host freely.
///
/// # Examples
///
/// ```
/// use nestor_lib::channel::SmokeDetectorChannel;
/// use nestor_lib::data::SmokeDetector;
/// use nestor_lib::handler::SmokeDetectorHandler;
/// use nestor_lib::host::{SmokeDetectorHost, ThingConfig};
/// use nestor_lib::state::ThingStatus;
///
/// let config = ThingConfig::new("nest:smoke_detector:acc:abc".parse().unwrap())
///     .with_linked_channel(SmokeDetectorChannel::SmokeAlarmState);
/// let host = SmokeDetectorHost::new(config, SmokeDetectorHandler::new());
///
/// host.on_new_data(SmokeDetector::builder().online(true).build());
///
/// assert_eq!(host.current_status(), ThingStatus::Online);
/// ```
pub struct MemoryHost<D, H> {
    thing: ThingUid,
    label: Option<String>,
    handler: H,
    events: EventBus,
    inner: RwLock<Inner<D>>,
    _device: PhantomData<fn() -> D>,
}

impl<D, H> MemoryHost<D, H>
where
    D: Clone,
    H: DeviceHandler<D>,
{
    /// Creates a host from its configuration and handler.
    ///
    /// The host starts in [`ThingStatus::Initializing`], so the first
    /// snapshot always publishes a status.
    #[must_use]
    pub fn new(config: ThingConfig, handler: H) -> Self {
        let linked = config.linked_channel_uids();
        Self {
            thing: config.thing_uid,
            label: config.label,
            handler,
            events: EventBus::with_capacity(config.event_capacity),
            inner: RwLock::new(Inner {
                last_update: None,
                status: ThingStatus::Initializing,
                properties: BTreeMap::new(),
                channel_states: HashMap::new(),
                linked,
            }),
            _device: PhantomData,
        }
    }

    /// The thing label, if configured.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The handler driving this host.
    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Subscribes to the pushes made by this host.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<HostEvent> {
        self.events.subscribe()
    }

    /// Caches `snapshot` and lets the handler reconcile against the previous one.
    pub fn on_new_data(&self, snapshot: D) {
        let old = self.inner.write().last_update.replace(snapshot.clone());
        self.handler.update(self, old.as_ref(), &snapshot);
    }

    /// Dispatches a host command to the handler.
    pub fn handle_command(&self, channel: &ChannelUid, command: &Command) {
        self.handler.handle_command(self, channel, command);
    }

    /// Links a channel by id and publishes its current state.
    ///
    /// Linking an already linked channel only republishes.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidUid`] if `id` is not a valid channel id.
    pub fn link_channel(&self, id: &str) -> Result<ChannelUid, ValueError> {
        let id: ChannelId = id.parse()?;
        let channel = ChannelUid::new(self.thing.clone(), id);
        {
            let mut inner = self.inner.write();
            if !inner.linked.contains(&channel) {
                inner.linked.push(channel.clone());
            }
        }
        self.handler.channel_linked(self, &channel);
        Ok(channel)
    }

    /// Unlinks a channel by id. Returns `false` if it was not linked.
    pub fn unlink_channel(&self, id: &str) -> bool {
        let mut inner = self.inner.write();
        let before = inner.linked.len();
        inner.linked.retain(|channel| channel.id() != id);
        inner.linked.len() != before
    }

    /// Returns `true` if the channel is linked.
    #[must_use]
    pub fn is_linked(&self, channel: &ChannelUid) -> bool {
        self.inner.read().linked.contains(channel)
    }

    /// Linked channels, in link order.
    #[must_use]
    pub fn linked_channels(&self) -> Vec<ChannelUid> {
        self.inner.read().linked.clone()
    }

    /// Last state published for a channel.
    #[must_use]
    pub fn channel_state(&self, channel: &ChannelUid) -> Option<ChannelState> {
        self.inner.read().channel_states.get(channel).cloned()
    }

    /// Current value of a thing property.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<String> {
        self.inner.read().properties.get(name).cloned()
    }

    /// All thing properties.
    #[must_use]
    pub fn properties(&self) -> BTreeMap<String, String> {
        self.inner.read().properties.clone()
    }

    /// Currently recorded thing status.
    #[must_use]
    pub fn current_status(&self) -> ThingStatus {
        self.inner.read().status
    }

    /// Display name used in log output.
    fn display_name(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.thing.to_string())
    }
}

impl<D, H> DeviceSyncHost<D> for MemoryHost<D, H>
where
    D: Clone,
    H: DeviceHandler<D>,
{
    fn thing_uid(&self) -> &ThingUid {
        &self.thing
    }

    fn status(&self) -> ThingStatus {
        self.current_status()
    }

    fn last_update(&self) -> Option<D> {
        self.inner.read().last_update.clone()
    }

    fn update_state(&self, channel: &ChannelUid, state: ChannelState) {
        tracing::trace!(channel = %channel, state = %state, "Publishing channel state");
        self.inner
            .write()
            .channel_states
            .insert(channel.clone(), state.clone());
        self.events.publish(HostEvent::StateUpdated {
            channel: channel.clone(),
            state,
        });
    }

    fn update_status(&self, status: ThingStatus) {
        tracing::debug!(thing = %self.display_name(), status = %status, "Thing status changed");
        self.inner.write().status = status;
        self.events.publish(HostEvent::StatusChanged {
            thing: self.thing.clone(),
            status,
        });
    }

    fn update_property(&self, name: &str, value: Option<&str>) {
        let changed = {
            let mut inner = self.inner.write();
            match value {
                Some(value) => {
                    inner.properties.insert(name.to_string(), value.to_string())
                        != Some(value.to_string())
                }
                None => inner.properties.remove(name).is_some(),
            }
        };

        if changed {
            tracing::trace!(thing = %self.thing, property = name, value = ?value, "Property changed");
            self.events.publish(HostEvent::PropertyChanged {
                thing: self.thing.clone(),
                name: name.to_string(),
                value: value.map(str::to_string),
            });
        }
    }

    fn update_linked_channels(&self, old: Option<&D>, new: &D) {
        let linked = self.linked_channels();
        for channel in linked {
            let new_state = self.handler.channel_state(&channel, new);
            let changed =
                old.is_none_or(|old| self.handler.channel_state(&channel, old) != new_state);
            if changed {
                tracing::debug!(channel = %channel, "Updating channel");
                self.update_state(&channel, new_state);
            }
        }
    }
}

impl<D, H> std::fmt::Debug for MemoryHost<D, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryHost")
            .field("thing", &self.thing)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
