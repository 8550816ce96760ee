// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The host side of a device handler.
//!
//! A host owns a thing: it caches the last snapshot received for it, knows
//! which channels are linked, and forwards states, status and properties to
//! the home-automation framework. Handlers only talk to it through
//! [`DeviceSyncHost`].
//!
//! [`MemoryHost`] is a self-contained implementation that keeps everything
//! in memory and publishes each push as a [`HostEvent`](crate::event::HostEvent).

mod config;
mod memory;

pub use config::ThingConfig;
pub use memory::MemoryHost;

use crate::channel::{ChannelUid, ThingUid};
use crate::data::SmokeDetector;
use crate::handler::SmokeDetectorHandler;
use crate::state::{ChannelState, ThingStatus};

/// Property name under which the device firmware version is published.
pub const PROPERTY_FIRMWARE_VERSION: &str = "firmwareVersion";

/// In-memory host for a smoke detector thing.
pub type SmokeDetectorHost = MemoryHost<SmokeDetector, SmokeDetectorHandler>;

/// Operations a handler may invoke on its host.
///
/// `D` is the snapshot type of the device. All methods take `&self`; hosts
/// use interior mutability so they can be shared with the dispatcher that
/// calls the handler.
pub trait DeviceSyncHost<D> {
    /// UID of the thing this host represents.
    fn thing_uid(&self) -> &ThingUid;

    /// Status currently recorded for the thing.
    fn status(&self) -> ThingStatus;

    /// Most recent cached snapshot, if any data has arrived yet.
    fn last_update(&self) -> Option<D>;

    /// Publishes a channel state.
    fn update_state(&self, channel: &ChannelUid, state: ChannelState);

    /// Publishes the thing status.
    fn update_status(&self, status: ThingStatus);

    /// Sets a thing property; `None` removes it.
    fn update_property(&self, name: &str, value: Option<&str>);

    /// Pushes the state of every linked channel whose resolved value differs
    /// between `old` and `new`. With no `old` snapshot every linked channel is
    /// pushed.
    fn update_linked_channels(&self, old: Option<&D>, new: &D);
}
