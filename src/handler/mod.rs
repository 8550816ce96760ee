// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device handlers.
//!
//! A handler maps one device type onto the thing/channel model. It resolves
//! channel states from snapshots, reacts to host commands, and reconciles
//! the host whenever a new snapshot arrives. Handlers hold no state of their
//! own; the cached snapshot and the thing status live in the host.
//!
//! # Examples
//!
//! ```
//! use nestor_lib::channel::{ChannelUid, SmokeDetectorChannel};
//! use nestor_lib::data::SmokeDetector;
//! use nestor_lib::handler::{ChannelStateResolver, SmokeDetectorHandler};
//! use nestor_lib::state::{ChannelState, OnOff};
//! use nestor_lib::types::BatteryHealth;
//!
//! let handler = SmokeDetectorHandler::new();
//! let detector = SmokeDetector::builder()
//!     .battery_health(BatteryHealth::Replace)
//!     .build();
//!
//! let channel = ChannelUid::new(
//!     "nest:smoke_detector:acc:abc".parse().unwrap(),
//!     SmokeDetectorChannel::LowBattery,
//! );
//! assert_eq!(
//!     handler.channel_state(&channel, &detector),
//!     ChannelState::OnOff(OnOff::On)
//! );
//! ```

mod smoke_detector;

pub use smoke_detector::SmokeDetectorHandler;

use crate::channel::ChannelUid;
use crate::command::Command;
use crate::host::DeviceSyncHost;
use crate::state::ChannelState;

/// Resolves the display value of a channel from a snapshot of type `D`.
///
/// Resolution never fails: unknown channels and unknown values resolve to
/// [`ChannelState::Undefined`].
pub trait ChannelStateResolver<D> {
    /// Returns the state of `channel` in `device`.
    fn channel_state(&self, channel: &ChannelUid, device: &D) -> ChannelState;
}

/// Per-device-type handler, parameterized by the snapshot type `D`.
pub trait DeviceHandler<D>: ChannelStateResolver<D> {
    /// Handles a command sent by the host to `channel`.
    fn handle_command<H>(&self, host: &H, channel: &ChannelUid, command: &Command)
    where
        H: DeviceSyncHost<D> + ?Sized;

    /// Reconciles the host after a new snapshot arrived.
    ///
    /// `old` is the previously cached snapshot, absent for the first one.
    fn update<H>(&self, host: &H, old: Option<&D>, new: &D)
    where
        H: DeviceSyncHost<D> + ?Sized;

    /// Called after `channel` got linked; publishes its current state.
    fn channel_linked<H>(&self, host: &H, channel: &ChannelUid)
    where
        H: DeviceSyncHost<D> + ?Sized,
    {
        if let Some(last) = host.last_update() {
            host.update_state(channel, self.channel_state(channel, &last));
        }
    }
}
