// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smoke detector handler.

use crate::channel::{ChannelUid, SmokeDetectorChannel};
use crate::command::Command;
use crate::data::SmokeDetector;
use crate::host::{DeviceSyncHost, PROPERTY_FIRMWARE_VERSION};
use crate::state::{ChannelState, ThingStatus};

use super::{ChannelStateResolver, DeviceHandler};

/// Handles the data of a Nest Protect smoke detector.
///
/// The device exposes no writable channels, so the only command acted on is
/// [`Command::Refresh`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SmokeDetectorHandler;

impl SmokeDetectorHandler {
    /// Creates a handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolves a typed channel against a snapshot.
    #[must_use]
    pub fn resolve(channel: SmokeDetectorChannel, detector: &SmokeDetector) -> ChannelState {
        match channel {
            SmokeDetectorChannel::CoAlarmState => ChannelState::string(detector.co_alarm_state()),
            SmokeDetectorChannel::LastConnection => {
                ChannelState::date_time(detector.last_connection())
            }
            SmokeDetectorChannel::LastManualTestTime => {
                ChannelState::date_time(detector.last_manual_test_time())
            }
            SmokeDetectorChannel::LowBattery => {
                ChannelState::on_off(detector.battery_health().map(|health| health.is_low()))
            }
            SmokeDetectorChannel::ManualTestActive => {
                ChannelState::on_off(detector.is_manual_test_active())
            }
            SmokeDetectorChannel::SmokeAlarmState => {
                ChannelState::string(detector.smoke_alarm_state())
            }
            SmokeDetectorChannel::UiColorState => ChannelState::string(detector.ui_color_state()),
        }
    }
}

impl ChannelStateResolver<SmokeDetector> for SmokeDetectorHandler {
    fn channel_state(&self, channel: &ChannelUid, device: &SmokeDetector) -> ChannelState {
        match channel.id().parse::<SmokeDetectorChannel>() {
            Ok(channel) => Self::resolve(channel, device),
            Err(_) => {
                tracing::error!(channel = %channel, "Unsupported channel id '{}'", channel.id());
                ChannelState::Undefined
            }
        }
    }
}

impl DeviceHandler<SmokeDetector> for SmokeDetectorHandler {
    fn handle_command<H>(&self, host: &H, channel: &ChannelUid, command: &Command)
    where
        H: DeviceSyncHost<SmokeDetector> + ?Sized,
    {
        if !command.is_refresh() {
            tracing::trace!(channel = %channel, command = %command, "Ignoring command on read-only channel");
            return;
        }

        if let Some(last) = host.last_update() {
            host.update_state(channel, self.channel_state(channel, &last));
        }
    }

    fn update<H>(&self, host: &H, old: Option<&SmokeDetector>, new: &SmokeDetector)
    where
        H: DeviceSyncHost<SmokeDetector> + ?Sized,
    {
        tracing::debug!(thing = %host.thing_uid(), "Updating smoke detector");

        host.update_linked_channels(old, new);
        host.update_property(PROPERTY_FIRMWARE_VERSION, new.software_version());

        let status = ThingStatus::from(new.is_online());
        if status != host.status() {
            host.update_status(status);
        }
    }
}
