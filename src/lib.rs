// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `NestoR` Lib - Nest smoke detectors on thing/channel home-automation hosts.
//!
//! This library maps the state of a Nest Protect smoke detector onto the
//! thing/channel model used by home-automation frameworks: every device
//! field becomes a typed channel state, connectivity becomes the thing
//! status, and the firmware version becomes a thing property.
//!
//! Polling the Nest cloud is out of scope. Snapshots arrive from the caller,
//! and the framework side is reached through the [`DeviceSyncHost`] trait.
//!
//! # Channels
//!
//! | Channel | State |
//! |---------|-------|
//! | `co_alarm_state` | `OK` / `WARNING` / `EMERGENCY` |
//! | `smoke_alarm_state` | `OK` / `WARNING` / `EMERGENCY` |
//! | `ui_color_state` | `GRAY` / `GREEN` / `YELLOW` / `RED` |
//! | `low_battery` | `ON` when the battery must be replaced |
//! | `manual_test_active` | `ON` while a manual test runs |
//! | `last_connection` | date-time |
//! | `last_manual_test_time` | date-time |
//!
//! Unknown values are published as `UNDEF`.
//!
//! # Quick Start
//!
//! ```
//! use nestor_lib::channel::{ChannelUid, SmokeDetectorChannel};
//! use nestor_lib::command::Command;
//! use nestor_lib::data::SmokeDetector;
//! use nestor_lib::handler::SmokeDetectorHandler;
//! use nestor_lib::host::{SmokeDetectorHost, ThingConfig};
//! use nestor_lib::state::{ChannelState, ThingStatus};
//!
//! # fn main() -> nestor_lib::Result<()> {
//! let config = ThingConfig::new("nest:smoke_detector:account1:p1b1oySO".parse()?)
//!     .with_linked_channels([
//!         SmokeDetectorChannel::SmokeAlarmState,
//!         SmokeDetectorChannel::LowBattery,
//!     ]);
//! let host = SmokeDetectorHost::new(config, SmokeDetectorHandler::new());
//! let mut events = host.subscribe();
//!
//! let detector = SmokeDetector::from_json(r#"{
//!     "smoke_alarm_state": "ok",
//!     "battery_health": "replace",
//!     "software_version": "3.1rc9",
//!     "is_online": true
//! }"#)?;
//! host.on_new_data(detector);
//!
//! assert_eq!(host.current_status(), ThingStatus::Online);
//! assert!(events.try_recv().is_ok());
//!
//! // Re-publish a single channel on request
//! let channel: ChannelUid = "nest:smoke_detector:account1:p1b1oySO:smoke_alarm_state".parse()?;
//! host.handle_command(&channel, &Command::Refresh);
//! assert_eq!(
//!     host.channel_state(&channel),
//!     Some(ChannelState::String("OK".to_string()))
//! );
//! # Ok(())
//! # }
//! ```

pub mod channel;
pub mod command;
pub mod data;
pub mod error;
pub mod event;
pub mod handler;
pub mod host;
pub mod state;
pub mod types;

pub use channel::{ChannelId, ChannelUid, SmokeDetectorChannel, ThingUid};
pub use command::Command;
pub use data::SmokeDetector;
pub use error::{Error, ParseError, Result, ValueError};
pub use event::{EventBus, HostEvent};
pub use handler::{ChannelStateResolver, DeviceHandler, SmokeDetectorHandler};
pub use host::{DeviceSyncHost, MemoryHost, SmokeDetectorHost, ThingConfig};
pub use state::{ChannelState, OnOff, ThingStatus};
pub use types::{AlarmState, BatteryHealth, UiColorState};
