// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types reported by Nest smoke detectors.
//!
//! # Types
//!
//! - [`AlarmState`] - Smoke and CO alarm level (ok/warning/emergency)
//! - [`BatteryHealth`] - Battery condition (ok/replace)
//! - [`UiColorState`] - Status ring color (gray/green/yellow/red)
//! - [`parse_timestamp`] - Lenient Nest timestamp parsing

mod alarm_state;
mod battery_health;
mod datetime;
mod ui_color_state;

pub use alarm_state::AlarmState;
pub use battery_health::BatteryHealth;
pub(crate) use datetime::deserialize_optional;
pub use datetime::{DateTimeParseError, parse_timestamp};
pub use ui_color_state::UiColorState;
