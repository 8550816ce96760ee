// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thing and channel identifiers.
//!
//! Hosts address channels by [`ChannelUid`], a [`ThingUid`] plus a channel
//! id. Each device type maps the raw id onto a fixed enumeration such as
//! [`SmokeDetectorChannel`] at the boundary, so handler logic matches
//! exhaustively instead of comparing strings.
//!
//! # Examples
//!
//! ```
//! use nestor_lib::channel::{ChannelUid, SmokeDetectorChannel, ThingUid};
//!
//! let thing: ThingUid = "nest:smoke_detector:account1:p1b1oySO".parse().unwrap();
//! let channel = ChannelUid::new(thing, SmokeDetectorChannel::LowBattery);
//!
//! assert_eq!(
//!     channel.to_string(),
//!     "nest:smoke_detector:account1:p1b1oySO:low_battery"
//! );
//! ```

mod smoke_detector_channel;
mod uid;

pub use smoke_detector_channel::SmokeDetectorChannel;
pub use uid::{ChannelId, ChannelUid, ThingUid};
