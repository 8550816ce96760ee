// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! States pushed to the host.
//!
//! [`ChannelState`] is the display value of a single channel and
//! [`ThingStatus`] the connectivity status of the whole thing. Absent data is
//! always represented by [`ChannelState::Undefined`] or
//! [`ThingStatus::Unknown`], never by a missing value.
//!
//! # Examples
//!
//! ```
//! use nestor_lib::state::{ChannelState, OnOff, ThingStatus};
//!
//! assert_eq!(ChannelState::on_off(Some(true)), ChannelState::OnOff(OnOff::On));
//! assert_eq!(ChannelState::on_off(None), ChannelState::Undefined);
//! assert_eq!(ThingStatus::from(Some(false)), ThingStatus::Offline);
//! ```

mod channel_state;
mod thing_status;

pub use channel_state::{ChannelState, OnOff};
pub use thing_status::ThingStatus;
