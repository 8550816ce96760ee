// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system for host pushes.
//!
//! Every state, status and property pushed through a
//! [`MemoryHost`](crate::host::MemoryHost) is broadcast as a [`HostEvent`]
//! on an [`EventBus`], which uses tokio's broadcast channel so several
//! consumers can follow the same thing.
//!
//! # Examples
//!
//! ```
//! use nestor_lib::event::{EventBus, HostEvent};
//! use nestor_lib::state::ThingStatus;
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! bus.publish(HostEvent::StatusChanged {
//!     thing: "nest:smoke_detector:acc:abc".parse().unwrap(),
//!     status: ThingStatus::Online,
//! });
//!
//! assert!(rx.try_recv().unwrap().is_status());
//! ```

mod event_bus;
mod host_event;

pub use event_bus::{DEFAULT_CHANNEL_CAPACITY, EventBus};
pub use host_event::HostEvent;
