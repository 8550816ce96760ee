// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device data snapshots.
//!
//! A snapshot is an immutable, point-in-time reading of a device as
//! delivered by the upstream sync layer. Handlers compare consecutive
//! snapshots but never modify them.

mod smoke_detector;

pub use smoke_detector::{SmokeDetector, SmokeDetectorBuilder};
