// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `NestoR` library.
//!
//! Handler operations never fail: unknown channels and absent fields are
//! mapped to undefined states. Errors only arise on the construction paths,
//! when parsing identifiers, enum values and JSON snapshots.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while parsing a device snapshot.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The channel id is not part of the device's channel set.
    #[error("unknown channel: {0}")]
    UnknownChannel(String),

    /// A thing or channel UID is malformed.
    #[error("invalid UID '{uid}': {reason}")]
    InvalidUid {
        /// The rejected UID.
        uid: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// An alarm state string was not recognised.
    #[error("invalid alarm state: {0}")]
    InvalidAlarmState(String),

    /// A battery health string was not recognised.
    #[error("invalid battery health: {0}")]
    InvalidBatteryHealth(String),

    /// A UI color state string was not recognised.
    #[error("invalid UI color state: {0}")]
    InvalidUiColorState(String),
}

/// Errors related to parsing Nest device data.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_channel_display() {
        let err = ValueError::UnknownChannel("humidity".to_string());
        assert_eq!(err.to_string(), "unknown channel: humidity");
    }

    #[test]
    fn invalid_uid_display() {
        let err = ValueError::InvalidUid {
            uid: "nest".to_string(),
            reason: "expected at least 3 segments",
        };
        assert_eq!(
            err.to_string(),
            "invalid UID 'nest': expected at least 3 segments"
        );
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidAlarmState("smoky".to_string());
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::InvalidAlarmState(_))));
    }
}
