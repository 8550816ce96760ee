// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Colon-separated UIDs for things and channels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

use super::SmokeDetectorChannel;

const SEPARATOR: char = ':';

/// Minimum segments of a thing UID: `binding:type:id`.
const MIN_THING_SEGMENTS: usize = 3;

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Identifier of a thing, e.g. `nest:smoke_detector:account1:p1b1oySO`.
///
/// The first segment is the binding, the second the thing type, the last the
/// device id; anything in between names the bridge path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ThingUid {
    segments: Vec<String>,
}

impl ThingUid {
    /// Binding id (first segment).
    #[must_use]
    pub fn binding_id(&self) -> &str {
        &self.segments[0]
    }

    /// Thing type id (second segment).
    #[must_use]
    pub fn thing_type_id(&self) -> &str {
        &self.segments[1]
    }

    /// Device id (last segment).
    #[must_use]
    pub fn id(&self) -> &str {
        // At least MIN_THING_SEGMENTS are present.
        &self.segments[self.segments.len() - 1]
    }

    /// Bridge segments between the thing type and the device id.
    #[must_use]
    pub fn bridge_ids(&self) -> &[String] {
        &self.segments[2..self.segments.len() - 1]
    }
}

impl FromStr for ThingUid {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<String> = s.split(SEPARATOR).map(str::to_string).collect();
        if segments.len() < MIN_THING_SEGMENTS {
            return Err(ValueError::InvalidUid {
                uid: s.to_string(),
                reason: "expected at least 3 segments",
            });
        }
        if !segments.iter().all(|seg| is_valid_segment(seg)) {
            return Err(ValueError::InvalidUid {
                uid: s.to_string(),
                reason: "segments must be non-empty [A-Za-z0-9_-]",
            });
        }
        Ok(Self { segments })
    }
}

impl TryFrom<String> for ThingUid {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThingUid> for String {
    fn from(uid: ThingUid) -> Self {
        uid.to_string()
    }
}

impl fmt::Display for ThingUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join(":"))
    }
}

/// Id of a channel within its thing, e.g. `low_battery`.
///
/// Holds a single non-empty `[A-Za-z0-9_-]` segment, so every channel UID
/// built from it parses back from its display form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChannelId(String);

impl ChannelId {
    /// The id as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ChannelId {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_segment(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ValueError::InvalidUid {
                uid: s.to_string(),
                reason: "channel id must be a non-empty [A-Za-z0-9_-] segment",
            })
        }
    }
}

impl TryFrom<String> for ChannelId {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChannelId> for String {
    fn from(id: ChannelId) -> Self {
        id.0
    }
}

impl From<SmokeDetectorChannel> for ChannelId {
    fn from(channel: SmokeDetectorChannel) -> Self {
        Self(channel.id().to_string())
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a channel on a thing.
///
/// Serialized as its display form, `thing-uid:channel-id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChannelUid {
    thing: ThingUid,
    id: ChannelId,
}

impl ChannelUid {
    /// Creates a channel UID from its thing and channel id.
    #[must_use]
    pub fn new(thing: ThingUid, id: impl Into<ChannelId>) -> Self {
        Self {
            thing,
            id: id.into(),
        }
    }

    /// The owning thing.
    #[must_use]
    pub fn thing_uid(&self) -> &ThingUid {
        &self.thing
    }

    /// The channel id, e.g. `low_battery`.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl FromStr for ChannelUid {
    type Err = ValueError;

    /// Parses `thing-uid:channel-id`; the last segment is the channel id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((thing, id)) = s.rsplit_once(SEPARATOR) else {
            return Err(ValueError::InvalidUid {
                uid: s.to_string(),
                reason: "missing channel id",
            });
        };
        let id: ChannelId = id.parse().map_err(|_| ValueError::InvalidUid {
            uid: s.to_string(),
            reason: "segments must be non-empty [A-Za-z0-9_-]",
        })?;
        Ok(Self::new(thing.parse()?, id))
    }
}

impl TryFrom<String> for ChannelUid {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChannelUid> for String {
    fn from(uid: ChannelUid) -> Self {
        uid.to_string()
    }
}

impl fmt::Display for ChannelUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.thing, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thing_uid_parts() {
        let uid: ThingUid = "nest:smoke_detector:account1:p1b1oySO".parse().unwrap();
        assert_eq!(uid.binding_id(), "nest");
        assert_eq!(uid.thing_type_id(), "smoke_detector");
        assert_eq!(uid.bridge_ids(), ["account1".to_string()]);
        assert_eq!(uid.id(), "p1b1oySO");
        assert_eq!(uid.to_string(), "nest:smoke_detector:account1:p1b1oySO");
    }

    #[test]
    fn thing_uid_without_bridge() {
        let uid: ThingUid = "nest:smoke_detector:abc".parse().unwrap();
        assert!(uid.bridge_ids().is_empty());
        assert_eq!(uid.id(), "abc");
    }

    #[test]
    fn thing_uid_rejects_short_or_empty() {
        assert!("nest:smoke_detector".parse::<ThingUid>().is_err());
        assert!("nest::abc".parse::<ThingUid>().is_err());
        assert!("nest:smoke detector:abc".parse::<ThingUid>().is_err());
    }

    #[test]
    fn channel_uid_parse() {
        let uid: ChannelUid = "nest:smoke_detector:acc:dev:co_alarm_state".parse().unwrap();
        assert_eq!(uid.id(), "co_alarm_state");
        assert_eq!(uid.thing_uid().id(), "dev");
        assert_eq!(uid.to_string(), "nest:smoke_detector:acc:dev:co_alarm_state");
    }

    #[test]
    fn channel_uid_rejects_missing_thing() {
        assert!("low_battery".parse::<ChannelUid>().is_err());
        assert!("nest:smoke_detector:".parse::<ChannelUid>().is_err());
    }

    #[test]
    fn channel_id_rejects_invalid_segments() {
        for bad in ["", "a:b", "low battery", "état"] {
            assert!(bad.parse::<ChannelId>().is_err(), "{bad:?} accepted");
        }
        assert_eq!("low_battery".parse::<ChannelId>().unwrap().as_str(), "low_battery");
    }

    #[test]
    fn channel_uid_display_parses_back() {
        let thing: ThingUid = "nest:smoke_detector:acc:abc".parse().unwrap();
        for channel in SmokeDetectorChannel::ALL {
            let uid = ChannelUid::new(thing.clone(), channel);
            assert_eq!(uid.to_string().parse::<ChannelUid>().unwrap(), uid);
        }

        let custom = ChannelUid::new(thing, "ambient-temp_2".parse::<ChannelId>().unwrap());
        assert_eq!(custom.to_string().parse::<ChannelUid>().unwrap(), custom);
    }

    #[test]
    fn channel_uid_serde_as_string() {
        let uid: ChannelUid = "nest:smoke_detector:abc:low_battery".parse().unwrap();
        let json = serde_json::to_string(&uid).unwrap();
        assert_eq!(json, "\"nest:smoke_detector:abc:low_battery\"");
        assert_eq!(serde_json::from_str::<ChannelUid>(&json).unwrap(), uid);
        assert!(serde_json::from_str::<ChannelUid>("\"nest:smoke_detector:abc:\"").is_err());
    }

    #[test]
    fn thing_uid_serde_as_string() {
        let uid: ThingUid = "nest:smoke_detector:abc".parse().unwrap();
        let json = serde_json::to_string(&uid).unwrap();
        assert_eq!(json, "\"nest:smoke_detector:abc\"");
        assert!(serde_json::from_str::<ThingUid>("\"nest\"").is_err());
    }
}
