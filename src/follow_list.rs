use crate::{Event, EventTemplate, Kind, KindError, SecretKey, Tag, Tags, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// read/write permissions a user has for a relay, as found in legacy
/// follow-list content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayPermissions {
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub write: bool,
}

/// a follow list (kind 3): one "p" tag per followed profile
///
/// a read-only view over a signed event; the kind is fixed by construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowList {
    event: Event,
}

impl FollowList {
    /// sign a new follow list; the kind is always [`Kind::FOLLOW_LIST`] and
    /// the content is empty
    pub fn new(tags: Tags, created_at: Timestamp, secret_key: &SecretKey) -> Self {
        let event = EventTemplate {
            created_at,
            kind: Kind::FOLLOW_LIST,
            tags,
            content: String::new(),
        }
        .finalize(secret_key);

        Self { event }
    }

    /// view an already-constructed event as a follow list, rejecting other
    /// kinds
    pub fn from_event(event: Event) -> Result<Self, KindError> {
        if event.kind != Kind::FOLLOW_LIST {
            return Err(KindError::Unexpected {
                expected: Kind::FOLLOW_LIST,
                found: event.kind,
            });
        }
        Ok(Self { event })
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn into_event(self) -> Event {
        self.event
    }

    /// pubkeys of followed profiles, in tag order, duplicates included
    pub fn followed_pubkeys(&self) -> Vec<String> {
        self.event
            .tags
            .find_all("p")
            .map(|tag| tag.value().to_string())
            .collect()
    }

    /// the "p" tags themselves, for callers that want relay hints or
    /// petnames from the extra parameters
    pub fn followed_pubkey_tags(&self) -> Vec<&Tag> {
        self.event.tags.find_all("p").collect()
    }

    /// relays the user knows about, parsed from the content field
    ///
    /// malformed content yields an empty map
    #[deprecated(
        note = "relay lists in kind 3 content are out of spec and kept only for legacy clients"
    )]
    pub fn relays(&self) -> HashMap<String, RelayPermissions> {
        serde_json::from_str(&self.event.content).unwrap_or_default()
    }
}
