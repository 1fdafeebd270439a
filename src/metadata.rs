use crate::{Event, EventTemplate, Kind, KindError, PubKey, Tags, Timestamp};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error(transparent)]
    Kind(#[from] KindError),

    #[error("invalid metadata content: {0}")]
    Json(#[from] serde_json::Error),
}

/// profile metadata from kind 0 events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lud16: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nip05: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,

    #[serde(skip)]
    pub pubkey: Option<PubKey>,
}

impl Metadata {
    /// create new empty metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// read profile metadata from a kind 0 event's content
    pub fn from_event(event: &Event) -> Result<Self, MetadataError> {
        if event.kind != Kind::METADATA {
            return Err(KindError::Unexpected {
                expected: Kind::METADATA,
                found: event.kind,
            }
            .into());
        }

        let mut metadata: Self = serde_json::from_str(&event.content)?;
        metadata.pubkey = Some(event.pubkey);
        Ok(metadata)
    }

    /// create a signable kind 0 draft from this metadata
    pub fn to_event_template(&self) -> EventTemplate {
        let content = serde_json::to_string(self)
            .expect("serialization should always work for valid metadata");

        EventTemplate {
            created_at: Timestamp::now(),
            kind: Kind::METADATA,
            tags: Tags::default(),
            content,
        }
    }
}

impl std::fmt::Display for Metadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.name.as_deref().unwrap_or("<no name>");
        let about = self.about.as_deref().unwrap_or("<no about>");
        write!(f, "Metadata(name: {}, about: {})", name, about)
    }
}
