use crate::{helpers, Event, Kind, Tag};

/// a reference to an addressable event: `kind:pubkey:identifier`, carried in
/// an "a" tag with an optional trailing relay hint
///
/// the pubkey is kept as the raw string from the tag; no key or kind-class
/// validation happens here, consumers filter by the kinds they expect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCoordinates {
    pub kind: Kind,
    pub pubkey: String,
    pub identifier: String,
    pub relay_hint: Option<String>,
}

impl EventCoordinates {
    /// parse coordinates from an "a" tag
    ///
    /// returns None unless the tag is named "a" and its value has exactly
    /// three colon-delimited parts with an integer kind
    pub fn from_tag(tag: &Tag) -> Option<Self> {
        if tag.name() != "a" {
            return None;
        }

        let parts: Vec<&str> = tag.value().split(':').collect();
        if parts.len() != 3 {
            return None;
        }

        let kind = Kind(parts[0].parse::<u16>().ok()?);

        let relay_hint = tag
            .other_parameters()
            .first()
            .filter(|url| helpers::is_valid_relay_url(url))
            .cloned();

        Some(Self {
            kind,
            pubkey: parts[1].to_string(),
            identifier: parts[2].to_string(),
            relay_hint,
        })
    }

    /// coordinates of an addressable event, using its "d" tag as identifier
    pub fn from_event(event: &Event) -> Option<Self> {
        if !event.kind.is_addressable() {
            return None;
        }

        Some(Self {
            kind: event.kind,
            pubkey: event.pubkey.to_hex(),
            identifier: event.tags.get_d(),
            relay_hint: None,
        })
    }

    /// the coordinates as they appear in the value of an "a" tag
    ///
    /// the identifier segment is always emitted, even when empty, so tags
    /// round-trip losslessly
    pub fn as_tag_reference(&self) -> String {
        format!("{}:{}:{}", self.kind, self.pubkey, self.identifier)
    }

    /// convert back to an "a" tag
    pub fn to_tag(&self) -> Tag {
        let mut fields = vec!["a".to_string(), self.as_tag_reference()];
        if let Some(relay) = &self.relay_hint {
            fields.push(relay.clone());
        }
        Tag(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EventTemplate, SecretKey, Tags, Timestamp};

    #[test]
    fn test_parse_coordinates_tag() {
        let tag = Tag::new("a", "31923:abcdef:event1");
        let coords = EventCoordinates::from_tag(&tag).unwrap();

        assert_eq!(coords.kind, Kind(31923));
        assert_eq!(coords.pubkey, "abcdef");
        assert_eq!(coords.identifier, "event1");
        assert_eq!(coords.relay_hint, None);
    }

    #[test]
    fn test_parse_rejects_bad_tags() {
        // non-numeric kind
        assert!(EventCoordinates::from_tag(&Tag::new("a", "not-a-number:x:y")).is_none());
        // wrong tag name
        assert!(EventCoordinates::from_tag(&Tag::new("e", "31923:abcdef:event1")).is_none());
        // wrong number of segments
        assert!(EventCoordinates::from_tag(&Tag::new("a", "31923:abcdef")).is_none());
        assert!(EventCoordinates::from_tag(&Tag::new("a", "31923:abcdef:x:y")).is_none());
        // kind out of range
        assert!(EventCoordinates::from_tag(&Tag::new("a", "-1:abcdef:event1")).is_none());
    }

    #[test]
    fn test_empty_identifier_is_allowed() {
        let coords = EventCoordinates::from_tag(&Tag::new("a", "30023:abcdef:")).unwrap();
        assert_eq!(coords.identifier, "");
        assert_eq!(coords.to_tag().value(), "30023:abcdef:");
    }

    #[test]
    fn test_relay_hint() {
        let tag = Tag::with_parameters(
            "a",
            "31922:abcdef:party",
            vec!["wss://relay.damus.io".to_string()],
        );
        let coords = EventCoordinates::from_tag(&tag).unwrap();
        assert_eq!(coords.relay_hint.as_deref(), Some("wss://relay.damus.io"));

        // a hint that is not a ws/wss URL is dropped, not an error
        let tag = Tag::with_parameters(
            "a",
            "31922:abcdef:party",
            vec!["https://example.com".to_string()],
        );
        let coords = EventCoordinates::from_tag(&tag).unwrap();
        assert_eq!(coords.relay_hint, None);
    }

    #[test]
    fn test_tag_round_trip() {
        let tag = Tag::with_parameters(
            "a",
            "31923:abcdef:event1",
            vec!["wss://relay.damus.io".to_string()],
        );
        let coords = EventCoordinates::from_tag(&tag).unwrap();
        assert_eq!(coords.to_tag(), tag);
    }

    #[test]
    fn test_coordinates_round_trip() {
        let coords = EventCoordinates {
            kind: Kind(31922),
            pubkey: "abcdef".to_string(),
            identifier: "".to_string(),
            relay_hint: Some("wss://relay.damus.io".to_string()),
        };
        assert_eq!(
            EventCoordinates::from_tag(&coords.to_tag()).unwrap(),
            coords
        );
    }

    #[test]
    fn test_from_event() {
        let secret_key = SecretKey::generate();
        let event = EventTemplate {
            created_at: Timestamp(1700000000),
            kind: Kind(30023),
            tags: Tags(vec![Tag::new("d", "my-article")]),
            content: "...".to_string(),
        }
        .finalize(&secret_key);

        let coords = EventCoordinates::from_event(&event).unwrap();
        assert_eq!(coords.kind, Kind(30023));
        assert_eq!(coords.pubkey, event.pubkey.to_hex());
        assert_eq!(coords.identifier, "my-article");

        // non-addressable kinds have no coordinates
        let note = EventTemplate {
            created_at: Timestamp(1700000000),
            kind: Kind(1),
            tags: Tags::default(),
            content: "...".to_string(),
        }
        .finalize(&secret_key);
        assert!(EventCoordinates::from_event(&note).is_none());
    }
}
