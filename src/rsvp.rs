use crate::{Event, EventCoordinates, EventTemplate, Kind, KindError, SecretKey, Tags, Timestamp};
use std::fmt;

/// attendance status of an RSVP, mirroring the participation status type
/// from the RFC 5545 iCalendar spec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpStatus {
    Accepted,
    Declined,
    Tentative,
}

impl RsvpStatus {
    /// map a label value to a status; unknown strings map to None
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "accepted" => Some(Self::Accepted),
            "declined" => Some(Self::Declined),
            "tentative" => Some(Self::Tentative),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Declined => "declined",
            Self::Tentative => "tentative",
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// whether the author is free or busy for the duration of the referenced
/// calendar event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpFreebusy {
    Free,
    Busy,
}

impl RsvpFreebusy {
    /// map a label value to a freebusy state; unknown strings map to None
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "free" => Some(Self::Free),
            "busy" => Some(Self::Busy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Busy => "busy",
        }
    }
}

impl fmt::Display for RsvpFreebusy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// a response to a calendar event indicating the author's attendance
/// intention (kind 31925)
///
/// a read-only view over a signed event; the kind is fixed by construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEventRsvp {
    event: Event,
}

impl CalendarEventRsvp {
    /// sign a new RSVP; the kind is always [`Kind::CALENDAR_EVENT_RSVP`]
    pub fn new(
        content: impl Into<String>,
        tags: Tags,
        created_at: Timestamp,
        secret_key: &SecretKey,
    ) -> Self {
        let event = EventTemplate {
            created_at,
            kind: Kind::CALENDAR_EVENT_RSVP,
            tags,
            content: content.into(),
        }
        .finalize(secret_key);

        Self { event }
    }

    /// view an already-constructed event as an RSVP, rejecting other kinds
    pub fn from_event(event: Event) -> Result<Self, KindError> {
        if event.kind != Kind::CALENDAR_EVENT_RSVP {
            return Err(KindError::Unexpected {
                expected: Kind::CALENDAR_EVENT_RSVP,
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

    /// coordinates of the calendar event this RSVP responds to: the first
    /// "a" tag pointing at a date-based or time-based calendar event
    pub fn calendar_event_coordinates(&self) -> Option<EventCoordinates> {
        self.event
            .tags
            .iter()
            .filter_map(EventCoordinates::from_tag)
            .find(|coords| {
                coords.kind == Kind::DATE_BASED_CALENDAR_EVENT
                    || coords.kind == Kind::TIME_BASED_CALENDAR_EVENT
            })
    }

    /// the attendance status, from the first label tag parameterized with
    /// "status"
    pub fn status(&self) -> Option<RsvpStatus> {
        self.event
            .tags
            .find_with_param("l", "status")
            .and_then(|tag| RsvpStatus::parse(tag.value()))
    }

    /// the free/busy indication, from the first label tag parameterized
    /// with "freebusy"
    pub fn freebusy(&self) -> Option<RsvpFreebusy> {
        self.event
            .tags
            .find_with_param("l", "freebusy")
            .and_then(|tag| RsvpFreebusy::parse(tag.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tag;

    fn rsvp_with_tags(tags: Vec<Tag>) -> CalendarEventRsvp {
        CalendarEventRsvp::new(
            "",
            Tags(tags),
            Timestamp(1700000000),
            &SecretKey::generate(),
        )
    }

    #[test]
    fn test_kind_is_fixed_by_construction() {
        let rsvp = rsvp_with_tags(vec![]);
        assert_eq!(rsvp.event().kind, Kind::CALENDAR_EVENT_RSVP);
        assert!(rsvp.event().verify());
    }

    #[test]
    fn test_from_event_rejects_other_kinds() {
        let note = EventTemplate {
            created_at: Timestamp(1700000000),
            kind: Kind(1),
            tags: Tags::default(),
            content: "".to_string(),
        }
        .finalize(&SecretKey::generate());

        assert!(matches!(
            CalendarEventRsvp::from_event(note),
            Err(KindError::Unexpected {
                expected: Kind::CALENDAR_EVENT_RSVP,
                found: Kind(1),
            })
        ));
    }

    #[test]
    fn test_from_event_accepts_rsvp_kind() {
        let rsvp = rsvp_with_tags(vec![Tag::with_parameters(
            "l",
            "accepted",
            vec!["status".to_string()],
        )]);
        let event = rsvp.into_event();

        let viewed = CalendarEventRsvp::from_event(event).unwrap();
        assert_eq!(viewed.status(), Some(RsvpStatus::Accepted));
    }

    #[test]
    fn test_status_mapping() {
        let rsvp = rsvp_with_tags(vec![Tag::with_parameters(
            "l",
            "accepted",
            vec!["status".to_string()],
        )]);
        assert_eq!(rsvp.status(), Some(RsvpStatus::Accepted));

        let rsvp = rsvp_with_tags(vec![Tag::with_parameters(
            "l",
            "maybe-typo",
            vec!["status".to_string()],
        )]);
        assert_eq!(rsvp.status(), None);

        let rsvp = rsvp_with_tags(vec![]);
        assert_eq!(rsvp.status(), None);
    }

    #[test]
    fn test_freebusy_mapping() {
        let rsvp = rsvp_with_tags(vec![
            Tag::with_parameters("l", "declined", vec!["status".to_string()]),
            Tag::with_parameters("l", "free", vec!["freebusy".to_string()]),
        ]);
        assert_eq!(rsvp.status(), Some(RsvpStatus::Declined));
        assert_eq!(rsvp.freebusy(), Some(RsvpFreebusy::Free));

        // a status label does not leak into freebusy
        let rsvp = rsvp_with_tags(vec![Tag::with_parameters(
            "l",
            "busy",
            vec!["status".to_string()],
        )]);
        assert_eq!(rsvp.freebusy(), None);
    }

    #[test]
    fn test_calendar_event_coordinates() {
        let rsvp = rsvp_with_tags(vec![
            // an addressable reference that is not a calendar event
            Tag::new("a", "30023:abcdef:blog-post"),
            Tag::new("a", "31923:abcdef:event1"),
            Tag::new("a", "31922:fedcba:party"),
        ]);

        let coords = rsvp.calendar_event_coordinates().unwrap();
        assert_eq!(coords.kind, Kind::TIME_BASED_CALENDAR_EVENT);
        assert_eq!(coords.pubkey, "abcdef");
        assert_eq!(coords.identifier, "event1");
    }

    #[test]
    fn test_no_calendar_coordinates() {
        let rsvp = rsvp_with_tags(vec![Tag::new("a", "30023:abcdef:blog-post")]);
        assert!(rsvp.calendar_event_coordinates().is_none());

        let rsvp = rsvp_with_tags(vec![]);
        assert!(rsvp.calendar_event_coordinates().is_none());
    }
}
