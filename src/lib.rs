//! # votive
//!
//! nostr event types and utilities
//!
//! this library models immutable, signed nostr events with content-addressed
//! ids, the generic tag container, addressable-event coordinates, and typed
//! views over specific event kinds (calendar RSVPs, follow lists, profile
//! metadata).

pub mod coordinates;
pub mod event;
pub mod event_template;
pub mod follow_list;
pub mod helpers;
pub mod keys;
pub mod metadata;
pub mod rsvp;
pub mod timestamp;

mod tags;
mod types;

// re-export commonly used types
pub use coordinates::EventCoordinates;
pub use event::Event;
pub use event_template::EventTemplate;
pub use follow_list::{FollowList, RelayPermissions};
pub use keys::{PubKey, SecretKey};
pub use metadata::Metadata;
pub use rsvp::{CalendarEventRsvp, RsvpFreebusy, RsvpStatus};
pub use tags::{Tag, Tags};
pub use timestamp::Timestamp;
pub use types::*;
