use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IDError {
    #[error("invalid hex encoding")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("invalid ID length: expected 32 bytes, got {0}")]
    InvalidLength(usize),
}

#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("invalid hex encoding")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("invalid signature length: expected 64 bytes, got {0}")]
    InvalidLength(usize),
}

#[derive(Error, Debug)]
pub enum KindError {
    #[error("expected kind {expected}, found {found}")]
    Unexpected { expected: Kind, found: Kind },
}

/// a 32-byte event ID, the sha256 of the event's canonical serialization
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ID(pub [u8; 32]);

impl ID {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, IDError> {
        if hex_str.len() != 64 {
            return Err(IDError::InvalidLength(hex_str.len() / 2));
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(hex_str, &mut bytes)?;
        Ok(Self(bytes))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Serialize for ID {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ID {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ID::from_hex(&s).map_err(Error::custom)
    }
}

impl fmt::Debug for ID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<id:{}>", self.to_hex())
    }
}

impl fmt::Display for ID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// a 64-byte schnorr signature over the event ID
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature(pub [u8; 64]);

impl Signature {
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, SignatureError> {
        if hex_str.len() != 128 {
            return Err(SignatureError::InvalidLength(hex_str.len() / 2));
        }
        let mut bytes = [0u8; 64];
        hex::decode_to_slice(hex_str, &mut bytes)?;
        Ok(Self(bytes))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Signature::from_hex(&s).map_err(Error::custom)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<sig:{}>", self.to_hex())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// event kind number
#[derive(
    Copy, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Kind(pub u16);

impl Kind {
    /// profile metadata
    pub const METADATA: Kind = Kind(0);
    /// follow list
    pub const FOLLOW_LIST: Kind = Kind(3);
    /// date-based calendar event
    pub const DATE_BASED_CALENDAR_EVENT: Kind = Kind(31922);
    /// time-based calendar event
    pub const TIME_BASED_CALENDAR_EVENT: Kind = Kind(31923);
    /// RSVP to a calendar event
    pub const CALENDAR_EVENT_RSVP: Kind = Kind(31925);

    /// check if this kind is regular (1-9999, excluding 0 and 3)
    pub fn is_regular(&self) -> bool {
        self.0 < 10000 && self.0 != 0 && self.0 != 3
    }

    /// check if this kind is replaceable (0, 3, or 10000-19999)
    pub fn is_replaceable(&self) -> bool {
        self.0 == 0 || self.0 == 3 || (10000..20000).contains(&self.0)
    }

    /// check if this kind is ephemeral (20000-29999)
    pub fn is_ephemeral(&self) -> bool {
        (20000..30000).contains(&self.0)
    }

    /// check if this kind is addressable (30000-39999)
    pub fn is_addressable(&self) -> bool {
        (30000..40000).contains(&self.0)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for Kind {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_hex_round_trip() {
        let hex = "6f4607d6a4542a465ffd38b0a99060061bf1e2586af7dd5ab5da28a2e5b4e5bc";
        let id = ID::from_hex(hex).unwrap();
        assert_eq!(id.to_hex(), hex);
        assert_eq!(id, ID::from_bytes(*id.as_bytes()));
    }

    #[test]
    fn test_id_rejects_bad_input() {
        assert!(matches!(ID::from_hex("abcd"), Err(IDError::InvalidLength(_))));
        assert!(matches!(
            ID::from_hex(&"zz".repeat(32)),
            Err(IDError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_signature_hex_round_trip() {
        let hex = "908a15e46fb4d8675bab026fc230a0e3542bfade63da02d542fb78b2a8513fcd0092619a2c8c1221e581946e0191f2af505dfdf8657a414dbca329186f009262";
        let sig = Signature::from_hex(hex).unwrap();
        assert_eq!(sig.to_hex(), hex);
    }

    #[test]
    fn test_signature_rejects_bad_length() {
        assert!(matches!(
            Signature::from_hex(&"ab".repeat(32)),
            Err(SignatureError::InvalidLength(32))
        ));
    }

    #[test]
    fn test_kind_classes() {
        assert!(Kind(1).is_regular());
        assert!(!Kind(0).is_regular());
        assert!(!Kind(3).is_regular());

        assert!(Kind::METADATA.is_replaceable());
        assert!(Kind::FOLLOW_LIST.is_replaceable());
        assert!(Kind(10002).is_replaceable());

        assert!(Kind(22242).is_ephemeral());

        assert!(Kind(30023).is_addressable());
        assert!(Kind::TIME_BASED_CALENDAR_EVENT.is_addressable());
        assert!(Kind::CALENDAR_EVENT_RSVP.is_addressable());
        assert!(!Kind(1).is_addressable());
    }
}
