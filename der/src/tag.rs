use std::fmt::{Display, Formatter};

use asn1_rs::{Class, Header};
use serde::{Serialize, Serializer};

/// Type identifier of a decoded node.
///
/// Universal types the reader can hand out are named. Everything else keeps
/// its class and number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    Boolean,
    Integer,
    BitString,
    OctetString,
    Null,
    ObjectIdentifier,
    Enumerated,
    UTF8String,
    RelativeOid,
    NumericString,
    PrintableString,
    T61String,
    IA5String,
    UTCTime,
    GeneralizedTime,
    VisibleString,
    GeneralString,
    UniversalString,
    BMPString,
    Universal(u32),
    Application(u32),
    ContextSpecific(u32),
    Private(u32),
}

impl Tag {
    fn universal(number: u32) -> Self {
        match number {
            0x01 => Tag::Boolean,
            0x02 => Tag::Integer,
            0x03 => Tag::BitString,
            0x04 => Tag::OctetString,
            0x05 => Tag::Null,
            0x06 => Tag::ObjectIdentifier,
            0x0a => Tag::Enumerated,
            0x0c => Tag::UTF8String,
            0x0d => Tag::RelativeOid,
            0x12 => Tag::NumericString,
            0x13 => Tag::PrintableString,
            0x14 => Tag::T61String,
            0x16 => Tag::IA5String,
            0x17 => Tag::UTCTime,
            0x18 => Tag::GeneralizedTime,
            0x1a => Tag::VisibleString,
            0x1b => Tag::GeneralString,
            0x1c => Tag::UniversalString,
            0x1e => Tag::BMPString,
            n => Tag::Universal(n),
        }
    }
}

impl From<&Header<'_>> for Tag {
    fn from(header: &Header<'_>) -> Self {
        let number = header.tag().0;
        match header.class() {
            Class::Universal => Tag::universal(number),
            Class::Application => Tag::Application(number),
            Class::ContextSpecific => Tag::ContextSpecific(number),
            Class::Private => Tag::Private(number),
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Tag::Boolean => write!(f, "BOOLEAN"),
            Tag::Integer => write!(f, "INTEGER"),
            Tag::BitString => write!(f, "BIT STRING"),
            Tag::OctetString => write!(f, "OCTET STRING"),
            Tag::Null => write!(f, "NULL"),
            Tag::ObjectIdentifier => write!(f, "OBJECT IDENTIFIER"),
            Tag::Enumerated => write!(f, "ENUMERATED"),
            Tag::UTF8String => write!(f, "UTF8String"),
            Tag::RelativeOid => write!(f, "RELATIVE-OID"),
            Tag::NumericString => write!(f, "NumericString"),
            Tag::PrintableString => write!(f, "PrintableString"),
            Tag::T61String => write!(f, "T61String"),
            Tag::IA5String => write!(f, "IA5String"),
            Tag::UTCTime => write!(f, "UTCTime"),
            Tag::GeneralizedTime => write!(f, "GeneralizedTime"),
            Tag::VisibleString => write!(f, "VisibleString"),
            Tag::GeneralString => write!(f, "GeneralString"),
            Tag::UniversalString => write!(f, "UniversalString"),
            Tag::BMPString => write!(f, "BMPString"),
            Tag::Universal(n) => write!(f, "[UNIVERSAL {}]", n),
            Tag::Application(n) => write!(f, "[APPLICATION {}]", n),
            Tag::ContextSpecific(n) => write!(f, "[{}]", n),
            Tag::Private(n) => write!(f, "[PRIVATE {}]", n),
        }
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
