use std::fmt::{Display, Formatter};

use der_parser::ber::{BerObjectContent, BitStringObject};
use der_parser::der::DerObject;
use num_bigint::BigInt;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Decoded payload of a primitive node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Boolean(bool),
    Integer(BigInt),
    BitString { unused_bits: u8, data: Vec<u8> },
    /// OCTET STRING content, or the raw payload of a type the reader has no
    /// better representation for.
    Bytes(Vec<u8>),
    Null,
    ObjectIdentifier(String),
    Text(String),
    Time(String),
}

impl From<&DerObject<'_>> for Value {
    fn from(object: &DerObject<'_>) -> Self {
        match &object.content {
            BerObjectContent::Boolean(b) => Value::Boolean(*b),
            BerObjectContent::Integer(bytes) => {
                Value::Integer(BigInt::from_signed_bytes_be(bytes))
            }
            BerObjectContent::Enum(n) => Value::Integer(BigInt::from(*n)),
            BerObjectContent::BitString(unused_bits, BitStringObject { data }) => {
                Value::BitString {
                    unused_bits: *unused_bits,
                    data: data.to_vec(),
                }
            }
            BerObjectContent::OctetString(bytes) => Value::Bytes(bytes.to_vec()),
            BerObjectContent::Null => Value::Null,
            BerObjectContent::OID(oid) | BerObjectContent::RelativeOID(oid) => {
                Value::ObjectIdentifier(oid.to_id_string())
            }
            BerObjectContent::UTCTime(time) | BerObjectContent::GeneralizedTime(time) => {
                Value::Time(time.to_string())
            }
            BerObjectContent::Unknown(any) => Value::Bytes(any.data.to_vec()),
            // Only string types are left: parse_der never yields EndOfContent,
            // Optional or Tagged. Strings without a UTF-8 view (T61String,
            // UniversalString, ...) keep their raw payload.
            _ => match object.as_str() {
                Ok(s) => Value::Text(s.to_string()),
                Err(_) => Value::Bytes(object.as_slice().map(<[u8]>::to_vec).unwrap_or_default()),
            },
        }
    }
}

fn hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{:02x}", b)).collect()
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::BitString { unused_bits, data } => {
                write!(f, "0x{}", hex(data))?;
                if *unused_bits != 0 {
                    write!(f, " ({} unused bits)", unused_bits)?;
                }
                Ok(())
            }
            Value::Bytes(data) => write!(f, "0x{}", hex(data)),
            Value::Null => write!(f, "NULL"),
            Value::ObjectIdentifier(oid) => write!(f, "{}", oid),
            Value::Text(s) => write!(f, "'{}'", s),
            Value::Time(t) => write!(f, "{}", t),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Boolean(b) => serializer.serialize_bool(*b),
            // Integers can be arbitrarily large (RSA moduli), keep them as decimal strings.
            Value::Integer(n) => serializer.serialize_str(&n.to_string()),
            Value::BitString { unused_bits, data } => {
                let mut state = serializer.serialize_struct("BitString", 2)?;
                state.serialize_field("unused_bits", unused_bits)?;
                state.serialize_field("bits", &hex(data))?;
                state.end()
            }
            Value::Bytes(data) => serializer.serialize_str(&hex(data)),
            Value::Null => serializer.serialize_unit(),
            Value::ObjectIdentifier(s) | Value::Text(s) | Value::Time(s) => {
                serializer.serialize_str(s)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use rstest::rstest;

    use crate::Value;

    #[rstest(
        value,
        expected,
        case(Value::Boolean(true), "true"),
        case(Value::Integer(BigInt::from(42)), "42"),
        case(Value::Integer(BigInt::from(-129)), "-129"),
        case(Value::BitString { unused_bits: 0, data: vec![0x04, 0x05] }, "0x0405"),
        case(Value::BitString { unused_bits: 6, data: vec![0x80] }, "0x80 (6 unused bits)"),
        case(Value::Bytes(vec![0xde, 0xad, 0xbe, 0xef]), "0xdeadbeef"),
        case(Value::Null, "NULL"),
        case(Value::ObjectIdentifier("1.2.840.10045.3.1.7".to_string()), "1.2.840.10045.3.1.7"),
        case(Value::Text("hi".to_string()), "'hi'")
    )]
    fn test_display(value: Value, expected: &str) {
        assert_eq!(expected, value.to_string());
    }

    #[rstest(
        value,
        expected,
        case(Value::Boolean(false), "false"),
        case(Value::Integer(BigInt::from(42)), "\"42\""),
        case(Value::Bytes(vec![0x01, 0x02]), "\"0102\""),
        case(Value::Null, "null"),
        case(Value::BitString { unused_bits: 0, data: vec![0xff] }, r#"{"unused_bits":0,"bits":"ff"}"#)
    )]
    fn test_serialize_json(value: Value, expected: &str) {
        assert_eq!(expected, serde_json::to_string(&value).unwrap());
    }
}
