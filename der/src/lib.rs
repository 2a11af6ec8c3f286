//! Node-by-node reader for DER encoded data.
//!
//! The ASN.1 grammar is handled by `der-parser`. This crate walks what it
//! produces and hands out the primitive nodes one at a time as
//! `(Tag, Value)` pairs, in document order:
//!
//! ```ignore
//! let mut state = der::start(&bytes);
//! while let Some(node) = state.read()? {
//!     println!("{} {}", node.tag(), node.value());
//! }
//! ```
//!
//! Constructed nodes (SEQUENCE, SET and constructed tagged nodes) are not
//! returned themselves. The reader enters them and returns their children.

use der_parser::ber::{BerObjectContent, MAX_RECURSION};
use der_parser::der::{DerObject, parse_der};

pub mod error;
mod tag;
mod value;

use error::Error;
pub use tag::Tag;
pub use value::Value;

/// A decoded primitive node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: Tag,
    value: Value,
}

impl Node {
    pub fn new(tag: Tag, value: Value) -> Self {
        Node { tag, value }
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_parts(self) -> (Tag, Value) {
        (self.tag, self.value)
    }
}

impl From<&DerObject<'_>> for Node {
    fn from(object: &DerObject<'_>) -> Self {
        Node {
            tag: Tag::from(&object.header),
            value: Value::from(object),
        }
    }
}

/// Starts reading `input`. Nothing is decoded until the first `read`.
pub fn start(input: &[u8]) -> DecoderState<'_> {
    DecoderState {
        input,
        pending: Vec::new(),
        nested_octets: false,
    }
}

/// Position of a walk over one DER buffer.
#[derive(Debug)]
pub struct DecoderState<'a> {
    // top-level bytes not parsed yet
    input: &'a [u8],
    // children of the constructed nodes currently entered, innermost last
    pending: Vec<std::vec::IntoIter<DerObject<'a>>>,
    nested_octets: bool,
}

impl<'a> DecoderState<'a> {
    /// Enter OCTET STRINGs whose payload is itself complete DER, as PKCS#8
    /// does with the wrapped private key. Payloads that fail to decode, or
    /// that sit `MAX_RECURSION` levels deep, are returned as plain bytes.
    pub fn nested_octets(mut self, enabled: bool) -> Self {
        self.nested_octets = enabled;
        self
    }

    /// Returns the next primitive node, or `None` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is not valid DER. The walk cannot be
    /// resumed after that.
    pub fn read(&mut self) -> Result<Option<Node>, Error> {
        loop {
            let depth = self.pending.len();
            let object = match self.pending.last_mut() {
                Some(children) => match children.next() {
                    Some(object) => object,
                    None => {
                        self.pending.pop();
                        continue;
                    }
                },
                None => {
                    if self.input.is_empty() {
                        log::trace!("end of input");
                        return Ok(None);
                    }
                    let (rest, object) = parse_der(self.input)?;
                    self.input = rest;
                    object
                }
            };

            match object.content {
                BerObjectContent::Sequence(children) | BerObjectContent::Set(children) => {
                    log::trace!("enter {} children at depth {}", children.len(), depth);
                    self.pending.push(children.into_iter());
                }
                BerObjectContent::Unknown(ref any) if any.header.is_constructed() => {
                    let children = parse_all(any.data)?;
                    log::trace!("enter tagged node with {} children", children.len());
                    self.pending.push(children.into_iter());
                }
                BerObjectContent::OctetString(data)
                    if self.nested_octets && depth < MAX_RECURSION && is_der(data) =>
                {
                    log::trace!("enter {} bytes of nested DER", data.len());
                    self.pending.push(parse_all(data)?.into_iter());
                }
                _ => {
                    let node = Node::from(&object);
                    log::trace!("read {} at depth {}", node.tag, depth);
                    return Ok(Some(node));
                }
            }
        }
    }
}

fn parse_all(mut input: &[u8]) -> Result<Vec<DerObject<'_>>, Error> {
    let mut objects = Vec::new();
    while !input.is_empty() {
        let (rest, object) = parse_der(input)?;
        input = rest;
        objects.push(object);
    }
    Ok(objects)
}

fn is_der(data: &[u8]) -> bool {
    if data.is_empty() {
        return false;
    }
    // Deeper OCTET STRINGs are checked when the walk reaches them.
    let mut state = start(data);
    loop {
        match state.read() {
            Ok(Some(_)) => continue,
            Ok(None) => return true,
            Err(_) => return false,
        }
    }
}
