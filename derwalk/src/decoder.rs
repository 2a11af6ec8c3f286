//! Decoder trait for type-safe conversions.
//!
//! A conversion from `T` to `D` is only available when `D` opts in with
//! `DecodableFrom<T>`, so every supported step of the input pipeline is
//! spelled out as an explicit pair of impls:
//!
//! ```no_run
//! use derwalk::decoder::{DecodableFrom, Decoder};
//!
//! struct Armored(String);
//! struct Raw(Vec<u8>);
//!
//! #[derive(Debug)]
//! struct ArmorError;
//!
//! impl DecodableFrom<Armored> for Raw {}
//!
//! impl Decoder<Armored, Raw> for Armored {
//!     type Error = ArmorError;
//!
//!     fn decode(&self) -> Result<Raw, Self::Error> {
//!         Ok(Raw(self.0.as_bytes().to_vec()))
//!     }
//! }
//! ```

/// Converts `self` (of type `T`) into `D`.
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source does not hold a valid encoding of `D`.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
pub trait DecodableFrom<T> {}
