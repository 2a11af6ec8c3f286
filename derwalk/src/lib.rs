//! # derwalk
//!
//! Core traits shared by the derwalk crates.
//!
//! The input of the `derwalk` command goes through a short chain of
//! conversions before it reaches the DER node reader:
//! ```text
//! file bytes → (PEM text → Pem →) DER bytes → (Tag, Value) nodes
//! ```
//!
//! Each conversion step that turns one owned representation into another
//! is expressed with the `Decoder` trait defined here, for example:
//!
//! ```ignore
//! use derwalk::decoder::Decoder;
//! use pem::Pem;
//!
//! let pem: Pem = text.parse()?;
//! let der: Vec<u8> = pem.decode()?;
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
