#![deny(missing_docs, missing_debug_implementations)]

//! An implementation of the UBJSON (Draft-10) binary format.
//!
//! The crate is built around three pieces:
//!
//! - [`Value`], a dynamically-typed tree covering nulls, booleans,
//!   characters, signed/unsigned integers, floats, strings, binary blobs,
//!   arrays and keyed objects,
//! - [`Reader`], a streaming parser that turns bytes into a [`Value`]
//!   while enforcing a [`ReaderPolicy`] of size and depth limits,
//! - [`Writer`], an encoder that emits a [`Value`] using the narrowest
//!   marker that holds each number losslessly.
//!
//! # Reading and writing values
//!
//! The convenience functions [`to_vec`], [`from_slice`] and
//! [`from_reader`] cover the common cases:
//!
//! ```rust
//! use ubjson::{from_slice, to_vec, Value};
//!
//! let mut v = Value::Null;
//! v["name"] = Value::from("Ibrahim");
//! v["faves"] = Value::from([Value::from(453), Value::from('@')]);
//!
//! let bytes = to_vec(&v).unwrap();
//! assert_eq!(from_slice(&bytes).unwrap(), v);
//! ```
//!
//! For streams, wrap the byte source in a [`read::IoReader`] and drive a
//! [`Reader`] directly; its policy bounds memory and recursion on
//! untrusted input:
//!
//! ```rust
//! use ubjson::{read::SliceReader, Reader, ReaderPolicy};
//!
//! let policy = ReaderPolicy {
//!     max_value_depth: 8,
//!     ..Default::default()
//! };
//! let input = [b'[', b'i', 0x01, b']'];
//! let mut reader = Reader::with_policy(SliceReader::new(&input), policy);
//! let value = reader.read_next().unwrap();
//! assert_eq!(value.size(), 1);
//! ```
//!
//! # Building trees
//!
//! Indexing a Null value with a key promotes it to an object, and
//! [`Value::push`] promotes it to an array, so trees can be grown without
//! declaring their shape first:
//!
//! ```rust
//! use ubjson::Value;
//!
//! let mut ha = Value::Null;
//! ha["sani"] = Value::from("Mark");
//! ha["kabir"] = Value::from(4546.34);
//!
//! for child in &ha {
//!     let _ = child.as_f64();
//! }
//! println!("{:#}", ha);
//! ```
//!
//! # Interop
//!
//! [`Value`] implements `serde::Serialize` and `serde::Deserialize`, so a
//! tree can cross into any self-describing serde format. The `json`
//! feature adds direct conversions to and from `serde_json::Value`.

// Public mods
pub mod error;
pub mod marker;
pub mod read;
pub mod reader;
pub mod value;
pub mod writer;

// Display impls for Value
mod fmt;

pub use error::{Error, ParseError, PolicyViolation};
pub use reader::{from_reader, from_slice, Reader, ReaderPolicy};
pub use value::{Kind, Value};
pub use writer::{to_vec, Writer};
