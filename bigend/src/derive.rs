//! Derive macros.
//!
//! **Note:** The macros themselves are not contained in this module; they are at the top level of
//! the crate. This module is used to document them.
//!
//! The `Encode` and `Decode` macros generate implementations of their respective traits for
//! structs holding exactly one field. The generated code delegates to the field's own
//! implementation, so a wrapper encodes and decodes exactly like the integer it wraps:
//!
//! ```
//! use bigend::{Decode, Encode};
//!
//! #[derive(Debug, PartialEq, Encode, Decode)]
//! struct BlockNumber(u64);
//!
//! #[derive(Debug, PartialEq, Encode, Decode)]
//! struct Port {
//!     number: u16,
//! }
//!
//! assert_eq!(BlockNumber(0x0102).encode(), [0, 0, 0, 0, 0, 0, 0x01, 0x02]);
//! assert_eq!(Port::decode(&[0x1f, 0x90]), Port { number: 8080 });
//! ```
//!
//! Tuple structs and structs with a named field are both accepted. Enums, unit structs and
//! structs with more than one field are rejected at compile time, since their byte layout would
//! be ambiguous:
//!
//! ```compile_fail
//! use bigend::Encode;
//!
//! #[derive(Encode)]
//! enum Kind {
//!     A,
//! }
//! ```
//!
//! ```compile_fail
//! use bigend::Decode;
//!
//! #[derive(Decode)]
//! struct Marker;
//! ```
//!
//! ```compile_fail
//! use bigend::{Decode, Encode};
//!
//! #[derive(Encode, Decode)]
//! struct Pair(u8, u16);
//! ```
//!
//! # Attributes
//!
//! Container attributes are applied to the outside of the struct, like
//! `#[bigend(crate_path = "...")]`. All attributes are optional.
//!
//! - **`crate_path`** - Specify a custom path to the `bigend` crate. If you use the `bigend` crate
//! under a different name, this must be set to that path for the `derive` to successfully compile.
//!
//! ```
//! use bigend as codec;
//! use codec::{Decode, Encode};
//!
//! #[derive(Encode, Decode)]
//! #[bigend(crate_path = "codec")]
//! struct Nonce(u32);
//! ```
