//! portable-json — a JSON document model that behaves identically across
//! heterogeneous hosts.
//!
//! The model is a tagged value ([`PortableJson`]) with typed accessors that
//! fail instead of coercing, a byte-level parser ([`parse`]), and a
//! deterministic writer ([`stringify`]). Objects keep insertion order for
//! iteration and serialization; equality is structural and key-order
//! insensitive, so independently parsed documents with the same content
//! compare equal.
//!
//! # Example
//!
//! ```
//! use portable_json::{parse, stringify, PortableJson};
//!
//! let v = parse(r#"{"data": {"template": "Hello", "count": 2}}"#).unwrap();
//! let data = v.get_object("data").unwrap();
//! assert_eq!(data.get_string("template").unwrap(), "Hello");
//! assert_eq!(data.get_int("count").unwrap(), 2);
//!
//! // Round-trip is structural: parse(stringify(v)) == v.
//! assert_eq!(parse(&stringify(&v)).unwrap(), v);
//! ```

pub mod error;
pub mod parser;
pub mod value;
pub mod writer;

pub use error::{AccessError, ParseError};
pub use parser::parse;
pub use value::{JsonKind, PortableJson};
pub use writer::stringify;
