//! # memtape
//!
//! Decode a compact, tag-delimited binary description of memory layout and
//! render it as a nested, proportionally-scaled tape diagram.
//!
//! A layout stream is a flat sequence of tagged records: regions (a kind
//! label, a base address, a size) containing fields (name, type label,
//! address, size). [`parser::Parser`] decodes a stream into
//! [`region::Region`] records; a consumer wraps those into a [`tape::Tape`]
//! (attaching cell content, bars and child tapes) and [`render::render`]
//! turns the tape into a tree of presentational nodes, synthesizing striped
//! padding for every address gap and scaling extents to pixels at a uniform
//! zoom.
//!
//! ## Example
//!
//! ```
//! use memtape::parser::Parser;
//! use memtape::render::render;
//! use memtape::tape::{Tape, TapeNode};
//!
//! // One region "struct" at 0x1000, 16 bytes, with a single 4-byte field
//! // "x" of type "u32" at 0x1004.
//! let mut buf = vec![1u8];
//! buf.extend(b"struct\0");
//! buf.extend(0x1000u64.to_le_bytes());
//! buf.extend(16u64.to_le_bytes());
//! buf.push(3);
//! buf.extend(b"x\0u32\0");
//! buf.extend(0x1004u64.to_le_bytes());
//! buf.extend(4u64.to_le_bytes());
//! buf.push(2);
//! buf.push(255);
//!
//! let regions = Parser::new(&buf).parse().unwrap();
//! assert_eq!(regions.len(), 1);
//! assert_eq!(regions[0].fields[0].name, "x");
//!
//! let tape = TapeNode::Tape(Tape::from_regions(&regions));
//! let tree = render(&tape).unwrap();
//! assert!(tree.to_string().contains("0x1000"));
//! ```

pub mod cursor;
pub mod dom;
pub mod errors;
pub mod layout;
pub mod parser;
pub mod region;
pub mod render;
#[cfg(feature = "serde")]
pub mod serde;
pub mod tape;
