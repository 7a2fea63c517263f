//! JSON-deserializable tape definitions.
//!
//! These types describe the *shape* of a tape to be rendered. They are
//! intended to be constructed from JSON (for example a definition handed
//! across the wasm boundary) and then converted into core tape types via the
//! `From` impls beside those types.

use serde::{Deserialize, Serialize};

/// Either a plain text caption or a structured tape.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(untagged)]
pub enum TapeNodeDef {
    /// Leaf/placeholder caption.
    Text(String),
    /// Structured tape.
    Tape(TapeDef),
}

/// Top-level tape definition.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TapeDef {
    /// Regions rendered side by side, in order.
    pub regions: Vec<RegionDef>,
    /// Pixels per byte; the renderer default when omitted.
    #[serde(default)]
    pub zoom: Option<u64>,
    /// Nested tapes rendered indented beneath this one.
    #[serde(default)]
    pub children: Vec<TapeNodeDef>,
}

/// One region block of a tape.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RegionDef {
    /// Base address.
    pub addr: u64,
    /// Extent in bytes.
    pub size: u64,
    /// Free text drawn beneath the region's bars.
    #[serde(default)]
    pub description: String,
    /// Declared fields, ascending by address.
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    /// Annotation bars beneath the field row.
    #[serde(default)]
    pub bars: Vec<BarDef>,
}

/// A field cell.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FieldDef {
    pub addr: u64,
    pub size: u64,
    /// Caption drawn beneath the cell.
    #[serde(default)]
    pub name: Option<String>,
    pub content: ContentDef,
    /// Host-side click handler key.
    #[serde(default)]
    pub on_click: Option<String>,
}

/// Cell content: a single text value, or one level of sub-fields.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(untagged)]
pub enum ContentDef {
    Text(String),
    Fields(Vec<FieldDef>),
}

/// An annotation bar.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BarDef {
    pub addr: u64,
    pub size: u64,
    /// Explicit CSS color.
    #[serde(default)]
    pub color: Option<String>,
}
