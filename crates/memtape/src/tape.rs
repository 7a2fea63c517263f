//! Render-input model: tapes, regions with bars, fields and cell content.
//!
//! These are the shapes handed to [`crate::render::render`]. The stream
//! parser produces the structural skeleton ([`crate::region`]); a consumer
//! decides captions and cell content, optionally starting from the `From`
//! bridges below. Content is a tagged variant resolved at construction, not
//! re-inspected per render call.

/// Root or nested unit of visualization: a plain text caption used for
/// leaf/placeholder nodes, or a structured tape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapeNode {
    Text(String),
    Tape(Tape),
}

/// A set of regions rendered side by side, plus optional child tapes
/// rendered indented beneath at their own zoom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tape {
    pub regions: Vec<TapeRegion>,
    /// Pixels per byte; [`crate::layout::DEFAULT_ZOOM`] when unset.
    pub zoom: Option<u64>,
    pub children: Vec<TapeNode>,
}

/// One region block of a tape: an address caption, its gap-filled field row,
/// an address-aligned bar row and a free-text description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapeRegion {
    pub addr: u64,
    pub size: u64,
    pub description: String,
    pub fields: Vec<TapeField>,
    pub bars: Vec<Bar>,
}

/// A field cell: an extent plus the content drawn inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapeField {
    /// Absolute start address.
    pub addr: u64,
    /// Size in bytes.
    pub size: u64,
    /// Caption drawn in a strip below the cell. Blank or whitespace-only
    /// names render as a non-breaking blank rather than collapsing.
    pub name: Option<String>,
    pub content: FieldContent,
    /// Host-side click handler key recorded on the rendered cell. The core
    /// never invokes it; wiring the actual listener is the host's job.
    pub on_click: Option<String>,
}

/// Cell content: a single text value, or an ordered row of sub-fields.
///
/// Sub-fields are one level deep. A sub-field whose own content is again a
/// sub-field row is rejected at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldContent {
    Text(String),
    Fields(Vec<TapeField>),
}

/// An annotation strip drawn beneath a region, aligned to address space and
/// independent of the field layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub addr: u64,
    pub size: u64,
    /// Explicit CSS color; the stylesheet default when unset.
    pub color: Option<String>,
}

impl From<&crate::region::Field> for TapeField {
    /// Structural skeleton only: the field's type label becomes the cell
    /// text and its name the caption.
    fn from(field: &crate::region::Field) -> Self {
        TapeField {
            addr: field.addr,
            size: field.size,
            name: Some(field.name.clone()),
            content: FieldContent::Text(field.ty.clone()),
            on_click: None,
        }
    }
}

impl From<&crate::region::Region> for TapeRegion {
    fn from(region: &crate::region::Region) -> Self {
        TapeRegion {
            addr: region.addr,
            size: region.size,
            description: region.kind.clone(),
            fields: region.fields.iter().map(TapeField::from).collect(),
            bars: Vec::new(),
        }
    }
}

impl Tape {
    /// Wraps decoded regions into a tape with default zoom and no children.
    pub fn from_regions(regions: &[crate::region::Region]) -> Self {
        Tape {
            regions: regions.iter().map(TapeRegion::from).collect(),
            ..Tape::default()
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::TapeNodeDef> for TapeNode {
    fn from(value: crate::serde::TapeNodeDef) -> Self {
        match value {
            crate::serde::TapeNodeDef::Text(text) => TapeNode::Text(text),
            crate::serde::TapeNodeDef::Tape(def) => TapeNode::Tape(def.into()),
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::TapeDef> for Tape {
    fn from(value: crate::serde::TapeDef) -> Self {
        Tape {
            regions: value.regions.into_iter().map(Into::into).collect(),
            zoom: value.zoom,
            children: value.children.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::RegionDef> for TapeRegion {
    fn from(value: crate::serde::RegionDef) -> Self {
        TapeRegion {
            addr: value.addr,
            size: value.size,
            description: value.description,
            fields: value.fields.into_iter().map(Into::into).collect(),
            bars: value.bars.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::FieldDef> for TapeField {
    fn from(value: crate::serde::FieldDef) -> Self {
        TapeField {
            addr: value.addr,
            size: value.size,
            name: value.name,
            content: value.content.into(),
            on_click: value.on_click,
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::ContentDef> for FieldContent {
    fn from(value: crate::serde::ContentDef) -> Self {
        match value {
            crate::serde::ContentDef::Text(text) => FieldContent::Text(text),
            crate::serde::ContentDef::Fields(fields) => {
                FieldContent::Fields(fields.into_iter().map(Into::into).collect())
            }
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::BarDef> for Bar {
    fn from(value: crate::serde::BarDef) -> Self {
        Bar {
            addr: value.addr,
            size: value.size,
            color: value.color,
        }
    }
}
