//! Decoded memory layout records produced by the stream parser.

/// A contiguous named memory extent decoded from one start..end block.
///
/// Fields are in ascending, non-overlapping address order, each within
/// `[addr, addr + size)`. Regions are immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Kind label for the region (a struct name, an allocation class, ...).
    pub kind: String,
    /// Base address.
    pub addr: u64,
    /// Extent in bytes.
    pub size: u64,
    /// Declared fields in document order.
    pub fields: Vec<Field>,
}

/// A named sub-range of a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Type label. Opaque to this crate; never interpreted.
    pub ty: String,
    /// Absolute start address.
    pub addr: u64,
    /// Size in bytes.
    pub size: u64,
}
