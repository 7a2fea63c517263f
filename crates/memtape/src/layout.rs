//! Gap filling and the shared byte-to-pixel scale.

use crate::tape::TapeField;

/// Default pixels per byte when a tape does not set its own zoom.
pub const DEFAULT_ZOOM: u64 = 24;

/// Hard cap on any single slot or bar width. A visual clamp so huge extents
/// cannot produce runaway rows; the underlying addresses stay intact.
pub const MAX_SLOT_WIDTH_PX: u64 = 240;

/// Pixel width of `size` bytes at `zoom` pixels per byte, clamped to
/// [`MAX_SLOT_WIDTH_PX`]. Monotonic non-decreasing in `size`.
pub fn width_px(size: u64, zoom: u64) -> u64 {
    size.saturating_mul(zoom).min(MAX_SLOT_WIDTH_PX)
}

/// One entry of a gap-filled field row: a declared field, or a synthetic
/// padding extent. Padding exists only while rendering and is never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<'a> {
    Field(&'a TapeField),
    Padding { addr: u64, size: u64 },
}

impl Slot<'_> {
    pub fn addr(&self) -> u64 {
        match self {
            Slot::Field(field) => field.addr,
            Slot::Padding { addr, .. } => *addr,
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            Slot::Field(field) => field.size,
            Slot::Padding { size, .. } => *size,
        }
    }
}

/// Tiles `[base_addr, base_addr + size)` with `fields` plus synthetic padding
/// for every gap, including a leading and a trailing one.
///
/// Fields are taken in input order, assumed ascending and non-overlapping;
/// they are not re-sorted. The result covers the extent exactly, with no gaps
/// and no overlaps, and keeps every declared field.
pub fn pad<'a>(base_addr: u64, size: u64, fields: &'a [TapeField]) -> Vec<Slot<'a>> {
    let mut slots = Vec::with_capacity(fields.len() * 2 + 1);
    let mut last_addr = base_addr;
    for field in fields {
        if last_addr < field.addr {
            slots.push(Slot::Padding {
                addr: last_addr,
                size: field.addr - last_addr,
            });
        }
        slots.push(Slot::Field(field));
        last_addr = field.addr.saturating_add(field.size);
    }
    let end = base_addr.saturating_add(size);
    if last_addr < end {
        slots.push(Slot::Padding {
            addr: last_addr,
            size: end - last_addr,
        });
    }
    slots
}
