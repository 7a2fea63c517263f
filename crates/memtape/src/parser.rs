//! Tag-delimited layout stream parser.
//!
//! The wire format is a flat stream of tagged records:
//!
//! | Tag | Meaning | Payload |
//! |-----|---------|---------|
//! | 1 | start region | nul-terminated kind, u64 LE addr, u64 LE size |
//! | 3 | field | nul-terminated name, nul-terminated type, u64 LE addr, u64 LE size |
//! | 2 | end region | none |
//! | 255 | end of stream | none |
//!
//! Nesting is exactly two levels: regions at the top, fields inside an open
//! region. Any other byte, or a known tag in the wrong context, aborts the
//! parse with no partial output.

use crate::cursor::Cursor;
use crate::errors::ParseError;
use crate::region::{Field, Region};

/// Opens a region; followed by its kind, address and size.
pub const TAG_START: u8 = 1;
/// Closes the most recently opened region.
pub const TAG_END: u8 = 2;
/// Declares one field inside an open region.
pub const TAG_FIELD: u8 = 3;
/// Terminates the stream; valid only at top level.
pub const TAG_EOF: u8 = 255;

/// Decoder for a complete, in-memory layout stream.
pub struct Parser<'a> {
    cur: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            cur: Cursor::new(buf),
        }
    }

    /// Decodes the whole stream into regions, in document order.
    ///
    /// The entire buffer must be available up front. A region left open when
    /// the buffer ends is an error, never a truncated result; bytes after the
    /// terminating EOF tag are ignored.
    pub fn parse(mut self) -> Result<Vec<Region>, ParseError> {
        let mut regions = Vec::new();
        loop {
            self.cur.assert_in_bounds()?;
            match self.cur.peek_byte()? {
                TAG_EOF => break,
                TAG_START => regions.push(self.parse_region()?),
                tag => {
                    return Err(ParseError::UnexpectedTag {
                        tag,
                        at: self.cur.position(),
                        in_region: false,
                    });
                }
            }
        }
        log::debug!("decoded {} regions", regions.len());
        Ok(regions)
    }

    fn parse_region(&mut self) -> Result<Region, ParseError> {
        self.cur.consume_byte(Some(TAG_START))?;
        let mut region = Region {
            kind: self.cur.consume_string()?,
            addr: self.cur.consume_u64()?,
            size: self.cur.consume_u64()?,
            fields: Vec::new(),
        };
        loop {
            self.cur.assert_in_bounds()?;
            match self.cur.peek_byte()? {
                TAG_FIELD => {
                    self.cur.consume_byte(Some(TAG_FIELD))?;
                    region.fields.push(Field {
                        name: self.cur.consume_string()?,
                        ty: self.cur.consume_string()?,
                        addr: self.cur.consume_u64()?,
                        size: self.cur.consume_u64()?,
                    });
                }
                TAG_END => {
                    self.cur.consume_byte(Some(TAG_END))?;
                    break;
                }
                tag => {
                    return Err(ParseError::UnexpectedTag {
                        tag,
                        at: self.cur.position(),
                        in_region: true,
                    });
                }
            }
        }
        Ok(region)
    }
}
