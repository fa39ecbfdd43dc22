//! Loading of [`FontDescriptor`]s from dumped blobs.
//!
//! A dump starts with a [`HEADER_SIZE`] byte header (multi-byte fields are little endian):
//!
//! | Offset | Size | Field                                    |
//! |--------|------|------------------------------------------|
//! | 0      | 1    | first ascii code                         |
//! | 1      | 2    | number of covered codes                  |
//! | 3      | 1    | bytes per bitmap row                     |
//! | 4      | 1    | glyph height                             |
//! | 5      | 1    | fixed glyph width ([`FLAG_FIXED_WIDTH`]) |
//! | 6      | 1    | flags                                    |
//! | 7      | 2    | number of encoded glyphs                 |
//!
//! The header is followed by the width table (unless [`FLAG_FIXED_WIDTH`] is set), the offset table
//! (only if [`FLAG_OFFSETS`] is set) and finally the bitmap table.

use core::{error, fmt};

use crate::{
    descriptor::{FontDescriptor, GlyphWidths},
    error::FontError,
};

/// The size of the dump header in bytes.
pub const HEADER_SIZE: usize = 9;

/// Set in the flags byte if the dump contains an offset table.
pub const FLAG_OFFSETS: u8 = 0b01;

/// Set in the flags byte if every glyph has the fixed width stored in the header.
pub const FLAG_FIXED_WIDTH: u8 = 0b10;

/// Every flag known to this version of the format.
const KNOWN_FLAGS: u8 = FLAG_OFFSETS | FLAG_FIXED_WIDTH;

impl<'data> FontDescriptor<'data> {
    /// Creates a new [`FontDescriptor`] from a dumped blob.
    ///
    /// # Errors
    ///
    /// - [`DumpError::TruncatedHeader`]: Returned if `dump` is shorter than the header.
    /// - [`DumpError::UnknownFlags`]: Returned if reserved flag bits are set.
    /// - [`DumpError::TruncatedData`]: Returned if the tables do not fit into `dump`.
    /// - [`DumpError::TrailingData`]: Returned if `dump` holds bytes past the tables.
    /// - [`DumpError::InvalidFont`]: Returned if the tables are inconsistent.
    pub fn from_dump(dump: &'data [u8]) -> Result<Self, DumpError> {
        let Some((header, tables)) = dump.split_first_chunk::<HEADER_SIZE>() else {
            return Err(DumpError::TruncatedHeader {
                actual_size: dump.len(),
            });
        };

        let [
            first_ascii_code,
            count_low,
            count_high,
            glyph_bytes_width,
            glyph_height,
            fixed_width,
            flags,
            encoded_low,
            encoded_high,
        ] = *header;
        let glyph_count = u16::from_le_bytes([count_low, count_high]);
        let encoded_count = usize::from(u16::from_le_bytes([encoded_low, encoded_high]));

        if flags & !KNOWN_FLAGS != 0 {
            return Err(DumpError::UnknownFlags(flags));
        }

        let is_fixed_width = flags & FLAG_FIXED_WIDTH != 0;
        let widths_len = if is_fixed_width { 0 } else { encoded_count };
        let offsets_len = if flags & FLAG_OFFSETS != 0 {
            usize::from(glyph_count)
        } else {
            0
        };
        let bitmaps_len = encoded_count
            * usize::from(glyph_bytes_width)
            * usize::from(glyph_height);

        let expected_size = HEADER_SIZE + widths_len + offsets_len + bitmaps_len;
        if dump.len() < expected_size {
            return Err(DumpError::TruncatedData {
                actual_size: dump.len(),
                expected_size,
            });
        } else if dump.len() > expected_size {
            return Err(DumpError::TrailingData {
                actual_size: dump.len(),
                expected_size,
            });
        }

        let (widths, tables) = tables.split_at(widths_len);
        let (offsets, bitmaps) = tables.split_at(offsets_len);

        let widths = match is_fixed_width {
            true => GlyphWidths::Fixed(fixed_width),
            false => GlyphWidths::Variable(widths),
        };
        let offsets = (flags & FLAG_OFFSETS != 0).then_some(offsets);

        let font = Self::new(
            first_ascii_code,
            glyph_count,
            glyph_bytes_width,
            glyph_height,
            widths,
            bitmaps,
            offsets,
        );
        font.validate().map_err(DumpError::InvalidFont)?;

        Ok(font)
    }
}

/// Various errors that can occur while loading a dumped [`FontDescriptor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DumpError {
    /// The dump is too small to hold the header.
    TruncatedHeader {
        /// The size of the dump.
        actual_size: usize,
    },
    /// The flags byte contains unknown bits.
    UnknownFlags(u8),
    /// The dump is too small to hold the tables announced by the header.
    TruncatedData {
        /// The size of the dump.
        actual_size: usize,
        /// The size announced by the header.
        expected_size: usize,
    },
    /// The dump is larger than the tables announced by the header.
    TrailingData {
        /// The size of the dump.
        actual_size: usize,
        /// The size announced by the header.
        expected_size: usize,
    },
    /// The tables of the dump are inconsistent.
    InvalidFont(FontError),
}

impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedHeader { actual_size } => write!(
                f,
                "header is truncated: expected {HEADER_SIZE} bytes but got {actual_size} bytes"
            ),
            Self::UnknownFlags(flags) => write!(f, "unknown flags: {flags:08b}"),
            Self::TruncatedData {
                actual_size,
                expected_size,
            } => write!(
                f,
                "data is truncated: expected {expected_size} bytes but got {actual_size} bytes"
            ),
            Self::TrailingData {
                actual_size,
                expected_size,
            } => write!(
                f,
                "trailing data: expected {expected_size} bytes but got {actual_size} bytes"
            ),
            Self::InvalidFont(error) => write!(f, "invalid font: {error}"),
        }
    }
}

impl error::Error for DumpError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidFont(error) => Some(error),
            _ => None,
        }
    }
}
