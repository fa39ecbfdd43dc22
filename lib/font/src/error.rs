//! Errors produced while validating font tables and looking up glyphs.

use core::{error, fmt};

/// Various errors that can occur while looking up a [`Glyph`][g].
///
/// [g]: crate::glyph::Glyph
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum LookupError {
    /// The character lies inside of the font's range, but the font does not encode it.
    GlyphNotFound {
        /// The requested character.
        code: char,
    },
    /// The character lies outside of the range covered by the font.
    CodeOutOfRange {
        /// The requested character.
        code: char,
    },
    /// The font tables do not contain a well-formed glyph for the character.
    MalformedGlyph {
        /// The requested character.
        code: char,
    },
}

impl LookupError {
    /// Returns the character whose lookup failed.
    pub const fn code(&self) -> char {
        match self {
            Self::GlyphNotFound { code }
            | Self::CodeOutOfRange { code }
            | Self::MalformedGlyph { code } => *code,
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GlyphNotFound { code } => write!(
                f,
                "Character with ascii {:x} is not included in the font!",
                u32::from(*code)
            ),
            Self::CodeOutOfRange { code } => write!(
                f,
                "Character with ascii {:x} is outside of the font's range!",
                u32::from(*code)
            ),
            Self::MalformedGlyph { code } => write!(
                f,
                "glyph for character {:x} does not fit the font tables",
                u32::from(*code)
            ),
        }
    }
}

impl error::Error for LookupError {}

/// Inconsistencies between the tables of a [`FontDescriptor`][fd].
///
/// [fd]: crate::descriptor::FontDescriptor
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum FontError {
    /// Glyph cells must be at least a single byte wide and a single pixel tall.
    EmptyGlyphCell,
    /// The covered range extends past the last 8-bit code.
    RangeOverflow {
        /// The first code of the font.
        first_ascii_code: u8,
        /// The number of codes covered by the font.
        glyph_count: u16,
    },
    /// The bitmap table is not a whole number of glyphs.
    BitmapLength {
        /// The length of the bitmap table.
        actual: usize,
        /// The number of bytes occupied by a single glyph.
        stride: usize,
    },
    /// A table does not contain the expected number of entries.
    TableLength {
        /// The name of the offending table.
        table: &'static str,
        /// The actual number of entries.
        actual: usize,
        /// The expected number of entries.
        expected: usize,
    },
    /// A glyph is wider than a bitmap row.
    WidthTooLarge {
        /// The index of the offending glyph.
        index: usize,
        /// The width of the glyph.
        width: u8,
    },
    /// A sparse offset points past the encoded glyphs.
    OffsetOutOfBounds {
        /// The position of the offset in the offset table.
        index: usize,
        /// The offending offset.
        offset: u8,
    },
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGlyphCell => write!(f, "glyph cells must not be empty"),
            Self::RangeOverflow {
                first_ascii_code,
                glyph_count,
            } => write!(
                f,
                "{glyph_count} glyphs starting at {first_ascii_code} exceed the 8-bit code range"
            ),
            Self::BitmapLength { actual, stride } => write!(
                f,
                "bitmap table of {actual} bytes is not a multiple of the {stride} byte glyph size"
            ),
            Self::TableLength {
                table,
                actual,
                expected,
            } => write!(
                f,
                "{table} table has {actual} entries but {expected} were expected"
            ),
            Self::WidthTooLarge { index, width } => {
                write!(f, "glyph {index} is {width} pixels wide, more than a row holds")
            }
            Self::OffsetOutOfBounds { index, offset } => {
                write!(f, "offset {offset} at position {index} does not name a glyph")
            }
        }
    }
}

impl error::Error for FontError {}

/// Various errors that can occur while rendering text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// The font tables are corrupt.
    Lookup(LookupError),
    /// The output stream reported an error.
    Write(fmt::Error),
}

impl From<fmt::Error> for RenderError {
    fn from(value: fmt::Error) -> Self {
        Self::Write(value)
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lookup(error) => write!(f, "error rendering glyph: {error}"),
            Self::Write(error) => write!(f, "error writing output: {error}"),
        }
    }
}

impl error::Error for RenderError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Lookup(error) => Some(error),
            Self::Write(error) => Some(error),
        }
    }
}
