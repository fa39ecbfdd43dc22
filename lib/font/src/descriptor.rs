//! Interface for describing a bitmap font and locating its glyphs.

use crate::{
    error::{FontError, LookupError},
    glyph::Glyph,
};

/// The offset value that marks a character as absent from a sparse font.
pub const ABSENT_OFFSET: u8 = 0xFF;

/// The pixel widths of the glyphs in a [`FontDescriptor`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum GlyphWidths<'data> {
    /// Every encoded glyph has its own width.
    Variable(&'data [u8]),
    /// All glyphs share the same width.
    Fixed(u8),
}

/// The location of a character's glyph within a [`FontDescriptor`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum GlyphSlot {
    /// The glyph is encoded at the given index.
    Present(usize),
    /// The character lies within the font's range, but no glyph is encoded for it.
    Absent,
}

/// Immutable tables that describe a fixed-height bitmap font.
///
/// The font covers the codes `first_ascii_code..first_ascii_code + glyph_count`. Dense fonts
/// encode a glyph for every covered code, while sparse fonts map each covered code through an
/// offset table that may mark the code as absent with [`ABSENT_OFFSET`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct FontDescriptor<'data> {
    /// The smallest code present in the font.
    first_ascii_code: u8,
    /// The number of codes covered by the font.
    glyph_count: u16,
    /// The number of bytes in each bitmap row.
    glyph_bytes_width: u8,
    /// The height of every glyph in pixels.
    glyph_height: u8,
    /// The width of each encoded glyph.
    widths: GlyphWidths<'data>,
    /// The packed bitmaps of every encoded glyph.
    bitmaps: &'data [u8],
    /// The map from covered codes to encoded glyphs of a sparse font.
    offsets: Option<&'data [u8]>,
}

impl<'data> FontDescriptor<'data> {
    /// Creates a new [`FontDescriptor`] from its tables.
    ///
    /// The tables are not checked; see [`FontDescriptor::validate`].
    pub const fn new(
        first_ascii_code: u8,
        glyph_count: u16,
        glyph_bytes_width: u8,
        glyph_height: u8,
        widths: GlyphWidths<'data>,
        bitmaps: &'data [u8],
        offsets: Option<&'data [u8]>,
    ) -> Self {
        Self {
            first_ascii_code,
            glyph_count,
            glyph_bytes_width,
            glyph_height,
            widths,
            bitmaps,
            offsets,
        }
    }

    /// Returns the smallest code present in the font.
    pub const fn first_ascii_code(&self) -> u8 {
        self.first_ascii_code
    }

    /// Returns the number of codes covered by the font.
    pub const fn glyph_count(&self) -> u16 {
        self.glyph_count
    }

    /// Returns the number of bytes in each bitmap row.
    pub const fn glyph_bytes_width(&self) -> u8 {
        self.glyph_bytes_width
    }

    /// Returns the height shared by every glyph.
    pub const fn glyph_height(&self) -> u8 {
        self.glyph_height
    }

    /// Returns the widths of the encoded glyphs.
    pub const fn widths(&self) -> GlyphWidths<'data> {
        self.widths
    }

    /// Returns the packed bitmaps of the encoded glyphs.
    pub const fn bitmaps(&self) -> &'data [u8] {
        self.bitmaps
    }

    /// Returns the offset table of a sparse font.
    pub const fn offsets(&self) -> Option<&'data [u8]> {
        self.offsets
    }

    /// Returns `true` if characters are mapped through an offset table.
    pub const fn is_sparse(&self) -> bool {
        self.offsets.is_some()
    }

    /// Returns the number of bytes occupied by a single glyph.
    #[expect(clippy::as_conversions)]
    pub const fn glyph_stride(&self) -> usize {
        self.glyph_bytes_width as usize * self.glyph_height as usize
    }

    /// Returns the number of glyphs stored in the bitmap table.
    pub const fn encoded_count(&self) -> usize {
        match self.glyph_stride() {
            0 => 0,
            stride => self.bitmaps.len() / stride,
        }
    }

    /// Returns the width of the encoded glyph at `index`.
    pub fn glyph_width(&self, index: usize) -> Option<u8> {
        match self.widths {
            GlyphWidths::Variable(widths) => widths.get(index).copied(),
            GlyphWidths::Fixed(width) => (index < self.encoded_count()).then_some(width),
        }
    }

    /// Returns an [`Iterator`] over every code covered by the font, in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = char> + use<'data> {
        let first = u32::from(self.first_ascii_code);
        (0..u32::from(self.glyph_count)).filter_map(move |offset| char::from_u32(first + offset))
    }

    /// Returns `true` if `code` lies within the range covered by the font.
    pub fn covers(&self, code: char) -> bool {
        self.raw_index(code).is_some()
    }

    /// Returns the [`GlyphSlot`] of `code`.
    ///
    /// # Errors
    ///
    /// - [`LookupError::CodeOutOfRange`]: Returned if `code` is not covered by the font.
    /// - [`LookupError::MalformedGlyph`]: Returned if the offset table is too short.
    pub fn slot(&self, code: char) -> Result<GlyphSlot, LookupError> {
        let raw_index = self
            .raw_index(code)
            .ok_or(LookupError::CodeOutOfRange { code })?;

        let Some(offsets) = self.offsets else {
            return Ok(GlyphSlot::Present(raw_index));
        };

        match offsets.get(raw_index) {
            Some(&ABSENT_OFFSET) => Ok(GlyphSlot::Absent),
            Some(&offset) => Ok(GlyphSlot::Present(usize::from(offset))),
            None => Err(LookupError::MalformedGlyph { code }),
        }
    }

    /// Locates the [`Glyph`] used to draw `code`.
    ///
    /// # Errors
    ///
    /// - [`LookupError::CodeOutOfRange`]: Returned if `code` is not covered by the font.
    /// - [`LookupError::GlyphNotFound`]: Returned if a sparse font marks `code` as absent. The
    ///   bitmap table is not accessed in this case.
    /// - [`LookupError::MalformedGlyph`]: Returned if the tables do not hold a complete glyph.
    pub fn lookup(&self, code: char) -> Result<Glyph<'data>, LookupError> {
        let index = match self.slot(code)? {
            GlyphSlot::Present(index) => index,
            GlyphSlot::Absent => return Err(LookupError::GlyphNotFound { code }),
        };

        let malformed = LookupError::MalformedGlyph { code };
        let width = self.glyph_width(index).ok_or(malformed)?;

        let stride = self.glyph_stride();
        let start = index.checked_mul(stride).ok_or(malformed)?;
        let end = start.checked_add(stride).ok_or(malformed)?;
        let bitmap = self.bitmaps.get(start..end).ok_or(malformed)?;

        Glyph::new(bitmap, width, self.glyph_height, self.glyph_bytes_width).ok_or(malformed)
    }

    /// Checks that the tables of the [`FontDescriptor`] are consistent with each other.
    ///
    /// # Errors
    ///
    /// Returns the first [`FontError`] found.
    pub fn validate(&self) -> Result<(), FontError> {
        let stride = self.glyph_stride();
        if stride == 0 {
            return Err(FontError::EmptyGlyphCell);
        }

        if usize::from(self.first_ascii_code) + usize::from(self.glyph_count) > 256 {
            return Err(FontError::RangeOverflow {
                first_ascii_code: self.first_ascii_code,
                glyph_count: self.glyph_count,
            });
        }

        if self.bitmaps.len() % stride != 0 {
            return Err(FontError::BitmapLength {
                actual: self.bitmaps.len(),
                stride,
            });
        }
        let encoded_count = self.encoded_count();

        match self.offsets {
            None if encoded_count != usize::from(self.glyph_count) => {
                return Err(FontError::TableLength {
                    table: "bitmap",
                    actual: encoded_count,
                    expected: usize::from(self.glyph_count),
                });
            }
            None => {}
            Some(offsets) => {
                if offsets.len() != usize::from(self.glyph_count) {
                    return Err(FontError::TableLength {
                        table: "offset",
                        actual: offsets.len(),
                        expected: usize::from(self.glyph_count),
                    });
                }

                let out_of_bounds = offsets.iter().enumerate().find(|&(_, &offset)| {
                    offset != ABSENT_OFFSET && usize::from(offset) >= encoded_count
                });
                if let Some((index, &offset)) = out_of_bounds {
                    return Err(FontError::OffsetOutOfBounds { index, offset });
                }
            }
        }

        let row_bits = usize::from(self.glyph_bytes_width) * 8;
        match self.widths {
            GlyphWidths::Variable(widths) => {
                if widths.len() != encoded_count {
                    return Err(FontError::TableLength {
                        table: "width",
                        actual: widths.len(),
                        expected: encoded_count,
                    });
                }

                let too_wide = widths
                    .iter()
                    .enumerate()
                    .find(|&(_, &width)| usize::from(width) > row_bits);
                if let Some((index, &width)) = too_wide {
                    return Err(FontError::WidthTooLarge { index, width });
                }
            }
            GlyphWidths::Fixed(width) if usize::from(width) > row_bits => {
                return Err(FontError::WidthTooLarge { index: 0, width });
            }
            GlyphWidths::Fixed(_) => {}
        }

        Ok(())
    }

    /// Returns the position of `code` within the covered range.
    fn raw_index(&self, code: char) -> Option<usize> {
        let raw_index = u32::from(code).checked_sub(u32::from(self.first_ascii_code))?;
        if raw_index >= u32::from(self.glyph_count) {
            return None;
        }

        usize::try_from(raw_index).ok()
    }
}

#[cfg(test)]
mod test {
    use super::{ABSENT_OFFSET, FontDescriptor, GlyphSlot, GlyphWidths};
    use crate::error::{FontError, LookupError};

    extern crate std;
    use std::vec::Vec;

    /// A dense font holding `A`, `B` and `C`, 3 pixels wide and 2 pixels tall.
    const DENSE: FontDescriptor<'static> = FontDescriptor::new(
        b'A',
        3,
        1,
        2,
        GlyphWidths::Variable(&[3, 2, 4]),
        &[0b1010_0000, 0b0100_0000, 0b1100_0000, 0b1100_0000, 0xF0, 0x90],
        None,
    );

    /// A sparse font covering `X` through `Z`, encoding only `X` and `Y`.
    const SPARSE: FontDescriptor<'static> = FontDescriptor::new(
        b'X',
        3,
        1,
        1,
        GlyphWidths::Fixed(2),
        &[0b1000_0000, 0b0100_0000],
        Some(&[1, 0, ABSENT_OFFSET]),
    );

    fn pixels(font: &FontDescriptor, code: char) -> Vec<Vec<bool>> {
        font.lookup(code)
            .unwrap()
            .rows()
            .map(|row| row.into_iter().collect())
            .collect()
    }

    #[test]
    fn single_glyph_scenario() {
        let font = FontDescriptor::new(
            b'A',
            1,
            1,
            2,
            GlyphWidths::Variable(&[3]),
            &[0b1010_0000, 0b0100_0000],
            None,
        );

        assert_eq!(font.validate(), Ok(()));
        assert_eq!(pixels(&font, 'A'), [[true, false, true], [false, true, false]]);
    }

    #[test]
    fn dense_rows_match_widths() {
        assert_eq!(DENSE.validate(), Ok(()));

        for (code, width) in DENSE.codes().zip([3, 2, 4]) {
            let rows = pixels(&DENSE, code);
            assert_eq!(rows.len(), usize::from(DENSE.glyph_height()));
            assert!(rows.iter().all(|row| row.len() == width));
        }
    }

    #[test]
    fn dense_out_of_range() {
        assert_eq!(
            DENSE.lookup('@'),
            Err(LookupError::CodeOutOfRange { code: '@' })
        );
        assert_eq!(
            DENSE.lookup('D'),
            Err(LookupError::CodeOutOfRange { code: 'D' })
        );
        assert_eq!(
            DENSE.lookup('\u{1F600}'),
            Err(LookupError::CodeOutOfRange { code: '\u{1F600}' })
        );
        assert!(DENSE.covers('C'));
        assert!(!DENSE.covers('D'));
    }

    #[test]
    fn sparse_lookup_follows_offsets() {
        assert_eq!(SPARSE.validate(), Ok(()));
        assert_eq!(SPARSE.slot('X'), Ok(GlyphSlot::Present(1)));
        assert_eq!(SPARSE.slot('Z'), Ok(GlyphSlot::Absent));

        assert_eq!(pixels(&SPARSE, 'X'), [[false, true]]);
        assert_eq!(pixels(&SPARSE, 'Y'), [[true, false]]);
    }

    #[test]
    fn sparse_absent_glyph() {
        assert_eq!(
            SPARSE.lookup('Z'),
            Err(LookupError::GlyphNotFound { code: 'Z' })
        );
    }

    #[test]
    fn absent_glyph_never_reads_bitmaps() {
        // No bitmap bytes at all: an attempted read would be reported as malformed.
        let font = FontDescriptor::new(
            b'Z',
            1,
            1,
            8,
            GlyphWidths::Variable(&[]),
            &[],
            Some(&[ABSENT_OFFSET]),
        );

        assert_eq!(
            font.lookup('Z'),
            Err(LookupError::GlyphNotFound { code: 'Z' })
        );
    }

    #[test]
    fn truncated_tables_are_malformed() {
        let font = FontDescriptor::new(
            b'A',
            2,
            1,
            2,
            GlyphWidths::Variable(&[3, 3]),
            &[0x00, 0x00, 0x00],
            None,
        );

        assert!(font.lookup('A').is_ok());
        assert_eq!(
            font.lookup('B'),
            Err(LookupError::MalformedGlyph { code: 'B' })
        );
        assert_eq!(
            font.validate(),
            Err(FontError::BitmapLength {
                actual: 3,
                stride: 2
            })
        );
    }

    #[test]
    fn validate_rejects_inconsistent_tables() {
        let no_rows = FontDescriptor::new(b'A', 1, 0, 1, GlyphWidths::Fixed(0), &[], None);
        assert_eq!(no_rows.validate(), Err(FontError::EmptyGlyphCell));

        let overflow = FontDescriptor::new(0xF0, 17, 1, 1, GlyphWidths::Fixed(1), &[0; 17], None);
        assert!(matches!(
            overflow.validate(),
            Err(FontError::RangeOverflow { .. })
        ));

        let widths = FontDescriptor::new(b'A', 1, 1, 1, GlyphWidths::Variable(&[]), &[0], None);
        assert_eq!(
            widths.validate(),
            Err(FontError::TableLength {
                table: "width",
                actual: 0,
                expected: 1
            })
        );

        let too_wide = FontDescriptor::new(b'A', 1, 1, 1, GlyphWidths::Variable(&[9]), &[0], None);
        assert_eq!(
            too_wide.validate(),
            Err(FontError::WidthTooLarge { index: 0, width: 9 })
        );

        let offsets =
            FontDescriptor::new(b'A', 2, 1, 1, GlyphWidths::Fixed(8), &[0], Some(&[0, 1]));
        assert_eq!(
            offsets.validate(),
            Err(FontError::OffsetOutOfBounds {
                index: 1,
                offset: 1
            })
        );
    }

    #[test]
    fn codes_cover_the_range() {
        assert_eq!(DENSE.codes().collect::<Vec<_>>(), ['A', 'B', 'C']);
        assert_eq!(SPARSE.encoded_count(), 2);
        assert_eq!(SPARSE.glyph_width(1), Some(2));
        assert_eq!(SPARSE.glyph_width(2), None);
    }
}
