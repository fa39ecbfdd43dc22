//! Interface for unpacking the pixels of a single glyph.

/// Stores the on/off layout of a specific glyph in a font.
///
/// Rows are packed most-significant-bit first and each row occupies `bytes_width` bytes. Only the
/// first `width` bits of a row carry pixels; the remaining bits are padding and never read.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Glyph<'data> {
    /// The buffer that contains exactly the rows of this glyph.
    bitmap: &'data [u8],
    /// The width of the glyph in pixels.
    width: u8,
    /// The height of the glyph in pixels.
    height: u8,
    /// The number of bytes used by each row.
    bytes_width: u8,
}

impl<'data> Glyph<'data> {
    /// Creates a new [`Glyph`] over `bitmap`.
    ///
    /// Returns `None` if `bitmap` is not exactly `bytes_width * height` bytes long or if `width`
    /// pixels do not fit into `bytes_width` bytes.
    #[expect(clippy::as_conversions)]
    pub const fn new(bitmap: &'data [u8], width: u8, height: u8, bytes_width: u8) -> Option<Self> {
        let row_bits = bytes_width as usize * 8;
        if width as usize > row_bits {
            return None;
        }

        if bitmap.len() != bytes_width as usize * height as usize {
            return None;
        }

        Some(Self {
            bitmap,
            width,
            height,
            bytes_width,
        })
    }

    /// Returns the width of the [`Glyph`] in pixels.
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Returns the height of the [`Glyph`] in pixels.
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Returns the number of bytes that make up a single row.
    pub const fn bytes_width(&self) -> u8 {
        self.bytes_width
    }

    /// Returns the packed bitmap of the [`Glyph`].
    pub const fn bitmap(&self) -> &'data [u8] {
        self.bitmap
    }

    /// Returns an [`Iterator`] over the rows of the [`Glyph`].
    pub fn rows(&self) -> GlyphRowsIter<'data> {
        self.into_iter()
    }

    /// Returns the value of the pixel at (`x`, `y`), or `None` if the position lies outside of the
    /// [`Glyph`].
    pub fn pixel(&self, x: u8, y: u8) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let row_start = usize::from(y) * usize::from(self.bytes_width);
        let byte = *self.bitmap.get(row_start + usize::from(x / 8))?;
        Some(bit_at(byte, x % 8))
    }
}

impl<'data> IntoIterator for Glyph<'data> {
    type IntoIter = GlyphRowsIter<'data>;
    type Item = GlyphRow<'data>;

    fn into_iter(self) -> Self::IntoIter {
        GlyphRowsIter {
            bitmap: self.bitmap,
            width: self.width,
            height: self.height,
            bytes_width: self.bytes_width,
            index: 0,
        }
    }
}

/// An [`Iterator`] over the rows of a [`Glyph`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GlyphRowsIter<'data> {
    /// The buffer utilized to store the glyph.
    bitmap: &'data [u8],
    /// The width of the glyph.
    width: u8,
    /// The height of the glyph.
    height: u8,
    /// The number of bytes in each row.
    bytes_width: u8,
    /// The index of the row that will be returned next.
    index: u8,
}

impl<'data> Iterator for GlyphRowsIter<'data> {
    type Item = GlyphRow<'data>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.height {
            return None;
        }

        let row_len = usize::from(self.bytes_width);
        let row_start = row_len * usize::from(self.index);
        let bytes = self.bitmap.get(row_start..row_start + row_len)?;

        self.index += 1;
        let row = GlyphRow {
            bytes,
            width: self.width,
        };
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.height.saturating_sub(self.index));
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GlyphRowsIter<'_> {}

/// A row in the [`Glyph`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GlyphRow<'data> {
    /// The bytes of this row, including padding bits.
    bytes: &'data [u8],
    /// The width of the row.
    width: u8,
}

impl<'data> GlyphRow<'data> {
    /// Returns the number of pixels in the [`GlyphRow`].
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Returns the packed bytes of the [`GlyphRow`], padding bits included.
    pub const fn bytes(&self) -> &'data [u8] {
        self.bytes
    }
}

impl<'data> IntoIterator for GlyphRow<'data> {
    type Item = bool;
    type IntoIter = GlyphRowIter<'data>;

    fn into_iter(self) -> Self::IntoIter {
        GlyphRowIter {
            bytes: self.bytes,
            width: self.width,
            index: 0,
        }
    }
}

/// An [`Iterator`] over the pixels in a [`GlyphRow`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GlyphRowIter<'data> {
    /// The bytes of the row being unpacked.
    bytes: &'data [u8],
    /// The width of the row.
    width: u8,
    /// The index of the pixel value to be returned.
    index: u8,
}

impl Iterator for GlyphRowIter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.width {
            return None;
        }

        let byte = *self.bytes.get(usize::from(self.index / 8))?;
        let bit = bit_at(byte, self.index % 8);

        self.index += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.width.saturating_sub(self.index));
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GlyphRowIter<'_> {}

/// Returns the pixel at `bit_index` of `byte`, counting from the most significant bit.
const fn bit_at(byte: u8, bit_index: u8) -> bool {
    (byte >> (7 - bit_index)) & 0b1 == 1
}
