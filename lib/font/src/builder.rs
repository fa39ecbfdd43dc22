//! Builder that packs pixel matrices into [`FontDescriptor`] tables and writes them out.

use std::{
    error, fmt,
    io::{self, Write},
};

use crate::{
    descriptor::{ABSENT_OFFSET, FontDescriptor, GlyphWidths},
    dump::{FLAG_FIXED_WIDTH, FLAG_OFFSETS},
};

/// The text that must precede the output of [`FontBuilder::write_rust_source`].
pub const RUST_SOURCE_PRELUDE: &str = "\
//! Bitmap font tables generated by `font-converter`.

use font::descriptor::{FontDescriptor, GlyphWidths};
";

/// Builder for a valid [`FontDescriptor`].
///
/// Glyphs are pushed in ascending code order, starting at the first ascii code.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct FontBuilder {
    /// The smallest code of the font.
    first_ascii_code: u8,
    /// The number of bytes in each bitmap row.
    glyph_bytes_width: u8,
    /// The height of each glyph.
    glyph_height: u8,
    /// The width shared by all glyphs, if any.
    fixed_width: Option<u8>,
    /// Whether an offset table is produced.
    sparse: bool,
    /// The number of codes pushed so far.
    glyph_count: u16,
    /// The code of each encoded glyph.
    codes: Vec<u8>,
    /// The advance of each encoded glyph.
    widths: Vec<u8>,
    /// The offset table.
    offsets: Vec<u8>,
    /// The packed bitmaps.
    bitmaps: Vec<u8>,
}

impl FontBuilder {
    /// Creates a new, empty [`FontBuilder`] for a dense font with variable glyph widths.
    pub const fn new(first_ascii_code: u8, glyph_bytes_width: u8, glyph_height: u8) -> Self {
        Self {
            first_ascii_code,
            glyph_bytes_width,
            glyph_height,
            fixed_width: None,
            sparse: false,
            glyph_count: 0,
            codes: Vec::new(),
            widths: Vec::new(),
            offsets: Vec::new(),
            bitmaps: Vec::new(),
        }
    }

    /// Makes every glyph of the font `width` pixels wide.
    pub const fn fixed_width(mut self, width: u8) -> Self {
        self.fixed_width = Some(width);
        self
    }

    /// Makes the font map codes through an offset table, allowing absent glyphs.
    pub const fn sparse(mut self) -> Self {
        self.sparse = true;
        self
    }

    /// Returns the number of codes pushed so far.
    pub const fn glyph_count(&self) -> u16 {
        self.glyph_count
    }

    /// Returns the number of glyphs that have been encoded.
    pub fn encoded_count(&self) -> usize {
        self.codes.len()
    }

    /// Appends a glyph for the next code.
    ///
    /// `pixel` is queried for every (`x`, `y`) position of the glyph cell, including columns past
    /// `width`. For fixed width fonts, `width` is only used to annotate generated source.
    ///
    /// # Errors
    ///
    /// - [`BuildError::TooManyCodes`]: Returned if the next code does not fit into a byte.
    /// - [`BuildError::TooManyGlyphs`]: Returned if the offset table cannot address another
    ///   glyph.
    /// - [`BuildError::WidthTooLarge`]: Returned if `width` does not fit into a bitmap row.
    pub fn push_glyph<F: FnMut(u8, u8) -> bool>(
        &mut self,
        width: u8,
        mut pixel: F,
    ) -> Result<(), BuildError> {
        let code = self.next_code()?;

        let row_bits = usize::from(self.glyph_bytes_width) * 8;
        let checked_width = self.fixed_width.unwrap_or(width);
        if usize::from(checked_width) > row_bits {
            return Err(BuildError::WidthTooLarge {
                width: checked_width,
                row_bits,
            });
        }

        if self.sparse {
            let offset = u8::try_from(self.codes.len())
                .ok()
                .filter(|&offset| offset != ABSENT_OFFSET)
                .ok_or(BuildError::TooManyGlyphs)?;
            self.offsets.push(offset);
        }

        for y in 0..self.glyph_height {
            for byte_index in 0..self.glyph_bytes_width {
                let mut byte = 0;
                for bit in 0..8u8 {
                    // A row never exceeds 255 bytes, but the pixel column might.
                    let Some(x) = byte_index
                        .checked_mul(8)
                        .and_then(|base| base.checked_add(bit))
                    else {
                        break;
                    };

                    if pixel(x, y) {
                        byte |= 0b1000_0000 >> bit;
                    }
                }
                self.bitmaps.push(byte);
            }
        }

        self.codes.push(code);
        self.widths.push(width);
        self.glyph_count += 1;
        Ok(())
    }

    /// Marks the next code as absent from the font.
    ///
    /// # Errors
    ///
    /// - [`BuildError::AbsentInDenseFont`]: Returned if the font is not sparse.
    /// - [`BuildError::TooManyCodes`]: Returned if the next code does not fit into a byte.
    pub fn push_absent(&mut self) -> Result<(), BuildError> {
        if !self.sparse {
            return Err(BuildError::AbsentInDenseFont);
        }

        self.next_code()?;
        self.offsets.push(ABSENT_OFFSET);
        self.glyph_count += 1;
        Ok(())
    }

    /// Returns a [`FontDescriptor`] over the tables built so far.
    pub fn descriptor(&self) -> FontDescriptor<'_> {
        FontDescriptor::new(
            self.first_ascii_code,
            self.glyph_count,
            self.glyph_bytes_width,
            self.glyph_height,
            self.glyph_widths(),
            &self.bitmaps,
            self.sparse.then_some(self.offsets.as_slice()),
        )
    }

    /// Returns the number of bytes used by the tables of the font.
    pub fn table_size(&self) -> usize {
        let widths = match self.fixed_width {
            Some(_) => 0,
            None => self.widths.len(),
        };

        self.bitmaps.len() + widths + self.offsets.len()
    }

    /// Dumps the built [`FontDescriptor`] into the `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if writing fails.
    pub fn dump<W: Write>(&self, mut writer: W) -> io::Result<()> {
        let encoded_count = u16::try_from(self.codes.len())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, BuildError::TooManyGlyphs))?;
        let mut flags = 0;
        if self.sparse {
            flags |= FLAG_OFFSETS;
        }
        if self.fixed_width.is_some() {
            flags |= FLAG_FIXED_WIDTH;
        }

        writer.write_all(&[self.first_ascii_code])?;
        writer.write_all(&self.glyph_count.to_le_bytes())?;
        writer.write_all(&[
            self.glyph_bytes_width,
            self.glyph_height,
            self.fixed_width.unwrap_or(0),
            flags,
        ])?;
        writer.write_all(&encoded_count.to_le_bytes())?;

        if self.fixed_width.is_none() {
            writer.write_all(&self.widths)?;
        }
        if self.sparse {
            writer.write_all(&self.offsets)?;
        }
        writer.write_all(&self.bitmaps)
    }

    /// Writes the built font as Rust `static` items named after `name`.
    ///
    /// The output expects the items of [`RUST_SOURCE_PRELUDE`] to be in scope.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if writing fails.
    pub fn write_rust_source<W: Write>(&self, name: &str, mut writer: W) -> io::Result<()> {
        let ident = screaming_snake_case(name);
        let row_bits = usize::from(self.glyph_bytes_width) * 8;
        let row_len = usize::from(self.glyph_bytes_width);

        writeln!(writer)?;
        writeln!(writer, "/// Bitmaps of the `{name}` font.")?;
        writeln!(writer, "#[rustfmt::skip]")?;
        writeln!(
            writer,
            "static {ident}_BITMAPS: [u8; {}] = [",
            self.bitmaps.len()
        )?;

        let stride = (row_len * usize::from(self.glyph_height)).max(1);
        let glyph_bitmaps = self.bitmaps.chunks(stride);
        for ((code, width), bitmap) in self.codes.iter().zip(&self.widths).zip(glyph_bitmaps) {
            writeln!(writer, "    // ASCII: {code}, char width: {width}")?;
            for row in bitmap.chunks(row_len.max(1)) {
                write!(writer, "    ")?;
                for byte in row {
                    write!(writer, "0x{byte:02x}, ")?;
                }

                let art = (0..row_bits)
                    .map(|x| {
                        let set = row[x / 8] & (0b1000_0000 >> (x % 8)) != 0;
                        match set {
                            true => 'O',
                            false if x >= usize::from(*width) => '.',
                            false => '-',
                        }
                    })
                    .collect::<String>();
                writeln!(writer, "// {art}")?;
            }
        }
        writeln!(writer, "];")?;

        let widths = match self.fixed_width {
            Some(width) => format!("GlyphWidths::Fixed({width})"),
            None => {
                writeln!(writer)?;
                writeln!(writer, "/// Glyph widths of the `{name}` font.")?;
                writeln!(writer, "#[rustfmt::skip]")?;
                write_table(&mut writer, &format!("{ident}_WIDTHS"), &self.widths)?;
                format!("GlyphWidths::Variable(&{ident}_WIDTHS)")
            }
        };

        let offsets = if self.sparse {
            writeln!(writer)?;
            writeln!(
                writer,
                "/// Glyph offsets of the `{name}` font, `0xff` marks absent characters."
            )?;
            writeln!(writer, "#[rustfmt::skip]")?;
            write_table(&mut writer, &format!("{ident}_OFFSETS"), &self.offsets)?;
            format!("Some(&{ident}_OFFSETS)")
        } else {
            String::from("None")
        };

        writeln!(writer)?;
        writeln!(writer, "/// The `{name}` font.")?;
        writeln!(
            writer,
            "pub static {ident}: FontDescriptor<'static> = FontDescriptor::new("
        )?;
        writeln!(writer, "    {}, // First ascii code", self.first_ascii_code)?;
        writeln!(writer, "    {}, // Glyph count", self.glyph_count)?;
        writeln!(writer, "    {}, // Glyph width (bytes)", self.glyph_bytes_width)?;
        writeln!(writer, "    {}, // Glyph height (pixels)", self.glyph_height)?;
        writeln!(writer, "    {widths},")?;
        writeln!(writer, "    &{ident}_BITMAPS,")?;
        writeln!(writer, "    {offsets},")?;
        writeln!(writer, ");")
    }

    /// Returns the [`GlyphWidths`] of the font.
    fn glyph_widths(&self) -> GlyphWidths<'_> {
        match self.fixed_width {
            Some(width) => GlyphWidths::Fixed(width),
            None => GlyphWidths::Variable(&self.widths),
        }
    }

    /// Returns the code that the next pushed glyph describes.
    fn next_code(&self) -> Result<u8, BuildError> {
        u8::try_from(usize::from(self.first_ascii_code) + usize::from(self.glyph_count))
            .map_err(|_| BuildError::TooManyCodes)
    }
}

/// Writes `values` as a `static` byte array called `ident`, eight values per line.
fn write_table<W: Write>(writer: &mut W, ident: &str, values: &[u8]) -> io::Result<()> {
    writeln!(writer, "static {ident}: [u8; {}] = [", values.len())?;
    for line in values.chunks(8) {
        write!(writer, "   ")?;
        for value in line {
            match *value {
                ABSENT_OFFSET => write!(writer, " 0xff,")?,
                value => write!(writer, " {value:>3},")?,
            }
        }
        writeln!(writer)?;
    }
    writeln!(writer, "];")
}

/// Converts a font name such as `LiberationSans` into `LIBERATION_SANS`.
fn screaming_snake_case(name: &str) -> String {
    let mut ident = String::with_capacity(name.len() + 4);
    let mut previous_lower = false;

    for c in name.chars() {
        if c.is_ascii_uppercase() && previous_lower {
            ident.push('_');
        }

        if c.is_ascii_alphanumeric() {
            ident.push(c.to_ascii_uppercase());
        } else {
            ident.push('_');
        }
        previous_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
    }

    if ident.starts_with(|c: char| c.is_ascii_digit()) || ident.is_empty() {
        ident.insert(0, '_');
    }

    ident
}

/// Various errors that can occur while building a font.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum BuildError {
    /// The font would cover codes past 255.
    TooManyCodes,
    /// A sparse font cannot encode more than 255 glyphs.
    TooManyGlyphs,
    /// A glyph is wider than a bitmap row.
    WidthTooLarge {
        /// The width of the glyph.
        width: u8,
        /// The number of pixels in a bitmap row.
        row_bits: usize,
    },
    /// Only sparse fonts may leave codes absent.
    AbsentInDenseFont,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyCodes => write!(f, "font covers codes past 255"),
            Self::TooManyGlyphs => write!(f, "sparse fonts hold at most 255 glyphs"),
            Self::WidthTooLarge { width, row_bits } => write!(
                f,
                "glyph width of {width} pixels exceeds the row width of {row_bits} pixels"
            ),
            Self::AbsentInDenseFont => write!(f, "dense fonts must encode every character"),
        }
    }
}

impl error::Error for BuildError {}

#[cfg(test)]
mod test {
    use super::{BuildError, FontBuilder, screaming_snake_case};
    use crate::descriptor::{ABSENT_OFFSET, FontDescriptor, GlyphWidths};

    /// Draws a 3 by 2 `A`-like shape and a 2 by 2 checker.
    fn two_glyph_font() -> FontBuilder {
        let mut builder = FontBuilder::new(b'A', 1, 2);
        builder
            .push_glyph(3, |x, y| matches!((x, y), (0, 0) | (2, 0) | (1, 1)))
            .unwrap();
        builder.push_glyph(2, |x, y| x == y && x < 2).unwrap();
        builder
    }

    #[test]
    fn packs_most_significant_bit_first() {
        let builder = two_glyph_font();
        let font = builder.descriptor();

        assert_eq!(font.validate(), Ok(()));
        assert_eq!(font.bitmaps(), [0b1010_0000, 0b0100_0000, 0b1000_0000, 0b0100_0000]);
        assert_eq!(font.widths(), GlyphWidths::Variable(&[3, 2]));
    }

    #[test]
    fn packing_inverts_rasterizing() {
        let pattern = |x: u8, y: u8| (x * 7 + y * 3) % 5 < 2;

        let mut builder = FontBuilder::new(b'0', 2, 4);
        builder.push_glyph(13, pattern).unwrap();

        let glyph = builder.descriptor().lookup('0').unwrap();
        for (y, row) in (0..).zip(glyph.rows()) {
            for (x, pixel) in (0..).zip(row) {
                assert_eq!(pixel, pattern(x, y));
            }
        }

        let mut repacked = FontBuilder::new(b'0', 2, 4);
        repacked
            .push_glyph(13, |x, y| glyph.pixel(x, y).unwrap_or(false))
            .unwrap();
        // Columns past the width are padding and are not reproduced.
        let mask = [0xFF, 0b1111_1000];
        for (index, (a, b)) in builder
            .descriptor()
            .bitmaps()
            .iter()
            .zip(repacked.descriptor().bitmaps())
            .enumerate()
        {
            assert_eq!(a & mask[index % 2], *b);
        }
    }

    #[test]
    fn sparse_fonts_record_offsets() {
        let mut builder = FontBuilder::new(b'x', 1, 1).sparse().fixed_width(4);
        builder.push_absent().unwrap();
        builder.push_glyph(4, |x, _| x == 0).unwrap();
        builder.push_absent().unwrap();

        let font = builder.descriptor();
        assert_eq!(font.validate(), Ok(()));
        assert_eq!(font.offsets(), Some(&[ABSENT_OFFSET, 0, ABSENT_OFFSET][..]));
        assert_eq!(font.glyph_count(), 3);
        assert!(font.lookup('x').is_err());
        assert_eq!(font.lookup('y').unwrap().bitmap(), [0b1000_0000]);
        assert_eq!(builder.table_size(), 4);
    }

    #[test]
    fn dump_loads_back() {
        let mut builder = FontBuilder::new(b'a', 1, 2).sparse();
        builder.push_glyph(5, |x, y| x == y).unwrap();
        builder.push_absent().unwrap();
        builder.push_glyph(8, |_, y| y == 1).unwrap();

        let mut dump = Vec::new();
        builder.dump(&mut dump).unwrap();

        let loaded = FontDescriptor::from_dump(&dump).unwrap();
        assert_eq!(loaded, builder.descriptor());
    }

    #[test]
    fn zero_fixed_width_dump_loads_back() {
        let mut builder = FontBuilder::new(b'A', 1, 1).fixed_width(0);
        builder.push_glyph(0, |_, _| true).unwrap();

        let mut dump = Vec::new();
        builder.dump(&mut dump).unwrap();

        let loaded = FontDescriptor::from_dump(&dump).unwrap();
        assert_eq!(loaded.widths(), GlyphWidths::Fixed(0));
        assert_eq!(loaded, builder.descriptor());
    }

    #[test]
    fn build_errors() {
        let mut dense = FontBuilder::new(b'A', 1, 1);
        assert_eq!(dense.push_absent(), Err(BuildError::AbsentInDenseFont));
        assert_eq!(
            dense.push_glyph(9, |_, _| false),
            Err(BuildError::WidthTooLarge {
                width: 9,
                row_bits: 8
            })
        );

        let mut last = FontBuilder::new(255, 1, 1);
        last.push_glyph(1, |_, _| true).unwrap();
        assert_eq!(last.push_glyph(1, |_, _| true), Err(BuildError::TooManyCodes));

        let mut sparse = FontBuilder::new(0, 1, 1).sparse();
        for _ in 0..255 {
            sparse.push_glyph(1, |_, _| true).unwrap();
        }
        assert_eq!(sparse.push_glyph(1, |_, _| true), Err(BuildError::TooManyGlyphs));
        assert_eq!(sparse.encoded_count(), 255);
    }

    #[test]
    fn rust_source() {
        let builder = two_glyph_font();
        let mut source = Vec::new();
        builder.write_rust_source("TinyFont", &mut source).unwrap();
        let source = String::from_utf8(source).unwrap();

        assert!(source.contains("static TINY_FONT_BITMAPS: [u8; 4] = ["));
        assert!(source.contains("    // ASCII: 65, char width: 3\n"));
        assert!(source.contains("    0xa0, // O-O.....\n"));
        assert!(source.contains("    0x40, // -O......\n"));
        assert!(source.contains("static TINY_FONT_WIDTHS: [u8; 2] = [\n      3,   2,\n];"));
        assert!(source.contains("pub static TINY_FONT: FontDescriptor<'static>"));
        assert!(source.contains("    GlyphWidths::Variable(&TINY_FONT_WIDTHS),\n"));
        assert!(source.contains("    None,\n);"));
    }

    #[test]
    fn identifiers() {
        assert_eq!(screaming_snake_case("Liberation"), "LIBERATION");
        assert_eq!(screaming_snake_case("LiberationSans12"), "LIBERATION_SANS12");
        assert_eq!(screaming_snake_case("dejavu-mono"), "DEJAVU_MONO");
        assert_eq!(screaming_snake_case("8bit"), "_8BIT");
    }
}
