//! Rendering of glyphs onto a character-cell text stream.
//!
//! Every glyph is written as a block of `height` lines, each holding `width` characters. Glyphs are
//! emitted one after another; rows of neighboring characters are not joined.

use core::fmt::Write;

use crate::{
    descriptor::FontDescriptor,
    error::{LookupError, RenderError},
    glyph::Glyph,
};

/// The characters used to draw set and unset pixels.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Palette {
    /// Drawn for set pixels.
    pub on: char,
    /// Drawn for unset pixels.
    pub off: char,
}

impl Palette {
    /// The palette that draws set pixels as `o` and unset pixels as `.`.
    pub const DEFAULT: Self = Self { on: 'o', off: '.' };

    /// Returns the character drawn for a pixel.
    pub const fn pick(&self, pixel: bool) -> char {
        if pixel { self.on } else { self.off }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Tally of the characters processed by [`render_text`].
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct RenderSummary {
    /// The number of characters that were drawn.
    pub rendered: usize,
    /// The number of characters that were skipped because the font lacks them.
    pub skipped: usize,
}

/// Writes every row of `glyph` to `writer`, each row terminated by a newline.
///
/// # Errors
///
/// Returns [`Err`] if `writer` fails.
pub fn render_glyph<W: Write>(glyph: Glyph, palette: Palette, writer: &mut W) -> core::fmt::Result {
    for row in glyph {
        for pixel in row {
            writer.write_char(palette.pick(pixel))?;
        }
        writer.write_char('\n')?;
    }

    Ok(())
}

/// Renders each character of `text` with `font`, in order.
///
/// Characters the font does not provide are reported with a single diagnostic line written to
/// `writer` and skipped.
///
/// # Errors
///
/// - [`RenderError::Lookup`]: Returned if the font tables hold a malformed glyph.
/// - [`RenderError::Write`]: Returned if `writer` fails.
pub fn render_text<W: Write>(
    font: &FontDescriptor,
    text: &str,
    palette: Palette,
    writer: &mut W,
) -> Result<RenderSummary, RenderError> {
    let mut summary = RenderSummary::default();

    for c in text.chars() {
        match font.lookup(c) {
            Ok(glyph) => {
                render_glyph(glyph, palette, writer)?;
                summary.rendered += 1;
            }
            Err(error @ (LookupError::GlyphNotFound { .. } | LookupError::CodeOutOfRange { .. })) => {
                log::warn!("skipping {c:?}: {error}");
                writeln!(writer, "{error}")?;
                summary.skipped += 1;
            }
            Err(error @ LookupError::MalformedGlyph { .. }) => {
                return Err(RenderError::Lookup(error));
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod test {
    use super::{Palette, RenderSummary, render_glyph, render_text};
    use crate::{
        descriptor::{ABSENT_OFFSET, FontDescriptor, GlyphWidths},
        error::{LookupError, RenderError},
        glyph::Glyph,
    };

    extern crate std;
    use std::string::String;

    /// Covers `H` and `I`, drawing both as 3 by 3 glyphs.
    const FONT: FontDescriptor<'static> = FontDescriptor::new(
        b'H',
        2,
        1,
        3,
        GlyphWidths::Fixed(3),
        &[
            0b1010_0000, 0b1110_0000, 0b1010_0000, // H
            0b1110_0000, 0b0100_0000, 0b1110_0000, // I
        ],
        None,
    );

    /// Covers `X` through `Z`, but only encodes `Y`.
    const SPARSE: FontDescriptor<'static> = FontDescriptor::new(
        b'X',
        3,
        1,
        2,
        GlyphWidths::Variable(&[2]),
        &[0b1000_0000, 0b0100_0000],
        Some(&[ABSENT_OFFSET, 0, ABSENT_OFFSET]),
    );

    #[test]
    fn glyph_rows_become_lines() {
        let glyph = Glyph::new(&[0b1010_0000, 0b0100_0000], 3, 2, 1).unwrap();
        let mut output = String::new();

        render_glyph(glyph, Palette::DEFAULT, &mut output).unwrap();
        assert_eq!(output, "o.o\n.o.\n");
    }

    #[test]
    fn glyphs_are_stacked() {
        let mut output = String::new();

        let summary = render_text(&FONT, "HI", Palette::DEFAULT, &mut output).unwrap();
        assert_eq!(output, "o.o\nooo\no.o\nooo\n.o.\nooo\n");
        assert_eq!(
            summary,
            RenderSummary {
                rendered: 2,
                skipped: 0
            }
        );
    }

    #[test]
    fn custom_palette() {
        let mut output = String::new();
        let palette = Palette { on: '#', off: ' ' };

        render_text(&FONT, "I", palette, &mut output).unwrap();
        assert_eq!(output, "###\n # \n###\n");
    }

    #[test]
    fn missing_glyphs_are_reported_and_skipped() {
        let mut output = String::new();

        let summary = render_text(&SPARSE, "ZY", Palette::DEFAULT, &mut output).unwrap();
        assert_eq!(
            output,
            "Character with ascii 5a is not included in the font!\no.\n.o\n"
        );
        assert_eq!(
            summary,
            RenderSummary {
                rendered: 1,
                skipped: 1
            }
        );
    }

    #[test]
    fn out_of_range_characters_are_skipped() {
        let mut output = String::new();

        let summary = render_text(&FONT, "h!I", Palette::DEFAULT, &mut output).unwrap();
        assert_eq!(summary.skipped, 2);
        assert!(output.starts_with("Character with ascii 68 is outside of the font's range!\n"));
        assert!(output.ends_with("ooo\n.o.\nooo\n"));
    }

    #[test]
    fn malformed_glyphs_abort_rendering() {
        let broken = FontDescriptor::new(b'A', 2, 1, 1, GlyphWidths::Fixed(3), &[0x00], None);
        let mut output = String::new();

        assert_eq!(
            render_text(&broken, "AB", Palette::DEFAULT, &mut output),
            Err(RenderError::Lookup(LookupError::MalformedGlyph { code: 'B' }))
        );
        assert_eq!(output, "...\n");
    }

    #[test]
    fn glyphs_wider_than_their_rows_abort_rendering() {
        let too_wide =
            FontDescriptor::new(b'A', 1, 1, 1, GlyphWidths::Variable(&[9]), &[0xFF], None);
        let mut output = String::new();

        assert_eq!(
            render_text(&too_wide, "A", Palette::DEFAULT, &mut output),
            Err(RenderError::Lookup(LookupError::MalformedGlyph { code: 'A' }))
        );
        assert!(output.is_empty());
    }

    #[test]
    fn empty_text_renders_nothing() {
        let mut output = String::new();

        let summary = render_text(&FONT, "", Palette::DEFAULT, &mut output).unwrap();
        assert!(output.is_empty());
        assert_eq!(summary, RenderSummary::default());
    }
}
