//! Demonstrations of rendering text onto the terminal with compiled-in bitmap fonts.

use std::io::{self, Write};

use anyhow::{Context, Result};
use font::{
    descriptor::FontDescriptor,
    error::RenderError,
    render::{Palette, RenderSummary, render_text},
};

pub mod fonts;

/// The text rendered by the `simple` demonstration.
pub const SIMPLE_TEXT: &str = "Hello, world!";

/// The text rendered by the `strings` demonstration.
pub const STRINGS_TEXT: &str = "lorem1 ipsum2!";

/// Renders `text` with `font` into a [`String`] using the default [`Palette`].
///
/// # Errors
///
/// Returns [`RenderError`] if `font` holds a malformed glyph.
pub fn render(font: &FontDescriptor, text: &str) -> Result<(String, RenderSummary), RenderError> {
    let mut output = String::new();
    let summary = render_text(font, text, Palette::DEFAULT, &mut output)?;

    Ok((output, summary))
}

/// Renders `text` with `font` onto standard output.
///
/// # Errors
///
/// Returns [`Err`] if `font` is inconsistent or if writing to standard output fails.
pub fn print_text(font: &FontDescriptor, text: &str) -> Result<()> {
    font.validate().context("font tables are inconsistent")?;

    let (output, summary) = render(font, text)?;
    log::debug!(
        "rendered {} characters, skipped {}",
        summary.rendered,
        summary.skipped
    );

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

#[cfg(test)]
mod test {
    use font::descriptor::GlyphSlot;

    use super::{SIMPLE_TEXT, STRINGS_TEXT, fonts::SMALL, fonts::SMALL_STRINGS, render};

    #[test]
    fn fonts_are_consistent() {
        assert_eq!(SMALL.validate(), Ok(()));
        assert_eq!(SMALL_STRINGS.validate(), Ok(()));
    }

    #[test]
    fn dense_font_covers_printable_ascii() {
        for code in ' '..='~' {
            let glyph = SMALL.lookup(code).unwrap();
            let rows: Vec<Vec<bool>> = glyph.rows().map(|row| row.into_iter().collect()).collect();

            assert_eq!(rows.len(), 9);
            assert!(rows.iter().all(|row| row.len() == usize::from(glyph.width())));
        }

        assert!(SMALL.lookup('\u{7f}').is_err());
        assert!(SMALL.lookup('\u{1f}').is_err());
    }

    #[test]
    fn sparse_font_encodes_only_the_demo_text() {
        for code in SMALL_STRINGS.codes() {
            let slot = SMALL_STRINGS.slot(code).unwrap();
            assert_eq!(
                matches!(slot, GlyphSlot::Present(_)),
                STRINGS_TEXT.contains(code),
                "{code:?}"
            );
        }
        assert_eq!(SMALL_STRINGS.encoded_count(), 13);
    }

    #[test]
    fn sparse_glyphs_match_dense_glyphs() {
        for code in STRINGS_TEXT.chars() {
            let sparse = SMALL_STRINGS.lookup(code).unwrap();
            let dense = SMALL.lookup(code).unwrap();

            assert_eq!(sparse, dense);
        }
    }

    #[test]
    fn render_stacked_glyphs() {
        let (output, summary) = render(&SMALL, "Hi").unwrap();

        let expected = concat!(
            "o...o.\n",
            "o...o.\n",
            "o...o.\n",
            "ooooo.\n",
            "o...o.\n",
            "o...o.\n",
            "o...o.\n",
            "......\n",
            "......\n",
            "o.\n",
            "..\n",
            "o.\n",
            "o.\n",
            "o.\n",
            "o.\n",
            "o.\n",
            "..\n",
            "..\n",
        );
        assert_eq!(output, expected);
        assert_eq!(summary.rendered, 2);
    }

    #[test]
    fn demo_texts_render_completely() {
        let (output, summary) = render(&SMALL, SIMPLE_TEXT).unwrap();
        assert_eq!(summary.rendered, SIMPLE_TEXT.len());
        assert_eq!(summary.skipped, 0);
        assert_eq!(output.lines().count(), 9 * SIMPLE_TEXT.len());

        let (output, summary) = render(&SMALL_STRINGS, STRINGS_TEXT).unwrap();
        assert_eq!(summary.skipped, 0);
        assert!(!output.contains("not included"));
    }

    #[test]
    fn sparse_font_skips_missing_characters() {
        let (output, summary) = render(&SMALL_STRINGS, "Zip").unwrap();

        assert_eq!(summary.rendered, 2);
        assert_eq!(summary.skipped, 1);
        assert!(output.starts_with("Character with ascii 5a is not included in the font!\n"));
        assert_eq!(output.lines().count(), 1 + 2 * 9);
    }
}
