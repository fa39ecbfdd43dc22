//! Conversion of a BMFont glyph page into packed font tables.

use std::collections::BTreeSet;

use anyhow::{Result, anyhow};
use font::builder::FontBuilder;
use image::GrayImage;

use crate::{
    bmfont::{BmChar, BmFont, BmFontError},
    config::FontConfig,
};

/// Luma values above this threshold are set pixels.
pub const PIXEL_THRESHOLD: u8 = 127;

/// Packs the glyphs of `font` selected by `config` into a [`FontBuilder`].
///
/// Every code from `first_ascii` through `last_ascii` is encoded, except those missing from
/// `charset` when one is given; those are left absent. Codes without a glyph in `font` are drawn
/// with the first glyph of `font` instead.
///
/// # Errors
///
/// Returns [`Err`] if `font` has no glyphs or if the glyphs do not fit the configured cell.
pub fn convert_font(
    config: &FontConfig,
    font: &BmFont,
    page: &GrayImage,
    charset: Option<&BTreeSet<char>>,
) -> Result<FontBuilder> {
    let substitute = font.chars.first().ok_or(BmFontError::NoGlyphs)?;
    let cell_width = i32::from(config.bytes_width) * 8;

    let mut builder = FontBuilder::new(config.first_ascii, config.bytes_width, config.height);
    if config.fixed_width != 0 {
        builder = builder.fixed_width(config.fixed_width);
    }
    if charset.is_some() {
        builder = builder.sparse();
    }

    for code in config.first_ascii..=config.last_ascii {
        let selected = charset.is_none_or(|charset| charset.contains(&char::from(code)));
        if !selected {
            builder.push_absent()?;
            continue;
        }

        let glyph = match font.glyph(u32::from(code)) {
            Some(glyph) => glyph,
            None => {
                log::info!("No glyph for ASCII: {code}, using substitute");
                substitute
            }
        };

        let advance = glyph.xadvance.clamp(0, cell_width);
        if advance != glyph.xadvance {
            log::warn!(
                "{}: advance of ASCII {code} clamped from {} to {advance}",
                config.name,
                glyph.xadvance
            );
        }
        let width = u8::try_from(advance)
            .map_err(|_| anyhow!("advance {advance} of ASCII {code} does not fit a glyph row"))?;

        builder.push_glyph(width, |x, y| {
            sample(page, glyph, i32::from(x), i32::from(y), config.crop_x, config.crop_y)
        })?;
    }

    Ok(builder)
}

/// Returns `true` if the pixel at (`x`, `y`) of `glyph`'s cell is set on `page`.
///
/// The glyph image is placed inside the cell at its offsets, shifted by the crop.
fn sample(page: &GrayImage, glyph: &BmChar, x: i32, y: i32, crop_x: i32, crop_y: i32) -> bool {
    let use_x = i64::from(x) - i64::from(glyph.xoffset) + i64::from(crop_x);
    let use_y = i64::from(y) - i64::from(glyph.yoffset) + i64::from(crop_y);

    if use_x < 0 || use_y < 0 || use_x >= i64::from(glyph.width) || use_y >= i64::from(glyph.height)
    {
        return false;
    }

    let (Ok(page_x), Ok(page_y)) = (
        u32::try_from(i64::from(glyph.x) + use_x),
        u32::try_from(i64::from(glyph.y) + use_y),
    ) else {
        return false;
    };

    page.get_pixel_checked(page_x, page_y)
        .is_some_and(|luma| luma.0[0] > PIXEL_THRESHOLD)
}
