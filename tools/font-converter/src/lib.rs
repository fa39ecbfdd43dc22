//! Tool for converting AngelCode BMFont output into [`FontDescriptor`][fd] tables, either as Rust
//! source or as dumps loadable with [`FontDescriptor::from_dump`][fdd].
//!
//! [fd]: font::descriptor::FontDescriptor
//! [fdd]: font::descriptor::FontDescriptor::from_dump

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use font::builder::{FontBuilder, RUST_SOURCE_PRELUDE};

use crate::{
    bmfont::BmFont,
    charset::load_strings_charset,
    config::{ConverterConfig, FontConfig, OutputFormat},
    convert::convert_font,
};

pub mod bmfont;
pub mod charset;
pub mod config;
pub mod convert;

/// Converts every font described by the configuration file at `config_path` and writes the
/// results.
///
/// # Errors
///
/// Returns [`Err`] if the configuration, a descriptor, a page image or a strings file cannot be
/// read, if a font does not fit its configuration, or if writing the output fails.
pub fn run(config_path: &Path) -> Result<()> {
    let config = ConverterConfig::load(config_path)?;

    let mut fonts = Vec::with_capacity(config.fonts.len());
    for font_config in &config.fonts {
        let builder = load_font(font_config)
            .with_context(|| format!("error converting font {}", font_config.name))?;
        fonts.push((font_config.name.as_str(), builder));
    }

    let total_size: usize = fonts.iter().map(|(_, builder)| builder.table_size()).sum();
    log::info!("Font tables use: {total_size} bytes");

    match config.format {
        OutputFormat::Rust => write_rust_source(&config.output, &fonts),
        OutputFormat::Dump => write_dumps(&config.output, &fonts),
    }
}

/// Reads the descriptor, page image and strings of a single font and converts them.
fn load_font(config: &FontConfig) -> Result<FontBuilder> {
    log::info!("Reading font description: {}", config.input_file.display());
    let source = fs::read_to_string(&config.input_file)
        .with_context(|| format!("error reading {}", config.input_file.display()))?;
    let font = BmFont::parse(&source)?;

    let page_file = font
        .first_page()
        .ok_or_else(|| anyhow::anyhow!("descriptor does not reference a page"))?;
    let page_path = config
        .input_file
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(page_file);
    log::info!("Reading font bitmap: {}", page_path.display());
    let page = image::open(&page_path)
        .with_context(|| format!("error reading {}", page_path.display()))?
        .to_luma8();

    let charset = config
        .strings
        .as_deref()
        .map(load_strings_charset)
        .transpose()?;

    let builder = convert_font(config, &font, &page, charset.as_ref())?;
    log::debug!(
        "{}: {} codes, {} glyphs encoded",
        config.name,
        builder.glyph_count(),
        builder.encoded_count()
    );
    Ok(builder)
}

/// Writes every font into a single Rust source file at `path`.
fn write_rust_source(path: &Path, fonts: &[(&str, FontBuilder)]) -> Result<()> {
    log::info!("Writing output: {}", path.display());

    let file =
        File::create(path).with_context(|| format!("error creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writer.write_all(RUST_SOURCE_PRELUDE.as_bytes())?;
    for (name, builder) in fonts {
        builder.write_rust_source(name, &mut writer)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes a `<name>.bin` dump for every font into the directory at `path`.
fn write_dumps(path: &Path, fonts: &[(&str, FontBuilder)]) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("error creating {}", path.display()))?;

    for (name, builder) in fonts {
        let dump_path = path.join(format!("{name}.bin"));
        log::info!("Writing output: {}", dump_path.display());

        let file = File::create(&dump_path)
            .with_context(|| format!("error creating {}", dump_path.display()))?;
        let mut writer = BufWriter::new(file);
        builder.dump(&mut writer)?;
        writer.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use std::{fs, path::Path};

    use font::descriptor::FontDescriptor;
    use image::{GrayImage, Luma};
    use tempfile::tempdir;

    /// Writes a two glyph font (`A` and `B`) along with `config` into `dir`.
    fn write_inputs(dir: &Path, config: &str) {
        let page = GrayImage::from_fn(4, 2, |x, y| Luma([if x == y || x == 3 { 200 } else { 0 }]));
        page.save(dir.join("page.png")).unwrap();

        fs::write(
            dir.join("font.fnt"),
            "page id=0 file=\"page.png\"\n\
             char id=65 x=0 y=0 width=2 height=2 xoffset=0 yoffset=0 xadvance=3\n\
             char id=66 x=3 y=0 width=1 height=2 xoffset=1 yoffset=0 xadvance=2\n",
        )
        .unwrap();
        fs::write(dir.join("strings.txt"), "B\n").unwrap();
        fs::write(dir.join("fonts.json"), config).unwrap();
    }

    #[test]
    fn converts_to_dumps() {
        let temp = tempdir().unwrap();
        let dir = temp.path();
        write_inputs(
            dir,
            r#"{
                "output": "out",
                "format": "dump",
                "fonts": [
                    { "input_file": "font.fnt", "name": "Dense", "first_ascii": 65,
                      "last_ascii": 66, "bytes_width": 1, "height": 2 },
                    { "input_file": "font.fnt", "name": "Sparse", "first_ascii": 65,
                      "last_ascii": 66, "bytes_width": 1, "height": 2,
                      "strings": "strings.txt" }
                ]
            }"#,
        );

        super::run(&dir.join("fonts.json")).unwrap();

        let dense = fs::read(dir.join("out/Dense.bin")).unwrap();
        let dense = FontDescriptor::from_dump(&dense).unwrap();
        assert_eq!(dense.lookup('A').unwrap().bitmap(), [0b1000_0000, 0b0100_0000]);
        assert_eq!(dense.lookup('B').unwrap().bitmap(), [0b0100_0000, 0b0100_0000]);

        let sparse = fs::read(dir.join("out/Sparse.bin")).unwrap();
        let sparse = FontDescriptor::from_dump(&sparse).unwrap();
        assert!(sparse.lookup('A').is_err());
        assert_eq!(sparse.lookup('B').unwrap().width(), 2);
    }

    #[test]
    fn converts_to_rust_source() {
        let temp = tempdir().unwrap();
        let dir = temp.path();
        write_inputs(
            dir,
            r#"{
                "output": "fonts.rs",
                "fonts": [
                    { "input_file": "font.fnt", "name": "Tiny", "first_ascii": 65,
                      "last_ascii": 66, "bytes_width": 1, "height": 2 }
                ]
            }"#,
        );

        super::run(&dir.join("fonts.json")).unwrap();

        let source = fs::read_to_string(dir.join("fonts.rs")).unwrap();
        assert!(source.starts_with(super::RUST_SOURCE_PRELUDE));
        assert!(source.contains("pub static TINY: FontDescriptor<'static>"));
        assert!(source.contains("    // ASCII: 66, char width: 2\n"));
    }

    #[test]
    fn missing_descriptor() {
        let temp = tempdir().unwrap();
        let dir = temp.path();
        fs::write(
            dir.join("fonts.json"),
            r#"{ "output": "fonts.rs", "fonts": [
                { "input_file": "nope.fnt", "name": "Nope", "first_ascii": 65,
                  "last_ascii": 66, "bytes_width": 1, "height": 2 } ] }"#,
        )
        .unwrap();

        assert!(super::run(&dir.join("fonts.json")).is_err());
        assert!(!dir.join("fonts.rs").exists());
    }
}
