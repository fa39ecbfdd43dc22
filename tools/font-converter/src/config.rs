//! Configuration of a conversion run.
//!
//! A configuration is a JSON document describing where the generated tables go and which fonts
//! are converted:
//!
//! ```json
//! {
//!     "output": "fonts.rs",
//!     "format": "rust",
//!     "fonts": [
//!         {
//!             "input_file": "liberation.fnt",
//!             "name": "Liberation",
//!             "first_ascii": 32,
//!             "last_ascii": 126,
//!             "bytes_width": 2,
//!             "height": 16,
//!             "crop_x": 0,
//!             "crop_y": 3,
//!             "fixed_width": 0,
//!             "strings": "strings.txt"
//!         }
//!     ]
//! }
//! ```
//!
//! Relative paths are resolved against the directory containing the configuration file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

/// Description of a whole conversion run.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConverterConfig {
    /// The generated Rust source file, or the directory receiving the dumps.
    pub output: PathBuf,
    /// The form in which the tables are written.
    #[serde(default)]
    pub format: OutputFormat,
    /// The fonts to convert.
    pub fonts: Vec<FontConfig>,
}

/// The form in which converted fonts are written.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A single Rust source file holding `static` tables for every font.
    #[default]
    Rust,
    /// One `<name>.bin` dump per font.
    Dump,
}

/// Description of a single font conversion.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontConfig {
    /// The BMFont descriptor to convert.
    pub input_file: PathBuf,
    /// The name of the generated font.
    pub name: String,
    /// The first character code to encode.
    pub first_ascii: u8,
    /// The last character code to encode.
    pub last_ascii: u8,
    /// The number of bytes in each bitmap row.
    pub bytes_width: u8,
    /// The height of each glyph in pixels.
    pub height: u8,
    /// Columns to skip on the left of each glyph cell.
    #[serde(default)]
    pub crop_x: i32,
    /// Rows to skip on the top of each glyph cell.
    #[serde(default)]
    pub crop_y: i32,
    /// The width shared by all glyphs, or 0 to use each glyph's advance.
    #[serde(default)]
    pub fixed_width: u8,
    /// A file whose characters are the only ones encoded.
    #[serde(default)]
    pub strings: Option<PathBuf>,
}

impl ConverterConfig {
    /// Reads and validates the configuration stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the file cannot be read, is not a valid configuration, or describes an
    /// impossible conversion.
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("Reading configuration file: {}", path.display());

        let source = fs::read_to_string(path)
            .with_context(|| format!("error reading configuration file {}", path.display()))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

        let mut config = Self::from_json(&source)
            .with_context(|| format!("invalid configuration file {}", path.display()))?;
        config.resolve_paths(base_dir);
        Ok(config)
    }

    /// Parses and validates a configuration. Paths are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if `source` is not a valid configuration or describes an impossible
    /// conversion.
    pub fn from_json(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every font describes a possible conversion.
    fn validate(&self) -> Result<()> {
        ensure!(!self.fonts.is_empty(), "configuration does not list any fonts");

        for font in &self.fonts {
            ensure!(!font.name.is_empty(), "font names must not be empty");
            ensure!(
                font.first_ascii <= font.last_ascii,
                "font {}: first_ascii {} is after last_ascii {}",
                font.name,
                font.first_ascii,
                font.last_ascii
            );
            ensure!(
                font.bytes_width != 0 && font.height != 0,
                "font {}: glyph cells must not be empty",
                font.name
            );
            ensure!(
                usize::from(font.fixed_width) <= usize::from(font.bytes_width) * 8,
                "font {}: fixed width {} does not fit into {} bytes",
                font.name,
                font.fixed_width,
                font.bytes_width
            );
        }

        let mut names: Vec<&str> = self.fonts.iter().map(|font| font.name.as_str()).collect();
        names.sort_unstable();
        if let Some(name) = names.windows(2).find(|pair| pair[0] == pair[1]) {
            anyhow::bail!("font {} is listed more than once", name[0]);
        }

        Ok(())
    }

    /// Makes every relative path of the configuration relative to `base_dir`.
    fn resolve_paths(&mut self, base_dir: &Path) {
        self.output = base_dir.join(&self.output);
        for font in &mut self.fonts {
            font.input_file = base_dir.join(&font.input_file);
            if let Some(strings) = &mut font.strings {
                *strings = base_dir.join(&*strings);
            }
        }
    }
}
