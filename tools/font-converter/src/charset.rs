//! Selection of the characters to encode from a strings file.

use std::{collections::BTreeSet, fs, path::Path};

use anyhow::{Context, Result};

/// Returns the set of characters used by `strings`, ignoring line breaks.
pub fn strings_charset(strings: &str) -> BTreeSet<char> {
    strings
        .chars()
        .filter(|&c| c != '\n' && c != '\r')
        .collect()
}

/// Reads the strings file at `path` and returns the set of characters it uses.
///
/// # Errors
///
/// Returns [`Err`] if the file cannot be read.
pub fn load_strings_charset(path: &Path) -> Result<BTreeSet<char>> {
    log::info!("Reading strings: {}", path.display());

    let strings = fs::read_to_string(path)
        .with_context(|| format!("error reading strings file {}", path.display()))?;
    Ok(strings_charset(&strings))
}

#[cfg(test)]
mod test {
    use super::strings_charset;

    #[test]
    fn line_breaks_are_ignored() {
        let charset = strings_charset("lorem1 ipsum2!\r\nlorem\n");

        assert_eq!(
            charset.into_iter().collect::<String>(),
            " !12eilmoprsu"
        );
    }

    #[test]
    fn empty_strings() {
        assert!(strings_charset("\n\n").is_empty());
    }
}
