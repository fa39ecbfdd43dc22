//! Renders a sentence with the sparse demonstration font, which only encodes the characters the
//! sentence uses.

use anyhow::Result;
use font_demo::{STRINGS_TEXT, fonts::SMALL_STRINGS, print_text};

fn main() -> Result<()> {
    env_logger::init();

    print_text(&SMALL_STRINGS, STRINGS_TEXT)
}
