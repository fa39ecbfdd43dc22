//! Renders a greeting with the dense demonstration font.

use anyhow::Result;
use font_demo::{SIMPLE_TEXT, fonts::SMALL, print_text};

fn main() -> Result<()> {
    env_logger::init();

    print_text(&SMALL, SIMPLE_TEXT)
}
