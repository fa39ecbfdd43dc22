//! Tool for converting AngelCode BMFont output into bitmap font tables.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = cli::get_config_path();
    font_converter::run(&config)
}
