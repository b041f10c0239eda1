use anyhow::Result;

use penguin_icons::{config::Config, generate::generate_all, logger};

fn main() -> Result<()> {
    let _logger = logger::init()?;

    generate_all(&Config::default())?;
    Ok(())
}
