use std::path::Path;

use anyhow::{bail, Result};

use penguin_icons::{check::check_icon, config::SIZES, icon::icon_file_name, logger};

fn main() -> Result<()> {
    let _logger = logger::init()?;

    let mut failed = 0;
    for &size in &SIZES {
        match check_icon(Path::new("."), size) {
            Ok(()) => println!("ok {}", icon_file_name(size)),
            Err(e) => {
                println!("NG {}: {:#}", icon_file_name(size), e);
                failed += 1;
            }
        }
    }

    if failed != 0 {
        bail!("{} of {} icons failed the check", failed, SIZES.len());
    }
    Ok(())
}
