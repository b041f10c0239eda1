use std::path::PathBuf;

use anyhow::Result;
use log::debug;

use crate::{
    config::Config,
    icon::{create_icon, icon_file_name},
};

/// `config` のサイズ順にアイコンを一枚ずつ作る. 途中で失敗したらそこで打ち切る.
pub fn generate_all(config: &Config) -> Result<Vec<PathBuf>> {
    debug!("generating {:?} into {}", config.sizes, config.out_dir.display());

    let mut written = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        written.push(create_icon(size, &config.out_dir)?);
        println!("Created {}", icon_file_name(size));
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::generate_all;
    use crate::config::Config;

    #[test]
    fn writes_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let written = generate_all(&Config::with_out_dir(dir.path())).unwrap();
        let names = written
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(names, ["icon16.png", "icon48.png", "icon128.png"]);
    }

    #[test]
    fn stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            sizes: vec![16, 0, 48],
            out_dir: dir.path().to_owned(),
        };
        assert!(generate_all(&config).is_err());
        assert!(dir.path().join("icon16.png").exists());
        assert!(!dir.path().join("icon48.png").exists());
    }
}
