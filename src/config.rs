use std::path::PathBuf;

/// 生成するアイコンの一辺の長さ.
pub const SIZES: [u32; 3] = [16, 48, 128];

/// `Config` は一回の生成で作るアイコンのサイズと出力先を表す.
///
/// `Default` はカレントディレクトリに `SIZES` の三つを書き出す.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub sizes: Vec<u32>,
    pub out_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sizes: SIZES.to_vec(),
            out_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn with_out_dir(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            ..Self::default()
        }
    }
}

#[test]
fn test_default() {
    let config = Config::default();
    assert_eq!(config.sizes, vec![16, 48, 128]);
    assert_eq!(config.out_dir, PathBuf::from("."));
    assert_eq!(Config::with_out_dir("out").sizes, config.sizes);
}
