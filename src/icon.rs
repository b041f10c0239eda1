use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{ensure, Context as _, Result};
use log::{debug, info};
use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

use crate::{
    basis::{BoundingBox, BACKGROUND, BADGE, BODY},
    canvas::Canvas,
};


/// `IconLayout` は一辺 `size` のアイコンに描く図形の外接矩形を表す.
///
/// 座標はすべて `size` の整数除算で決まり, 端数は切り捨てる.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconLayout {
    pub size: u32,
    /// 円形の背景 (バッジ).
    pub badge: BoundingBox,
    /// ペンギンの胴体.
    pub body: BoundingBox,
}

impl IconLayout {
    pub fn new(size: u32) -> Self {
        let s = size as i64;
        let center = s / 2;
        let body = s / 3;

        Self {
            size,
            badge: BoundingBox::new(s / 8, s / 8, s * 7 / 8, s * 7 / 8),
            body: BoundingBox::new(
                center - body / 2,
                center - body / 3,
                center + body / 2,
                center + body,
            ),
        }
    }
}

pub fn icon_file_name(size: u32) -> String {
    format!("icon{}.png", size)
}

/// 一辺 `size` のアイコンを描画する.
pub fn render(size: u32) -> Result<Canvas> {
    ensure!(size > 0, "icon size must be positive");

    let layout = IconLayout::new(size);
    debug!("layout for {}: {:?}", size, layout);

    let mut canvas = Canvas::new(size, size, BACKGROUND)?;
    canvas.fill_ellipse(layout.badge, BADGE);
    canvas.fill_ellipse(layout.body, BODY);
    Ok(canvas)
}

/// `canvas` を 8 ビット RGB の PNG として書き出す.
///
/// 圧縮とフィルタを固定し, 時刻などの補助チャンクを含めないので, 同じ `canvas` からは常に同じバイト列になる.
pub fn encode_png(canvas: &Canvas, w: impl Write) -> Result<()> {
    let mut encoder = Encoder::new(w, canvas.width(), canvas.height());

    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(Compression::Default);
    encoder.set_filter(FilterType::Sub);

    let mut writer = encoder
        .write_header()
        .context("failed to write png header")?;
    writer
        .write_image_data(canvas.as_raw())
        .context("failed to write png image data")?;
    writer.finish().context("failed to finish png stream")?;
    Ok(())
}

/// アイコンを描画して `out_dir` に `icon{size}.png` として保存する. 同名のファイルは上書きする.
pub fn create_icon(size: u32, out_dir: &Path) -> Result<PathBuf> {
    let canvas = render(size).with_context(|| format!("failed to render icon of size {}", size))?;

    let path = out_dir.join(icon_file_name(size));
    let f = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut f = BufWriter::new(f);

    encode_png(&canvas, &mut f).with_context(|| format!("failed to encode {}", path.display()))?;
    f.flush()
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!("wrote {}", path.display());
    Ok(path)
}
