use anyhow::{ensure, Result};
use image::RgbImage;

use crate::basis::{BoundingBox, Color};


/// `Canvas` は描画先となる RGB のピクセルバッファを表す.
///
/// 作った時点で全体が一色で塗られていて, `fill_*` で上書きしていく.
#[derive(Clone)]
pub struct Canvas {
    buffer: RgbImage,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Canvas({}x{})", self.width(), self.height())
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32, fill: Color) -> Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "canvas must not be empty, but requested {}x{}",
            width,
            height
        );

        Ok(Self {
            buffer: RgbImage::from_pixel(width, height, fill.to_rgb()),
        })
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width() && y < self.height() {
            Some((*self.buffer.get_pixel(x, y)).into())
        } else {
            None
        }
    }

    /// RGB の順に並んだ生のピクセル列.
    pub fn as_raw(&self) -> &[u8] {
        self.buffer.as_raw()
    }

    pub fn fill_rect(&mut self, bbox: BoundingBox, color: Color) {
        self.fill_where(bbox, color, |_, _| true);
    }

    /// `bbox` に内接する楕円を塗りつぶす. アンチエイリアスはしない.
    ///
    /// 幅または高さが 0 の `bbox` では楕円が線分に潰れる.
    ///
    /// 各ピクセルの整数座標が `bbox` の実数の中心と半径による楕円の式を満たすかで塗る独自のラスタライズなので,
    /// 他の描画ライブラリの楕円とは縁のピクセルが一致するとは限らない.
    pub fn fill_ellipse(&mut self, bbox: BoundingBox, color: Color) {
        let cx = (bbox.left + bbox.right) as f64 / 2.0;
        let cy = (bbox.top + bbox.bottom) as f64 / 2.0;
        let rx = (bbox.right - bbox.left) as f64 / 2.0;
        let ry = (bbox.bottom - bbox.top) as f64 / 2.0;

        self.fill_where(bbox, color, |x, y| {
            axis_term(x as f64, cx, rx) + axis_term(y as f64, cy, ry) <= 1.0
        });
    }

    fn fill_where(&mut self, bbox: BoundingBox, color: Color, inside: impl Fn(i64, i64) -> bool) {
        if bbox.is_empty() {
            return;
        }

        // clip to the canvas
        let left = bbox.left.max(0);
        let top = bbox.top.max(0);
        let right = bbox.right.min(self.width() as i64 - 1);
        let bottom = bbox.bottom.min(self.height() as i64 - 1);

        let rgb = color.to_rgb();
        for y in top..=bottom {
            for x in left..=right {
                if inside(x, y) {
                    self.buffer.put_pixel(x as u32, y as u32, rgb);
                }
            }
        }
    }
}

/// 楕円の方程式の一軸ぶんの項 `((v - center) / radius)^2`.
fn axis_term(v: f64, center: f64, radius: f64) -> f64 {
    if radius == 0.0 {
        if v == center {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        let d = (v - center) / radius;
        d * d
    }
}
