use std::path::Path;

use anyhow::{ensure, Context as _, Result};
use image::ColorType;

use crate::{basis::BACKGROUND, icon::icon_file_name};

/// `out_dir` にある `icon{size}.png` が期待どおりの形をしているか確かめる.
///
/// - 8 ビット RGB (アルファなし) の画像として読めること
/// - `size` x `size` であること
/// - 四隅が背景色であること
/// - 中心が背景色ではないこと
pub fn check_icon(out_dir: &Path, size: u32) -> Result<()> {
    let path = out_dir.join(icon_file_name(size));
    let img = image::open(&path)
        .with_context(|| format!("failed to decode {}", path.display()))?;

    ensure!(
        img.color() == ColorType::Rgb8,
        "expected an RGB image, but found {:?}",
        img.color()
    );
    let img = img.to_rgb8();

    ensure!(
        img.dimensions() == (size, size),
        "expected {}x{}, but found {}x{}",
        size,
        size,
        img.width(),
        img.height()
    );

    let background = BACKGROUND.to_rgb();
    let last = size - 1;
    for &(x, y) in &[(0, 0), (last, 0), (0, last), (last, last)] {
        ensure!(
            *img.get_pixel(x, y) == background,
            "corner ({}, {}) is not background",
            x,
            y
        );
    }

    ensure!(
        *img.get_pixel(size / 2, size / 2) != background,
        "center is background"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::check_icon;
    use crate::{config::Config, generate::generate_all, icon::render};

    #[test]
    fn generated_icons_pass() {
        let dir = tempfile::tempdir().unwrap();
        generate_all(&Config::with_out_dir(dir.path())).unwrap();
        for &size in &[16, 48, 128] {
            check_icon(dir.path(), size).unwrap();
        }
    }

    #[test]
    fn flat_image_fails() {
        let dir = tempfile::tempdir().unwrap();
        let flat = image::RgbImage::from_pixel(16, 16, image::Rgb([0x66, 0x7e, 0xea]));
        flat.save(dir.path().join("icon16.png")).unwrap();

        let err = check_icon(dir.path(), 16).unwrap_err();
        assert_eq!(err.to_string(), "center is background");
    }

    #[test]
    fn non_rgb_image_fails() {
        let dir = tempfile::tempdir().unwrap();
        let pixels = render(16).unwrap().as_raw().to_vec();
        let rgb = image::RgbImage::from_raw(16, 16, pixels).unwrap();

        // same pixels, different color types
        let rgba = image::DynamicImage::ImageRgb8(rgb.clone()).to_rgba8();
        rgba.save(dir.path().join("icon16.png")).unwrap();
        let err = check_icon(dir.path(), 16).unwrap_err();
        assert_eq!(err.to_string(), "expected an RGB image, but found Rgba8");

        let luma = image::DynamicImage::ImageRgb8(rgb.clone()).to_luma8();
        luma.save(dir.path().join("icon16.png")).unwrap();
        assert!(check_icon(dir.path(), 16).is_err());

        rgb.save(dir.path().join("icon16.png")).unwrap();
        check_icon(dir.path(), 16).unwrap();
    }

    #[test]
    fn wrong_size_fails() {
        let dir = tempfile::tempdir().unwrap();
        let small = image::RgbImage::new(8, 8);
        small.save(dir.path().join("icon16.png")).unwrap();

        assert!(check_icon(dir.path(), 16).is_err());
        assert!(check_icon(dir.path(), 48).is_err());
    }
}
