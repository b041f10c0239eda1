/// `Color` は 24 ビットの RGB カラーを表す.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(image::Rgb([r, g, b]): image::Rgb<u8>) -> Self {
        Self { r, g, b }
    }
}

/// 背景の塗りつぶし色 `#667eea`.
pub const BACKGROUND: Color = Color::new(0x66, 0x7e, 0xea);

/// 円形の背景 (バッジ) の色 `#764ba2`.
pub const BADGE: Color = Color::new(0x76, 0x4b, 0xa2);

/// ペンギンの胴体の色.
pub const BODY: Color = Color::new(0xff, 0xff, 0xff);

/// `BoundingBox` は画像上の矩形領域を表す. `right` と `bottom` もその領域に含まれる.
///
/// 小さいサイズでは座標が画像外や負になりうるので符号付きで持つ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl BoundingBox {
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.right < self.left || self.bottom < self.top
    }
}

#[test]
fn test_color_debug() {
    assert_eq!(format!("{:?}", BACKGROUND), "#667eea");
    assert_eq!(format!("{:?}", Color::new(0, 1, 2)), "#000102");
}

#[test]
fn test_bounding_box() {
    let bbox = BoundingBox::new(2, 2, 14, 14);
    assert!(!bbox.is_empty());
    assert!(BoundingBox::new(3, 0, 2, 0).is_empty());
    assert!(!BoundingBox::new(0, 0, 0, 0).is_empty());
}
