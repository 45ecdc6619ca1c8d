/// Straight-alpha RGBA color with sRGB-encoded `f32` channels in `[0, 1]`.
///
/// This is the color space the exercises are authored in (`[1.0, 0.2, 0.2]`,
/// `#e11d48`, ...). Renderers convert to linear when the surface format
/// applies sRGB encoding on write.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// 8-bit RGBA pixel as stored by the raster canvas.
pub type Rgba8 = [u8; 4];

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Builds an opaque color from a `[r, g, b]` triple.
    #[inline]
    pub const fn from_array([r, g, b]: [f32; 3]) -> Self {
        Self::rgb(r, g, b)
    }

    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        match digits.len() {
            6 => Some(Self::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Some(Self::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Quantizes to 8-bit channels (clamped, rounded).
    #[inline]
    pub fn to_rgba8(self) -> Rgba8 {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Decodes the sRGB transfer function (alpha is already linear).
    pub fn to_linear(self) -> Self {
        fn decode(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        Self::rgba(decode(self.r), decode(self.g), decode(self.b), self.a)
    }

    /// Channels to upload for a target that does (`true`) or does not apply
    /// sRGB encoding on write.
    #[inline]
    pub fn for_target(self, srgb_target: bool) -> [f32; 4] {
        if srgb_target { self.to_linear().to_array() } else { self.to_array() }
    }
}
