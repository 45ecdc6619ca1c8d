use super::Vec2;

/// Viewport size in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Maps a pixel position (top-left origin, +Y down) to NDC (+Y up).
    #[inline]
    pub fn pixel_to_ndc(self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x / (self.width * 0.5) - 1.0, 1.0 - y / (self.height * 0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_to_ndc_corners_and_center() {
        let vp = Viewport::new(400.0, 200.0);
        assert_eq!(vp.pixel_to_ndc(0.0, 0.0), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.pixel_to_ndc(400.0, 200.0), Vec2::new(1.0, -1.0));
        assert_eq!(vp.pixel_to_ndc(200.0, 100.0), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn zero_size_is_invalid() {
        assert!(!Viewport::new(0.0, 10.0).is_valid());
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }
}
