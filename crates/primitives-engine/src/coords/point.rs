/// Integer pixel coordinate (origin top-left, +Y down).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Snaps a logical-pixel position to the pixel containing it.
    #[inline]
    pub fn from_logical(x: f32, y: f32) -> Self {
        Self::new(x.floor() as i32, y.floor() as i32)
    }
}

impl From<(i32, i32)> for PixelPoint {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_logical_floors() {
        assert_eq!(PixelPoint::from_logical(10.9, 3.1), PixelPoint::new(10, 3));
        assert_eq!(PixelPoint::from_logical(-0.5, 0.0), PixelPoint::new(-1, 0));
    }
}
