use crate::coords::Mat4;

/// View volume bounds at the near plane, in camera space.
///
/// Preconditions (`near > 0`, `far > near`, `left < right`, `bottom < top`)
/// are not checked; violating them yields a degenerate projection.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frustum {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Frustum {
    fn default() -> Self {
        Self { left: -1.0, right: 1.0, bottom: -1.0, top: 1.0, near: 0.1, far: 100.0 }
    }
}

impl Frustum {
    #[inline]
    pub fn projection(&self) -> Mat4 {
        Mat4::frustum(self.left, self.right, self.bottom, self.top, self.near, self.far)
    }
}
