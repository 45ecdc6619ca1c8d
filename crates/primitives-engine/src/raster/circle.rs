use crate::coords::PixelPoint;

/// Midpoint (Bresenham) circle rasterization.
///
/// Walks the second octant from `(0, radius)` with the integer decision
/// variable `d = 1 - radius`, emitting the eight symmetric points of every
/// step in the order
/// `(+x,+y) (-x,+y) (+x,-y) (-x,-y) (+y,+x) (-y,+x) (+y,-x) (-y,-x)`.
///
/// Points on the axes and on the diagonals are emitted more than once (the
/// octants overlap there); they are intentionally not deduplicated, so the
/// result length is always a multiple of eight.
///
/// `radius == 0` yields the center eight times. A negative radius is outside
/// the contract and yields no points.
pub fn rasterize_circle(center: PixelPoint, radius: i32) -> Vec<PixelPoint> {
    let PixelPoint { x: cx, y: cy } = center;

    let mut points = Vec::with_capacity(octant_len(radius) * 8);
    let mut x = 0;
    let mut y = radius;
    let mut d = 1 - radius;

    while x <= y {
        points.extend_from_slice(&[
            PixelPoint::new(cx + x, cy + y),
            PixelPoint::new(cx - x, cy + y),
            PixelPoint::new(cx + x, cy - y),
            PixelPoint::new(cx - x, cy - y),
            PixelPoint::new(cx + y, cy + x),
            PixelPoint::new(cx - y, cy + x),
            PixelPoint::new(cx + y, cy - x),
            PixelPoint::new(cx - y, cy - x),
        ]);

        if d < 0 {
            d += 2 * x + 3;
        } else {
            d += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;
    }

    points
}

/// Upper bound on the number of steps for one octant (`r / √2 + 1`).
#[inline]
fn octant_len(radius: i32) -> usize {
    if radius < 0 { 0 } else { (radius as f32 * core::f32::consts::FRAC_1_SQRT_2) as usize + 2 }
}
