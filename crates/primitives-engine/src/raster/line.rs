use crate::coords::PixelPoint;

/// Bresenham line rasterization for all octants.
///
/// Returns the pixels from `a` to `b`, both endpoints included, in walk
/// order. Consecutive pixels are 8-connected; the count is
/// `max(|dx|, |dy|) + 1`.
pub fn rasterize_line(a: PixelPoint, b: PixelPoint) -> Vec<PixelPoint> {
    let dx = (b.x - a.x).abs();
    let dy = -(b.y - a.y).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };

    let mut err = dx + dy;
    let (mut x, mut y) = (a.x, a.y);
    let mut points = Vec::with_capacity(dx.max(-dy) as usize + 1);

    loop {
        points.push(PixelPoint::new(x, y));
        if x == b.x && y == b.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> PixelPoint {
        PixelPoint::new(x, y)
    }

    #[test]
    fn single_point() {
        assert_eq!(rasterize_line(p(3, 4), p(3, 4)), vec![p(3, 4)]);
    }

    #[test]
    fn horizontal_and_vertical() {
        assert_eq!(rasterize_line(p(0, 0), p(3, 0)), vec![p(0, 0), p(1, 0), p(2, 0), p(3, 0)]);
        assert_eq!(rasterize_line(p(0, 2), p(0, 0)), vec![p(0, 2), p(0, 1), p(0, 0)]);
    }

    #[test]
    fn diagonal() {
        assert_eq!(rasterize_line(p(0, 0), p(-2, 2)), vec![p(0, 0), p(-1, 1), p(-2, 2)]);
    }

    #[test]
    fn count_and_endpoints_in_every_octant() {
        let ends = [(7, 3), (3, 7), (-3, 7), (-7, 3), (-7, -3), (-3, -7), (3, -7), (7, -3)];
        for (ex, ey) in ends {
            let pts = rasterize_line(p(0, 0), p(ex, ey));
            assert_eq!(pts.len() as i32, ex.abs().max(ey.abs()) + 1, "to ({ex}, {ey})");
            assert_eq!(pts.first(), Some(&p(0, 0)));
            assert_eq!(pts.last(), Some(&p(ex, ey)));
        }
    }

    #[test]
    fn steps_are_eight_connected() {
        let pts = rasterize_line(p(-5, 11), p(17, -4));
        for w in pts.windows(2) {
            let (dx, dy) = (w[1].x - w[0].x, w[1].y - w[0].y);
            assert!(dx.abs() <= 1 && dy.abs() <= 1 && (dx, dy) != (0, 0));
        }
    }

    #[test]
    fn stays_close_to_ideal_segment() {
        let (a, b) = (p(2, 1), p(19, 8));
        for q in rasterize_line(a, b) {
            // Distance from q to the infinite line through a and b.
            let (lx, ly) = ((b.x - a.x) as f32, (b.y - a.y) as f32);
            let cross = (q.x - a.x) as f32 * ly - (q.y - a.y) as f32 * lx;
            let dist = cross.abs() / (lx * lx + ly * ly).sqrt();
            assert!(dist <= 0.75, "{q:?} is {dist} px off the segment");
        }
    }
}
