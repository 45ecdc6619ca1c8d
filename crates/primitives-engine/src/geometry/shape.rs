use std::borrow::Cow;
use std::f32::consts::TAU;

use crate::coords::Vec2;
use crate::paint::Color;

/// How a vertex sequence is assembled into primitives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    /// Every three vertices form a triangle.
    Triangles,
    /// First vertex is shared by every triangle `(v0, v[i], v[i + 1])`.
    TriangleFan,
    /// Every two vertices form a segment.
    Lines,
    Points,
}

/// A flat-colored 2D primitive in NDC.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub vertices: Vec<Vec2>,
    pub color: Color,
    pub topology: Topology,
}

impl Shape {
    #[inline]
    pub fn new(vertices: Vec<Vec2>, color: Color, topology: Topology) -> Self {
        Self { vertices, color, topology }
    }

    /// Filled circle approximated by a `sides`-gon fan.
    pub fn circle(center: Vec2, radius: f32, sides: u32, color: Color) -> Self {
        Self::new(circle_fan(center, radius, sides), color, Topology::TriangleFan)
    }

    /// Axis-aligned rectangle with its bottom-left corner at `(x, y)`.
    pub fn rectangle(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Self::new(rectangle(x, y, width, height), color, Topology::Triangles)
    }

    pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: Color) -> Self {
        Self::new(triangle(a, b, c), color, Topology::Triangles)
    }

    /// Copy of the shape rotated about the NDC origin.
    pub fn rotated(&self, angle: f32) -> Self {
        Self {
            vertices: self.vertices.iter().map(|&v| rotate(v, angle)).collect(),
            color: self.color,
            topology: self.topology,
        }
    }

    /// Topology after fan expansion; this is what the GPU is asked to draw.
    #[inline]
    pub fn list_topology(&self) -> Topology {
        match self.topology {
            Topology::TriangleFan => Topology::Triangles,
            t => t,
        }
    }

    /// Vertices in list form. Fans are expanded to independent triangles;
    /// other topologies are borrowed unchanged.
    pub fn triangle_list(&self) -> Cow<'_, [Vec2]> {
        match self.topology {
            Topology::TriangleFan => {
                let v = &self.vertices;
                let mut out = Vec::with_capacity(v.len().saturating_sub(2) * 3);
                for i in 1..v.len().saturating_sub(1) {
                    out.extend_from_slice(&[v[0], v[i], v[i + 1]]);
                }
                Cow::Owned(out)
            }
            _ => Cow::Borrowed(&self.vertices),
        }
    }
}

/// Fan vertices for a circle: the center, then `sides + 1` rim points at
/// `angle = i * 2π / sides` for `i = 0..=sides` (the first rim point is
/// repeated to close the fan). `sides + 2` vertices in total.
pub fn circle_fan(center: Vec2, radius: f32, sides: u32) -> Vec<Vec2> {
    let mut vertices = Vec::with_capacity(sides as usize + 2);
    vertices.push(center);
    for i in 0..=sides {
        let angle = i as f32 * TAU / sides as f32;
        let (sin, cos) = angle.sin_cos();
        vertices.push(Vec2::new(center.x + radius * cos, center.y + radius * sin));
    }
    vertices
}

/// Two triangles covering `[x, x + width] × [y, y + height]`.
pub fn rectangle(x: f32, y: f32, width: f32, height: f32) -> Vec<Vec2> {
    vec![
        Vec2::new(x, y),
        Vec2::new(x + width, y),
        Vec2::new(x, y + height),
        Vec2::new(x + width, y),
        Vec2::new(x + width, y + height),
        Vec2::new(x, y + height),
    ]
}

#[inline]
pub fn triangle(a: Vec2, b: Vec2, c: Vec2) -> Vec<Vec2> {
    vec![a, b, c]
}

/// Counter-clockwise rotation of `p` about the origin.
#[inline]
pub fn rotate(p: Vec2, angle: f32) -> Vec2 {
    p.rotated(angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    // ── builders ──────────────────────────────────────────────────────────

    #[test]
    fn circle_fan_layout() {
        let c = Vec2::new(0.2, -0.1);
        let v = circle_fan(c, 0.1, 16);
        assert_eq!(v.len(), 18);
        assert_eq!(v[0], c);
        assert!(approx(v[1], Vec2::new(0.3, -0.1)));
        // Closing point coincides with the first rim point.
        assert!(approx(v[17], v[1]));
        for p in &v[1..] {
            assert!(((*p - c).length() - 0.1).abs() < 1e-5);
        }
    }

    #[test]
    fn rectangle_covers_corners() {
        let v = rectangle(-0.4, -0.1, 0.8, 0.25);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0], Vec2::new(-0.4, -0.1));
        assert!(approx(v[4], Vec2::new(0.4, 0.15)));
    }

    // ── list conversion ───────────────────────────────────────────────────

    #[test]
    fn fan_expands_to_triangle_list() {
        let shape = Shape::circle(Vec2::zero(), 0.05, 12, Color::WHITE);
        assert_eq!(shape.list_topology(), Topology::Triangles);

        let list = shape.triangle_list();
        assert_eq!(list.len(), 12 * 3);
        for tri in list.chunks_exact(3) {
            assert_eq!(tri[0], Vec2::zero());
        }
    }

    #[test]
    fn degenerate_fan_is_empty() {
        let shape = Shape::new(vec![Vec2::zero(), Vec2::new(1.0, 0.0)], Color::WHITE, Topology::TriangleFan);
        assert!(shape.triangle_list().is_empty());
    }

    #[test]
    fn triangles_pass_through_borrowed() {
        let shape = Shape::triangle(Vec2::zero(), Vec2::new(0.3, 0.1), Vec2::new(0.1, 0.3), Color::WHITE);
        assert!(matches!(shape.triangle_list(), Cow::Borrowed(_)));
    }

    #[test]
    fn rotate_quarter_turn() {
        let r = rotate(Vec2::new(0.3, 0.1), std::f32::consts::FRAC_PI_2);
        assert!(approx(r, Vec2::new(-0.1, 0.3)));
    }

    #[test]
    fn rotated_keeps_color_and_topology() {
        let shape = Shape::rectangle(0.0, 0.0, 0.1, 0.1, Color::BLACK);
        let r = shape.rotated(1.0);
        assert_eq!(r.color, shape.color);
        assert_eq!(r.topology, Topology::Triangles);
        assert_eq!(r.vertices.len(), 6);
    }
}
