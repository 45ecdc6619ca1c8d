use primitives_engine::coords::Vec2;
use primitives_engine::geometry::Shape;
use primitives_engine::paint::Color;

use super::animated::Animation;

const HUB_RADIUS: f32 = 0.05;
const HUB_SIDES: u32 = 12;
const SPIN: f32 = 0.03;

const HUB: Color = Color::WHITE;

/// Blade triangles, counter-clockwise from the first quadrant.
const BLADES: [([Vec2; 3], Color); 4] = [
    (
        [Vec2::new(0.0, 0.0), Vec2::new(0.3, 0.1), Vec2::new(0.1, 0.3)],
        Color::rgb(1.0, 0.2, 0.2),
    ),
    (
        [Vec2::new(0.0, 0.0), Vec2::new(-0.1, 0.3), Vec2::new(-0.3, 0.1)],
        Color::rgb(0.2, 0.2, 1.0),
    ),
    (
        [Vec2::new(0.0, 0.0), Vec2::new(-0.3, -0.1), Vec2::new(-0.1, -0.3)],
        Color::rgb(0.2, 1.0, 0.2),
    ),
    (
        [Vec2::new(0.0, 0.0), Vec2::new(0.1, -0.3), Vec2::new(0.3, -0.1)],
        Color::rgb(1.0, 1.0, 0.2),
    ),
];

/// Four blades spinning about the origin under a fixed hub.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pinwheel {
    pub rotation: f32,
}

impl Pinwheel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> Vec<Shape> {
        let mut shapes: Vec<Shape> = BLADES
            .iter()
            .map(|&([a, b, c], color)| Shape::triangle(a, b, c, color).rotated(self.rotation))
            .collect();
        shapes.push(Shape::circle(Vec2::zero(), HUB_RADIUS, HUB_SIDES, HUB));
        shapes
    }
}

impl Animation for Pinwheel {
    fn next_frame(&mut self, animate: bool) -> Vec<Shape> {
        let shapes = self.shapes();
        if animate {
            self.rotation += SPIN;
        }
        shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives_engine::geometry::Topology;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn hub_is_drawn_last() {
        let shapes = Pinwheel::new().shapes();
        assert_eq!(shapes.len(), 5);
        let hub = &shapes[4];
        assert_eq!(hub.color, HUB);
        assert_eq!(hub.topology, Topology::TriangleFan);
        assert_eq!(hub.vertices.len(), HUB_SIDES as usize + 2);
        for blade in &shapes[..4] {
            assert_eq!(blade.topology, Topology::Triangles);
            assert_eq!(blade.vertices.len(), 3);
        }
    }

    #[test]
    fn quarter_turn_maps_each_blade_onto_the_next() {
        let turned = Pinwheel { rotation: std::f32::consts::FRAC_PI_2 }.shapes();
        let rest = Pinwheel::new().shapes();
        for i in 0..4 {
            let next = &rest[(i + 1) % 4];
            for (a, b) in turned[i].vertices.iter().zip(&next.vertices) {
                assert!(approx(*a, *b), "blade {i}: {a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn hub_ignores_rotation() {
        let turned = Pinwheel { rotation: 1.0 }.shapes();
        assert_eq!(turned[4], Pinwheel::new().shapes()[4]);
    }

    #[test]
    fn spins_per_frame_when_animated() {
        let mut wheel = Pinwheel::new();
        wheel.next_frame(true);
        wheel.next_frame(true);
        assert!((wheel.rotation - 2.0 * SPIN).abs() < 1e-6);

        let mut still = Pinwheel::new();
        still.next_frame(false);
        assert_eq!(still.rotation, 0.0);
    }
}
