use primitives_engine::coords::Vec2;
use primitives_engine::geometry::{rotate, Shape};
use primitives_engine::paint::Color;

use super::animated::Animation;

const RADIUS: f32 = 0.1;
const SIDES: u32 = 20;
const SPIN: f32 = 0.02;

const CENTER: Color = Color::rgb(1.0, 1.0, 0.0);
const PETAL: Color = Color::rgb(1.0, 0.0, 0.0);

const PETALS: [Vec2; 4] = [
    Vec2::new(0.2, 0.0),
    Vec2::new(-0.2, 0.0),
    Vec2::new(0.0, 0.2),
    Vec2::new(0.0, -0.2),
];

/// Yellow center with four red petals orbiting it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flower {
    pub rotation: f32,
}

impl Flower {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(1 + PETALS.len());
        shapes.push(Shape::circle(Vec2::zero(), RADIUS, SIDES, CENTER));
        shapes.extend(
            PETALS
                .iter()
                .map(|&p| Shape::circle(rotate(p, self.rotation), RADIUS, SIDES, PETAL)),
        );
        shapes
    }
}

impl Animation for Flower {
    fn next_frame(&mut self, animate: bool) -> Vec<Shape> {
        let shapes = self.shapes();
        if animate {
            self.rotation += SPIN;
        }
        shapes
    }
}
