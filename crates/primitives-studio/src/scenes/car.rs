use primitives_engine::coords::Vec2;
use primitives_engine::geometry::Shape;
use primitives_engine::paint::Color;

use super::animated::Animation;

const STEP: f32 = 0.01;
const LIMIT: f32 = 0.3;
const WHEEL_SIDES: u32 = 16;

const BODY: Color = Color::rgb(0.8, 0.1, 0.1);
const ROOF: Color = Color::rgb(0.6, 0.1, 0.1);
const WINDSHIELD: Color = Color::rgb(0.7, 0.9, 1.0);
const WHEEL: Color = Color::rgb(0.8, 0.8, 0.8);

/// A car sliding left and right, reversing once it passes `±0.3`.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub x: f32,
    /// `1.0` moving right, `-1.0` moving left.
    pub direction: f32,
}

impl Car {
    pub fn new() -> Self {
        Self { x: 0.0, direction: 1.0 }
    }

    /// Moves one step, then flips direction if a limit was crossed.
    pub fn step(&mut self) {
        self.x += self.direction * STEP;
        if self.x > LIMIT {
            self.direction = -1.0;
        } else if self.x < -LIMIT {
            self.direction = 1.0;
        }
    }

    pub fn shapes(&self) -> Vec<Shape> {
        let x = self.x;
        vec![
            Shape::rectangle(-0.4 + x, -0.1, 0.8, 0.25, BODY),
            Shape::rectangle(-0.3 + x, 0.15, 0.5, 0.2, ROOF),
            Shape::rectangle(-0.2 + x, 0.2, 0.3, 0.1, WINDSHIELD),
            Shape::circle(Vec2::new(-0.25 + x, -0.25), 0.1, WHEEL_SIDES, WHEEL),
            Shape::circle(Vec2::new(0.25 + x, -0.25), 0.1, WHEEL_SIDES, WHEEL),
        ]
    }
}

impl Default for Car {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for Car {
    fn next_frame(&mut self, animate: bool) -> Vec<Shape> {
        if animate {
            self.step();
        }
        self.shapes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives_engine::geometry::Topology;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    // ── motion ────────────────────────────────────────────────────────────

    #[test]
    fn first_frame_has_already_moved() {
        let mut car = Car::new();
        let shapes = car.next_frame(true);
        assert!(approx(car.x, 0.01));
        assert!(approx(shapes[0].vertices[0].x, -0.39));
    }

    #[test]
    fn reverses_past_the_right_limit() {
        let mut car = Car::new();
        let mut steps = 0;
        while car.direction > 0.0 {
            car.step();
            steps += 1;
            assert!(steps < 100, "never reversed");
        }
        assert!(car.x > LIMIT);
        assert!(car.x < LIMIT + 2.0 * STEP);
    }

    #[test]
    fn stays_within_bounds_over_many_frames() {
        let mut car = Car::new();
        let mut saw_left_turn = false;
        for _ in 0..500 {
            let before = car.direction;
            car.step();
            assert!(car.x.abs() <= LIMIT + 2.0 * STEP, "x = {}", car.x);
            if before < 0.0 && car.direction > 0.0 {
                saw_left_turn = true;
            }
        }
        assert!(saw_left_turn);
    }

    #[test]
    fn still_frame_does_not_move() {
        let mut car = Car::new();
        car.next_frame(false);
        car.next_frame(false);
        assert_eq!(car, Car::new());
    }

    // ── shapes ────────────────────────────────────────────────────────────

    #[test]
    fn draw_order_and_topology() {
        let shapes = Car::new().shapes();
        assert_eq!(shapes.len(), 5);
        assert_eq!(shapes[0].color, BODY);
        assert_eq!(shapes[1].color, ROOF);
        assert_eq!(shapes[2].color, WINDSHIELD);
        for wheel in &shapes[3..] {
            assert_eq!(wheel.color, WHEEL);
            assert_eq!(wheel.topology, Topology::TriangleFan);
            assert_eq!(wheel.vertices.len(), WHEEL_SIDES as usize + 2);
        }
    }

    #[test]
    fn wheels_follow_the_car() {
        let car = Car { x: 0.2, direction: 1.0 };
        let shapes = car.shapes();
        let left = shapes[3].vertices[0];
        let right = shapes[4].vertices[0];
        assert!(approx(left.x, -0.05) && approx(left.y, -0.25));
        assert!(approx(right.x, 0.45) && approx(right.y, -0.25));
    }
}
