//! The exercises, one [`App`] each.

mod animated;
mod car;
mod circle;
mod drawing;
mod flower;
mod perspective;
mod pinwheel;

use clap::ValueEnum;
use primitives_engine::core::{App, FrameCtx};

use animated::AnimatedScene;
use car::Car;
use circle::CircleScene;
use drawing::DrawingScene;
use flower::Flower;
use perspective::PerspectiveScene;
use pinwheel::Pinwheel;

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum Exercise {
    FlowerStatic,
    PinwheelStatic,
    Drawing,
    Circle,
    Car,
    Flower,
    Pinwheel,
    Perspective,
}

impl Exercise {
    pub fn title(self) -> &'static str {
        match self {
            Exercise::FlowerStatic => "Flower (static)",
            Exercise::PinwheelStatic => "Pinwheel (static)",
            Exercise::Drawing => "Bresenham lines",
            Exercise::Circle => "Midpoint circle",
            Exercise::Car => "Car",
            Exercise::Flower => "Flower",
            Exercise::Pinwheel => "Pinwheel",
            Exercise::Perspective => "Perspective projection",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Exercise::FlowerStatic => "five triangle-fan circles, drawn once",
            Exercise::PinwheelStatic => "four triangle blades and a hub, drawn once",
            Exercise::Drawing => "freehand lines and triangle outlines on a CPU canvas (r/t/k/e/c, digits)",
            Exercise::Circle => "click to rasterize a radius-60 circle at the cursor",
            Exercise::Car => "a car bouncing between two limits",
            Exercise::Flower => "petals rotating around a fixed center",
            Exercise::Pinwheel => "blades rotating around a fixed hub",
            Exercise::Perspective => "fly camera over a cube, a ground plane and axes",
        }
    }

    /// The name accepted on the command line.
    pub fn cli_name(self) -> String {
        self.to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default()
    }
}

/// Builds the scene for `exercise`.
pub fn build(exercise: Exercise) -> Box<dyn App> {
    match exercise {
        Exercise::FlowerStatic => Box::new(AnimatedScene::still(Flower::new())),
        Exercise::PinwheelStatic => Box::new(AnimatedScene::still(Pinwheel::new())),
        Exercise::Drawing => Box::new(DrawingScene::new()),
        Exercise::Circle => Box::new(CircleScene::new()),
        Exercise::Car => Box::new(AnimatedScene::animated(Car::new())),
        Exercise::Flower => Box::new(AnimatedScene::animated(Flower::new())),
        Exercise::Pinwheel => Box::new(AnimatedScene::animated(Pinwheel::new())),
        Exercise::Perspective => Box::new(PerspectiveScene::new()),
    }
}

/// Canvas size matching the window in logical pixels, which is the space
/// pointer positions arrive in.
pub(crate) fn logical_canvas_size(ctx: &FrameCtx<'_, '_>) -> (u32, u32) {
    let (w, h) = ctx.window.logical_size();
    (w.round().max(0.0) as u32, h.round().max(0.0) as u32)
}
