use primitives_engine::coords::PixelPoint;
use primitives_engine::core::{App, AppControl, FrameCtx};
use primitives_engine::input::{ButtonState, InputEvent, MouseButton};
use primitives_engine::paint::Color;
use primitives_engine::raster::{rasterize_circle, RasterCanvas};
use primitives_engine::render::CanvasRenderer;

use super::logical_canvas_size;

const RADIUS: i32 = 60;
const POINT_SIZE: u32 = 2;
const BACKGROUND: Color = Color::BLACK;
const INK: Color = Color::WHITE;

/// Click anywhere to rasterize a circle there; each click replaces the last.
pub struct CircleScene {
    radius: i32,
    points: Vec<PixelPoint>,
    canvas: RasterCanvas,
    renderer: CanvasRenderer,
}

impl CircleScene {
    pub fn new() -> Self {
        Self {
            radius: RADIUS,
            points: Vec::new(),
            canvas: RasterCanvas::new(0, 0, BACKGROUND),
            renderer: CanvasRenderer::new(),
        }
    }

    /// Replaces the current circle with one centered on `center`.
    pub fn place(&mut self, center: PixelPoint) {
        self.points = rasterize_circle(center, self.radius);
        log::debug!("circle at ({}, {}): {} points", center.x, center.y, self.points.len());
        self.repaint();
    }

    /// Resizes the canvas, replotting the current circle if the size changed.
    pub fn fit(&mut self, width: u32, height: u32) {
        if (width, height) == (self.canvas.width(), self.canvas.height()) {
            return;
        }
        self.canvas.resize(width, height, BACKGROUND);
        self.repaint();
    }

    fn repaint(&mut self) {
        self.canvas.clear(BACKGROUND);
        self.canvas.plot_points(&self.points, INK, POINT_SIZE);
    }
}

impl App for CircleScene {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = logical_canvas_size(ctx);
        self.fit(w, h);

        for ev in &ctx.input_frame.events {
            if let InputEvent::PointerButton {
                button: MouseButton::Left,
                state: ButtonState::Pressed,
                x,
                y,
            } = *ev
            {
                self.place(PixelPoint::from_logical(x, y));
            }
        }

        let canvas = &self.canvas;
        let renderer = &mut self.renderer;
        ctx.render(BACKGROUND, |rctx, target| renderer.render(rctx, target, canvas))
    }
}
