//! Freehand Bresenham lines and triangle outlines on a CPU canvas.
//!
//! Keys: `r` lines, `t` triangles, `k` color mode, `e` width mode, `c` clear.
//! Digits pick the color (0-9) or the stroke width (1-9) in the matching mode.

use std::fmt;

use primitives_engine::coords::PixelPoint;
use primitives_engine::core::{App, AppControl, FrameCtx};
use primitives_engine::input::{ButtonState, InputEvent, Key, MouseButton};
use primitives_engine::paint::Color;
use primitives_engine::raster::RasterCanvas;
use primitives_engine::render::CanvasRenderer;

use super::logical_canvas_size;

const PALETTE: [&str; 10] = [
    "#000000", "#e11d48", "#f97316", "#eab308", "#22c55e",
    "#06b6d4", "#2563eb", "#7c3aed", "#db2777", "#64748b",
];

const BACKGROUND: Color = Color::WHITE;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mode {
    Line,
    Triangle,
    Color,
    Width,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Line => "lines",
            Mode::Triangle => "triangle",
            Mode::Color => "color (press 0-9)",
            Mode::Width => "width (press 1-9)",
        })
    }
}

/// What the side panel would show.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Status {
    pub mode: Mode,
    pub width: u32,
    pub color_index: usize,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mode: {} | width: {} | color: {} ({})",
            self.mode, self.width, self.color_index, PALETTE[self.color_index]
        )
    }
}

/// Tool state, independent of the window.
#[derive(Debug, Clone)]
pub struct DrawingState {
    pub mode: Mode,
    pub color_index: usize,
    pub stroke_width: u32,
    drawing: bool,
    last: Option<PixelPoint>,
    /// Triangle corners placed so far (fewer than three).
    triangle_points: Vec<PixelPoint>,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            mode: Mode::Line,
            color_index: 0,
            stroke_width: 2,
            drawing: false,
            last: None,
            triangle_points: Vec::with_capacity(3),
        }
    }
}

impl DrawingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Status {
        Status { mode: self.mode, width: self.stroke_width, color_index: self.color_index }
    }

    pub fn color(&self) -> Color {
        Color::from_hex(PALETTE[self.color_index]).unwrap_or(Color::BLACK)
    }

    /// Routes one input event; strokes land on `canvas` immediately.
    pub fn handle_event(&mut self, ev: &InputEvent, canvas: &mut RasterCanvas) {
        match *ev {
            InputEvent::PointerButton { button: MouseButton::Left, state: ButtonState::Pressed, x, y } => {
                self.pointer_down(PixelPoint::from_logical(x, y), canvas);
            }
            InputEvent::PointerButton { state: ButtonState::Released, .. } => self.pointer_up(),
            InputEvent::PointerMoved { x, y } => {
                self.pointer_moved(PixelPoint::from_logical(x, y), canvas);
            }
            InputEvent::Key { key, state: ButtonState::Pressed, .. } => self.key_pressed(key, canvas),
            _ => {}
        }
    }

    pub fn pointer_down(&mut self, p: PixelPoint, canvas: &mut RasterCanvas) {
        match self.mode {
            Mode::Line => {
                self.drawing = true;
                self.last = Some(p);
            }
            Mode::Triangle => {
                self.triangle_points.push(p);
                if let [a, b, c] = self.triangle_points[..] {
                    canvas.stroke_triangle([a, b, c], self.color(), self.stroke_width);
                    log::debug!("triangle {a:?} {b:?} {c:?}");
                    self.triangle_points.clear();
                }
            }
            Mode::Color | Mode::Width => {}
        }
    }

    pub fn pointer_moved(&mut self, p: PixelPoint, canvas: &mut RasterCanvas) {
        if !self.drawing || self.mode != Mode::Line {
            return;
        }
        let Some(last) = self.last else { return };
        canvas.stroke_line(last, p, self.color(), self.stroke_width);
        self.last = Some(p);
    }

    pub fn pointer_up(&mut self) {
        self.drawing = false;
        self.last = None;
    }

    pub fn key_pressed(&mut self, key: Key, canvas: &mut RasterCanvas) {
        match key {
            Key::R => self.mode = Mode::Line,
            Key::T => self.mode = Mode::Triangle,
            Key::K => self.mode = Mode::Color,
            Key::E => self.mode = Mode::Width,
            Key::C => {
                canvas.clear(BACKGROUND);
                self.triangle_points.clear();
            }
            _ => {}
        }

        let Some(digit) = key.digit_value() else { return };
        match self.mode {
            Mode::Color => self.color_index = digit as usize,
            Mode::Width if digit >= 1 => self.stroke_width = digit as u32,
            _ => {}
        }
    }
}

/// Window scene: a white canvas at the window's logical size.
pub struct DrawingScene {
    state: DrawingState,
    canvas: RasterCanvas,
    renderer: CanvasRenderer,
    last_status: Option<Status>,
}

impl DrawingScene {
    pub fn new() -> Self {
        Self {
            state: DrawingState::new(),
            canvas: RasterCanvas::new(0, 0, BACKGROUND),
            renderer: CanvasRenderer::new(),
            last_status: None,
        }
    }
}

impl App for DrawingScene {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = logical_canvas_size(ctx);
        self.canvas.resize(w, h, BACKGROUND);

        for ev in &ctx.input_frame.events {
            self.state.handle_event(ev, &mut self.canvas);
        }

        let status = self.state.status();
        if self.last_status != Some(status) {
            log::info!("{status}");
            self.last_status = Some(status);
        }

        let canvas = &self.canvas;
        let renderer = &mut self.renderer;
        ctx.render(BACKGROUND, |rctx, target| renderer.render(rctx, target, canvas))
    }
}
