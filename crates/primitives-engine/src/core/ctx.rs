use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;

use super::app::AppControl;

/// Read-only window handle for the current frame.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Window size in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        let logical: winit::dpi::LogicalSize<f64> =
            self.window.inner_size().to_logical(self.window.scale_factor());
        (logical.width as f32, logical.height as f32)
    }

    pub fn scale_factor(&self) -> f32 {
        self.window.scale_factor() as f32
    }
}

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
///
/// `'a` is the callback borrow; `'w` is the window borrow carried by `Gpu<'w>`.
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
    /// Set when the surface failed beyond recovery during `render`.
    pub(crate) surface_fatal: bool,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    pub(crate) fn new(
        window: &'a Window,
        gpu: &'a mut Gpu<'w>,
        input: &'a InputState,
        input_frame: &'a InputFrame,
        time: FrameTime,
    ) -> Self {
        Self { window: WindowCtx { window }, gpu, input, input_frame, time, surface_fatal: false }
    }

    /// Acquires the next surface image, clears it to `clear`, lets `draw`
    /// record renderer passes, then presents.
    ///
    /// A minimized window or a transient surface error skips the frame.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let size = self.gpu.size();
        if size.width == 0 || size.height == 0 {
            return AppControl::Continue;
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                if self.gpu.handle_surface_error(err) == SurfaceErrorAction::Fatal {
                    self.surface_fatal = true;
                    return AppControl::Exit;
                }
                return AppControl::Continue;
            }
        };

        let [r, g, b, a] = clear.for_target(self.gpu.is_srgb());
        {
            let _clear = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("clear pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let (w, h) = self.window.logical_size();
        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            Viewport::new(w, h),
            (size.width, size.height),
        );

        // RenderTarget borrows the encoder; it must be gone before submit takes the frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);
        AppControl::Continue
    }
}
