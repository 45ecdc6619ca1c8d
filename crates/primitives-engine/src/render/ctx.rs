use crate::coords::Viewport;

/// Renderer-facing context for one frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Window size in logical pixels.
    pub viewport: Viewport,
    /// Surface size in physical pixels (attachment size).
    pub surface_size: (u32, u32),
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
        surface_size: (u32, u32),
    ) -> Self {
        Self { device, queue, surface_format, viewport, surface_size }
    }

    /// True when the surface encodes to sRGB on write; colors handed to
    /// shaders must then be linear.
    #[inline]
    pub fn srgb_target(&self) -> bool {
        self.surface_format.is_srgb()
    }
}

/// Where renderers record: the frame encoder and the surface color view.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}

/// Color attachment that keeps what earlier passes drew.
pub(super) fn load_attachment(view: &wgpu::TextureView) -> wgpu::RenderPassColorAttachment<'_> {
    wgpu::RenderPassColorAttachment {
        view,
        resolve_target: None,
        ops: wgpu::Operations { load: wgpu::LoadOp::Load, store: wgpu::StoreOp::Store },
        depth_slice: None,
    }
}
