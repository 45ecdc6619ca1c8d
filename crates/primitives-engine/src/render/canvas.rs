use crate::raster::RasterCanvas;

use super::ctx::load_attachment;
use super::shader::{self, LinkDesc, ShaderError, ShaderStage};
use super::{RenderCtx, RenderTarget};

/// Shows a [`RasterCanvas`] stretched over the whole surface.
///
/// The canvas is uploaded to a texture of the same size whenever its
/// revision changes and sampled with nearest filtering, so canvas pixels
/// stay crisp at any window scale.
#[derive(Default)]
pub struct CanvasRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    broken: bool,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    sampler: Option<wgpu::Sampler>,

    texture: Option<wgpu::Texture>,
    texture_size: (u32, u32),
    texture_format: Option<wgpu::TextureFormat>,
    uploaded_revision: Option<u64>,
}

impl CanvasRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, canvas: &RasterCanvas) {
        if canvas.width() == 0 || canvas.height() == 0 {
            return;
        }

        self.ensure_pipeline(ctx);
        if self.broken {
            return;
        }
        self.ensure_texture(ctx, canvas);
        self.upload(ctx, canvas);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("canvas pass"),
            color_attachments: &[Some(load_attachment(target.color_view))],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.broken || (self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some()) {
            return;
        }

        let bind_group_layout = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("canvas bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        match build_pipeline(ctx, &bind_group_layout) {
            Ok(pipeline) => {
                self.pipeline = Some(pipeline);
                self.pipeline_format = Some(ctx.surface_format);
                self.bind_group_layout = Some(bind_group_layout);
                // Texture format depends on the surface; rebuild it and its bindings.
                self.texture = None;
                self.bind_group = None;
                self.uploaded_revision = None;
            }
            Err(err) => {
                log::error!("canvas renderer disabled: {err}");
                self.pipeline = None;
                self.broken = true;
            }
        }
    }

    fn ensure_texture(&mut self, ctx: &RenderCtx<'_>, canvas: &RasterCanvas) {
        let size = (canvas.width(), canvas.height());
        let format = texture_format(ctx.srgb_target());
        if self.texture.is_some()
            && self.texture_size == size
            && self.texture_format == Some(format)
            && self.bind_group.is_some()
        {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("canvas texture"),
            size: wgpu::Extent3d { width: size.0, height: size.1, depth_or_array_layers: 1 },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = self.sampler.get_or_insert_with(|| {
            ctx.device.create_sampler(&wgpu::SamplerDescriptor {
                label: Some("canvas sampler"),
                address_mode_u: wgpu::AddressMode::ClampToEdge,
                address_mode_v: wgpu::AddressMode::ClampToEdge,
                address_mode_w: wgpu::AddressMode::ClampToEdge,
                mag_filter: wgpu::FilterMode::Nearest,
                min_filter: wgpu::FilterMode::Nearest,
                mipmap_filter: wgpu::MipmapFilterMode::Nearest,
                ..Default::default()
            })
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("canvas bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: wgpu::BindingResource::TextureView(&view) },
                wgpu::BindGroupEntry { binding: 1, resource: wgpu::BindingResource::Sampler(sampler) },
            ],
        });

        log::debug!("canvas texture {}x{} ({format:?})", size.0, size.1);
        self.texture = Some(texture);
        self.texture_size = size;
        self.texture_format = Some(format);
        self.bind_group = Some(bind_group);
        self.uploaded_revision = None;
    }

    fn upload(&mut self, ctx: &RenderCtx<'_>, canvas: &RasterCanvas) {
        if self.uploaded_revision == Some(canvas.revision()) {
            return;
        }
        let Some(texture) = self.texture.as_ref() else { return };

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            canvas.as_bytes(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(canvas.width() * 4),
                rows_per_image: Some(canvas.height()),
            },
            wgpu::Extent3d { width: canvas.width(), height: canvas.height(), depth_or_array_layers: 1 },
        );
        self.uploaded_revision = Some(canvas.revision());
    }
}

/// Canvas bytes are sRGB-encoded; an sRGB texture decodes them on sampling
/// and the sRGB surface re-encodes on write. A linear surface gets the raw
/// bytes through a plain UNORM texture instead.
fn texture_format(srgb_target: bool) -> wgpu::TextureFormat {
    if srgb_target { wgpu::TextureFormat::Rgba8UnormSrgb } else { wgpu::TextureFormat::Rgba8Unorm }
}

fn build_pipeline(
    ctx: &RenderCtx<'_>,
    bind_group_layout: &wgpu::BindGroupLayout,
) -> Result<wgpu::RenderPipeline, ShaderError> {
    let vs = shader::compile(ctx.device, "canvas vs", include_str!("shaders/canvas_vs.wgsl"), ShaderStage::Vertex)?;
    let fs = shader::compile(ctx.device, "canvas fs", include_str!("shaders/canvas_fs.wgsl"), ShaderStage::Fragment)?;

    shader::link(
        ctx.device,
        &LinkDesc {
            label: "canvas",
            vertex: &vs,
            fragment: &fs,
            vertex_buffers: &[],
            bind_group_layouts: &[bind_group_layout],
            topology: wgpu::PrimitiveTopology::TriangleList,
            color_format: ctx.surface_format,
            blend: None,
            depth_stencil: None,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_format_matches_surface_encoding() {
        assert!(texture_format(true).is_srgb());
        assert!(!texture_format(false).is_srgb());
    }
}
