use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::geometry::{Shape, Topology};

use super::shader::{self, LinkDesc, ShaderError, ShaderStage};
use super::ctx::load_attachment;
use super::{RenderCtx, RenderTarget};

/// Draws [`Shape`] lists in painter's order.
///
/// One pipeline per list topology (triangles, lines, points) over a shared
/// dynamic vertex buffer. Fans are expanded on the CPU.
#[derive(Default)]
pub struct ShapeRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipelines: Option<ShapePipelines>,
    /// Set after a shader failure; the renderer stays inert.
    broken: bool,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,
}

struct ShapePipelines {
    triangles: wgpu::RenderPipeline,
    lines: wgpu::RenderPipeline,
    points: wgpu::RenderPipeline,
}

impl ShapePipelines {
    fn get(&self, topology: Topology) -> &wgpu::RenderPipeline {
        match topology {
            Topology::Triangles | Topology::TriangleFan => &self.triangles,
            Topology::Lines => &self.lines,
            Topology::Points => &self.points,
        }
    }
}

impl ShapeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, shapes: &[Shape]) {
        let (vertices, batches) = build_batches(shapes, ctx.srgb_target());
        if vertices.is_empty() {
            return;
        }

        self.ensure_pipelines(ctx);
        self.ensure_vertex_capacity(ctx, vertices.len());

        let Some(pipelines) = self.pipelines.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&vertices));

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("shape pass"),
            color_attachments: &[Some(load_attachment(target.color_view))],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
        rpass.set_vertex_buffer(0, vbo.slice(..));

        for batch in &batches {
            rpass.set_pipeline(pipelines.get(batch.topology));
            rpass.draw(batch.range.clone(), 0..1);
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.broken || (self.pipeline_format == Some(ctx.surface_format) && self.pipelines.is_some()) {
            return;
        }
        match build_pipelines(ctx) {
            Ok(p) => {
                self.pipelines = Some(p);
                self.pipeline_format = Some(ctx.surface_format);
            }
            Err(err) => {
                log::error!("shape renderer disabled: {err}");
                self.pipelines = None;
                self.broken = true;
            }
        }
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vbo_capacity && self.vbo.is_some() {
            return;
        }
        let new_cap = required.next_power_of_two().max(64);
        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("shape vbo"),
            size: (new_cap * std::mem::size_of::<ShapeVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vbo_capacity = new_cap;
    }
}

fn build_pipelines(ctx: &RenderCtx<'_>) -> Result<ShapePipelines, ShaderError> {
    let vs = shader::compile(ctx.device, "shape vs", include_str!("shaders/shape_vs.wgsl"), ShaderStage::Vertex)?;
    let fs = shader::compile(ctx.device, "color fs", include_str!("shaders/color_fs.wgsl"), ShaderStage::Fragment)?;

    let buffers = [ShapeVertex::layout()];
    let link = |label: &str, topology| {
        shader::link(
            ctx.device,
            &LinkDesc {
                label,
                vertex: &vs,
                fragment: &fs,
                vertex_buffers: &buffers,
                bind_group_layouts: &[],
                topology,
                color_format: ctx.surface_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_stencil: None,
            },
        )
    };

    Ok(ShapePipelines {
        triangles: link("shape triangles", wgpu::PrimitiveTopology::TriangleList)?,
        lines: link("shape lines", wgpu::PrimitiveTopology::LineList)?,
        points: link("shape points", wgpu::PrimitiveTopology::PointList)?,
    })
}

/// Contiguous run of vertices sharing one list topology.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Batch {
    topology: Topology,
    range: Range<u32>,
}

/// Flattens shapes into one vertex stream, merging consecutive shapes that
/// share a list topology. Order is preserved.
fn build_batches(shapes: &[Shape], srgb_target: bool) -> (Vec<ShapeVertex>, Vec<Batch>) {
    let mut vertices = Vec::new();
    let mut batches: Vec<Batch> = Vec::new();

    for shape in shapes {
        let list = shape.triangle_list();
        if list.is_empty() {
            continue;
        }
        let color = shape.color.for_target(srgb_target);
        let start = vertices.len() as u32;
        vertices.extend(list.iter().map(|p| ShapeVertex { pos: p.to_array(), color }));
        let end = vertices.len() as u32;

        let topology = shape.list_topology();
        match batches.last_mut() {
            Some(last) if last.topology == topology => last.range.end = end,
            _ => batches.push(Batch { topology, range: start..end }),
        }
    }

    (vertices, batches)
}

// ── GPU types ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct ShapeVertex {
    pos: [f32; 2],
    color: [f32; 4],
}

impl ShapeVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
