use bytemuck::{Pod, Zeroable};

use crate::coords::Mat4;
use crate::geometry::{Mesh, Topology, Vertex3};
use crate::paint::Color;

use super::shader::{self, LinkDesc, ShaderError, ShaderStage};
use super::ctx::load_attachment;
use super::{RenderCtx, RenderTarget};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// One mesh placed in the world.
#[derive(Debug, Copy, Clone)]
pub struct MeshDraw<'a> {
    pub mesh: &'a Mesh,
    pub model: Mat4,
}

/// Depth-tested 3D renderer for [`Mesh`] lists.
///
/// Per-draw transforms live in one uniform buffer addressed with dynamic
/// offsets; the depth texture follows the surface size.
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    triangles: Option<wgpu::RenderPipeline>,
    lines: Option<wgpu::RenderPipeline>,
    broken: bool,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    ubo: Option<wgpu::Buffer>,
    ubo_slots: usize,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,
    ibo: Option<wgpu::Buffer>,
    ibo_capacity: usize,

    depth_view: Option<wgpu::TextureView>,
    depth_size: (u32, u32),
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        view: Mat4,
        projection: Mat4,
        draws: &[MeshDraw<'_>],
    ) {
        let packed = pack_meshes(draws, ctx.srgb_target());
        if packed.ranges.is_empty() {
            return;
        }

        self.ensure_pipelines(ctx);
        if self.broken {
            return;
        }
        let stride = uniform_stride(ctx.device.limits().min_uniform_buffer_offset_alignment);
        self.ensure_uniforms(ctx, draws.len(), stride);
        self.ensure_geometry_capacity(ctx, packed.vertices.len(), packed.indices.len());
        self.ensure_depth(ctx);

        let Some(triangles) = self.triangles.as_ref() else { return };
        let Some(lines) = self.lines.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(ubo) = self.ubo.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };
        let Some(ibo) = self.ibo.as_ref() else { return };
        let Some(depth_view) = self.depth_view.as_ref() else { return };

        let mut uniform_bytes = vec![0u8; draws.len() * stride as usize];
        for (i, draw) in draws.iter().enumerate() {
            let u = MeshUniform {
                model: draw.model.to_cols_array(),
                view: view.to_cols_array(),
                projection: projection.to_cols_array(),
            };
            let at = i * stride as usize;
            uniform_bytes[at..at + MESH_UNIFORM_SIZE].copy_from_slice(bytemuck::bytes_of(&u));
        }
        ctx.queue.write_buffer(ubo, 0, &uniform_bytes);
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&packed.vertices));
        if !packed.indices.is_empty() {
            ctx.queue.write_buffer(ibo, 0, bytemuck::cast_slice(&packed.indices));
        }

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("mesh pass"),
            color_attachments: &[Some(load_attachment(target.color_view))],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Discard,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint16);

        for (i, range) in packed.ranges.iter().enumerate() {
            let pipeline = match range.topology {
                Topology::Lines => lines,
                _ => triangles,
            };
            rpass.set_pipeline(pipeline);
            rpass.set_bind_group(0, bind_group, &[i as u32 * stride]);
            match range.kind {
                DrawKind::Indexed { first_index, count } => {
                    rpass.draw_indexed(first_index..first_index + count, range.base_vertex as i32, 0..1);
                }
                DrawKind::Direct { count } => {
                    rpass.draw(range.base_vertex..range.base_vertex + count, 0..1);
                }
            }
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.broken || (self.pipeline_format == Some(ctx.surface_format) && self.triangles.is_some()) {
            return;
        }

        let bind_group_layout = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mesh bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: Some(UNIFORM_BINDING_SIZE),
                },
                count: None,
            }],
        });

        match build_pipelines(ctx, &bind_group_layout) {
            Ok((triangles, lines)) => {
                self.triangles = Some(triangles);
                self.lines = Some(lines);
                self.pipeline_format = Some(ctx.surface_format);
                self.bind_group_layout = Some(bind_group_layout);
                self.bind_group = None;
                self.ubo = None;
                self.ubo_slots = 0;
            }
            Err(err) => {
                log::error!("mesh renderer disabled: {err}");
                self.triangles = None;
                self.lines = None;
                self.broken = true;
            }
        }
    }

    fn ensure_uniforms(&mut self, ctx: &RenderCtx<'_>, draws: usize, stride: u32) {
        if draws <= self.ubo_slots && self.bind_group.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let slots = draws.next_power_of_two().max(4);
        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("mesh ubo"),
            size: slots as u64 * stride as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("mesh bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &ubo,
                    offset: 0,
                    size: Some(UNIFORM_BINDING_SIZE),
                }),
            }],
        });

        self.ubo = Some(ubo);
        self.bind_group = Some(bind_group);
        self.ubo_slots = slots;
    }

    fn ensure_geometry_capacity(&mut self, ctx: &RenderCtx<'_>, vertices: usize, indices: usize) {
        if vertices > self.vbo_capacity || self.vbo.is_none() {
            let cap = vertices.next_power_of_two().max(64);
            self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("mesh vbo"),
                size: (cap * std::mem::size_of::<Vertex3>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vbo_capacity = cap;
        }
        if indices > self.ibo_capacity || self.ibo.is_none() {
            let cap = indices.next_power_of_two().max(64);
            self.ibo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("mesh ibo"),
                size: (cap * std::mem::size_of::<u16>()) as u64,
                usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.ibo_capacity = cap;
        }
    }

    fn ensure_depth(&mut self, ctx: &RenderCtx<'_>) {
        let (w, h) = (ctx.surface_size.0.max(1), ctx.surface_size.1.max(1));
        if self.depth_view.is_some() && self.depth_size == (w, h) {
            return;
        }
        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("mesh depth"),
            size: wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        self.depth_view = Some(texture.create_view(&wgpu::TextureViewDescriptor::default()));
        self.depth_size = (w, h);
        log::debug!("mesh depth buffer {w}x{h}");
    }
}

fn build_pipelines(
    ctx: &RenderCtx<'_>,
    bind_group_layout: &wgpu::BindGroupLayout,
) -> Result<(wgpu::RenderPipeline, wgpu::RenderPipeline), ShaderError> {
    let vs = shader::compile(ctx.device, "mesh vs", include_str!("shaders/mesh_vs.wgsl"), ShaderStage::Vertex)?;
    let fs = shader::compile(ctx.device, "color fs", include_str!("shaders/color_fs.wgsl"), ShaderStage::Fragment)?;

    let buffers = [vertex_layout()];
    let layouts = [bind_group_layout];
    let link = |label: &str, topology| {
        shader::link(
            ctx.device,
            &LinkDesc {
                label,
                vertex: &vs,
                fragment: &fs,
                vertex_buffers: &buffers,
                bind_group_layouts: &layouts,
                topology,
                color_format: ctx.surface_format,
                blend: None,
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
            },
        )
    };

    Ok((
        link("mesh triangles", wgpu::PrimitiveTopology::TriangleList)?,
        link("mesh lines", wgpu::PrimitiveTopology::LineList)?,
    ))
}

// ── packing ───────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum DrawKind {
    Indexed { first_index: u32, count: u32 },
    Direct { count: u32 },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct DrawRange {
    topology: Topology,
    base_vertex: u32,
    kind: DrawKind,
}

/// All meshes of a frame concatenated into shared vertex and index streams.
#[derive(Debug, Default)]
struct PackedMeshes {
    vertices: Vec<Vertex3>,
    /// Padded to an even length; buffer writes must be 4-byte multiples.
    indices: Vec<u16>,
    /// One entry per input draw, in order.
    ranges: Vec<DrawRange>,
}

fn pack_meshes(draws: &[MeshDraw<'_>], srgb_target: bool) -> PackedMeshes {
    let mut packed = PackedMeshes::default();

    for draw in draws {
        let mesh = draw.mesh;
        let base_vertex = packed.vertices.len() as u32;
        packed.vertices.extend(mesh.vertices.iter().map(|v| {
            let [r, g, b, _] = Color::from_array(v.color).for_target(srgb_target);
            Vertex3::new(v.position, [r, g, b])
        }));

        let kind = if mesh.is_indexed() {
            let first_index = packed.indices.len() as u32;
            packed.indices.extend_from_slice(&mesh.indices);
            DrawKind::Indexed { first_index, count: mesh.indices.len() as u32 }
        } else {
            DrawKind::Direct { count: mesh.vertices.len() as u32 }
        };

        packed.ranges.push(DrawRange { topology: mesh.topology, base_vertex, kind });
    }

    if packed.indices.len() % 2 == 1 {
        packed.indices.push(0);
    }
    packed
}

/// Distance between per-draw uniform slots.
fn uniform_stride(alignment: u32) -> u32 {
    let size = MESH_UNIFORM_SIZE as u32;
    let alignment = alignment.max(1);
    size.div_ceil(alignment) * alignment
}

// ── GPU types ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct MeshUniform {
    model: [f32; 16],
    view: [f32; 16],
    projection: [f32; 16],
}

const MESH_UNIFORM_SIZE: usize = std::mem::size_of::<MeshUniform>();

const UNIFORM_BINDING_SIZE: wgpu::BufferSize = match wgpu::BufferSize::new(MESH_UNIFORM_SIZE as u64) {
    Some(size) => size,
    None => unreachable!(),
};

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
    0 => Float32x3, // position
    1 => Float32x3  // color
];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex3>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}
