//! Shader compilation and pipeline linking shared by every renderer.
//!
//! WGSL is parsed and validated with naga before it reaches the device, so a
//! bad shader turns into a [`ShaderError`] instead of a device validation
//! failure. Entry points are fixed per stage: `vs_main` and `fs_main`.

use std::fmt;

/// Programmable stage a shader module is compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn entry_point(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vs_main",
            ShaderStage::Fragment => "fs_main",
        }
    }

    fn naga_stage(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    /// Source failed to parse or validate, or lacks the stage's entry point.
    Compile { label: String, messages: Vec<String> },
    /// Stages could not be combined into a pipeline.
    Link { label: String, reason: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Compile { label, messages } => {
                write!(f, "shader `{label}` failed to compile")?;
                for m in messages {
                    write!(f, "\n{m}")?;
                }
                Ok(())
            }
            ShaderError::Link { label, reason } => {
                write!(f, "pipeline `{label}` failed to link: {reason}")
            }
        }
    }
}

impl std::error::Error for ShaderError {}

/// A validated shader module for one stage.
#[derive(Debug)]
pub struct CompiledShader {
    label: String,
    stage: ShaderStage,
    module: wgpu::ShaderModule,
}

impl CompiledShader {
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    #[inline]
    pub fn module(&self) -> &wgpu::ShaderModule {
        &self.module
    }
}

/// Parses and validates `source` as a `stage` shader without touching a device.
pub fn validate_wgsl(label: &str, source: &str, stage: ShaderStage) -> Result<(), ShaderError> {
    let fail = |messages: Vec<String>| ShaderError::Compile { label: label.to_owned(), messages };

    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| fail(vec![e.emit_to_string(source)]))?;

    naga::valid::Validator::new(naga::valid::ValidationFlags::all(), naga::valid::Capabilities::empty())
        .validate(&module)
        .map_err(|e| fail(vec![e.emit_to_string(source)]))?;

    let entry = stage.entry_point();
    let found = module
        .entry_points
        .iter()
        .any(|ep| ep.name == entry && ep.stage == stage.naga_stage());
    if !found {
        return Err(fail(vec![format!("no {stage} entry point named `{entry}`")]));
    }
    Ok(())
}

/// Compiles WGSL for one stage.
///
/// Validation happens up front; the device's own compilation messages are
/// checked afterwards for backend-specific errors.
pub fn compile(
    device: &wgpu::Device,
    label: &str,
    source: &str,
    stage: ShaderStage,
) -> Result<CompiledShader, ShaderError> {
    validate_wgsl(label, source, stage)?;

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    let info = pollster::block_on(module.get_compilation_info());
    let errors: Vec<String> = info
        .messages
        .iter()
        .filter(|m| matches!(m.message_type, wgpu::CompilationMessageType::Error))
        .map(|m| m.message.clone())
        .collect();
    if !errors.is_empty() {
        return Err(ShaderError::Compile { label: label.to_owned(), messages: errors });
    }

    log::debug!("compiled {stage} shader `{label}`");
    Ok(CompiledShader { label: label.to_owned(), stage, module })
}

/// Everything needed to link a vertex and a fragment shader into a pipeline.
pub struct LinkDesc<'a> {
    pub label: &'a str,
    pub vertex: &'a CompiledShader,
    pub fragment: &'a CompiledShader,
    pub vertex_buffers: &'a [wgpu::VertexBufferLayout<'a>],
    pub bind_group_layouts: &'a [&'a wgpu::BindGroupLayout],
    pub topology: wgpu::PrimitiveTopology,
    pub color_format: wgpu::TextureFormat,
    pub blend: Option<wgpu::BlendState>,
    pub depth_stencil: Option<wgpu::DepthStencilState>,
}

/// Checks that the stages and target fit together.
pub fn check_link(
    label: &str,
    vertex: ShaderStage,
    fragment: ShaderStage,
    color_format: wgpu::TextureFormat,
) -> Result<(), ShaderError> {
    let fail = |reason: String| ShaderError::Link { label: label.to_owned(), reason };

    if vertex != ShaderStage::Vertex {
        return Err(fail(format!("expected a vertex shader, got {vertex}")));
    }
    if fragment != ShaderStage::Fragment {
        return Err(fail(format!("expected a fragment shader, got {fragment}")));
    }
    if color_format.is_depth_stencil_format() {
        return Err(fail(format!("{color_format:?} is not a color format")));
    }
    Ok(())
}

/// Links two compiled stages into a render pipeline.
pub fn link(device: &wgpu::Device, desc: &LinkDesc<'_>) -> Result<wgpu::RenderPipeline, ShaderError> {
    check_link(desc.label, desc.vertex.stage(), desc.fragment.stage(), desc.color_format)?;

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(desc.label),
        bind_group_layouts: desc.bind_group_layouts,
        immediate_size: 0,
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(desc.label),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: desc.vertex.module(),
            entry_point: Some(ShaderStage::Vertex.entry_point()),
            compilation_options: Default::default(),
            buffers: desc.vertex_buffers,
        },
        fragment: Some(wgpu::FragmentState {
            module: desc.fragment.module(),
            entry_point: Some(ShaderStage::Fragment.entry_point()),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: desc.color_format,
                blend: desc.blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: desc.topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: desc.depth_stencil.clone(),
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    });

    log::debug!("linked pipeline `{}` ({:?})", desc.label, desc.topology);
    Ok(pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAPE_VS: &str = include_str!("shaders/shape_vs.wgsl");
    const COLOR_FS: &str = include_str!("shaders/color_fs.wgsl");
    const MESH_VS: &str = include_str!("shaders/mesh_vs.wgsl");
    const CANVAS_VS: &str = include_str!("shaders/canvas_vs.wgsl");
    const CANVAS_FS: &str = include_str!("shaders/canvas_fs.wgsl");

    fn compile_messages(err: ShaderError) -> Vec<String> {
        match err {
            ShaderError::Compile { messages, .. } => messages,
            other => panic!("expected compile error, got {other:?}"),
        }
    }

    // ── bundled shaders ───────────────────────────────────────────────────

    #[test]
    fn bundled_shaders_validate() {
        validate_wgsl("shape vs", SHAPE_VS, ShaderStage::Vertex).unwrap();
        validate_wgsl("color fs", COLOR_FS, ShaderStage::Fragment).unwrap();
        validate_wgsl("mesh vs", MESH_VS, ShaderStage::Vertex).unwrap();
        validate_wgsl("canvas vs", CANVAS_VS, ShaderStage::Vertex).unwrap();
        validate_wgsl("canvas fs", CANVAS_FS, ShaderStage::Fragment).unwrap();
    }

    // ── failures ──────────────────────────────────────────────────────────

    #[test]
    fn syntax_error_is_reported() {
        let err = validate_wgsl("broken", "@vertex fn vs_main( -> {", ShaderStage::Vertex).unwrap_err();
        let messages = compile_messages(err);
        assert_eq!(messages.len(), 1);
        assert!(!messages[0].is_empty());
    }

    #[test]
    fn type_error_is_reported() {
        let src = "@fragment fn fs_main() -> @location(0) vec4<f32> { return 1.0; }";
        assert!(validate_wgsl("bad type", src, ShaderStage::Fragment).is_err());
    }

    #[test]
    fn wrong_stage_is_reported() {
        let err = validate_wgsl("color fs", COLOR_FS, ShaderStage::Vertex).unwrap_err();
        let messages = compile_messages(err);
        assert!(messages[0].contains("vs_main"));
    }

    #[test]
    fn link_rejects_swapped_stages() {
        let fmt = wgpu::TextureFormat::Bgra8UnormSrgb;
        assert!(check_link("ok", ShaderStage::Vertex, ShaderStage::Fragment, fmt).is_ok());

        let err = check_link("swapped", ShaderStage::Fragment, ShaderStage::Vertex, fmt).unwrap_err();
        assert!(matches!(err, ShaderError::Link { ref label, .. } if label == "swapped"));
    }

    #[test]
    fn link_rejects_depth_target() {
        let err = check_link("depth", ShaderStage::Vertex, ShaderStage::Fragment, wgpu::TextureFormat::Depth32Float)
            .unwrap_err();
        assert!(err.to_string().contains("not a color format"));
    }

    #[test]
    fn display_lists_messages() {
        let err = ShaderError::Compile { label: "x".into(), messages: vec!["a".into(), "b".into()] };
        assert_eq!(err.to_string(), "shader `x` failed to compile\na\nb");
    }
}
