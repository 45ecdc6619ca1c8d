use wgpu::SurfaceError;

/// What the frame loop should do after a failed frame acquisition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering resumes next frame.
    Reconfigured,
    /// Transient; skip this frame.
    SkipFrame,
    /// Unrecoverable; shut down.
    Fatal,
}

/// Classifies a surface error. Lost/outdated surfaces need a reconfigure,
/// which [`Gpu::handle_surface_error`](super::Gpu::handle_surface_error) performs.
pub fn surface_error_action(err: &SurfaceError) -> SurfaceErrorAction {
    match err {
        SurfaceError::Lost | SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        SurfaceError::Timeout | SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}
