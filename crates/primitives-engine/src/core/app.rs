use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// An exercise driven by the runtime, one call per rendered frame.
///
/// Input arrives already folded into `ctx.input` / `ctx.input_frame`.
pub trait App {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}

impl<A: App + ?Sized> App for Box<A> {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        (**self).on_frame(ctx)
    }
}
