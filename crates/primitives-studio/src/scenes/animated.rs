use primitives_engine::core::{App, AppControl, FrameCtx};
use primitives_engine::geometry::Shape;
use primitives_engine::paint::Color;
use primitives_engine::render::ShapeRenderer;

/// A frame-stepped 2D figure.
pub trait Animation {
    /// Shapes for the next frame in painter's order.
    ///
    /// State advances by one step when `animate` is set; the implementor
    /// decides whether the step lands before or after the returned frame.
    fn next_frame(&mut self, animate: bool) -> Vec<Shape>;
}

/// Draws an [`Animation`] on black, one step per rendered frame.
pub struct AnimatedScene<T> {
    anim: T,
    animate: bool,
    renderer: ShapeRenderer,
}

impl<T: Animation> AnimatedScene<T> {
    pub fn animated(anim: T) -> Self {
        Self { anim, animate: true, renderer: ShapeRenderer::new() }
    }

    /// Always shows the initial frame.
    pub fn still(anim: T) -> Self {
        Self { anim, animate: false, renderer: ShapeRenderer::new() }
    }
}

impl<T: Animation> App for AnimatedScene<T> {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let shapes = self.anim.next_frame(self.animate);
        let renderer = &mut self.renderer;
        ctx.render(Color::BLACK, |rctx, target| renderer.render(rctx, target, &shapes))
    }
}
