use primitives_engine::camera::{FlyCamera, FlyControls};
use primitives_engine::coords::Mat4;
use primitives_engine::core::{App, AppControl, FrameCtx};
use primitives_engine::geometry::Mesh;
use primitives_engine::paint::Color;
use primitives_engine::render::{MeshDraw, MeshRenderer};

const CONTROLS: &str = "W/S forward/back, A/D strafe, Q/E down/up, Left/Right arrows turn, Esc quits";

struct World {
    cube: Mesh,
    plane: Mesh,
    axes: Mesh,
}

impl World {
    fn new() -> Self {
        Self { cube: Mesh::cube(), plane: Mesh::ground_plane(), axes: Mesh::axes() }
    }

    /// Draw list in submission order; every mesh sits at the world origin.
    fn draws(&self) -> [MeshDraw<'_>; 3] {
        [
            MeshDraw { mesh: &self.cube, model: Mat4::IDENTITY },
            MeshDraw { mesh: &self.plane, model: Mat4::IDENTITY },
            MeshDraw { mesh: &self.axes, model: Mat4::IDENTITY },
        ]
    }
}

/// Fly camera over a cube, a ground plane and the world axes.
pub struct PerspectiveScene {
    camera: FlyCamera,
    world: World,
    renderer: MeshRenderer,
    announced: bool,
}

impl PerspectiveScene {
    pub fn new() -> Self {
        Self {
            camera: FlyCamera::default(),
            world: World::new(),
            renderer: MeshRenderer::new(),
            announced: false,
        }
    }

    /// Start-up help: key bindings plus the frustum in use.
    fn banner(&self) -> String {
        let f = self.camera.frustum;
        format!(
            "controls: {CONTROLS}; frustum left={} right={} bottom={} top={} near={} far={}",
            f.left, f.right, f.bottom, f.top, f.near, f.far
        )
    }
}

impl App for PerspectiveScene {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if !self.announced {
            log::info!("{}", self.banner());
            self.announced = true;
        }

        self.camera.update(ctx.time.dt, FlyControls::from_input(ctx.input));

        let view = self.camera.view_matrix();
        let projection = self.camera.projection_matrix();
        let draws = self.world.draws();
        let renderer = &mut self.renderer;
        ctx.render(Color::BLACK, |rctx, target| {
            renderer.render(rctx, target, view, projection, &draws)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives_engine::coords::Vec3;
    use primitives_engine::geometry::Topology;

    #[test]
    fn starts_at_the_default_viewpoint() {
        let scene = PerspectiveScene::new();
        assert_eq!(scene.camera.position, Vec3::new(0.0, 1.0, 5.0));
        assert_eq!(scene.camera.yaw, 0.0);
        assert!(!scene.announced);
    }

    #[test]
    fn banner_lists_keys_and_frustum() {
        let banner = PerspectiveScene::new().banner();
        assert!(banner.starts_with("controls: W/S"));
        assert!(banner.ends_with("left=-1 right=1 bottom=-1 top=1 near=0.1 far=100"), "{banner}");
    }

    #[test]
    fn draws_cube_plane_and_axes() {
        let scene = PerspectiveScene::new();
        let draws = scene.world.draws();
        assert_eq!(draws[0].mesh.indices.len(), 36);
        assert_eq!(draws[1].mesh.topology, Topology::Triangles);
        assert_eq!(draws[2].mesh.topology, Topology::Lines);
        assert!(draws.iter().all(|d| d.model == Mat4::IDENTITY));
    }

    #[test]
    fn origin_projects_inside_the_view() {
        let scene = PerspectiveScene::new();
        let clip = scene
            .camera
            .projection_matrix()
            .transform_vec4(scene.camera.view_matrix().transform_vec4([0.0, 0.0, 0.0, 1.0]));
        let (x, y) = (clip[0] / clip[3], clip[1] / clip[3]);
        assert!(clip[3] > 0.0);
        assert!(x.abs() < 1e-4);
        assert!(y < 0.0 && y > -1.0, "origin sits below the eye: {y}");
    }
}
