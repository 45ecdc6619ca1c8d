use crate::coords::{Mat4, Vec3};
use crate::input::{InputState, Key};

use super::Frustum;

/// Which movement controls are held this frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FlyControls {
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub down: bool,
    pub up: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
}

impl FlyControls {
    /// `w/s` forward/back, `a/d` strafe, `q/e` down/up, arrows yaw.
    pub fn from_input(input: &InputState) -> Self {
        Self {
            forward: input.key_down(Key::W),
            back: input.key_down(Key::S),
            strafe_left: input.key_down(Key::A),
            strafe_right: input.key_down(Key::D),
            down: input.key_down(Key::Q),
            up: input.key_down(Key::E),
            yaw_left: input.key_down(Key::ArrowLeft),
            yaw_right: input.key_down(Key::ArrowRight),
        }
    }
}

/// Yaw-only fly camera with explicit Euler integration.
///
/// Yaw 0 looks down -Z; positive yaw swings the view toward +X.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub frustum: Frustum,
    /// Units per second.
    pub speed: f32,
    /// Radians per second.
    pub rot_speed: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 1.0, 5.0))
    }
}

impl FlyCamera {
    pub fn new(position: Vec3) -> Self {
        Self { position, yaw: 0.0, frustum: Frustum::default(), speed: 2.0, rot_speed: 1.5 }
    }

    /// Horizontal view direction `(sin yaw, 0, -cos yaw)`.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// `(cos yaw, 0, sin yaw)`.
    #[inline]
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Advances the camera by `dt` seconds. Opposing controls cancel.
    pub fn update(&mut self, dt: f32, controls: FlyControls) {
        let step = self.speed * dt;
        let turn = self.rot_speed * dt;
        let forward = self.forward();
        let right = self.right();

        if controls.forward {
            self.position = self.position + forward * step;
        }
        if controls.back {
            self.position = self.position - forward * step;
        }
        if controls.strafe_left {
            self.position = self.position - right * step;
        }
        if controls.strafe_right {
            self.position = self.position + right * step;
        }
        if controls.down {
            self.position.y -= step;
        }
        if controls.up {
            self.position.y += step;
        }
        if controls.yaw_left {
            self.yaw += turn;
        }
        if controls.yaw_right {
            self.yaw -= turn;
        }
    }

    /// Point one unit ahead of the camera.
    #[inline]
    pub fn target(&self) -> Vec3 {
        self.position + self.forward()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.frustum.projection()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ButtonState, InputEvent, InputFrame};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn approx3(a: Vec3, b: Vec3) -> bool {
        approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
    }

    fn only(f: impl FnOnce(&mut FlyControls)) -> FlyControls {
        let mut c = FlyControls::default();
        f(&mut c);
        c
    }

    // ── integration ───────────────────────────────────────────────────────

    #[test]
    fn starts_at_default_pose() {
        let cam = FlyCamera::default();
        assert_eq!(cam.position, Vec3::new(0.0, 1.0, 5.0));
        assert_eq!(cam.yaw, 0.0);
        assert!(approx3(cam.forward(), Vec3::new(0.0, 0.0, -1.0)));
        assert!(approx3(cam.right(), Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn forward_moves_along_minus_z() {
        let mut cam = FlyCamera::default();
        cam.update(0.5, only(|c| c.forward = true));
        assert!(approx3(cam.position, Vec3::new(0.0, 1.0, 4.0)));
    }

    #[test]
    fn strafe_and_vertical() {
        let mut cam = FlyCamera::default();
        cam.update(1.0, only(|c| c.strafe_right = true));
        assert!(approx3(cam.position, Vec3::new(2.0, 1.0, 5.0)));
        cam.update(0.25, only(|c| c.down = true));
        assert!(approx(cam.position.y, 0.5));
        cam.update(0.25, only(|c| c.up = true));
        assert!(approx(cam.position.y, 1.0));
    }

    #[test]
    fn opposing_controls_cancel() {
        let mut cam = FlyCamera::default();
        let all = FlyControls {
            forward: true,
            back: true,
            strafe_left: true,
            strafe_right: true,
            down: true,
            up: true,
            yaw_left: true,
            yaw_right: true,
        };
        cam.update(0.1, all);
        assert!(approx3(cam.position, Vec3::new(0.0, 1.0, 5.0)));
        assert!(approx(cam.yaw, 0.0));
    }

    #[test]
    fn yaw_left_increases_yaw() {
        let mut cam = FlyCamera::default();
        cam.update(std::f32::consts::FRAC_PI_2 / 1.5, only(|c| c.yaw_left = true));
        assert!(approx(cam.yaw, std::f32::consts::FRAC_PI_2));
        // Positive yaw: forward = (sin, 0, -cos) = (1, 0, 0).
        assert!(approx3(cam.forward(), Vec3::new(1.0, 0.0, 0.0)));
        assert!(approx3(cam.right(), Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn movement_uses_current_yaw() {
        let mut cam = FlyCamera::default();
        cam.yaw = std::f32::consts::PI;
        cam.update(1.0, only(|c| c.forward = true));
        assert!(approx3(cam.position, Vec3::new(0.0, 1.0, 7.0)));
    }

    // ── matrices ──────────────────────────────────────────────────────────

    #[test]
    fn target_is_one_unit_ahead() {
        let cam = FlyCamera::default();
        assert!(approx3(cam.target(), Vec3::new(0.0, 1.0, 4.0)));
    }

    #[test]
    fn view_maps_position_to_origin() {
        let mut cam = FlyCamera::default();
        cam.update(0.3, only(|c| c.yaw_left = true));
        cam.update(0.7, only(|c| c.forward = true));
        let p = cam.view_matrix().transform_point(cam.position);
        assert!(approx3(p, Vec3::ZERO));
        let t = cam.view_matrix().transform_point(cam.target());
        assert!(approx3(t, Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn projection_comes_from_frustum() {
        let cam = FlyCamera::default();
        assert_eq!(cam.projection_matrix(), Frustum::default().projection());
    }

    // ── input ─────────────────────────────────────────────────────────────

    #[test]
    fn controls_from_held_keys() {
        let mut input = InputState::default();
        let mut frame = InputFrame::default();
        for key in [Key::W, Key::Q, Key::ArrowRight] {
            input.apply_event(&mut frame, InputEvent::Key { key, state: ButtonState::Pressed, repeat: false });
        }
        let c = FlyControls::from_input(&input);
        assert_eq!(c, FlyControls { forward: true, down: true, yaw_right: true, ..FlyControls::default() });
    }
}
