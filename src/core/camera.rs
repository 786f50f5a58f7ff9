//! Orbit camera for the cube canvas

use crate::core::types::{Mat4, Vec2, Vec3};
use crate::math::Ray;

/// Perspective camera orbiting a fixed target (the grid center)
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    /// Point the camera orbits and looks at
    pub target: Vec3,
    /// Rotation around Y axis in radians
    yaw: f32,
    /// Elevation in radians
    pitch: f32,
    /// Distance from the target
    pub radius: f32,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Orbit speed in radians per pixel of drag
    pub sensitivity: f32,
    viewport: Vec2,
    near: f32,
    far: f32,
}

impl OrbitCamera {
    /// Create a camera orbiting `target` at `radius`, rendering into a
    /// viewport of the given pixel size
    pub fn new(target: Vec3, radius: f32, width: f32, height: f32) -> Self {
        Self {
            target,
            yaw: 0.75,
            pitch: 0.6,
            radius,
            fov_y: 45.0_f32.to_radians(),
            sensitivity: 0.005,
            viewport: Vec2::new(width, height),
            near: 1.0,
            far: 10_000.0,
        }
    }

    /// World-space eye position
    pub fn position(&self) -> Vec3 {
        let dir = Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        );
        self.target + dir * self.radius
    }

    /// Apply a drag delta in pixels to the orbit angles.
    /// Pitch is clamped so the camera stays above the floor plane.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch + dy * self.sensitivity).clamp(0.05, 1.5);
    }

    /// Get current yaw
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Get current pitch
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set orbit angles directly (pitch clamped as in [`Self::orbit`])
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(0.05, 1.5);
    }

    /// Update viewport size (call on container resize)
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Current viewport size in pixels
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// View matrix (world to camera space)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Projection matrix (camera to clip space, 0..1 depth)
    pub fn projection_matrix(&self) -> Mat4 {
        let aspect = self.viewport.x / self.viewport.y;
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Pick ray through a viewport pixel, via the inverse view-projection
    pub fn screen_ray(&self, px: f32, py: f32) -> Ray {
        let ndc_x = 2.0 * px / self.viewport.x - 1.0;
        let ndc_y = 1.0 - 2.0 * py / self.viewport.y;

        let inv = self.view_projection().inverse();
        let near = inv.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        Ray::new(near, (far - near).normalize())
    }

    /// Project a world point to viewport pixels; None if behind the camera
    pub fn world_to_screen(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        ))
    }
}
