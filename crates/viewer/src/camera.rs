use cgmath::{InnerSpace, Point3, Vector3};
use winit::event::{
    ElementState, KeyboardInput, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent,
};

// This is needed because wgpu uses Direct-X style coordinates while cgmath uses
// OpenGL style coordinates.
//
// This matrix simply transforms the coordinates used by cgmath into the ones
// that wgpu need.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

// Used when the mesh has no extent to frame.
const DEFAULT_DISTANCE: f32 = 10.0;

pub struct Camera {
    // Where the camera is located.
    pub eye: Point3<f32>,
    // Where the camera is pointing. The camera orbits around this point.
    pub target: Point3<f32>,
    // The orientation of the camera.
    pub up: Vector3<f32>,
    // The aspect ratio of the scene (width:height).
    pub aspect: f32,
    // The vertical field of view in degrees.
    pub fovy: f32,
    // Near and far clipping planes.
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Places the camera so that a model with the given bounds fits in view.
    ///
    /// The camera looks at the centre of the bounds from the +z side, slightly raised.
    /// `distance` overrides the computed orbit radius.
    pub fn framing(
        bounds: Option<(Vector3<f32>, Vector3<f32>)>,
        aspect: f32,
        distance: Option<f32>,
    ) -> Self {
        let fovy: f32 = 45.0;
        let (target, radius) = match bounds {
            Some((min, max)) => {
                let center = (min + max) * 0.5;
                (Point3::new(center.x, center.y, center.z), (max - min).magnitude() * 0.5)
            }
            None => (Point3::new(0.0, 0.0, 0.0), 0.0),
        };
        let distance = distance.unwrap_or_else(|| {
            if radius > 0.0 {
                // Distance at which a sphere of `radius` touches the top and bottom of the view.
                radius / (fovy.to_radians() * 0.5).sin() * 1.1
            } else {
                DEFAULT_DISTANCE
            }
        });
        let direction = Vector3::new(0.0, 0.25, 1.0).normalize();
        let mut camera = Self {
            eye: target + direction * distance,
            target,
            // Use 'y' as the vertical axis.
            up: Vector3::unit_y(),
            aspect,
            fovy,
            znear: 0.1,
            zfar: 100.0,
        };
        camera.fit_clip_planes();
        camera
    }

    pub fn distance(&self) -> f32 {
        (self.target - self.eye).magnitude()
    }

    /// Keeps the clipping planes proportional to the orbit radius so that zooming never clips
    /// the model.
    pub fn fit_clip_planes(&mut self) {
        let distance = self.distance();
        self.znear = (distance * 0.01).max(1e-4);
        self.zfar = distance * 100.0;
    }

    /// Builds the view projection matrix.
    ///
    /// This is what is used by the GPU to map world coordinates into clip coordinates.
    pub fn build_view_projection_matrix(&self) -> cgmath::Matrix4<f32> {
        let view = cgmath::Matrix4::look_at_rh(self.eye, self.target, self.up);
        let proj = cgmath::perspective(cgmath::Deg(self.fovy), self.aspect, self.znear, self.zfar);
        OPENGL_TO_WGPU_MATRIX * proj * view
    }
}

// We need this for Rust to store our data correctly for the shaders
#[repr(C)]
// This is so we can store this in a buffer
#[derive(Debug, Copy, Clone, bytemuck_derive::Pod, bytemuck_derive::Zeroable)]
pub struct CameraUniform {
    // We can't use cgmath with bytemuck directly so we'll have
    // to convert the Matrix4 into a 4x4 f32 array
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        use cgmath::SquareMatrix;
        Self {
            view_proj: cgmath::Matrix4::identity().into(),
        }
    }

    /// Updates the view projection in our uniform buffer using the camera.
    ///
    /// By placing this in a uniform buffer, we make this matrix available to
    /// our vertex shader.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_view_projection_matrix().into();
    }
}

/// Mouse and keyboard orbit controls.
///
/// Dragging with the left button orbits around the target, the wheel zooms. The arrow keys
/// (or WASD) orbit horizontally and zoom.
pub struct CameraController {
    // Radians of rotation per pixel of mouse movement.
    rotate_speed: f32,
    // Fraction of the orbit radius covered by one zoom step.
    zoom_speed: f32,
    is_forward_pressed: bool,
    is_backward_pressed: bool,
    is_left_pressed: bool,
    is_right_pressed: bool,
    is_dragging: bool,
    cursor_position: winit::dpi::PhysicalPosition<f64>,
    last_drag_position: winit::dpi::PhysicalPosition<f64>,
    pending_zoom: f32,
}

impl CameraController {
    pub fn new(rotate_speed: f32, zoom_speed: f32) -> Self {
        Self {
            rotate_speed,
            zoom_speed,
            is_forward_pressed: false,
            is_backward_pressed: false,
            is_left_pressed: false,
            is_right_pressed: false,
            is_dragging: false,
            cursor_position: winit::dpi::PhysicalPosition { x: 0.0, y: 0.0 },
            last_drag_position: winit::dpi::PhysicalPosition { x: 0.0, y: 0.0 },
            pending_zoom: 0.0,
        }
    }

    // Read input events and update state based on which keys are pressed.
    pub fn process_events(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state,
                        virtual_keycode: Some(keycode),
                        ..
                    },
                ..
            } => {
                let is_pressed = *state == ElementState::Pressed;
                match keycode {
                    VirtualKeyCode::W | VirtualKeyCode::Up => {
                        self.is_forward_pressed = is_pressed;
                        true
                    }
                    VirtualKeyCode::A | VirtualKeyCode::Left => {
                        self.is_left_pressed = is_pressed;
                        true
                    }
                    VirtualKeyCode::S | VirtualKeyCode::Down => {
                        self.is_backward_pressed = is_pressed;
                        true
                    }
                    VirtualKeyCode::D | VirtualKeyCode::Right => {
                        self.is_right_pressed = is_pressed;
                        true
                    }
                    _ => false,
                }
            }
            WindowEvent::MouseInput { state, button, .. } if *button == MouseButton::Left => {
                self.is_dragging = *state == ElementState::Pressed;
                self.last_drag_position = self.cursor_position;
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_position = *position;
                self.is_dragging
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.pending_zoom += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    // Roughly one line per 50 pixels of trackpad scrolling.
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / 50.0,
                };
                true
            }
            _ => false,
        }
    }

    // Move the camera in response to the input collected since the last frame.
    pub fn update_camera(&mut self, camera: &mut Camera) {
        let mut zoom = std::mem::take(&mut self.pending_zoom);
        if self.is_forward_pressed {
            zoom += 1.0;
        }
        if self.is_backward_pressed {
            zoom -= 1.0;
        }
        if zoom != 0.0 {
            // Scale the radius rather than stepping a fixed amount so zoom feels the same for
            // models of any size. The radius never reaches zero.
            let factor = (1.0 - self.zoom_speed).powf(zoom);
            camera.eye = camera.target - (camera.target - camera.eye) * factor;
        }

        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.is_right_pressed {
            dx += 1.0;
        }
        if self.is_left_pressed {
            dx -= 1.0;
        }
        if self.is_dragging && self.cursor_position != self.last_drag_position {
            // Faster mouse movements result in faster rotations.
            dx += (self.last_drag_position.x - self.cursor_position.x) as f32;
            dy += (self.last_drag_position.y - self.cursor_position.y) as f32;
            self.last_drag_position = self.cursor_position;
        }
        if dx != 0.0 || dy != 0.0 {
            self.orbit(camera, dx * self.rotate_speed, dy * self.rotate_speed);
        }

        camera.fit_clip_planes();
    }

    // Rotates the eye around the target while keeping the distance between them fixed.
    fn orbit(&self, camera: &mut Camera, horizontal: f32, vertical: f32) {
        let forward = camera.target - camera.eye;
        let radius = forward.magnitude();
        let forward_norm = forward.normalize();
        let right = forward_norm.cross(camera.up).normalize();

        let mut rotated = forward_norm + right * horizontal;
        let with_vertical = (rotated - camera.up * vertical).normalize();
        // Stop short of the poles, look_at degenerates when forward is parallel to up.
        if with_vertical.dot(camera.up).abs() < 0.99 {
            rotated = with_vertical;
        }
        camera.eye = camera.target - rotated.normalize() * radius;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    fn cube_bounds() -> Option<(Vector3<f32>, Vector3<f32>)> {
        Some((Vector3::new(0.0, 0.0, 0.0), Vector3::new(20.0, 20.0, 20.0)))
    }

    #[test]
    fn framing_targets_center() {
        let camera = Camera::framing(cube_bounds(), 1.0, None);
        assert_eq!(Point3::new(10.0, 10.0, 10.0), camera.target);
        // Half diagonal is ~17.3, which must fit in the view.
        assert!(camera.distance() > 17.3 / (22.5f32).to_radians().sin());
        assert!(camera.znear < camera.distance());
    }

    #[test]
    fn framing_honours_distance_override() {
        let camera = Camera::framing(cube_bounds(), 1.0, Some(50.0));
        assert_float_eq!(50.0, camera.distance(), rmax <= 1e-5);
        let camera = Camera::framing(None, 1.0, None);
        assert_float_eq!(DEFAULT_DISTANCE, camera.distance(), rmax <= 1e-5);
    }

    #[test]
    fn orbit_keeps_distance() {
        let mut camera = Camera::framing(cube_bounds(), 1.0, Some(40.0));
        let mut controller = CameraController::new(0.01, 0.1);
        controller.is_right_pressed = true;
        controller.is_dragging = true;
        controller.cursor_position = winit::dpi::PhysicalPosition { x: 30.0, y: -12.0 };
        let before = camera.eye;
        controller.update_camera(&mut camera);
        assert_ne!(before, camera.eye);
        assert_float_eq!(40.0, camera.distance(), rmax <= 1e-4);
    }

    #[test]
    fn zoom_scales_radius() {
        let mut camera = Camera::framing(cube_bounds(), 1.0, Some(40.0));
        let mut controller = CameraController::new(0.01, 0.1);
        controller.pending_zoom = 1.0;
        controller.update_camera(&mut camera);
        assert_float_eq!(36.0, camera.distance(), rmax <= 1e-4);

        controller.pending_zoom = -1.0;
        controller.update_camera(&mut camera);
        assert_float_eq!(40.0, camera.distance(), rmax <= 1e-4);
        assert_float_eq!(0.4, camera.znear, rmax <= 1e-4);
    }
}
