use geometry::{Modifier, Transform};
use math::hcm::Point3;
use math::Angle;

/// Pixel grid and viewing extent of the camera. The image plane sits one unit in front of the
/// camera; `x_range` and `y_range` scale the field of view horizontally and vertically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    pub width: u32,
    pub height: u32,
    pub x_range: f32,
    pub y_range: f32,
    pub fov: Angle,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            x_range: 1.0,
            y_range: 1.0,
            fov: math::new_deg(90.0),
        }
    }
}

/// The scene camera: a modifier positioning it in the world, and the screen it projects onto.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Camera {
    pub modifier: Modifier,
    pub screen: Screen,
}

impl Camera {
    pub fn with_screen(self, screen: Screen) -> Self {
        Self { screen, ..self }
    }

    pub fn apply_modifier(&mut self, step: Modifier) {
        self.modifier = step * self.modifier;
    }

    /// The eye position in world space.
    pub fn origin(&self) -> Point3 {
        self.modifier.apply(Point3::ORIGIN)
    }

    /// World-space width and height covered by one pixel on the image plane.
    pub fn cell_size(&self) -> (f32, f32) {
        let Screen {
            width,
            height,
            x_range,
            y_range,
            fov,
        } = self.screen;
        let span = 2.0 * (fov.to_rad() * 0.5).tan();
        (x_range * span / width as f32, y_range * span / height as f32)
    }
}
