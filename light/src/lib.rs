use math::hcm::Point3;
use radiometry::color::Color;
use std::fmt;

/// A spherical point light. `radius` is zero for a true point light; a positive radius gives the
/// renderer an area to sample for soft shadows.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub position: Point3,
    pub color: Color,
    pub intensity: f32,
    pub radius: f32,
    /// Whether the light dims with the squared distance.
    pub falloff: bool,
}

impl Light {
    /// Creates a light with the given position and color, intensity 1, zero radius and no falloff.
    pub fn new(position: Point3, color: Color) -> Self {
        Self {
            position,
            color,
            intensity: 1.0,
            radius: 0.0,
            falloff: false,
        }
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "light at {} color {} intensity {} radius {}",
            self.position, self.color, self.intensity, self.radius
        )?;
        if self.falloff {
            write!(f, " (falloff)")?;
        }
        Ok(())
    }
}
