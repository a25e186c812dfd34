use crate::bbox::BBox;
use math::hcm::{Mat4, Point3, Vec3};
use math::Angle;
use std::ops::Mul;

/// An affine transform of object space into world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    forward: Mat4,
}

pub trait Transform<T> {
    fn apply(&self, x: T) -> T;
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    pub fn identity() -> Self {
        Self {
            forward: Mat4::IDENTITY,
        }
    }
    pub fn translater(t: Vec3) -> Self {
        Self {
            forward: Mat4::translater(t),
        }
    }
    pub fn scaler(scale: Vec3) -> Self {
        Self {
            forward: Mat4::nonuniform_scale(scale),
        }
    }
    pub fn rotater_x(angle: Angle) -> Self {
        Self {
            forward: Mat4::rotater_x(angle),
        }
    }
    pub fn rotater_y(angle: Angle) -> Self {
        Self {
            forward: Mat4::rotater_y(angle),
        }
    }
    pub fn rotater_z(angle: Angle) -> Self {
        Self {
            forward: Mat4::rotater_z(angle),
        }
    }
    pub fn pincher(m: f32, n: f32) -> Self {
        Self {
            forward: Mat4::pincher(m, n),
        }
    }
}

impl Mul for AffineTransform {
    type Output = AffineTransform;
    /// `a * b` applies `b` first.
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            forward: self.forward * rhs.forward,
        }
    }
}

/// The transform accumulated by the scene's `translate`/`scale`/`rotate`/`pinch` directives.
pub use AffineTransform as Modifier;

// Transforms on:
// - Vec3
// - Point3
// - BBox
// -------------------------------------------------------------------------------------------------

impl Transform<Vec3> for AffineTransform {
    fn apply(&self, x: Vec3) -> Vec3 {
        self.forward * x
    }
}
impl Transform<Point3> for AffineTransform {
    fn apply(&self, p: Point3) -> Point3 {
        self.forward * p
    }
}
impl Transform<BBox> for AffineTransform {
    fn apply(&self, b: BBox) -> BBox {
        if b.is_empty() {
            return b;
        }
        b.all_corners()
            .iter()
            .fold(BBox::empty(), |res_box, corner| res_box.union(self.apply(*corner)))
    }
}
