mod set;
mod simple;

use geometry::bbox::BBox;
use geometry::{Modifier, Transform};
use material::Material;
use math::hcm::Point3;

pub use set::ObjectSet;
pub use simple::*;

/// The kinds of primitive a scene can hold.
///
/// `Box`, `Sphere` and `Cone` have no parameters of their own: each is a unit primitive filling
/// `[-1, 1]^3` and takes its size, placement and orientation entirely from the object's modifier.
/// Planes and triangles carry their defining points, which the modifier then acts on.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Box,
    Sphere,
    Cone { has_caps: bool },
    Plane(Plane),
    Triangle(Triangle),
    InterpTriangle(InterpTriangle),
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Box => "Box",
            Shape::Sphere => "Sphere",
            Shape::Cone { .. } => "Cone",
            Shape::Plane(_) => "Plane",
            Shape::Triangle(_) => "Triangle",
            Shape::InterpTriangle(_) => "InterpTriangle",
        }
    }

    /// Bounding box in object space, before the modifier applies.
    fn local_bounds(&self) -> BBox {
        match self {
            Shape::Box | Shape::Sphere | Shape::Cone { .. } => {
                BBox::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0))
            }
            Shape::Plane(_) => BBox::infinite(),
            Shape::Triangle(t) => t.local_bounds(),
            Shape::InterpTriangle(t) => t.local_bounds(),
        }
    }
}

/// A shape placed in the scene: the primitive, the transform accumulated from its modifiers in
/// the order they were written, and its material.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub shape: Shape,
    pub modifier: Modifier,
    pub material: Material,
}

impl Object {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            modifier: Modifier::identity(),
            material: Material::default(),
        }
    }

    /// Composes `step` after everything already applied to this object.
    pub fn apply_modifier(&mut self, step: Modifier) {
        self.modifier = step * self.modifier;
    }

    /// World-space bounds after the modifier.
    pub fn bounds(&self) -> BBox {
        match &self.shape {
            Shape::Plane(_) => BBox::infinite(),
            Shape::Triangle(t) => t.bounds_under(&self.modifier),
            Shape::InterpTriangle(t) => t.bounds_under(&self.modifier),
            shape => self.modifier.apply(shape.local_bounds()),
        }
    }

    pub fn summary(&self) -> String {
        let details = match &self.shape {
            Shape::Cone { has_caps: false } => " (no caps)".to_owned(),
            Shape::Plane(p) => format!(" through {} normal {}", p.point, p.normal),
            _ => String::new(),
        };
        format!(
            "{}{} bounds {} material {}",
            self.shape.name(),
            details,
            self.bounds(),
            self.material.summary()
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use math::assert_close;
    use math::hcm::{point3, vec3, Vec3};

    #[test]
    fn box_bounds_follow_modifier() {
        let mut b = Object::new(Shape::Box);
        b.apply_modifier(Modifier::scaler(vec3(1.0, 2.0, 3.0)));
        b.apply_modifier(Modifier::translater(vec3(1.0, 1.0, 1.0)));
        let bounds = b.bounds();
        assert_close!(Vec3::from(bounds.min()), vec3(0.0, -1.0, -2.0));
        assert_close!(Vec3::from(bounds.max()), vec3(2.0, 3.0, 4.0));
    }

    #[test]
    fn triangle_bounds_are_tight() {
        let tri = Triangle::new([
            point3(0.0, 0.0, 0.0),
            point3(1.0, 0.0, 0.0),
            point3(0.0, 1.0, 0.0),
        ]);
        let mut obj = Object::new(Shape::Triangle(tri));
        obj.apply_modifier(Modifier::translater(vec3(0.0, 0.0, 5.0)));
        let bounds = obj.bounds();
        assert_close!(Vec3::from(bounds.min()), vec3(0.0, 0.0, 5.0));
        assert_close!(Vec3::from(bounds.max()), vec3(1.0, 1.0, 5.0));
    }

    #[test]
    fn plane_is_unbounded() {
        let plane = Object::new(Shape::Plane(Plane::new(Point3::ORIGIN, Vec3::Y)));
        assert_eq!(plane.bounds(), BBox::infinite());
        assert!(plane.summary().starts_with("Plane through"));
    }
}
