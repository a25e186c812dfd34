use geometry::bbox::BBox;
use geometry::{Modifier, Transform};
use math::hcm::{Point3, Vec3};

/// An infinite plane through `point` with the given (not necessarily unit) `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Point3,
    pub normal: Vec3,
}

impl Plane {
    pub fn new(point: Point3, normal: Vec3) -> Self {
        Self { point, normal }
    }
}

/// A flat-shaded triangle; the face normal follows the winding `v0 -> v1 -> v2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3; 3],
}

impl Triangle {
    pub fn new(vertices: [Point3; 3]) -> Self {
        Self { vertices }
    }

    pub fn face_normal(&self) -> Vec3 {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0).cross(v2 - v0)
    }

    pub(crate) fn local_bounds(&self) -> BBox {
        self.vertices
            .iter()
            .fold(BBox::empty(), |b, v| b.union(*v))
    }

    pub(crate) fn bounds_under(&self, modifier: &Modifier) -> BBox {
        self.vertices
            .iter()
            .fold(BBox::empty(), |b, v| b.union(modifier.apply(*v)))
    }
}

/// A triangle with a normal per vertex, which the renderer interpolates across the face for smooth
/// shading of tessellated surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpTriangle {
    pub vertices: [Point3; 3],
    pub normals: [Vec3; 3],
}

impl InterpTriangle {
    pub fn new(vertices: [Point3; 3], normals: [Vec3; 3]) -> Self {
        Self { vertices, normals }
    }

    pub fn flat(&self) -> Triangle {
        Triangle::new(self.vertices)
    }

    pub(crate) fn local_bounds(&self) -> BBox {
        self.flat().local_bounds()
    }

    pub(crate) fn bounds_under(&self, modifier: &Modifier) -> BBox {
        self.flat().bounds_under(modifier)
    }
}
