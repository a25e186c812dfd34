use geometry::bbox::BBox;
use geometry::Modifier;
use material::Material;
use math::hcm::Vec3;

use crate::Object;

/// The objects produced by one mesh import. Modifiers and normalization act on every member at
/// once until the members are handed to the scene individually.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSet {
    objects: Vec<Object>,
}

impl ObjectSet {
    pub fn new() -> Self {
        Self { objects: vec![] }
    }

    pub fn push(&mut self, object: Object) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Object> {
        self.objects.iter()
    }

    /// Combined bounds of all members; empty if the set is.
    pub fn bounds(&self) -> BBox {
        self.objects
            .iter()
            .fold(BBox::empty(), |b, obj| b.merge(obj.bounds()))
    }

    pub fn apply_modifier(&mut self, step: Modifier) {
        for obj in self.objects.iter_mut() {
            obj.apply_modifier(step);
        }
    }

    /// Scales every member uniformly about the origin so that the combined half-extent along
    /// `axis` becomes 1. Returns the scale factor used, or `None` (leaving the set untouched) if
    /// the set has no finite, non-zero extent along that axis.
    pub fn unit_axis(&mut self, axis: usize) -> Option<f32> {
        let half_extent = self.bounds().half_extent()[axis];
        if !half_extent.is_finite() || half_extent <= 0.0 {
            return None;
        }
        let factor = 1.0 / half_extent;
        self.apply_modifier(Modifier::scaler(Vec3::splat(factor)));
        Some(factor)
    }

    /// Translates every member so the combined bounds are centered on the origin. Returns the
    /// offset applied, or `None` for an empty or unbounded set.
    pub fn center(&mut self) -> Option<Vec3> {
        let bounds = self.bounds();
        if bounds.is_empty() {
            return None;
        }
        let offset = -Vec3::from(bounds.midpoint());
        if offset.has_nan() || !offset.norm_squared().is_finite() {
            return None;
        }
        self.apply_modifier(Modifier::translater(offset));
        Some(offset)
    }

    pub fn set_material(&mut self, material: &Material) {
        for obj in self.objects.iter_mut() {
            obj.material = material.clone();
        }
    }
}

impl IntoIterator for ObjectSet {
    type Item = Object;
    type IntoIter = std::vec::IntoIter<Object>;
    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}

impl std::iter::FromIterator<Object> for ObjectSet {
    fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}
