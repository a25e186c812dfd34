/// Defines small numeric helpers shared by the other crates:
/// - `Angle`, a radian-backed angle that can be built from degrees,
/// - `min_max` ordering of a pair,
/// - `assert_near!` for scalars that should agree up to rounding.
pub mod float;

/// Homogeneous-coordinate maths module.
/// - Types: 3D points and vectors, 4x4 matrices whose columns are `glam::Vec4`.
/// - Builders for the affine matrices the scene modifiers compose: translation, scaling,
///   axis rotation and pinching.
pub mod hcm;

pub use float::Angle;
pub fn new_rad(rad: f32) -> float::Angle {
    float::Angle::new_rad(rad)
}
pub fn new_deg(deg: f32) -> float::Angle {
    float::Angle::new_deg(deg)
}
