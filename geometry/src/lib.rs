/// Defines the `BBox` bounding-box type.
pub mod bbox;
pub mod transform;

pub use transform::{AffineTransform, Modifier, Transform};
