mod aabb;
mod transform;

pub use aabb::AABB;
pub use transform::{is_pure_translation, translation};
