//! Scene objects: the rendered unit cubes

use crate::math::Aabb;

/// Unique identifier for a scene object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SceneObjectId(pub u64);

/// A rendered unit cube tied 1:1 to an occupied grid cell.
/// Owned exclusively by the scene model: created on add, dropped on remove.
#[derive(Clone, Debug)]
pub struct SceneObject {
    pub id: SceneObjectId,
    /// World-space bounds, the pick target for this cube
    pub aabb: Aabb,
}

impl SceneObject {
    /// Create a new scene object
    pub fn new(id: SceneObjectId, aabb: Aabb) -> Self {
        Self { id, aabb }
    }
}
