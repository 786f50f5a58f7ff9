//! Voxel scene model and ray picking

pub mod object;
pub mod model;
pub mod picking;

pub use object::{SceneObject, SceneObjectId};
pub use model::SceneModel;
pub use picking::{pick, Hit, HitTarget};
