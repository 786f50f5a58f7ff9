//! Mathematical utilities and data structures

pub mod aabb;
pub mod ray;
pub mod grid;

pub use aabb::Aabb;
pub use ray::{Ray, Face};
pub use grid::{CellCoord, GridConfig};
