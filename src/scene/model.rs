//! In-memory voxel scene model
//!
//! The authoritative voxel set, stored as an arena of cell -> scene object
//! entries. Removal is a keyed delete; there are no identity-based scans.

use std::collections::HashMap;

use crate::core::types::Vec3;
use crate::math::{Aabb, CellCoord, GridConfig};
use super::object::{SceneObject, SceneObjectId};

/// The voxel set plus the scene objects representing it
#[derive(Clone, Debug)]
pub struct SceneModel {
    grid: GridConfig,
    objects: HashMap<CellCoord, SceneObject>,
    next_id: u64,
}

impl SceneModel {
    /// Create an empty scene over the given grid
    pub fn new(grid: GridConfig) -> Self {
        Self {
            grid,
            objects: HashMap::new(),
            next_id: 1,
        }
    }

    /// The grid this scene lives on
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Add a voxel at a cell. Out-of-bounds or already-occupied cells are a
    /// silent no-op; returns whether the scene changed.
    pub fn add(&mut self, cell: CellCoord) -> bool {
        let center = self.grid.cell_center(cell);
        if !self.grid.center_in_bounds(center) || self.objects.contains_key(&cell) {
            return false;
        }

        let id = SceneObjectId(self.next_id);
        self.next_id += 1;
        let aabb = Aabb::from_center_half_extent(center, Vec3::splat(self.grid.cube_size * 0.5));
        self.objects.insert(cell, SceneObject::new(id, aabb));
        true
    }

    /// Remove the voxel at a cell; returns whether the scene changed
    pub fn remove(&mut self, cell: CellCoord) -> bool {
        self.objects.remove(&cell).is_some()
    }

    /// Whether a cell is occupied
    pub fn contains(&self, cell: CellCoord) -> bool {
        self.objects.contains_key(&cell)
    }

    /// Number of voxels in the scene
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene has no voxels
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The voxel set in deterministic (x, y, z) order
    pub fn cells(&self) -> Vec<CellCoord> {
        let mut cells: Vec<CellCoord> = self.objects.keys().copied().collect();
        cells.sort_by_key(|c| (c.x, c.y, c.z));
        cells
    }

    /// Iterate cells with their scene objects (pick targets)
    pub fn objects(&self) -> impl Iterator<Item = (&CellCoord, &SceneObject)> {
        self.objects.iter()
    }

    /// Drop every voxel
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Replace the scene wholesale, e.g. from a decoded response or a
    /// restored session. Out-of-bounds and duplicate cells are dropped.
    pub fn replace(&mut self, cells: impl IntoIterator<Item = CellCoord>) {
        self.clear();
        for cell in cells {
            self.add(cell);
        }
    }
}
