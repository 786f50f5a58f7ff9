//! Grid cell coordinates and world-space conversions

use serde::{Deserialize, Serialize};

use crate::core::types::Vec3;

/// Integer cell coordinates of one voxel on the placement grid.
/// Each component lies in `[0, divisions)` for an in-grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CellCoord {
    /// Create a new cell coordinate
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The cell directly above this one
    pub fn above(self) -> CellCoord {
        CellCoord::new(self.x, self.y + 1, self.z)
    }
}

/// Grid dimensions, fixed for the lifetime of a widget instance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Number of cells along each axis
    pub divisions: u32,
    /// World units per cell
    pub cube_size: f32,
}

impl GridConfig {
    /// Create a new grid configuration
    pub fn new(divisions: u32, cube_size: f32) -> Self {
        Self { divisions, cube_size }
    }

    /// Full grid extent in world units along one axis
    pub fn grid_size(&self) -> f32 {
        self.divisions as f32 * self.cube_size
    }

    /// World-space center of a cell.
    ///
    /// Lateral axes are centered on the origin; the vertical axis starts at
    /// the floor plane. Odd division counts land centers on whole-cube
    /// boundaries, even counts on half-cube increments. The same offsets are
    /// used by `world_to_cell` and `snap`, so the conversions invert exactly
    /// for both parities.
    pub fn cell_center(&self, cell: CellCoord) -> Vec3 {
        let s = self.cube_size;
        let half = self.grid_size() * 0.5;
        Vec3::new(
            cell.x as f32 * s - half + s * 0.5,
            cell.y as f32 * s + s * 0.5,
            cell.z as f32 * s - half + s * 0.5,
        )
    }

    /// Cell whose center matches a world-space cube center
    pub fn world_to_cell(&self, center: Vec3) -> CellCoord {
        let s = self.cube_size;
        let half = self.grid_size() * 0.5;
        CellCoord::new(
            ((center.x + half - s * 0.5) / s).round() as i32,
            ((center.y - s * 0.5) / s).round() as i32,
            ((center.z + half - s * 0.5) / s).round() as i32,
        )
    }

    /// Snap an arbitrary world point (typically a floor hit) to its cell
    pub fn snap(&self, point: Vec3) -> CellCoord {
        let s = self.cube_size;
        let half = self.grid_size() * 0.5;
        CellCoord::new(
            ((point.x + half) / s).floor() as i32,
            (point.y / s).floor() as i32,
            ((point.z + half) / s).floor() as i32,
        )
    }

    /// Whether a cell lies inside the grid
    pub fn contains_cell(&self, cell: CellCoord) -> bool {
        let d = self.divisions as i32;
        cell.x >= 0 && cell.x < d && cell.y >= 0 && cell.y < d && cell.z >= 0 && cell.z < d
    }

    /// Whether a candidate cube center stays inside the grid volume:
    /// within the lateral extent and the vertical column above the floor
    pub fn center_in_bounds(&self, center: Vec3) -> bool {
        let half = self.grid_size() * 0.5;
        center.x.abs() <= half
            && center.z.abs() <= half
            && center.y >= 0.0
            && center.y <= self.grid_size()
    }

    /// Top-layer cells sit within one cube height of the grid ceiling
    pub fn is_top_layer(&self, cell: CellCoord) -> bool {
        cell.y >= self.divisions as i32 - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_center_even() {
        // Even divisions: centers on half-cube increments
        let grid = GridConfig::new(4, 100.0);
        assert_eq!(grid.cell_center(CellCoord::new(0, 0, 0)), Vec3::new(-150.0, 50.0, -150.0));
        assert_eq!(grid.cell_center(CellCoord::new(3, 0, 3)), Vec3::new(150.0, 50.0, 150.0));
    }

    #[test]
    fn test_cell_center_odd() {
        // Odd divisions: lateral centers on whole-cube boundaries
        let grid = GridConfig::new(3, 100.0);
        assert_eq!(grid.cell_center(CellCoord::new(0, 0, 1)), Vec3::new(-100.0, 50.0, 0.0));
        assert_eq!(grid.cell_center(CellCoord::new(1, 1, 1)), Vec3::new(0.0, 150.0, 0.0));
    }

    #[test]
    fn test_round_trip_both_parities() {
        for divisions in [1, 2, 3, 4, 5, 8] {
            let grid = GridConfig::new(divisions, 100.0);
            let d = divisions as i32;
            for x in 0..d {
                for y in 0..d {
                    for z in 0..d {
                        let cell = CellCoord::new(x, y, z);
                        assert_eq!(grid.world_to_cell(grid.cell_center(cell)), cell);
                        assert_eq!(grid.snap(grid.cell_center(cell)), cell);
                    }
                }
            }
        }
    }

    #[test]
    fn test_snap_floor_hit() {
        let grid = GridConfig::new(4, 100.0);
        // A point anywhere inside a cell's footprint snaps to that cell
        let cell = grid.snap(Vec3::new(-170.0, 0.0, 130.0));
        assert_eq!(cell, CellCoord::new(0, 0, 3));
    }

    #[test]
    fn test_bounds() {
        let grid = GridConfig::new(4, 100.0);
        assert!(grid.center_in_bounds(grid.cell_center(CellCoord::new(3, 3, 3))));
        // One cell beyond the rim or the ceiling leaves the volume
        assert!(!grid.center_in_bounds(grid.cell_center(CellCoord::new(4, 0, 0))));
        assert!(!grid.center_in_bounds(grid.cell_center(CellCoord::new(0, 4, 0))));
        assert!(!grid.center_in_bounds(grid.cell_center(CellCoord::new(0, 0, -1))));
    }

    #[test]
    fn test_top_layer() {
        let grid = GridConfig::new(4, 100.0);
        assert!(grid.is_top_layer(CellCoord::new(0, 3, 0)));
        assert!(!grid.is_top_layer(CellCoord::new(0, 2, 0)));

        // With a single layer every cell is the top layer
        let flat = GridConfig::new(1, 100.0);
        assert!(flat.is_top_layer(CellCoord::new(0, 0, 0)));
    }
}
