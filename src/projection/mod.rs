//! Silhouette projection codec
//!
//! Serializes a 3D voxel set into three orthogonal 2D occupancy shadows and
//! reconstructs an approximate set from them. The encode direction is a
//! binary OR-reduction along the dropped axis; the decode direction keeps a
//! cell only when all three shadows agree it is occupied. Decoding is lossy:
//! several voxel sets can share the same three silhouettes, so reconstruction
//! may introduce ghost voxels, but it never drops a voxel that was present.

use serde::{Deserialize, Serialize};

use crate::math::grid::CellCoord;

/// The axis collapsed by a projection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// The two retained coordinates of a voxel, in x < y < z order
    fn retained(self, cell: CellCoord) -> (i32, i32) {
        match self {
            Axis::X => (cell.y, cell.z),
            Axis::Y => (cell.x, cell.z),
            Axis::Z => (cell.x, cell.y),
        }
    }
}

/// One occupancy cell of a projection plane
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaneCell {
    pub a: u32,
    pub b: u32,
    pub found: bool,
}

/// 2D occupancy shadow of the voxel set along one axis.
///
/// Holds one entry per `(a, b)` pair of the retained axes. Iteration order is
/// row-major as produced by [`project`], but lookups never depend on order.
/// Serializes as a plain array of cells, the form the host sees.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaneProjection {
    cells: Vec<PlaneCell>,
}

impl PlaneProjection {
    /// Build a plane from raw cells (e.g. a decoded host payload)
    pub fn new(cells: Vec<PlaneCell>) -> Self {
        Self { cells }
    }

    /// The cells in iteration order
    pub fn cells(&self) -> &[PlaneCell] {
        &self.cells
    }

    /// Order-independent occupancy lookup
    pub fn found(&self, a: u32, b: u32) -> bool {
        self.cells
            .iter()
            .rev()
            .find(|c| c.a == a && c.b == b)
            .is_some_and(|c| c.found)
    }

    /// Flatten into a row-major occupancy grid. Out-of-range entries are
    /// ignored; on duplicates the last entry wins.
    fn occupancy(&self, divisions: u32) -> Vec<bool> {
        let d = divisions as usize;
        let mut occupied = vec![false; d * d];
        for cell in &self.cells {
            let (a, b) = (cell.a as usize, cell.b as usize);
            if a < d && b < d {
                occupied[a * d + b] = cell.found;
            }
        }
        occupied
    }
}

/// Project a voxel set onto the plane perpendicular to `axis`: `found` is
/// true for a cell iff at least one voxel shares both retained coordinates.
pub fn project(voxels: &[CellCoord], axis: Axis, divisions: u32) -> PlaneProjection {
    let d = divisions as usize;
    let mut occupied = vec![false; d * d];
    for voxel in voxels {
        let (a, b) = axis.retained(*voxel);
        if (0..d as i32).contains(&a) && (0..d as i32).contains(&b) {
            occupied[a as usize * d + b as usize] = true;
        }
    }

    let mut cells = Vec::with_capacity(d * d);
    for a in 0..d {
        for b in 0..d {
            cells.push(PlaneCell {
                a: a as u32,
                b: b as u32,
                found: occupied[a * d + b],
            });
        }
    }
    PlaneProjection::new(cells)
}

/// Reconstruct a voxel set from its three silhouettes: a cell is included
/// iff all three shadows mark it occupied. Returns cells in x, y, z order.
pub fn reconstruct(
    x_plane: &PlaneProjection,
    y_plane: &PlaneProjection,
    z_plane: &PlaneProjection,
    divisions: u32,
) -> Vec<CellCoord> {
    let d = divisions as usize;
    let x_occ = x_plane.occupancy(divisions); // indexed by (y, z)
    let y_occ = y_plane.occupancy(divisions); // indexed by (x, z)
    let z_occ = z_plane.occupancy(divisions); // indexed by (x, y)

    let mut voxels = Vec::new();
    for x in 0..d {
        for y in 0..d {
            for z in 0..d {
                if x_occ[y * d + z] && y_occ[x * d + z] && z_occ[x * d + y] {
                    voxels.push(CellCoord::new(x as i32, y as i32, z as i32));
                }
            }
        }
    }
    voxels
}

/// Encode then decode a voxel set through all three planes
pub fn round_trip(voxels: &[CellCoord], divisions: u32) -> Vec<CellCoord> {
    let x_plane = project(voxels, Axis::X, divisions);
    let y_plane = project(voxels, Axis::Y, divisions);
    let z_plane = project(voxels, Axis::Z, divisions);
    reconstruct(&x_plane, &y_plane, &z_plane, divisions)
}
