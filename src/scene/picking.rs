//! Ray casting against the floor quad and the placed cubes

use crate::core::types::Vec3;
use crate::math::{CellCoord, Face, GridConfig, Ray};
use super::model::SceneModel;

/// What a pick ray struck
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// The floor quad at y = 0
    Floor,
    /// The cube occupying this cell
    Cube(CellCoord),
}

/// Nearest intersection of a pick ray with the scene
#[derive(Clone, Copy, Debug)]
pub struct Hit {
    pub target: HitTarget,
    pub face: Face,
    pub point: Vec3,
    pub t: f32,
}

impl Hit {
    /// Whether a placement would land on top of this hit: the floor's upward
    /// faces, or a cube's +Y face
    pub fn is_top_facing(&self) -> bool {
        self.face.is_top()
    }

    /// Candidate cell for a top-facing placement: the snap cell of a floor
    /// hit, or the cell above a cube hit on its top face
    pub fn placement_cell(&self, grid: &GridConfig) -> Option<CellCoord> {
        match self.target {
            HitTarget::Floor => Some(grid.snap(self.point)),
            HitTarget::Cube(cell) if self.face.is_top() => Some(cell.above()),
            HitTarget::Cube(_) => None,
        }
    }
}

/// Cast a ray against the scene; the nearest hit wins. The rollover preview
/// and any labels are not pick targets. A miss is a normal negative result.
pub fn pick(ray: &Ray, scene: &SceneModel) -> Option<Hit> {
    let grid = scene.grid();
    let mut best: Option<Hit> = None;

    for (cell, object) in scene.objects() {
        if let Some((t, face)) = ray.intersects_aabb(&object.aabb)
            && best.is_none_or(|hit| t < hit.t)
        {
            best = Some(Hit {
                target: HitTarget::Cube(*cell),
                face,
                point: ray.at(t),
                t,
            });
        }
    }

    // The floor only shows its upward faces and extends to the grid rim
    if let Some(t) = ray.intersects_up_plane(0.0)
        && best.is_none_or(|hit| t < hit.t)
    {
        let point = ray.at(t);
        let half = grid.grid_size() * 0.5;
        if point.x.abs() <= half && point.z.abs() <= half {
            best = Some(Hit {
                target: HitTarget::Floor,
                face: Face::PosY,
                point,
                t,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::GridConfig;

    fn scene() -> SceneModel {
        SceneModel::new(GridConfig::new(4, 100.0))
    }

    #[test]
    fn test_floor_hit_snaps_to_cell() {
        let scene = scene();
        let ray = Ray::new(Vec3::new(-150.0, 500.0, -150.0), -Vec3::Y);
        let hit = pick(&ray, &scene).unwrap();
        assert_eq!(hit.target, HitTarget::Floor);
        assert!(hit.is_top_facing());
        assert_eq!(hit.placement_cell(scene.grid()), Some(CellCoord::new(0, 0, 0)));
    }

    #[test]
    fn test_floor_miss_outside_rim() {
        let scene = scene();
        let ray = Ray::new(Vec3::new(500.0, 500.0, 0.0), -Vec3::Y);
        assert!(pick(&ray, &scene).is_none());
    }

    #[test]
    fn test_cube_occludes_floor() {
        let mut scene = scene();
        let cell = CellCoord::new(1, 0, 1);
        scene.add(cell);

        let center = scene.grid().cell_center(cell);
        let ray = Ray::new(Vec3::new(center.x, 500.0, center.z), -Vec3::Y);
        let hit = pick(&ray, &scene).unwrap();
        assert_eq!(hit.target, HitTarget::Cube(cell));
        assert!(hit.is_top_facing());
        assert_eq!(hit.placement_cell(scene.grid()), Some(cell.above()));
    }

    #[test]
    fn test_side_hit_has_no_placement_cell() {
        let mut scene = scene();
        let cell = CellCoord::new(1, 0, 1);
        scene.add(cell);

        let center = scene.grid().cell_center(cell);
        // Horizontal ray at cube mid-height strikes a lateral face
        let ray = Ray::new(Vec3::new(-600.0, 50.0, center.z), Vec3::X);
        let hit = pick(&ray, &scene).unwrap();
        assert_eq!(hit.target, HitTarget::Cube(cell));
        assert_eq!(hit.face, Face::NegX);
        assert!(hit.placement_cell(scene.grid()).is_none());
    }

    #[test]
    fn test_nearest_cube_wins() {
        let mut scene = scene();
        scene.add(CellCoord::new(0, 0, 1));
        scene.add(CellCoord::new(3, 0, 1));

        let center = scene.grid().cell_center(CellCoord::new(0, 0, 1));
        let ray = Ray::new(Vec3::new(-600.0, center.y, center.z), Vec3::X);
        let hit = pick(&ray, &scene).unwrap();
        assert_eq!(hit.target, HitTarget::Cube(CellCoord::new(0, 0, 1)));
    }

    #[test]
    fn test_miss_is_none() {
        let scene = scene();
        let ray = Ray::new(Vec3::new(0.0, 500.0, 0.0), Vec3::Y);
        assert!(pick(&ray, &scene).is_none());
    }
}
