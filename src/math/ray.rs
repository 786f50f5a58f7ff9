//! Ray type and intersection tests

use crate::core::types::Vec3;
use super::aabb::Aabb;

/// Axis-aligned face of a box, or the floor quad's upward side
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Face {
    /// Whether this face points up, i.e. a placement would land on top of it
    pub fn is_top(self) -> bool {
        matches!(self, Face::PosY)
    }
}

/// A ray defined by origin and direction
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    /// Precomputed 1/direction for fast AABB intersection
    pub inv_direction: Vec3,
}

impl Ray {
    /// Create a new ray (direction should be normalized)
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            inv_direction: Vec3::new(
                1.0 / direction.x,
                1.0 / direction.y,
                1.0 / direction.z,
            ),
        }
    }

    /// Get point along ray at parameter t
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Ray-AABB intersection using the slab method, classifying the entry face.
    /// Returns Some((t_near, face)) if intersection, None otherwise.
    pub fn intersects_aabb(&self, aabb: &Aabb) -> Option<(f32, Face)> {
        let t1 = (aabb.min - self.origin) * self.inv_direction;
        let t2 = (aabb.max - self.origin) * self.inv_direction;

        let t_min = t1.min(t2);
        let t_max = t1.max(t2);

        let t_near = t_min.x.max(t_min.y).max(t_min.z);
        let t_far = t_max.x.min(t_max.y).min(t_max.z);

        if t_near > t_far || t_far < 0.0 {
            return None;
        }

        // The slab with the largest entry t is the one the ray pierces first
        let face = if t_near == t_min.x {
            if self.direction.x > 0.0 { Face::NegX } else { Face::PosX }
        } else if t_near == t_min.y {
            if self.direction.y > 0.0 { Face::NegY } else { Face::PosY }
        } else if self.direction.z > 0.0 {
            Face::NegZ
        } else {
            Face::PosZ
        };

        Some((t_near.max(0.0), face))
    }

    /// Intersection with the upward-facing plane at height `y`.
    /// Only rays approaching from above can hit it; the underside is culled.
    pub fn intersects_up_plane(&self, y: f32) -> Option<f32> {
        if self.direction.y >= 0.0 {
            return None;
        }
        let t = (y - self.origin.y) / self.direction.y;
        if t >= 0.0 { Some(t) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_eq!(ray.at(5.0), Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_intersects_aabb_hit() {
        let ray = Ray::new(Vec3::new(-2.0, 0.5, 0.5), Vec3::X);
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let hit = ray.intersects_aabb(&aabb);
        assert!(hit.is_some());
        let (t_near, face) = hit.unwrap();
        assert!((t_near - 2.0).abs() < 0.001);
        assert_eq!(face, Face::NegX);
    }

    #[test]
    fn test_intersects_aabb_miss() {
        let ray = Ray::new(Vec3::new(-2.0, 5.0, 0.5), Vec3::X);
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        assert!(ray.intersects_aabb(&aabb).is_none());
    }

    #[test]
    fn test_top_face_classification() {
        // Straight down onto the box enters through +Y
        let ray = Ray::new(Vec3::new(0.5, 3.0, 0.5), -Vec3::Y);
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let (t, face) = ray.intersects_aabb(&aabb).unwrap();
        assert!((t - 2.0).abs() < 0.001);
        assert!(face.is_top());

        // A shallow ray aimed at the lower half enters through a side
        let origin = Vec3::new(-3.0, 0.4, 0.5);
        let ray = Ray::new(origin, (Vec3::new(0.5, 0.2, 0.5) - origin).normalize());
        let (_, face) = ray.intersects_aabb(&aabb).unwrap();
        assert_eq!(face, Face::NegX);
        assert!(!face.is_top());
    }

    #[test]
    fn test_up_plane() {
        let down = Ray::new(Vec3::new(1.0, 10.0, 1.0), -Vec3::Y);
        let t = down.intersects_up_plane(0.0).unwrap();
        assert_eq!(down.at(t).y, 0.0);

        // From below the plane is invisible
        let up = Ray::new(Vec3::new(1.0, -10.0, 1.0), Vec3::Y);
        assert!(up.intersects_up_plane(0.0).is_none());
    }
}
