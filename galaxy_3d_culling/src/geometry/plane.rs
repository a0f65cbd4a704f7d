/// Plane — outward-oriented half-space.
///
/// `test(p) = dot(normal, p) + d`:
/// - `> 0` → `p` is on the outside
/// - `== 0` → `p` is on the plane
/// - `< 0` → `p` is on the inside
///
/// Orientation comes entirely from the winding of the three construction
/// points: seen from the outside, `p0 → p1 → p2` runs clockwise.

use glam::Vec3;
use bytemuck::{Pod, Zeroable};
use crate::error::Result;
use crate::culling_bail;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Plane {
    /// Outward normal (unit length when built from points)
    pub normal: Vec3,
    /// Signed offset along the normal
    pub d: f32,
}

impl Plane {
    pub fn new(normal: Vec3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Build a plane through three points.
    ///
    /// See [`Plane::set`] for the winding rule and preconditions.
    pub fn from_points(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        let mut plane = Self::default();
        plane.set(p0, p1, p2);
        plane
    }

    /// Build a plane through three points, rejecting degenerate triangles.
    ///
    /// # Errors
    ///
    /// Returns `Error::DegeneratePlane` if the points are collinear,
    /// coincident, or not finite.
    pub fn try_from_points(p0: Vec3, p1: Vec3, p2: Vec3) -> Result<Self> {
        match (p2 - p0).cross(p1 - p0).try_normalize() {
            Some(normal) => Ok(Self { normal, d: -normal.dot(p0) }),
            None => culling_bail!("galaxy3d::Plane", DegeneratePlane,
                "points {} {} {} do not span a plane", p0, p1, p2),
        }
    }

    /// Recompute this plane from three points.
    ///
    /// `normal = normalize(cross(p2 - p0, p1 - p0))`, `d = -dot(normal, p0)`.
    /// The operand order fixes which side is outside; the frustum's plane
    /// triples depend on it.
    ///
    /// Precondition: the points must not be collinear or coincident.
    /// Otherwise the normal is NaN and every later `test` returns NaN.
    pub fn set(&mut self, p0: Vec3, p1: Vec3, p2: Vec3) {
        let normal = (p2 - p0).cross(p1 - p0).normalize();
        self.normal = normal;
        self.d = -normal.dot(p0);
    }

    /// Signed distance from `point` to the plane (positive = outside).
    #[inline]
    pub fn test(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
