/// Axis-Aligned Bounding Box.
///
/// `min`/`max` per axis, with `min <= max` on every axis for a normal box.
/// The empty box (see [`AABB::empty`]) inverts this on purpose: every min is
/// `+inf` and every max is `-inf`, so any union with it is a no-op and it
/// never intersects anything.

use glam::{Mat4, Vec3};
use bytemuck::{Pod, Zeroable};
use crate::error::{Error, Result};
use crate::culling_error;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The degenerate empty box (`min = +inf`, `max = -inf`).
    ///
    /// Must not be fed to `transform`: the infinities turn into NaN.
    pub const fn empty() -> Self {
        Self { min: Vec3::INFINITY, max: Vec3::NEG_INFINITY }
    }

    /// Whether `min > max` on any axis.
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// Tightest box around a point set. Empty input yields [`AABB::empty`].
    pub fn from_points(points: &[Vec3]) -> Self {
        let mut aabb = Self::default();
        aabb.set(points);
        aabb
    }

    /// Tightest box around a point set.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyBoundingBox` if `points` is empty.
    pub fn try_from_points(points: &[Vec3]) -> Result<Self> {
        if points.is_empty() {
            culling_error!("galaxy3d::AABB", "Cannot bound an empty point set");
            return Err(Error::EmptyBoundingBox);
        }
        Ok(Self::from_points(points))
    }

    /// Reset this box to the componentwise min/max of `points`.
    pub fn set(&mut self, points: &[Vec3]) {
        *self = points.iter().fold(Self::empty(), |acc, &p| Self {
            min: acc.min.min(p),
            max: acc.max.max(p),
        });
    }

    /// Overwrite this box with the bounds of `src` transformed by `matrix`.
    ///
    /// Arvo's method (Graphics Gems): the translation is applied directly,
    /// then each matrix column scales the source interval on its axis and the
    /// smaller/larger products go to min/max. Exact for any affine matrix,
    /// whatever the sign of its entries, without visiting the 8 corners.
    ///
    /// `src` cannot alias `self`; use [`AABB::transformed`] for an in-place
    /// update (`*aabb = aabb.transformed(&m)`).
    pub fn transform(&mut self, src: &AABB, matrix: &Mat4) {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for j in 0..3 {
            let axis = matrix.col(j).truncate();
            let a = axis * src.min[j];
            let b = axis * src.max[j];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        self.min = new_min;
        self.max = new_max;
    }

    /// Transform this box by a matrix, returning a new box.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let mut out = AABB::default();
        out.transform(self, matrix);
        out
    }

    /// Closed-interval overlap test on all three axes.
    ///
    /// Symmetric. Boxes that only touch (shared face, edge or corner) count
    /// as intersecting.
    pub fn intersect(a: &AABB, b: &AABB) -> bool {
        !(a.min.x > b.max.x || b.min.x > a.max.x
            || a.min.y > b.max.y || b.min.y > a.max.y
            || a.min.z > b.max.z || b.min.z > a.max.z)
    }

    /// Test if this AABB intersects (overlaps or touches) another AABB.
    pub fn intersects(&self, other: &AABB) -> bool {
        Self::intersect(self, other)
    }

    /// Test if this AABB fully contains another AABB.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.cmple(other.min).all() && self.max.cmpge(other.max).all()
    }

    /// Smallest box enclosing both boxes.
    pub fn union(&self, other: &AABB) -> AABB {
        AABB {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half-size on each axis.
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
