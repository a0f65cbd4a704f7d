/// Frustum — view-space shape plus derived world-space planes and bounds.
///
/// View space looks down -Z. `left/right/bottom/top` are the extents on the
/// near plane; `near`/`far` are stored as negated distances (Z coordinates).
///
/// The world-space state (`aabb`, `planes`) is only valid after
/// `update_world_frustum()` has run with the current world transform. It is
/// not kept in sync automatically: call it again after every camera move or
/// view parameter change. It is updated in place and never reallocated.
///
/// Plane convention: `plane.test(p) > 0` means `p` is outside that plane.

use glam::{Mat4, Vec2, Vec3};
use crate::error::Result;
use crate::geometry::{AABB, Plane};
use crate::visualizer::FrustumVisualizer;
use crate::{culling_bail, culling_debug, culling_info, culling_warn};

/// Result of a 3-way frustum/AABB classification.
///
/// For a scene traversal:
/// - `FullyOutside` → skip the node and all its descendants
/// - `FullyInside` → draw everything below without further testing
/// - `PartialIntersect` → test children individually
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntersectionState {
    /// AABB is entirely inside the frustum
    FullyInside,
    /// AABB is entirely outside the frustum
    FullyOutside,
    /// AABB straddles at least one frustum plane
    PartialIntersect,
}

impl IntersectionState {
    /// Anything not proven outside may be visible.
    pub fn is_visible(&self) -> bool {
        *self != IntersectionState::FullyOutside
    }
}

/// Frustum plane slots
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_NEAR: usize = 2;
pub const PLANE_FAR: usize = 3;
pub const PLANE_TOP: usize = 4;
pub const PLANE_BOTTOM: usize = 5;

// Indices into the nine derivation points
const NEAR_TOP_LEFT: usize = 0;
const NEAR_TOP_RIGHT: usize = 1;
const NEAR_BOTTOM_RIGHT: usize = 2;
const NEAR_BOTTOM_LEFT: usize = 3;
const FAR_TOP_LEFT: usize = 4;
const FAR_TOP_RIGHT: usize = 5;
const FAR_BOTTOM_RIGHT: usize = 6;
const FAR_BOTTOM_LEFT: usize = 7;
const EYE: usize = 8;

#[derive(Debug, Default)]
pub struct Frustum {
    // View-space configuration
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,

    // World-space configuration
    aabb: AABB,
    /// Left, Right, Near, Far, Top, Bottom
    planes: [Plane; 6],

    visualizer: Option<FrustumVisualizer>,
}

impl Frustum {
    /// Create a frustum with zeroed view parameters and no visualizer.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== VIEW PARAMETERS =====

    /// Set the view-space frustum shape.
    ///
    /// `left/right/bottom/top` are the extents on the near plane; `n` and `f`
    /// are positive distances along the view direction. Nothing is validated:
    /// `n == 0` or `n == f` produce a degenerate frustum on the next update.
    /// Use `try_set_view_frustum()` to reject such input instead.
    pub fn set_view_frustum(&mut self, left: f32, right: f32, bottom: f32, top: f32, n: f32, f: f32) {
        self.left = left;
        self.right = right;
        self.bottom = bottom;
        self.top = top;
        self.near = -n;
        self.far = -f;

        culling_debug!("galaxy3d::Frustum",
            "View frustum set: l={} r={} b={} t={} n={} f={}", left, right, bottom, top, n, f);
        if n == 0.0 || n == f {
            culling_warn!("galaxy3d::Frustum",
                "Degenerate view frustum (near={}, far={}), world derivation will be invalid", n, f);
        }
    }

    /// Validating variant of `set_view_frustum()`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidViewFrustum` (and leaves the frustum untouched)
    /// if any value is not finite, `n <= 0`, `f <= n`, `left >= right` or
    /// `bottom >= top`.
    pub fn try_set_view_frustum(&mut self, left: f32, right: f32, bottom: f32, top: f32, n: f32, f: f32) -> Result<()> {
        if ![left, right, bottom, top, n, f].iter().all(|v| v.is_finite()) {
            culling_bail!("galaxy3d::Frustum", InvalidViewFrustum,
                "non-finite parameter (l={} r={} b={} t={} n={} f={})", left, right, bottom, top, n, f);
        }
        if n <= 0.0 {
            culling_bail!("galaxy3d::Frustum", InvalidViewFrustum, "near distance must be positive, got {}", n);
        }
        if f <= n {
            culling_bail!("galaxy3d::Frustum", InvalidViewFrustum,
                "far distance ({}) must be greater than near distance ({})", f, n);
        }
        if left >= right {
            culling_bail!("galaxy3d::Frustum", InvalidViewFrustum, "left ({}) must be less than right ({})", left, right);
        }
        if bottom >= top {
            culling_bail!("galaxy3d::Frustum", InvalidViewFrustum, "bottom ({}) must be less than top ({})", bottom, top);
        }

        self.set_view_frustum(left, right, bottom, top, n, f);
        Ok(())
    }

    /// Set a symmetric perspective frustum from a vertical field of view.
    ///
    /// `fov_y` in radians, `aspect = width / height`.
    pub fn set_perspective(&mut self, fov_y: f32, aspect: f32, n: f32, f: f32) {
        let top = n * (fov_y * 0.5).tan();
        let right = top * aspect;
        self.set_view_frustum(-right, right, -top, top, n, f);
    }

    // ===== WORLD DERIVATION =====

    /// Recompute the world-space AABB and planes from a camera-to-world matrix.
    pub fn update_world_frustum(&mut self, world_matrix: &Mat4) {
        let far_over_near = self.far / self.near;
        let (left, right, bottom, top) = (self.left, self.right, self.bottom, self.top);
        let (near, far) = (self.near, self.far);

        let mut points = [Vec3::ZERO; 9];
        points[NEAR_TOP_LEFT] = Vec3::new(left, top, near);
        points[NEAR_TOP_RIGHT] = Vec3::new(right, top, near);
        points[NEAR_BOTTOM_RIGHT] = Vec3::new(right, bottom, near);
        points[NEAR_BOTTOM_LEFT] = Vec3::new(left, bottom, near);
        points[FAR_TOP_LEFT] = Vec3::new(far_over_near * left, far_over_near * top, far);
        points[FAR_TOP_RIGHT] = Vec3::new(far_over_near * right, far_over_near * top, far);
        points[FAR_BOTTOM_RIGHT] = Vec3::new(far_over_near * right, far_over_near * bottom, far);
        points[FAR_BOTTOM_LEFT] = Vec3::new(far_over_near * left, far_over_near * bottom, far);
        points[EYE] = Vec3::ZERO;

        for point in &mut points {
            *point = world_matrix.transform_point3(*point);
        }

        self.aabb.set(&points);

        // Winding is chosen so that test() > 0 is outside
        self.planes[PLANE_LEFT].set(points[EYE], points[NEAR_BOTTOM_LEFT], points[NEAR_TOP_LEFT]);
        self.planes[PLANE_RIGHT].set(points[EYE], points[NEAR_TOP_RIGHT], points[NEAR_BOTTOM_RIGHT]);
        self.planes[PLANE_NEAR].set(points[NEAR_TOP_LEFT], points[NEAR_TOP_RIGHT], points[NEAR_BOTTOM_RIGHT]);
        self.planes[PLANE_FAR].set(points[FAR_TOP_LEFT], points[FAR_BOTTOM_LEFT], points[FAR_BOTTOM_RIGHT]);
        self.planes[PLANE_TOP].set(points[EYE], points[NEAR_TOP_LEFT], points[NEAR_TOP_RIGHT]);
        self.planes[PLANE_BOTTOM].set(points[EYE], points[NEAR_BOTTOM_RIGHT], points[NEAR_BOTTOM_LEFT]);

        if let Some(visualizer) = self.visualizer.as_mut() {
            let slice = [
                Vec3::new(left, 0.0, near),
                Vec3::new(right, 0.0, near),
                Vec3::new(far_over_near * right, 0.0, far),
                Vec3::new(far_over_near * left, 0.0, far),
            ].map(|p| world_matrix.transform_point3(p));

            let translation = world_matrix.w_axis;
            visualizer.set_origin(Vec2::new(translation.x, translation.z));
            visualizer.draw_frustum(&self.aabb, &slice);
        }
    }

    // ===== CLASSIFICATION =====

    /// Classify an AABB against the world-space frustum.
    ///
    /// Broad phase against the frustum's AABB first, then per plane:
    /// - the corner nearest the inside (n-vertex) is outside → `FullyOutside`
    /// - the corner farthest toward the outside (p-vertex) is outside → at
    ///   least `PartialIntersect`, keep testing the remaining planes
    ///
    /// Conservative: never `FullyOutside` for a box that touches the frustum,
    /// but a box near a frustum edge that no single plane excludes can come
    /// back `PartialIntersect` even though it is outside.
    pub fn classify(&self, aabb: &AABB) -> IntersectionState {
        if !AABB::intersect(&self.aabb, aabb) {
            return IntersectionState::FullyOutside;
        }

        let mut result = IntersectionState::FullyInside;
        for plane in &self.planes {
            let normal = plane.normal;

            // Nearest point to the frustum
            let nearest = Vec3::new(
                if normal.x >= 0.0 { aabb.min.x } else { aabb.max.x },
                if normal.y >= 0.0 { aabb.min.y } else { aabb.max.y },
                if normal.z >= 0.0 { aabb.min.z } else { aabb.max.z },
            );
            if plane.test(nearest) > 0.0 {
                return IntersectionState::FullyOutside;
            }

            // Farthest point from the frustum
            let farthest = Vec3::new(
                if normal.x >= 0.0 { aabb.max.x } else { aabb.min.x },
                if normal.y >= 0.0 { aabb.max.y } else { aabb.min.y },
                if normal.z >= 0.0 { aabb.max.z } else { aabb.min.z },
            );
            if plane.test(farthest) > 0.0 {
                result = IntersectionState::PartialIntersect;
            }
        }

        result
    }

    /// `classify()`, plus a color-coded draw of the box when a visualizer is
    /// attached.
    pub fn intersect(&mut self, aabb: &AABB) -> IntersectionState {
        let result = self.classify(aabb);
        if let Some(visualizer) = self.visualizer.as_mut() {
            visualizer.draw_query(aabb, result);
        }
        result
    }

    /// Start a new visualizer frame (no-op without a visualizer).
    pub fn new_frame(&mut self) {
        if let Some(visualizer) = self.visualizer.as_mut() {
            visualizer.begin_frame();
        }
    }

    // ===== VISUALIZER =====

    /// Attach or detach the debug visualizer.
    pub fn set_visualizer(&mut self, visualizer: Option<FrustumVisualizer>) {
        match &visualizer {
            Some(_) => culling_info!("galaxy3d::Frustum", "Frustum visualizer attached"),
            None if self.visualizer.is_some() => culling_info!("galaxy3d::Frustum", "Frustum visualizer detached"),
            None => {}
        }
        self.visualizer = visualizer;
    }

    pub fn visualizer(&self) -> Option<&FrustumVisualizer> {
        self.visualizer.as_ref()
    }

    pub fn visualizer_mut(&mut self) -> Option<&mut FrustumVisualizer> {
        self.visualizer.as_mut()
    }

    // ===== GETTERS =====

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn right(&self) -> f32 {
        self.right
    }

    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    /// View-space near Z (negated near distance).
    pub fn near(&self) -> f32 {
        self.near
    }

    /// View-space far Z (negated far distance).
    pub fn far(&self) -> f32 {
        self.far
    }

    /// World-space bounds of the frustum and the eye.
    pub fn aabb(&self) -> &AABB {
        &self.aabb
    }

    /// World-space planes in slot order (see `PLANE_*`).
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// World-space plane for one of the `PLANE_*` slots.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= 6`.
    pub fn plane(&self, slot: usize) -> &Plane {
        &self.planes[slot]
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
