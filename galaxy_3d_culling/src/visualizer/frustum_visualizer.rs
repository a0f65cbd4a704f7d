/// FrustumVisualizer — projects frustum and query boxes onto a 2D canvas.
///
/// World X maps to canvas X and world Z maps to canvas Y:
/// `canvas = ((world - origin) * scale + 0.5) * canvas_size`.
/// The origin follows the camera so the frustum stays centered.

use std::fmt;
use bitflags::bitflags;
use glam::{Vec2, Vec3};
use crate::camera::IntersectionState;
use crate::geometry::AABB;
use super::draw_sink::{DebugColor, DebugDrawSink};

/// World units to canvas fraction
const DEFAULT_SCALE: f32 = 1.0 / 100000.0;
const DEFAULT_CANVAS_WIDTH: f32 = 1080.0;
const DEFAULT_CANVAS_HEIGHT: f32 = 768.0;

bitflags! {
    /// What the visualizer draws
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct VisualizerFlags: u32 {
        /// World-space bounding box of the frustum
        const FRUSTUM_AABB  = 1 << 0;
        /// Horizontal slice of the frustum through the eye
        const FRUSTUM_SLICE = 1 << 1;
        /// Every box passed to `Frustum::intersect`
        const QUERIES       = 1 << 2;
    }
}

impl Default for VisualizerFlags {
    fn default() -> Self {
        Self::all()
    }
}

pub struct FrustumVisualizer {
    sink: Box<dyn DebugDrawSink>,
    scale: f32,
    canvas_size: Vec2,
    /// World X/Z the canvas is centered on
    origin: Vec2,
    flags: VisualizerFlags,
}

impl FrustumVisualizer {
    pub fn new<S: DebugDrawSink + 'static>(sink: S) -> Self {
        Self {
            sink: Box::new(sink),
            scale: DEFAULT_SCALE,
            canvas_size: Vec2::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
            origin: Vec2::ZERO,
            flags: VisualizerFlags::default(),
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_canvas_size(mut self, width: f32, height: f32) -> Self {
        self.canvas_size = Vec2::new(width, height);
        self
    }

    pub fn with_flags(mut self, flags: VisualizerFlags) -> Self {
        self.flags = flags;
        self
    }

    // ===== GETTERS =====

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn flags(&self) -> VisualizerFlags {
        self.flags
    }

    // ===== SETTERS =====

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn set_flags(&mut self, flags: VisualizerFlags) {
        self.flags = flags;
    }

    /// Center the canvas on a world X/Z position.
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    // ===== PROJECTION =====

    /// World X to canvas X
    pub fn to_canvas_x(&self, x: f32) -> f32 {
        ((x - self.origin.x) * self.scale + 0.5) * self.canvas_size.x
    }

    /// World Z to canvas Y
    pub fn to_canvas_y(&self, z: f32) -> f32 {
        ((z - self.origin.y) * self.scale + 0.5) * self.canvas_size.y
    }

    fn to_canvas(&self, point: Vec3) -> Vec2 {
        Vec2::new(self.to_canvas_x(point.x), self.to_canvas_y(point.z))
    }

    // ===== DRAWING =====

    /// Clear the canvas to white.
    pub fn begin_frame(&mut self) {
        self.sink.begin_frame(DebugColor::White);
    }

    /// Stroke the X/Z footprint of a box.
    pub fn draw_aabb(&mut self, aabb: &AABB, color: DebugColor) {
        let x1 = self.to_canvas_x(aabb.min.x);
        let y1 = self.to_canvas_y(aabb.min.z);
        let x2 = self.to_canvas_x(aabb.max.x);
        let y2 = self.to_canvas_y(aabb.max.z);
        self.sink.set_color(color);
        self.sink.draw_rect(x1, y1, x2 - x1, y2 - y1);
    }

    /// Draw the frustum's world AABB (red) and its horizontal slice (green).
    ///
    /// `slice` holds world-space near-left, near-right, far-right, far-left.
    pub fn draw_frustum(&mut self, aabb: &AABB, slice: &[Vec3; 4]) {
        if self.flags.contains(VisualizerFlags::FRUSTUM_AABB) {
            self.draw_aabb(aabb, DebugColor::Red);
        }
        if self.flags.contains(VisualizerFlags::FRUSTUM_SLICE) {
            let outline = slice.map(|p| self.to_canvas(p));
            self.sink.set_color(DebugColor::Green);
            self.sink.draw_polyline(&outline, true);
        }
    }

    /// Draw a classified box: inside black, outside red, partial cyan.
    pub fn draw_query(&mut self, aabb: &AABB, result: IntersectionState) {
        if self.flags.contains(VisualizerFlags::QUERIES) {
            self.draw_aabb(aabb, Self::query_color(result));
        }
    }

    pub fn query_color(result: IntersectionState) -> DebugColor {
        match result {
            IntersectionState::FullyInside => DebugColor::Black,
            IntersectionState::FullyOutside => DebugColor::Red,
            IntersectionState::PartialIntersect => DebugColor::Cyan,
        }
    }
}

impl fmt::Debug for FrustumVisualizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrustumVisualizer")
            .field("scale", &self.scale)
            .field("canvas_size", &self.canvas_size)
            .field("origin", &self.origin)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "frustum_visualizer_tests.rs"]
mod tests;
