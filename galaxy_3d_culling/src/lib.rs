/*!
# Galaxy 3D Culling

Frustum culling primitives for the Galaxy 3D rendering engine.

This crate answers one question for a scene traversal: is a given
axis-aligned box fully inside, fully outside, or straddling the camera's
visible volume? It is pure CPU-side geometry with no GPU or windowing
dependency.

## Architecture

- **Plane**: outward-oriented half-space with a signed point test
- **AABB**: axis-aligned bounding box (point-set build, affine transform, overlap)
- **Frustum**: view parameters + derived world-space planes/AABB, 3-way classification
- **FrustumVisualizer**: optional top-down debug overlay behind a `DebugDrawSink`

Typical frame:

```
use galaxy_3d_culling::galaxy3d::camera::{Frustum, IntersectionState};
use galaxy_3d_culling::galaxy3d::geometry::AABB;
use galaxy_3d_culling::glam::{Mat4, Vec3};

let mut frustum = Frustum::new();
frustum.set_view_frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
frustum.update_world_frustum(&Mat4::IDENTITY);

let aabb = AABB::new(Vec3::new(-0.5, -0.5, -5.5), Vec3::new(0.5, 0.5, -4.5));
assert_eq!(frustum.classify(&aabb), IntersectionState::FullyInside);
```
*/

// Internal modules
mod error;
pub mod log;
pub mod geometry;
pub mod camera;
pub mod visualizer;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and logger installation, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, set_logger, reset_logger};
    }

    // Geometry primitives
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Frustum and classification
    pub mod camera {
        pub use crate::camera::*;
    }

    // Debug overlay
    pub mod visualizer {
        pub use crate::visualizer::*;
    }
}

// Re-export math library at crate root
pub use glam;
