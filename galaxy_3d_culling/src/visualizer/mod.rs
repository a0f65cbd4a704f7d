//! Visualizer module — optional top-down debug overlay for frustum culling.
//!
//! The overlay projects world X/Z onto a 2D canvas and draws the frustum's
//! bounding box, its horizontal slice, and every classified box in a color
//! matching its result. Drawing goes through the `DebugDrawSink` trait, so
//! the culling code never depends on a window or canvas system.
//!
//! Attaching a visualizer never changes classification results.

mod draw_sink;
mod frustum_visualizer;

pub use draw_sink::{DebugColor, DebugDrawSink, DrawCommand, RecordingDrawSink};
pub use frustum_visualizer::{FrustumVisualizer, VisualizerFlags};
