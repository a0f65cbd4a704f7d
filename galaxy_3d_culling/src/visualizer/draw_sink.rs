/// Drawing sink consumed by the frustum visualizer.

use std::sync::{Arc, Mutex};
use glam::Vec2;

/// Overlay colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugColor {
    Black,
    Red,
    Green,
    Cyan,
    White,
}

impl DebugColor {
    /// 8-bit RGB triple
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            DebugColor::Black => [0, 0, 0],
            DebugColor::Red => [255, 0, 0],
            DebugColor::Green => [0, 128, 0],
            DebugColor::Cyan => [0, 255, 255],
            DebugColor::White => [255, 255, 255],
        }
    }
}

/// Minimal 2D drawing capability.
///
/// Coordinates are canvas pixels. Implementations own the actual surface
/// (a window overlay, an image, an SVG writer...).
pub trait DebugDrawSink: Send + Sync {
    /// Clear the canvas to `background` for a new frame
    fn begin_frame(&mut self, background: DebugColor);

    /// Set the stroke color for subsequent draws
    fn set_color(&mut self, color: DebugColor);

    /// Stroke an axis-aligned rectangle
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Stroke a polyline, joining the last point to the first when `closed`
    fn draw_polyline(&mut self, points: &[Vec2], closed: bool);
}

/// One recorded sink call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginFrame(DebugColor),
    SetColor(DebugColor),
    Rect { x: f32, y: f32, width: f32, height: f32 },
    Polyline { points: Vec<Vec2>, closed: bool },
}

/// Headless sink that records every call.
///
/// Clones share the same command buffer, so a caller can keep one handle
/// while the visualizer owns the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingDrawSink {
    commands: Arc<Mutex<Vec<DrawCommand>>>,
}

impl RecordingDrawSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded commands
    pub fn commands(&self) -> Vec<DrawCommand> {
        self.commands.lock()
            .map(|commands| commands.clone())
            .unwrap_or_default()
    }

    /// Drop all recorded commands
    pub fn clear(&self) {
        if let Ok(mut commands) = self.commands.lock() {
            commands.clear();
        }
    }

    fn push(&self, command: DrawCommand) {
        if let Ok(mut commands) = self.commands.lock() {
            commands.push(command);
        }
    }
}

impl DebugDrawSink for RecordingDrawSink {
    fn begin_frame(&mut self, background: DebugColor) {
        self.push(DrawCommand::BeginFrame(background));
    }

    fn set_color(&mut self, color: DebugColor) {
        self.push(DrawCommand::SetColor(color));
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.push(DrawCommand::Rect { x, y, width, height });
    }

    fn draw_polyline(&mut self, points: &[Vec2], closed: bool) {
        self.push(DrawCommand::Polyline { points: points.to_vec(), closed });
    }
}
