//! Geometry module — half-spaces and axis-aligned boxes.
//!
//! Plain value types with no engine state. Both are `#[repr(C)]` and
//! `bytemuck::Pod` so they can be copied straight into GPU buffers.

mod plane;
mod aabb;

pub use plane::Plane;
pub use aabb::AABB;
