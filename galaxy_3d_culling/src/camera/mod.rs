//! Camera module — view frustum and box classification.
//!
//! The frustum is a tool owned and driven by the caller: configure the view
//! parameters when the projection changes, re-derive the world-space state
//! when the camera moves, then classify as many boxes as needed.

mod frustum;

pub use frustum::{
    Frustum, IntersectionState,
    PLANE_LEFT, PLANE_RIGHT, PLANE_NEAR, PLANE_FAR, PLANE_TOP, PLANE_BOTTOM,
};
