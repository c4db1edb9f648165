//! SR3D Core Library - Math foundation for a software renderer
//!
//! Vector algebra, RGBA colors, 4x4 homogeneous transforms (including
//! perspective projection and look-at views) and the triangle record a
//! rasterizer consumes. Every type is a plain `Copy` value and every
//! operation is pure.

pub mod color;
pub mod error;
pub mod geometry;
pub mod matrix;
pub mod parse;
pub mod projection;
pub mod transform;
pub mod vector;

// Re-export commonly used types
pub use color::Color;
pub use error::{Degenerate, Error, Result};
pub use geometry::{Triangle, Vertex};
pub use matrix::Matrix4x4;
pub use projection::Camera;
pub use transform::{RotationState, Transform};
pub use vector::{Vector2, Vector3};
