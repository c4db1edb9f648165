//! Error types for checked transforms and text parsing

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("failed to parse {input:?}: {message}")]
    Parse { input: String, message: String },

    #[error("degenerate transform: {0}")]
    Degenerate(#[from] Degenerate),
}

/// Inputs for which the unchecked math divides by zero
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Degenerate {
    #[error("aspect ratio is zero")]
    ZeroAspect,
    #[error("tangent of half the vertical field of view is zero")]
    ZeroFieldOfView,
    #[error("near and far clip planes are equal")]
    EqualClipPlanes,
    #[error("eye and target coincide")]
    EyeAtTarget,
    #[error("up vector is zero or parallel to the view direction")]
    UpParallelToForward,
    #[error("homogeneous w is zero, perspective divide skipped")]
    ZeroHomogeneousW,
}
