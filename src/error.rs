use thiserror::Error;

/// Errors surfaced at construction or input-mapping boundaries. Nothing in
/// the per-frame path produces these; an invalid world or view rectangle is
/// rejected before the session exists.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GameError {
    /// A direction vector that is not one of the 4 cardinal unit vectors
    #[error("not a cardinal unit vector: ({0}, {1})")]
    InvalidDirection(f32, f32),

    /// A play or view rectangle with zero or negative area
    #[error("bounds must have positive area, got {0}x{1}")]
    InvalidBounds(f32, f32),
}
