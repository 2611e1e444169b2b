use thiserror::Error;

/// Everything that can go wrong while building a world.
///
/// Out-of-range cell access is deliberately not here: `Grid::get`/`Grid::set`
/// ignore stray coordinates.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("grid dimensions must be positive and addressable, got {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },
    #[error("brush radius range {min}..={max} is empty or non-positive")]
    InvalidBrushRange { min: i32, max: i32 },
    #[error("invalid settings json: {0}")]
    Settings(#[from] serde_json::Error),
}
