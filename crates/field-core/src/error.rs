use thiserror::Error;

/// Per-frame failures surfaced by the core. None of them outlive the frame
/// that produced them; the caller decides whether to skip or degrade.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// Zero, negative or non-finite canvas dimensions. The frame is skipped.
    #[error("invalid canvas extent {width}x{height}")]
    InvalidExtent { width: f32, height: f32 },
    /// Font or outline capability missing. Recoverable by drawing the backdrop only.
    #[error("glyph outlines unavailable: {0}")]
    OutlineUnavailable(String),
    /// Alignment string that is not one of the recognised names.
    #[error("unrecognised alignment {0:?}")]
    InvalidAlignment(String),
}
