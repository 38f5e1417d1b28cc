//! Scratch-reveal engine error types.

/// Kinds of scratch engine errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ScratchErrorKind {
    /// Mask dimensions must be non-zero
    #[display("Empty mask: {}x{}", _0, _1)]
    EmptyMask(u32, u32),
    /// Coordinates fall outside the mask
    #[display("Out of bounds: ({}, {}) for {}x{} mask", x, y, width, height)]
    OutOfBounds {
        /// Requested x coordinate
        x: i32,
        /// Requested y coordinate
        y: i32,
        /// Mask width
        width: u32,
        /// Mask height
        height: u32,
    },
}

/// Scratch engine error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Scratch Error: {} at line {} in {}", kind, line, file)]
pub struct ScratchError {
    /// The kind of error that occurred
    pub kind: ScratchErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ScratchError {
    /// Create a new scratch error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ScratchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
