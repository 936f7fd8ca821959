//! Error types with diagnostics using miette
//!
//! Every failure is all-or-nothing: no partially computed outline or
//! partially wrapped text is ever handed back alongside an error.

use miette::Diagnostic;
use thiserror::Error;

/// Coarse classification of [`Error`], for callers that only care about
/// what to do next (fix the input, accept the fallback, or shrink the font).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The call was made with arguments that can never succeed.
    InvalidArgument,
    /// A zero-length edge was met where a direction was needed.
    DegenerateGeometry,
    /// Text does not fit in the space it was given.
    OutOfBounds,
}

/// Errors produced by the geometry, wrapping and layout engines
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("smoothing factor {alpha} is outside the open interval (0, 1)")]
    #[diagnostic(
        code(balloon::geometry::invalid_alpha),
        help("0.5 gives the usual rounded callout body")
    )]
    InvalidAlpha { alpha: f64 },

    #[error("polygon needs at least 3 points, got {count}")]
    #[diagnostic(code(balloon::geometry::too_few_points))]
    TooFewPoints { count: usize },

    #[error("polygon point {index} has a NaN or infinite coordinate")]
    #[diagnostic(code(balloon::geometry::non_finite))]
    NonFiniteCoordinate { index: usize },

    #[error("a bezier segment needs at least 2 samples, got {count}")]
    #[diagnostic(code(balloon::geometry::invalid_sample_count))]
    InvalidSampleCount { count: usize },

    #[error("corner threshold {degrees} is not a finite angle")]
    #[diagnostic(code(balloon::geometry::invalid_threshold))]
    InvalidThreshold { degrees: f64 },

    #[error("zero-length edge at vertex {vertex}")]
    #[diagnostic(
        code(balloon::geometry::degenerate),
        help("remove consecutive duplicate points, or use `angle` which falls back to 90 degrees")
    )]
    DegenerateGeometry { vertex: usize },

    #[error("text does not fit: {placed} words placed, {remaining} left over")]
    #[diagnostic(
        code(balloon::text::out_of_bounds),
        help("retry with a smaller font size")
    )]
    OutOfBounds { placed: usize, remaining: usize },

    #[error("text still does not fit at the minimum font size of {min_size}px")]
    #[diagnostic(
        code(balloon::layout::font_size_exhausted),
        help("enlarge the callout polygon or shorten the text")
    )]
    FontSizeExhausted { min_size: u32 },
}

impl Error {
    /// The coarse kind this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidAlpha { .. }
            | Error::TooFewPoints { .. }
            | Error::NonFiniteCoordinate { .. }
            | Error::InvalidSampleCount { .. }
            | Error::InvalidThreshold { .. } => ErrorKind::InvalidArgument,
            Error::DegenerateGeometry { .. } => ErrorKind::DegenerateGeometry,
            Error::OutOfBounds { .. } | Error::FontSizeExhausted { .. } => ErrorKind::OutOfBounds,
        }
    }

    /// Whether shrinking the font and retrying could help.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::OutOfBounds { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(Error::InvalidAlpha { alpha: 1.0 }.kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::TooFewPoints { count: 2 }.kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::DegenerateGeometry { vertex: 0 }.kind(), ErrorKind::DegenerateGeometry);
        assert_eq!(Error::OutOfBounds { placed: 1, remaining: 2 }.kind(), ErrorKind::OutOfBounds);
        assert_eq!(Error::FontSizeExhausted { min_size: 6 }.kind(), ErrorKind::OutOfBounds);
    }

    #[test]
    fn only_out_of_bounds_is_retryable() {
        assert!(Error::OutOfBounds { placed: 0, remaining: 1 }.is_retryable());
        assert!(!Error::FontSizeExhausted { min_size: 6 }.is_retryable());
        assert!(!Error::InvalidAlpha { alpha: 0.0 }.is_retryable());
    }

    #[test]
    fn messages_name_the_problem() {
        let err = Error::TooFewPoints { count: 2 };
        assert_eq!(err.to_string(), "polygon needs at least 3 points, got 2");
    }
}
