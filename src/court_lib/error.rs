// src/court_lib/error.rs

use thiserror::Error;

/// Rejection reasons for a `CourtConfig` that would produce off-court or
/// degenerate geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("{field} must be strictly positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("marking thickness must not be negative, got {0}")]
    NegativeMarkingThickness(f32),

    #[error("three-point radius factor must lie in (0, 1), got {0}")]
    RadiusFactorOutOfRange(f32),

    #[error("marking thickness {thickness} turns a ring of radius {radius} inside out")]
    MarkingTooThick { thickness: f32, radius: f32 },

    #[error("three-point arc outer edge {radius} reaches past midcourt (half length {half_length})")]
    ArcExceedsHalfCourt { radius: f32, half_length: f32 },

    #[error("ring segmentation needs at least 3 angular steps, got {0}")]
    TooFewSegments(u32),
}

pub type ConfigResult<T> = Result<T, ConfigurationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_field() {
        let err = ConfigurationError::NonPositive { field: "width", value: -1.0 };
        assert!(err.to_string().contains("width"));
        assert!(err.to_string().contains("-1"));

        let err = ConfigurationError::ArcExceedsHalfCourt { radius: 9.0, half_length: 7.0 };
        assert!(err.to_string().contains("midcourt"));

        let err = ConfigurationError::MarkingTooThick { thickness: 4.0, radius: 1.8 };
        assert!(err.to_string().contains("1.8"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigurationError>();
    }
}
