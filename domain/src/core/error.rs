//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every failure in this crate is a validation error raised synchronously
/// at the point of violation; no operation partially applies before failing.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{field} cannot be empty")]
    EmptyText { field: &'static str },

    #[error("{field} cannot be longer than {max} characters")]
    TextTooLong { field: &'static str, max: usize },

    #[error("Points must be between 1 and 100")]
    PointsOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_display() {
        let error = DomainError::EmptyText { field: "Title" };
        assert_eq!(error.to_string(), "Title cannot be empty");
    }

    #[test]
    fn test_text_too_long_display() {
        let error = DomainError::TextTooLong {
            field: "Text",
            max: 100,
        };
        assert_eq!(
            error.to_string(),
            "Text cannot be longer than 100 characters"
        );
    }

    #[test]
    fn test_points_out_of_range_display() {
        let error = DomainError::PointsOutOfRange;
        assert_eq!(error.to_string(), "Points must be between 1 and 100");
    }
}
