//! Text validation shared across the domain layer.

use crate::core::error::DomainError;

/// Validate that `value` is non-empty and within `max_chars` characters.
///
/// `field` labels the error message ("Title", "Text", ...), so the title and
/// choice-text call sites share one implementation without sharing messages.
/// Length is counted in characters, not bytes, and `value` is taken as-is
/// (no trimming).
pub(crate) fn validate_bounded(
    field: &'static str,
    value: &str,
    max_chars: usize,
) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::EmptyText { field });
    }
    if value.chars().count() > max_chars {
        return Err(DomainError::TextTooLong {
            field,
            max: max_chars,
        });
    }
    Ok(())
}
