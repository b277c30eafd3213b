//! Question domain value objects - immutable identifier types.
//!
//! - [`QuestionId`] - Process-unique identifier for a question
//! - [`ChoiceId`] - Identifier for a choice within its owning question

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique identifier for a question.
///
/// Drawn from a process-wide atomic counter, so two questions constructed
/// anywhere in the same process never share an id, including under
/// concurrent instantiation. The numbering scheme itself is not part of the
/// contract; only uniqueness is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionId(u64);

impl QuestionId {
    /// Generates the next unique QuestionId.
    pub fn generate() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the numeric value of the id.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a choice within its owning question.
///
/// Assigned sequentially starting at 1 in the order choices are added.
/// Scoped to the parent question's counter, not globally unique, and never
/// recycled after a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChoiceId(u32);

impl ChoiceId {
    /// Creates a ChoiceId from its numeric value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value of the id.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ChoiceId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_ids_are_unique() {
        let first = QuestionId::generate();
        let second = QuestionId::generate();
        assert_ne!(first, second);
    }

    #[test]
    fn test_question_ids_unique_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| (0..100).map(|_| QuestionId::generate()).collect::<Vec<_>>()))
            .collect();

        let mut all: Vec<QuestionId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let total = all.len();
        all.sort_by_key(|id| id.value());
        all.dedup();
        assert_eq!(all.len(), total);
    }

    #[test]
    fn test_choice_id() {
        let id: ChoiceId = 3.into();
        assert_eq!(id.value(), 3);
        assert_eq!(id.to_string(), "3");
        assert_eq!(id, ChoiceId::new(3));
    }
}
