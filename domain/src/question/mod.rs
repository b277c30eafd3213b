//! Question domain module
//!
//! Contains the question aggregate: the [`entities::Question`] root, its
//! owned [`entities::Choice`]s, and the identifier value objects.

pub mod entities;
pub mod value_objects;

pub use entities::{CHOICE_TEXT_MAX_CHARS, Choice, POINTS_RANGE, Question, TITLE_MAX_CHARS};
pub use value_objects::{ChoiceId, QuestionId};
