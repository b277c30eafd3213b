//! Domain layer for quizkit
//!
//! This crate contains the core business logic and entities for a single
//! quiz question. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Question
//!
//! [`Question`] is the aggregate root: it owns an ordered set of
//! [`Choice`]s, validates its title and points at construction, assigns
//! sequential choice ids, and scores a user's selection against the
//! choices' correctness flags.
//!
//! ## Choice
//!
//! A [`Choice`] is a validated (text, correctness) pair that exists only
//! inside its owning question; it is created through
//! [`Question::add_choice`] and carries the id that call assigned.

pub mod core;
pub mod question;

// Re-export commonly used types
pub use core::error::DomainError;
pub use question::{
    entities::{CHOICE_TEXT_MAX_CHARS, Choice, POINTS_RANGE, Question, TITLE_MAX_CHARS},
    value_objects::{ChoiceId, QuestionId},
};
