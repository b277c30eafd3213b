//! Question domain entities

use super::value_objects::{ChoiceId, QuestionId};
use crate::core::error::DomainError;
use crate::core::text;
use serde::{Deserialize, Serialize};

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 200;
/// Maximum choice text length in characters.
pub const CHOICE_TEXT_MAX_CHARS: usize = 100;
/// Inclusive bounds for question points.
pub const POINTS_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

/// An answer option belonging to exactly one [`Question`].
///
/// Choices have no independent lifecycle: they are created through
/// [`Question::add_choice`], which assigns the id and validates the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Identifier assigned by the owning question, sequential from 1
    pub id: ChoiceId,
    /// Choice text (non-empty, at most 100 characters)
    pub text: String,
    /// Whether selecting this choice counts as a correct answer
    pub is_correct: bool,
}

impl Choice {
    pub(crate) fn new(
        id: ChoiceId,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        text::validate_bounded("Text", &text, CHOICE_TEXT_MAX_CHARS)?;
        Ok(Self {
            id,
            text,
            is_correct,
        })
    }
}

/// A single quiz question owning an ordered set of [`Choice`]s.
///
/// Title and points are validated once, at construction, and have no
/// setters afterwards. Choices are mutated through [`Question::add_choice`],
/// [`Question::remove_choice_by_id`] and [`Question::set_correct_choices`],
/// and a user's selection is scored with
/// [`Question::correct_selected_choices`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Process-unique identifier
    pub id: QuestionId,
    /// Question title (non-empty, at most 200 characters)
    pub title: String,
    /// Points awarded for this question, in [1, 100]
    pub points: u32,
    /// How many choices a user may select. Stored configuration only;
    /// no method in this crate enforces it
    pub max_selections: u32,
    /// Choices in insertion order
    pub choices: Vec<Choice>,
    /// Next id to hand out; never rewound, removed ids are not recycled
    next_choice_id: u32,
}

impl Question {
    /// Creates a question with default points (1) and max_selections (1).
    ///
    /// The title must be non-empty and at most 200 characters, counted
    /// literally with no trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        text::validate_bounded("Title", &title, TITLE_MAX_CHARS)?;
        Ok(Self {
            id: QuestionId::generate(),
            title,
            points: 1,
            max_selections: 1,
            choices: Vec::new(),
            next_choice_id: 1,
        })
    }

    /// Sets the points awarded for this question.
    ///
    /// Points outside [1, 100] are rejected with
    /// [`DomainError::PointsOutOfRange`].
    pub fn with_points(mut self, points: u32) -> Result<Self, DomainError> {
        if !POINTS_RANGE.contains(&points) {
            return Err(DomainError::PointsOutOfRange);
        }
        self.points = points;
        Ok(self)
    }

    /// Sets how many choices a user may select.
    pub fn with_max_selections(mut self, max_selections: u32) -> Self {
        self.max_selections = max_selections;
        self
    }

    /// Appends a new choice and returns its id.
    ///
    /// The text must be non-empty and at most 100 characters. Validation is
    /// fail-fast: on error nothing is appended and the id counter does not
    /// advance. Ids are assigned sequentially from 1 in call order.
    pub fn add_choice(
        &mut self,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<ChoiceId, DomainError> {
        let id = ChoiceId::new(self.next_choice_id);
        let choice = Choice::new(id, text, is_correct)?;
        self.choices.push(choice);
        self.next_choice_id += 1;
        Ok(id)
    }

    /// Removes the choice with the given id, preserving the order of the
    /// remaining choices.
    ///
    /// Returns `false` if no choice has that id; an absent id is a silent
    /// no-op, not an error. The id counter is not rewound, so later
    /// [`Question::add_choice`] calls continue from the next unused id.
    pub fn remove_choice_by_id(&mut self, id: ChoiceId) -> bool {
        match self.choices.iter().position(|choice| choice.id == id) {
            Some(index) => {
                self.choices.remove(index);
                true
            }
            None => false,
        }
    }

    /// Overwrites the correctness flags: every choice whose id is listed
    /// becomes correct, every other choice becomes incorrect.
    ///
    /// Ids that match no current choice are ignored.
    pub fn set_correct_choices(&mut self, ids: &[ChoiceId]) {
        for choice in &mut self.choices {
            choice.is_correct = ids.contains(&choice.id);
        }
    }

    /// Scores a user's selection.
    ///
    /// Returns the ids from `selected` that identify a correct choice, in
    /// the order they appear in `selected`. Ids naming an incorrect choice
    /// or no choice at all are dropped silently; this is a filter and never
    /// fails.
    pub fn correct_selected_choices(&self, selected: &[ChoiceId]) -> Vec<ChoiceId> {
        selected
            .iter()
            .filter(|id| self.choice(**id).is_some_and(|choice| choice.is_correct))
            .copied()
            .collect()
    }

    /// Looks up a choice by id.
    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id == id)
    }

    /// Returns the ids of all correct choices in storage order.
    pub fn correct_choice_ids(&self) -> Vec<ChoiceId> {
        self.choices
            .iter()
            .filter(|choice| choice.is_correct)
            .map(|choice| choice.id)
            .collect()
    }
}
