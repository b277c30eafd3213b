//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — domain-level errors
//! - [`text`] — bounded-text validation shared by title and choice text

pub mod error;
pub mod text;
