//! Domain types for the trivia API.
//!
//! This module provides:
//! - Question and Category records and their API representations
//! - Page arithmetic for the paginated list routes
//! - Random quiz question selection

pub mod category;
pub mod lenient;
pub mod pagination;
pub mod question;
pub mod quiz;

pub use category::{categories_map, Category, CategoryId};
pub use pagination::{Page, PageQuery};
pub use question::{NewQuestion, Question, QuestionError, QuestionId};
pub use quiz::pick_question;
