pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;

pub use config::Config;
pub use db::{init_db, seed_db, Repository};
pub use domain::{Category, CategoryId, NewQuestion, Page, Question, QuestionId};
pub use error::AppError;
