pub mod auth;
pub mod export;
pub mod problem;
pub mod rubric;
pub mod submission;
