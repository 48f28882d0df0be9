pub mod catalog;
pub mod rubric;
pub mod scoring;
pub mod submission;

pub use scoring::ScoreSheet;
pub use submission::{Submission, SubmissionMethod, SubmissionStatus};
