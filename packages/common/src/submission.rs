use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::ScoreSheet;

/// Status of a submission during the hackathon lifecycle.
///
/// The only transition is `Pending` -> `Evaluated`; it is never reversed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Received, waiting for an evaluator.
    Pending,
    /// Scored against the rubric.
    Evaluated,
}

impl SubmissionStatus {
    pub fn is_evaluated(&self) -> bool {
        matches!(self, Self::Evaluated)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Evaluated => write!(f, "evaluated"),
        }
    }
}

/// How the candidate delivered their solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionMethod {
    /// A link to a repository.
    Github,
    /// An uploaded ZIP archive.
    Zip,
}

/// A candidate's submission record.
///
/// Created once on intake, mutated once (fully) on evaluation, never deleted.
/// `candidate_id` and `submission_time` are immutable once assigned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Submission {
    /// Generated unique ID, the key under which the record is stored.
    #[schema(example = "6f7c0a4e-9b1d-4a2e-8c3f-1d2e3f4a5b6c")]
    pub candidate_id: String,
    #[schema(example = "Asha Rao")]
    pub candidate_name: String,
    #[serde(default)]
    #[schema(example = "asha@example.com")]
    pub candidate_email: String,
    #[schema(example = "problem_2")]
    pub problem_id: String,
    pub submission_type: SubmissionMethod,
    #[serde(default)]
    #[schema(example = "https://github.com/asha/transfers")]
    pub github_link: String,
    /// Path of the uploaded archive, when `submission_type` is `zip`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    pub submission_time: DateTime<Utc>,
    pub status: SubmissionStatus,
    /// Absent until evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreSheet>,
    /// Sum of the five category totals at last evaluation, 0 until then.
    #[serde(default)]
    pub total_score: f64,
    #[serde(default)]
    pub evaluator_name: String,
    #[serde(default)]
    pub evaluator_notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_time: Option<DateTime<Utc>>,
}
