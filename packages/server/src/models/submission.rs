use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use common::scoring::ScoreSheet;
use common::submission::{SubmissionMethod, SubmissionStatus};
use common::catalog;

use crate::error::AppError;

/// Request body for submission intake.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateSubmissionRequest {
    #[schema(example = "Asha Rao")]
    pub candidate_name: String,
    #[serde(default)]
    #[schema(example = "asha@example.com")]
    pub candidate_email: String,
    #[schema(example = "problem_2")]
    pub problem_id: String,
    pub submission_type: SubmissionMethod,
    /// Required for `github` submissions; ignored for `zip`.
    #[serde(default)]
    #[schema(example = "https://github.com/asha/transfers")]
    pub github_link: String,
}

/// Request body for evaluating a submission.
///
/// Besides the evaluator fields, the payload is a flat object of raw
/// sub-criterion scores keyed by rubric field name (`db_schema`,
/// `api_design`, ...). Missing or non-numeric entries count as 0.
#[derive(Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub evaluator_name: String,
    #[serde(default)]
    pub evaluator_notes: String,
    #[serde(flatten)]
    pub raw: Map<String, Value>,
}

/// Result of an evaluation.
#[derive(Serialize, utoipa::ToSchema)]
pub struct EvaluationResponse {
    pub candidate_id: String,
    pub status: SubmissionStatus,
    #[schema(example = 79.0)]
    pub total_score: f64,
    pub scores: ScoreSheet,
}

/// Result of an archive upload.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ArchiveUploadResponse {
    pub candidate_id: String,
    /// Where the archive was stored.
    pub file_path: String,
}

const MAX_NAME_LENGTH: usize = 200;

/// Validate a submission intake request.
pub fn validate_create_submission(req: &CreateSubmissionRequest) -> Result<(), AppError> {
    let name = req.candidate_name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("candidate_name is required".into()));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(AppError::Validation(format!(
            "candidate_name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }

    if !catalog::contains(&req.problem_id) {
        return Err(AppError::Validation(format!(
            "Unknown problem_id '{}'",
            req.problem_id
        )));
    }

    if req.submission_type == SubmissionMethod::Github && req.github_link.trim().is_empty() {
        return Err(AppError::Validation(
            "github_link is required for github submissions".into(),
        ));
    }

    Ok(())
}
