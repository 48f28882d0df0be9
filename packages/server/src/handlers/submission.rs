use axum::Json;
use axum::extract::{DefaultBodyLimit, Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use tracing::{info, instrument};

use common::scoring::ScoreSheet;
use common::submission::{Submission, SubmissionMethod, SubmissionStatus};

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AdminUser;
use crate::extractors::json::AppJson;
use crate::models::submission::{
    ArchiveUploadResponse, CreateSubmissionRequest, EvaluateRequest, EvaluationResponse,
    validate_create_submission,
};
use crate::state::AppState;
use crate::store::NewSubmission;
use crate::utils::filename::validate_flat_filename;

/// Body limit for archive uploads. Matches the intake form's 100 MB cap.
pub fn archive_body_limit() -> DefaultBodyLimit {
    DefaultBodyLimit::max(100 * 1024 * 1024)
}

/// Candidate-facing intake: create a submission.
#[utoipa::path(
    post,
    path = "/",
    tag = "Submissions",
    operation_id = "createSubmission",
    summary = "Submit a solution",
    description = "Creates a pending submission and returns its generated candidate ID. \
        For `zip` submissions, upload the archive afterwards via \
        `POST /submissions/{candidate_id}/archive`.",
    request_body = CreateSubmissionRequest,
    responses(
        (status = 201, description = "Submission received", body = Submission),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(candidate_name = %payload.candidate_name))]
pub async fn create_submission(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateSubmissionRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_submission(&payload)?;

    let submission = state.store.create(NewSubmission {
        candidate_name: payload.candidate_name.trim().to_string(),
        candidate_email: payload.candidate_email.trim().to_string(),
        problem_id: payload.problem_id,
        submission_type: payload.submission_type,
        github_link: payload.github_link.trim().to_string(),
    })?;

    info!(
        candidate_id = %submission.candidate_id,
        problem_id = %submission.problem_id,
        "Submission received"
    );

    Ok((StatusCode::CREATED, Json(submission)))
}

/// Candidate-facing: attach the solution archive to a `zip` submission.
#[utoipa::path(
    post,
    path = "/{candidate_id}/archive",
    tag = "Submissions",
    operation_id = "uploadArchive",
    summary = "Upload a solution archive",
    description = "Stores the uploaded ZIP for a `zip`-type submission. The `file` multipart \
        field is required and must carry a filename.",
    params(
        ("candidate_id" = String, Path, description = "Candidate ID returned by intake")
    ),
    request_body(content_type = "multipart/form-data", description = "Archive upload"),
    responses(
        (status = 200, description = "Archive stored", body = ArchiveUploadResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Submission not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, multipart), fields(candidate_id = %candidate_id))]
pub async fn upload_archive(
    State(state): State<AppState>,
    Path(candidate_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<ArchiveUploadResponse>, AppError> {
    let submission = state
        .store
        .get(&candidate_id)
        .ok_or_else(|| AppError::NotFound(format!("Submission '{candidate_id}' not found")))?;

    if submission.submission_type != SubmissionMethod::Zip {
        return Err(AppError::Validation(
            "Only zip submissions accept an uploaded archive".into(),
        ));
    }

    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .map(|s| s.to_string())
                .ok_or_else(|| AppError::Validation("File field must have a filename".into()))?;
            let filename = validate_flat_filename(&filename)
                .map_err(|e| AppError::Validation(e.message().into()))?
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read file: {e}")))?;
            upload = Some((filename, bytes.to_vec()));
        }
    }

    let (filename, bytes) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' field".into()))?;

    let path = state
        .uploads
        .save(&candidate_id, &filename, &bytes)
        .map_err(|e| AppError::Internal(format!("Failed to store archive: {e}")))?;
    let file_path = path.to_string_lossy().into_owned();

    state.store.update(&candidate_id, |s| {
        s.file_path = Some(file_path.clone());
    })?;

    Ok(Json(ArchiveUploadResponse {
        candidate_id,
        file_path,
    }))
}

/// List every submission in the store.
#[utoipa::path(
    get,
    path = "/",
    tag = "Submissions",
    operation_id = "listSubmissions",
    summary = "List all submissions",
    responses(
        (status = 200, description = "All submissions, pending and evaluated", body = Vec<Submission>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _admin))]
pub async fn list_submissions(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Json<Vec<Submission>> {
    Json(state.store.list())
}

/// Get a single submission by candidate ID.
#[utoipa::path(
    get,
    path = "/{candidate_id}",
    tag = "Submissions",
    operation_id = "getSubmission",
    summary = "Get submission details",
    params(
        ("candidate_id" = String, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Submission details", body = Submission),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Submission not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _admin), fields(candidate_id = %candidate_id))]
pub async fn get_submission(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(candidate_id): Path<String>,
) -> Result<Json<Submission>, AppError> {
    state
        .store
        .get(&candidate_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Submission '{candidate_id}' not found")))
}

/// Score a submission against the rubric.
#[utoipa::path(
    post,
    path = "/{candidate_id}/evaluate",
    tag = "Submissions",
    operation_id = "evaluateSubmission",
    summary = "Evaluate a submission",
    description = "Applies the rubric to a flat object of raw sub-criterion scores \
        (`db_schema`, `api_design`, ... — missing or non-numeric fields count as 0) plus \
        `evaluator_name` and `evaluator_notes`. Evaluating an already-evaluated submission \
        overwrites its previous scores.",
    params(
        ("candidate_id" = String, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Scores computed and stored", body = EvaluationResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Submission not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, admin, payload), fields(candidate_id = %candidate_id))]
pub async fn evaluate_submission(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(candidate_id): Path<String>,
    AppJson(payload): AppJson<EvaluateRequest>,
) -> Result<Json<EvaluationResponse>, AppError> {
    let sheet = ScoreSheet::from_raw(&payload.raw);
    let total = sheet.total();
    let now = Utc::now();

    let updated = state.store.update(&candidate_id, |s| {
        s.scores = Some(sheet.clone());
        s.total_score = total;
        s.status = SubmissionStatus::Evaluated;
        s.evaluator_name = payload.evaluator_name.clone();
        s.evaluator_notes = payload.evaluator_notes.clone();
        s.evaluation_time = Some(now);
    })?;

    info!(
        candidate_id = %updated.candidate_id,
        total_score = total,
        evaluator = %admin.username,
        "Submission evaluated"
    );

    Ok(Json(EvaluationResponse {
        candidate_id: updated.candidate_id,
        status: updated.status,
        total_score: updated.total_score,
        scores: sheet,
    }))
}
