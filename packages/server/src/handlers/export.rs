use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::export;
use crate::extractors::auth::AdminUser;
use crate::state::AppState;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Generate and download the score workbook.
#[utoipa::path(
    get,
    path = "/excel",
    tag = "Export",
    operation_id = "exportExcel",
    summary = "Export all scores as an Excel workbook",
    description = "Writes a timestamped workbook with one row per submission (evaluated or \
        not) and returns it as an attachment. Prior export files are kept.",
    responses(
        (status = 200, description = "Workbook attachment", content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, admin))]
pub async fn export_excel(
    admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let submissions = state.store.list();
    let path = export::write_workbook(&submissions, &state.config.storage.export_dir)?;

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read export file: {e}")))?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("hackathon_scores.xlsx")
        .to_string();

    info!(
        rows = submissions.len(),
        file = %filename,
        admin = %admin.username,
        "Export generated"
    );

    let headers = [
        (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, bytes).into_response())
}
