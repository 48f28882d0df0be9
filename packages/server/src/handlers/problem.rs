use axum::Json;
use axum::extract::Path;
use tracing::instrument;

use common::catalog::{self, Problem};

use crate::error::{AppError, ErrorBody};

/// List the problem catalog.
#[utoipa::path(
    get,
    path = "/",
    tag = "Problems",
    operation_id = "listProblems",
    summary = "List all hackathon problems",
    responses(
        (status = 200, description = "The fixed problem catalog", body = Vec<Problem>),
    ),
)]
#[instrument]
pub async fn list_problems() -> Json<Vec<Problem>> {
    Json(catalog::all().to_vec())
}

/// Get a single problem by ID.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Problems",
    operation_id = "getProblem",
    summary = "Get one problem statement",
    params(
        ("id" = String, Path, description = "Problem ID, e.g. problem_2")
    ),
    responses(
        (status = 200, description = "Problem details", body = Problem),
        (status = 404, description = "Problem not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument]
pub async fn get_problem(Path(id): Path<String>) -> Result<Json<Problem>, AppError> {
    catalog::get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Problem '{id}' not found")))
}
