use axum::Json;
use tracing::instrument;

use common::rubric::{self, Category};

/// Return the evaluation rubric.
///
/// Maxima and weights are advisory metadata for the evaluation form; the
/// scoring engine does not enforce them.
#[utoipa::path(
    get,
    path = "/",
    tag = "Rubric",
    operation_id = "getRubric",
    summary = "Get the evaluation rubric",
    responses(
        (status = 200, description = "The five scoring categories", body = Vec<Category>),
    ),
)]
#[instrument]
pub async fn get_rubric() -> Json<Vec<Category>> {
    Json(rubric::categories().to_vec())
}
