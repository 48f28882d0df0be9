use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/auth", auth_routes())
        .nest("/problems", problem_routes())
        .nest("/rubric", rubric_routes())
        .nest("/submissions", submission_routes())
        .nest("/export", export_routes())
}

fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::auth::login))
        .routes(routes!(handlers::auth::me))
}

fn problem_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::problem::list_problems))
        .routes(routes!(handlers::problem::get_problem))
}

fn rubric_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::rubric::get_rubric))
}

fn submission_routes() -> OpenApiRouter<AppState> {
    let crud = OpenApiRouter::new()
        .routes(routes!(
            handlers::submission::create_submission,
            handlers::submission::list_submissions
        ))
        .routes(routes!(handlers::submission::get_submission))
        .routes(routes!(handlers::submission::evaluate_submission));

    let upload = OpenApiRouter::new()
        .routes(routes!(handlers::submission::upload_archive))
        .layer(handlers::submission::archive_body_limit());

    crud.merge(upload)
}

fn export_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::export::export_excel))
}
