use crate::{
    database::MongoDB,
    services::exercise_service::{self, AddExerciseRequest},
    utils::error::error_response,
};
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/api/users/{id}/exercises",
    tag = "Exercises",
    request_body = AddExerciseRequest,
    params(
        ("id" = String, Path, description = "User id (ObjectId hex)")
    ),
    responses(
        (status = 200, description = "Exercise appended", body = exercise_service::ExerciseResponse),
        (status = 400, description = "Description or duration missing"),
        (status = 404, description = "Unknown or malformed user id"),
        (status = 500, description = "Save failed")
    )
)]
pub async fn add_exercise(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    request: web::Json<AddExerciseRequest>,
) -> HttpResponse {
    let user_id = path.into_inner();
    log::info!("🏃 POST /api/users/{}/exercises - Logging exercise", user_id);

    match exercise_service::add_exercise(&db, &user_id, request.into_inner()).await {
        Ok(response) => {
            log::info!(
                "✅ Exercise logged for {}: {} ({} min)",
                response.username,
                response.description,
                response.duration
            );
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("⚠️ Failed to log exercise for {}: {}", user_id, e);
            error_response(&e)
        }
    }
}
