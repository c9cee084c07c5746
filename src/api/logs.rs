use crate::{
    database::MongoDB,
    services::exercise_service,
    utils::error::error_response,
};
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/logs",
    tag = "Exercises",
    params(
        ("id" = String, Path, description = "User id (ObjectId hex)"),
        ("from" = Option<String>, Query, description = "Keep entries on or after this date (YYYY-MM-DD)"),
        ("to" = Option<String>, Query, description = "Keep entries on or before this date (YYYY-MM-DD)"),
        ("limit" = Option<usize>, Query, description = "Keep at most this many entries, from the front")
    ),
    responses(
        (status = 200, description = "Filtered exercise log", body = exercise_service::LogResponse),
        (status = 400, description = "Unparseable from/to date"),
        (status = 404, description = "Unknown or malformed user id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn get_logs(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    query: web::Query<LogQuery>,
) -> HttpResponse {
    let user_id = path.into_inner();
    log::info!(
        "📖 GET /api/users/{}/logs - from: {:?}, to: {:?}, limit: {:?}",
        user_id,
        query.from,
        query.to,
        query.limit
    );

    match exercise_service::get_user_log(
        &db,
        &user_id,
        query.from.as_deref(),
        query.to.as_deref(),
        query.limit,
    )
    .await
    {
        Ok(response) => {
            log::info!(
                "✅ Returned {} log entries for {}",
                response.count,
                response.username
            );
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("⚠️ Failed to fetch logs for {}: {}", user_id, e);
            error_response(&e)
        }
    }
}
