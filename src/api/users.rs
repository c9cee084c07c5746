use crate::{
    database::MongoDB,
    services::user_service::{self, CreateUserRequest},
    utils::error::error_response,
};
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = user_service::UserResponse),
        (status = 400, description = "Username missing or empty"),
        (status = 500, description = "Store rejected the write")
    )
)]
pub async fn create_user(
    db: web::Data<MongoDB>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse {
    log::info!("📝 POST /api/users - Creating user");

    match user_service::create_user(&db, request.into_inner()).await {
        Ok(response) => {
            log::info!("✅ User created: {} ({})", response.username, response.id);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("⚠️ Failed to create user: {}", e);
            error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users projected to {username, id}", body = Vec<user_service::UserResponse>),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_users(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("📋 GET /api/users - Listing users");

    match user_service::list_users(&db).await {
        Ok(users) => {
            log::info!("✅ Listed {} users", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Failed to list users: {}", e);
            error_response(&e)
        }
    }
}
