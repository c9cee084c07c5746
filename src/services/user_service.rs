// ==================== USER MANAGEMENT ====================
// Criação e listagem de usuários na collection "users"

use crate::{
    database::MongoDB,
    models::User,
    utils::error::AppError,
};
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

// ==================== REQUEST/RESPONSE MODELS ====================

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    pub username: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    pub username: String,
    pub id: String,
}

/// Projeção usada pela listagem - apenas username e _id
#[derive(Debug, Deserialize)]
struct UserRow {
    #[serde(rename = "_id")]
    id: ObjectId,
    username: String,
}

// ==================== SERVICE FUNCTIONS ====================

fn validate_username(username: Option<String>) -> Result<String, AppError> {
    username
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::InvalidRequest("Username is required".to_string()))
}

/// POST /api/users - Cria um novo usuário com log vazio
pub async fn create_user(
    db: &MongoDB,
    request: CreateUserRequest,
) -> Result<UserResponse, AppError> {
    let username = validate_username(request.username)?;

    let user = User::new(username);

    let collection = db.collection::<User>("users");

    // Duplicate username hits the unique index and lands here with every
    // other write failure - the caller only sees a generic 500.
    collection.insert_one(&user).await.map_err(|e| {
        log::error!("Insert failed for user {}: {}", user.username, e);
        AppError::DatabaseError("Error saving user".to_string())
    })?;

    Ok(UserResponse {
        username: user.username,
        id: user.id.to_hex(),
    })
}

/// GET /api/users - Lista todos os usuários projetados para {username, id}
pub async fn list_users(db: &MongoDB) -> Result<Vec<UserResponse>, AppError> {
    let collection = db.collection::<UserRow>("users");

    // Natural scan order, no sort
    let options = mongodb::options::FindOptions::builder()
        .projection(doc! { "username": 1 })
        .build();

    let mut cursor = collection
        .find(doc! {})
        .with_options(options)
        .await
        .map_err(|e| {
            log::error!("Find failed on users collection: {}", e);
            AppError::DatabaseError("Error fetching users".to_string())
        })?;

    let mut users = Vec::new();

    while let Some(result) = cursor.next().await {
        match result {
            Ok(row) => users.push(UserResponse {
                username: row.username,
                id: row.id.to_hex(),
            }),
            Err(e) => log::error!("Error reading user document: {}", e),
        }
    }

    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_empty_or_blank_username_is_rejected() {
        for username in [None, Some(String::new()), Some("   ".to_string())] {
            let err = validate_username(username).unwrap_err();
            assert_eq!(
                err,
                AppError::InvalidRequest("Username is required".to_string())
            );
        }
    }

    #[test]
    fn username_is_trimmed() {
        assert_eq!(
            validate_username(Some("  alice  ".to_string())).unwrap(),
            "alice"
        );
    }

    async fn test_db() -> MongoDB {
        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/exercise_log_test".to_string());
        MongoDB::new(&uri).await.expect("MongoDB connection")
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn create_user_starts_at_zero() {
        dotenv::dotenv().ok();
        let db = test_db().await;

        let unique = format!("alice-{}", ObjectId::new().to_hex());
        let created = create_user(
            &db,
            CreateUserRequest {
                username: Some(unique.clone()),
            },
        )
        .await
        .unwrap();
        assert_eq!(created.username, unique);

        let oid = ObjectId::parse_str(&created.id).unwrap();
        let stored = db
            .collection::<User>("users")
            .find_one(doc! { "_id": oid })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.count, 0);
        assert!(stored.log.is_empty());
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn duplicate_username_fails_as_store_error() {
        dotenv::dotenv().ok();
        let db = test_db().await;

        let unique = format!("carol-{}", ObjectId::new().to_hex());
        let request = || CreateUserRequest {
            username: Some(unique.clone()),
        };

        create_user(&db, request()).await.unwrap();
        let err = create_user(&db, request()).await.unwrap_err();
        assert_eq!(
            err,
            AppError::DatabaseError("Error saving user".to_string())
        );
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn listing_contains_created_user() {
        dotenv::dotenv().ok();
        let db = test_db().await;

        let unique = format!("bob-{}", ObjectId::new().to_hex());
        let created = create_user(
            &db,
            CreateUserRequest {
                username: Some(unique),
            },
        )
        .await
        .unwrap();

        let users = list_users(&db).await.unwrap();
        assert!(users.iter().any(|u| u.id == created.id));
    }
}
