// ==================== EXERCISE LOGGING ====================
// Append de exercícios no array `log` do usuário e consulta do log com
// filtros de data e limite

use crate::{
    database::MongoDB,
    models::{Exercise, User},
    utils::date,
    utils::error::AppError,
};
use chrono::NaiveDate;
use mongodb::bson::{doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

// ==================== REQUEST/RESPONSE MODELS ====================

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AddExerciseRequest {
    pub description: Option<String>,
    /// Accepts a JSON number or a numeric string ("30")
    #[serde(default, deserialize_with = "deserialize_duration")]
    #[schema(value_type = Option<i64>)]
    pub duration: Option<i64>,
    /// Calendar date as YYYY-MM-DD; defaults to today when omitted
    pub date: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ExerciseResponse {
    pub username: String,
    pub id: String,
    pub description: String,
    pub duration: i64,
    /// Formatted as "Tue Jan 10 2023"
    pub date: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LogResponse {
    pub username: String,
    pub id: String,
    /// Length of the returned log, not the user's stored counter
    pub count: usize,
    pub log: Vec<LogEntry>,
}

/// Forms post duration as a string, JSON clients as a number. Both are
/// accepted; anything non-integer is rejected at the boundary.
fn deserialize_duration<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("duration must be an integer")),
        Some(serde_json::Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|_| serde::de::Error::custom("duration must be an integer"))
        }
        Some(_) => Err(serde::de::Error::custom("duration must be an integer")),
    }
}

// ==================== SERVICE FUNCTIONS ====================

fn validate_exercise(request: AddExerciseRequest) -> Result<(String, i64, Option<String>), AppError> {
    let description = request
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    match (description, request.duration) {
        (Some(description), Some(duration)) => Ok((description, duration, request.date)),
        _ => Err(AppError::InvalidRequest(
            "Description and duration are required".to_string(),
        )),
    }
}

fn resolve_date(value: Option<&str>) -> Result<NaiveDate, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => date::parse_date(value)
            .ok_or_else(|| AppError::InvalidRequest("Invalid date format".to_string())),
        None => Ok(date::today()),
    }
}

fn parse_filter_date(value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => date::parse_date(value)
            .map(Some)
            .ok_or_else(|| AppError::InvalidRequest("Invalid date format".to_string())),
        None => Ok(None),
    }
}

/// Inclusive calendar-date range filter, then truncation to the first
/// `limit` entries. Insertion order is preserved throughout, never sorted.
fn apply_log_filters(
    log: Vec<Exercise>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    limit: Option<usize>,
) -> Vec<Exercise> {
    let mut filtered: Vec<Exercise> = log
        .into_iter()
        .filter(|e| {
            let day = date::calendar_date(e.date);
            from.map_or(true, |f| day >= f) && to.map_or(true, |t| day <= t)
        })
        .collect();

    if let Some(limit) = limit {
        filtered.truncate(limit);
    }

    filtered
}

/// POST /api/users/{id}/exercises - Adiciona exercício ao log do usuário
///
/// Malformed and unknown ids collapse to the same 404. The append is one
/// update: `$push` no log + `$inc` no contador.
pub async fn add_exercise(
    db: &MongoDB,
    user_id: &str,
    request: AddExerciseRequest,
) -> Result<ExerciseResponse, AppError> {
    let (description, duration, raw_date) = validate_exercise(request)?;
    let day = resolve_date(raw_date.as_deref())?;

    let oid = ObjectId::parse_str(user_id)
        .map_err(|_| AppError::NotFound("User not found".to_string()))?;

    let collection = db.collection::<User>("users");

    let user = collection
        .find_one(doc! { "_id": oid })
        .await
        .map_err(|e| {
            log::error!("Find failed for user {}: {}", user_id, e);
            AppError::DatabaseError("Error saving exercise".to_string())
        })?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let exercise = Exercise {
        description,
        duration,
        date: date::to_bson_datetime(day),
    };

    let exercise_bson = mongodb::bson::to_bson(&exercise).map_err(|e| {
        log::error!("Failed to serialize exercise: {}", e);
        AppError::DatabaseError("Error saving exercise".to_string())
    })?;

    // No optimistic-concurrency check: concurrent appends may race and the
    // last write wins.
    collection
        .update_one(
            doc! { "_id": oid },
            doc! { "$push": { "log": exercise_bson }, "$inc": { "count": 1 } },
        )
        .await
        .map_err(|e| {
            log::error!("Update failed for user {}: {}", user_id, e);
            AppError::DatabaseError("Error saving exercise".to_string())
        })?;

    Ok(ExerciseResponse {
        username: user.username,
        id: oid.to_hex(),
        description: exercise.description,
        duration: exercise.duration,
        date: date::format_date(exercise.date),
    })
}

/// GET /api/users/{id}/logs - Log do usuário com filtros opcionais
///
/// `count` reflects the returned log after filtering and truncation, which
/// may be smaller than the user's persisted counter.
pub async fn get_user_log(
    db: &MongoDB,
    user_id: &str,
    from: Option<&str>,
    to: Option<&str>,
    limit: Option<usize>,
) -> Result<LogResponse, AppError> {
    let from = parse_filter_date(from)?;
    let to = parse_filter_date(to)?;

    let oid = ObjectId::parse_str(user_id)
        .map_err(|_| AppError::NotFound("User not found".to_string()))?;

    let collection = db.collection::<User>("users");

    let user = collection
        .find_one(doc! { "_id": oid })
        .await
        .map_err(|e| {
            log::error!("Find failed for user {}: {}", user_id, e);
            AppError::DatabaseError("Error fetching logs".to_string())
        })?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let log: Vec<LogEntry> = apply_log_filters(user.log, from, to, limit)
        .into_iter()
        .map(|e| LogEntry {
            description: e.description,
            duration: e.duration,
            date: date::format_date(e.date),
        })
        .collect();

    Ok(LogResponse {
        username: user.username,
        id: oid.to_hex(),
        count: log.len(),
        log,
    })
}
