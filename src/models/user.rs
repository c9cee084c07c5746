use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// Documento da collection "users" - um documento por usuário
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    /// Denormalized counter, incremented by 1 on each append. Never
    /// recomputed from the log length.
    #[serde(default)]
    pub count: i64,
    /// Insertion order equals creation order, not exercise-date order.
    #[serde(default)]
    pub log: Vec<Exercise>,
}

impl User {
    pub fn new(username: String) -> Self {
        Self {
            id: ObjectId::new(),
            username,
            count: 0,
            log: Vec::new(),
        }
    }
}

/// Exercício embutido no array `log` - nunca existe fora do usuário dono
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Exercise {
    pub description: String,
    pub duration: i64,
    pub date: DateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_starts_with_empty_log() {
        let user = User::new("alice".to_string());
        assert_eq!(user.count, 0);
        assert!(user.log.is_empty());
    }

    #[test]
    fn count_and_log_default_when_absent_in_document() {
        // Legacy documents written before the counter existed still load
        let doc = mongodb::bson::doc! {
            "_id": ObjectId::new(),
            "username": "bob",
        };
        let user: User = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(user.count, 0);
        assert!(user.log.is_empty());
    }
}
