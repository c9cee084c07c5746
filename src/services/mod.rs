pub mod exercise_service;
pub mod user_service;

pub use exercise_service::*;
pub use user_service::*;
