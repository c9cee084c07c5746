pub mod exercises;
pub mod health;
pub mod home;
pub mod logs;
pub mod swagger;
pub mod users;
