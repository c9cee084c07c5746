use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exercise Log Service API",
        version = "1.0.0",
        description = "Minimal exercise-tracking API. Create users, append exercises to a user's log, and query the log with optional from/to date and limit filters.\n\n**Dates:** request dates are `YYYY-MM-DD`; response dates are formatted like `Tue Jan 10 2023`."
    ),
    paths(
        // Users
        crate::api::users::create_user,
        crate::api::users::list_users,

        // Exercises
        crate::api::exercises::add_exercise,
        crate::api::logs::get_logs,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            // Users
            crate::services::user_service::CreateUserRequest,
            crate::services::user_service::UserResponse,

            // Exercises
            crate::services::exercise_service::AddExerciseRequest,
            crate::services::exercise_service::ExerciseResponse,
            crate::services::exercise_service::LogEntry,
            crate::services::exercise_service::LogResponse,

            // Health
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User creation and listing. Usernames are unique; a duplicate surfaces as a generic store failure."),
        (name = "Exercises", description = "Append-only exercise logging and log retrieval with date-range and limit filters."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    )
)]
pub struct ApiDoc;
