//! OpenAPI documentation.

use utoipa::OpenApi;

use common::{ErrorBody, ErrorResponse, FieldErrorBody};
use domain::{CreateUser, FieldIssue, UpdateUser, UserResponse};

use crate::handlers::health_handler::HealthResponse;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
        crate::handlers::user_handler::clear_users,
    ),
    components(
        schemas(
            HealthResponse,
            UserResponse,
            CreateUser,
            UpdateUser,
            ErrorResponse,
            ErrorBody,
            FieldErrorBody,
            FieldIssue,
        )
    ),
    tags(
        (name = "Health", description = "Liveness check"),
        (name = "Users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;
