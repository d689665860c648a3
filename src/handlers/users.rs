use crate::schemas::{AppState, DeleteResponse, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::entities::user;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, SqlErr};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace, warn};
use utoipa::ToSchema;

/// Balance every freshly created account opens with. Client-supplied
/// balances on signup are ignored.
const STARTING_BALANCE: i64 = 10_000;

fn default_is_first_login() -> bool {
    true
}

fn default_balance() -> Decimal {
    Decimal::from(STARTING_BALANCE)
}

/// Request body for creating a new user.
/// Any `id`, `balance` or `is_blocked` keys in the payload are ignored.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    /// Username (must be unique)
    pub username: String,
    /// Email address (must be unique)
    pub email: String,
    /// Password, stored as sent
    pub password: String,
    /// Whether the one-time onboarding flow is still due
    #[serde(default = "default_is_first_login")]
    pub is_first_login: bool,
}

/// Request body for updating a user. A full replace: every stored field
/// takes the submitted (or defaulted) value.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateUserRequest {
    /// Username (must be unique)
    pub username: String,
    /// Email address (must be unique)
    pub email: String,
    /// Password, stored as sent
    pub password: String,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default = "default_is_first_login")]
    pub is_first_login: bool,
    #[serde(default = "default_balance")]
    pub balance: Decimal,
}

/// User response model
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_blocked: bool,
    pub is_first_login: bool,
    pub balance: Decimal,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            password: model.password,
            is_blocked: model.is_blocked,
            is_first_login: model.is_first_login,
            balance: model.balance,
        }
    }
}

/// Get all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Users retrieved successfully", body = Vec<UserResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument]
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, StatusCode> {
    trace!("Entering get_users function");
    debug!("Fetching all users from database");

    match user::Entity::find().all(&state.db).await {
        Ok(users) => {
            let user_count = users.len();
            debug!("Retrieved {} users from database", user_count);

            let user_responses: Vec<UserResponse> =
                users.into_iter().map(UserResponse::from).collect();

            info!("Successfully retrieved {} users", user_count);
            Ok(Json(user_responses))
        }
        Err(db_error) => {
            error!("Failed to retrieve users from database: {}", db_error);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 409, description = "Username or email already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering create_user function");
    debug!("Creating user with username: {}", request.username);

    let new_user = user::ActiveModel {
        username: Set(request.username.clone()),
        email: Set(request.email.clone()),
        password: Set(request.password.clone()),
        is_blocked: Set(false),
        is_first_login: Set(request.is_first_login),
        balance: Set(Decimal::from(STARTING_BALANCE)),
        ..Default::default()
    };

    trace!("Attempting to insert new user into database");
    match new_user.insert(&state.db).await {
        Ok(user_model) => {
            info!(
                "User created successfully with ID: {}, username: {}",
                user_model.id, user_model.username
            );
            Ok((StatusCode::CREATED, Json(UserResponse::from(user_model))))
        }
        // Uniqueness is checked reactively: the constraint violation is
        // caught at insert time, never pre-queried.
        Err(db_error) => match db_error.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                warn!(
                    "Rejected signup for '{}': username or email already taken",
                    request.username
                );
                Err((
                    StatusCode::CONFLICT,
                    Json(ErrorResponse {
                        error: "Username or email already exists".to_string(),
                        code: "USER_ALREADY_EXISTS".to_string(),
                        success: false,
                    }),
                ))
            }
            _ => {
                error!("Failed to create user '{}': {}", request.username, db_error);
                Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Internal server error while creating user".to_string(),
                        code: "DATABASE_ERROR".to_string(),
                        success: false,
                    }),
                ))
            }
        },
    }
}

/// Update a user.
/// There is no existence check: updating an unknown id affects zero rows
/// and still reports success, echoing the submitted payload.
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument]
pub async fn update_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, StatusCode> {
    trace!("Entering update_user function for user_id: {}", user_id);
    debug!("Replacing user {} with submitted payload", user_id);

    let update = user::ActiveModel {
        username: Set(request.username.clone()),
        email: Set(request.email.clone()),
        password: Set(request.password.clone()),
        is_blocked: Set(request.is_blocked),
        is_first_login: Set(request.is_first_login),
        balance: Set(request.balance),
        ..Default::default()
    };

    match user::Entity::update_many()
        .set(update)
        .filter(user::Column::Id.eq(user_id))
        .exec(&state.db)
        .await
    {
        Ok(update_result) => {
            if update_result.rows_affected == 0 {
                debug!("Update for user {} matched no rows", user_id);
            }
            info!("User {} update applied", user_id);
            Ok(Json(UserResponse {
                id: user_id,
                username: request.username,
                email: request.email,
                password: request.password,
                is_blocked: request.is_blocked,
                is_first_login: request.is_first_login,
                balance: request.balance,
            }))
        }
        Err(db_error) => {
            error!("Failed to update user with ID {}: {}", user_id, db_error);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Delete a user.
/// Referrals and transactions pointing at the user are left in place.
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "Delete acknowledged", body = DeleteResponse),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument]
pub async fn delete_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, StatusCode> {
    trace!("Entering delete_user function for user_id: {}", user_id);
    debug!("Attempting to delete user with ID: {}", user_id);

    match user::Entity::delete_by_id(user_id).exec(&state.db).await {
        Ok(delete_result) => {
            debug!(
                "Delete operation completed. Rows affected: {}",
                delete_result.rows_affected
            );
            info!("User {} delete acknowledged", user_id);
            Ok(Json(DeleteResponse { ok: true }))
        }
        Err(db_error) => {
            error!("Failed to delete user with ID {}: {}", user_id, db_error);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
