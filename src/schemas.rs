use sea_orm::DatabaseConnection;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
}

/// Error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Response body for delete operations.
/// Always `{"ok": true}` — deletes never check whether a row matched.
#[derive(Serialize, ToSchema)]
pub struct DeleteResponse {
    pub ok: bool,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::users::get_users,
        crate::handlers::users::create_user,
        crate::handlers::users::update_user,
        crate::handlers::users::delete_user,
        crate::handlers::referrals::get_referrals,
        crate::handlers::referrals::create_referral,
        crate::handlers::transactions::get_transactions,
        crate::handlers::transactions::create_transaction,
        crate::handlers::transactions::update_transaction,
        crate::handlers::transactions::delete_transaction,
        crate::handlers::leaderboards::get_top_players,
        crate::handlers::leaderboards::get_top_referrers,
    ),
    components(
        schemas(
            ErrorResponse,
            DeleteResponse,
            HealthResponse,
            crate::handlers::users::CreateUserRequest,
            crate::handlers::users::UpdateUserRequest,
            crate::handlers::users::UserResponse,
            crate::handlers::referrals::CreateReferralRequest,
            crate::handlers::referrals::ReferralResponse,
            crate::handlers::transactions::CreateTransactionRequest,
            crate::handlers::transactions::UpdateTransactionRequest,
            crate::handlers::transactions::TransactionResponse,
            crate::handlers::leaderboards::TopPlayerEntry,
            crate::handlers::leaderboards::TopReferrerEntry,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User account endpoints"),
        (name = "referrals", description = "Referral record endpoints"),
        (name = "transactions", description = "Transaction ledger endpoints"),
        (name = "leaderboards", description = "Leaderboard query endpoints"),
    ),
    info(
        title = "GameHub API",
        description = "Gamified referral and wallet backend - user accounts, referrals, transactions and leaderboards",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
