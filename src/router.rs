use crate::handlers::{
    health::health_check,
    leaderboards::{get_top_players, get_top_referrers},
    referrals::{create_referral, get_referrals},
    transactions::{create_transaction, delete_transaction, get_transactions, update_transaction},
    users::{create_user, delete_user, get_users, update_user},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/", get(health_check))
        // User CRUD routes
        .route("/users", get(get_users))
        .route("/users", post(create_user))
        .route("/users/:user_id", put(update_user))
        .route("/users/:user_id", delete(delete_user))
        // Referral routes (no update or delete is exposed)
        .route("/referrals", get(get_referrals))
        .route("/referrals", post(create_referral))
        // Transaction CRUD routes
        .route("/transactions", get(get_transactions))
        .route("/transactions", post(create_transaction))
        .route("/transactions/:transaction_id", put(update_transaction))
        .route("/transactions/:transaction_id", delete(delete_transaction))
        // Leaderboard routes
        .route("/top-players", get(get_top_players))
        .route("/top-referrers", get(get_top_referrers))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware. CORS mirrors any origin and allows credentials,
        // matching the wide-open posture of the deployed frontend.
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::very_permissive()),
        )
        .with_state(state)
}
