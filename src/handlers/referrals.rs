use crate::schemas::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use model::entities::referral;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace};
use utoipa::ToSchema;

/// Request body for creating a referral record.
/// Neither `user_id` nor `referred_by` is checked against the users table.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateReferralRequest {
    /// Record owner
    pub user_id: i32,
    /// Referral code token
    pub code: String,
    /// The user credited for the referral, if any
    pub referred_by: Option<i32>,
    /// Bonus credited for this referral (defaults to 0)
    #[serde(default)]
    pub bonus: Decimal,
}

/// Referral response model
#[derive(Debug, Serialize, ToSchema)]
pub struct ReferralResponse {
    pub id: i32,
    pub user_id: i32,
    pub code: String,
    pub referred_by: Option<i32>,
    pub bonus: Decimal,
}

impl From<referral::Model> for ReferralResponse {
    fn from(model: referral::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            code: model.code,
            referred_by: model.referred_by,
            bonus: model.bonus,
        }
    }
}

/// Get all referrals
#[utoipa::path(
    get,
    path = "/referrals",
    tag = "referrals",
    responses(
        (status = 200, description = "Referrals retrieved successfully", body = Vec<ReferralResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument]
pub async fn get_referrals(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReferralResponse>>, StatusCode> {
    trace!("Entering get_referrals function");
    debug!("Fetching all referrals from database");

    match referral::Entity::find().all(&state.db).await {
        Ok(referrals) => {
            let referral_count = referrals.len();
            debug!("Retrieved {} referrals from database", referral_count);

            let referral_responses: Vec<ReferralResponse> =
                referrals.into_iter().map(ReferralResponse::from).collect();

            info!("Successfully retrieved {} referrals", referral_count);
            Ok(Json(referral_responses))
        }
        Err(db_error) => {
            error!("Failed to retrieve referrals from database: {}", db_error);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Create a new referral record
#[utoipa::path(
    post,
    path = "/referrals",
    tag = "referrals",
    request_body = CreateReferralRequest,
    responses(
        (status = 201, description = "Referral created successfully", body = ReferralResponse),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument]
pub async fn create_referral(
    State(state): State<AppState>,
    Json(request): Json<CreateReferralRequest>,
) -> Result<(StatusCode, Json<ReferralResponse>), StatusCode> {
    trace!("Entering create_referral function");
    debug!(
        "Creating referral with code: {}, user_id: {}, referred_by: {:?}",
        request.code, request.user_id, request.referred_by
    );

    let new_referral = referral::ActiveModel {
        user_id: Set(request.user_id),
        code: Set(request.code.clone()),
        referred_by: Set(request.referred_by),
        bonus: Set(request.bonus),
        ..Default::default()
    };

    trace!("Attempting to insert new referral into database");
    match new_referral.insert(&state.db).await {
        Ok(referral_model) => {
            info!(
                "Referral created successfully with ID: {}, code: {}",
                referral_model.id, referral_model.code
            );
            Ok((
                StatusCode::CREATED,
                Json(ReferralResponse::from(referral_model)),
            ))
        }
        Err(db_error) => {
            error!(
                "Failed to create referral with code '{}': {}",
                request.code, db_error
            );
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
