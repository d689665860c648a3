use crate::schemas::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use model::entities::{referral, user};
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryOrder, QuerySelect, RelationTrait,
};
use serde::Serialize;
use tracing::{debug, error, info, instrument, trace};
use utoipa::ToSchema;

/// Both leaderboards cut off after this many entries.
const LEADERBOARD_SIZE: u64 = 10;

/// One row of the top-players leaderboard
#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct TopPlayerEntry {
    pub username: String,
    pub balance: Decimal,
}

/// One row of the top-referrers leaderboard.
/// `total_bonus` is null for users without any referral credited to them.
#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct TopReferrerEntry {
    pub username: String,
    pub total_bonus: Option<Decimal>,
}

/// Get the top players by balance
#[utoipa::path(
    get,
    path = "/top-players",
    tag = "leaderboards",
    responses(
        (status = 200, description = "Top players retrieved successfully", body = Vec<TopPlayerEntry>),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument]
pub async fn get_top_players(
    State(state): State<AppState>,
) -> Result<Json<Vec<TopPlayerEntry>>, StatusCode> {
    trace!("Entering get_top_players function");
    debug!("Computing top players leaderboard");

    match user::Entity::find()
        .select_only()
        .column(user::Column::Username)
        .column(user::Column::Balance)
        .order_by_desc(user::Column::Balance)
        .limit(LEADERBOARD_SIZE)
        .into_model::<TopPlayerEntry>()
        .all(&state.db)
        .await
    {
        Ok(players) => {
            info!("Top players leaderboard computed, {} entries", players.len());
            Ok(Json(players))
        }
        Err(db_error) => {
            error!("Failed to compute top players leaderboard: {}", db_error);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Get the top referrers by summed referral bonus.
/// Users with no referral rows still appear, with a null total (left join).
#[utoipa::path(
    get,
    path = "/top-referrers",
    tag = "leaderboards",
    responses(
        (status = 200, description = "Top referrers retrieved successfully", body = Vec<TopReferrerEntry>),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument]
pub async fn get_top_referrers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TopReferrerEntry>>, StatusCode> {
    trace!("Entering get_top_referrers function");
    debug!("Computing top referrers leaderboard");

    // SUM(referrals.bonus) grouped per user, joined on referred_by:
    // the crediting side of the referral record.
    match user::Entity::find()
        .select_only()
        .column(user::Column::Username)
        .column_as(referral::Column::Bonus.sum(), "total_bonus")
        .join_rev(JoinType::LeftJoin, referral::Relation::Referrer.def())
        .group_by(user::Column::Id)
        .order_by_desc(referral::Column::Bonus.sum())
        .limit(LEADERBOARD_SIZE)
        .into_model::<TopReferrerEntry>()
        .all(&state.db)
        .await
    {
        Ok(referrers) => {
            info!(
                "Top referrers leaderboard computed, {} entries",
                referrers.len()
            );
            Ok(Json(referrers))
        }
        Err(db_error) => {
            error!("Failed to compute top referrers leaderboard: {}", db_error);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
