use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Records that one user referred another.
/// Created when a referral code is redeemed by the client layer; never
/// updated or deleted here. Rows may outlive the users they point at —
/// the schema carries no foreign keys on purpose.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "referrals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    /// Opaque token the client hands out for redemption at signup.
    pub code: String,
    pub referred_by: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub bonus: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The record owner (`user_id`).
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    Owner,
    /// The crediting side (`referred_by`). The top-referrers leaderboard
    /// aggregates bonus over this link.
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ReferredBy",
        to = "super::user::Column::Id"
    )]
    Referrer,
}

impl ActiveModelBehavior for ActiveModel {}
