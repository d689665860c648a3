use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Represents a player account.
/// Passwords are stored verbatim; this service has no credential handling
/// beyond storing what the client sent.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    #[sea_orm(default_value = "false")]
    pub is_blocked: bool,
    /// Gates a one-time onboarding flow in the client layer.
    #[sea_orm(default_value = "true")]
    pub is_first_login: bool,
    /// Spendable balance. Every new account opens at 10000.
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub balance: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    // A user can own multiple ledger entries.
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transaction,
}

impl ActiveModelBehavior for ActiveModel {}
