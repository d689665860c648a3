use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

use super::user;

/// A ledger entry for a balance-affecting event.
/// Inserting or updating one never touches the owning user's balance;
/// balance changes go through the user resource separately.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    /// Free text; "deposit" and "withdrawal" by convention only.
    #[sea_orm(column_name = "type")]
    pub kind: String,
    /// Sign is not constrained.
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub amount: Decimal,
    /// Free text; typically "pending" or "completed".
    pub status: String,
    /// Assigned by the store at insertion.
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    Owner,
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
