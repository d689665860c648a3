use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Username).unique_key())
                    .col(string(Users::Email).unique_key())
                    .col(string(Users::Password))
                    .col(boolean(Users::IsBlocked).default(false))
                    .col(boolean(Users::IsFirstLogin).default(true))
                    .col(decimal(Users::Balance).decimal_len(16, 4).default(10_000))
                    .to_owned(),
            )
            .await?;

        // Create referrals table.
        // user_id/referred_by reference users by id but carry no schema-level
        // foreign keys: rows must survive deletion of the user they point at.
        manager
            .create_table(
                Table::create()
                    .table(Referrals::Table)
                    .if_not_exists()
                    .col(pk_auto(Referrals::Id))
                    .col(integer(Referrals::UserId))
                    .col(string(Referrals::Code))
                    .col(integer_null(Referrals::ReferredBy))
                    .col(decimal(Referrals::Bonus).decimal_len(16, 4).default(0))
                    .to_owned(),
            )
            .await?;

        // Create transactions table (same no-foreign-key rule as referrals)
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(pk_auto(Transactions::Id))
                    .col(integer(Transactions::UserId))
                    .col(string(Transactions::Type))
                    .col(decimal(Transactions::Amount).decimal_len(16, 4))
                    .col(string(Transactions::Status))
                    .col(timestamp(Transactions::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Referrals::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

// Define identifiers for all tables

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    Password,
    IsBlocked,
    IsFirstLogin,
    Balance,
}

#[derive(DeriveIden)]
enum Referrals {
    Table,
    Id,
    UserId,
    Code,
    ReferredBy,
    Bonus,
}

#[derive(DeriveIden)]
enum Transactions {
    Table,
    Id,
    UserId,
    Type,
    Amount,
    Status,
    CreatedAt,
}
