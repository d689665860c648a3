//! This file serves as the root for all SeaORM entity modules.
//! We define the data models for the referral/wallet backend here:
//! users, the referrals between them, and the transaction ledger.

pub mod referral;
pub mod transaction;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::referral::Entity as Referral;
    pub use super::transaction::Entity as Transaction;
    pub use super::user::Entity as User;
}

#[cfg(test)]
mod test {
    use migration::{Migrator, MigratorTrait};
    use rust_decimal::Decimal;
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, DbErr, EntityTrait,
        QueryFilter, Set, SqlErr,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        // Connect to the SQLite database
        let db = Database::connect("sqlite::memory:").await?;

        // Apply migrations to create the schema
        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        // Setup database
        let db = setup_db().await?;

        // Create users
        let alice = user::ActiveModel {
            username: Set("alice".to_string()),
            email: Set("alice@example.com".to_string()),
            password: Set("hunter2".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let bob = user::ActiveModel {
            username: Set("bob".to_string()),
            email: Set("bob@example.com".to_string()),
            password: Set("swordfish".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Schema defaults apply when the columns are not set explicitly
        assert_eq!(alice.balance, Decimal::from(10_000));
        assert!(!alice.is_blocked);
        assert!(alice.is_first_login);

        // Bob redeemed a code handed out by Alice
        let referral = referral::ActiveModel {
            user_id: Set(bob.id),
            code: Set("ALICE-2024".to_string()),
            referred_by: Set(Some(alice.id)),
            bonus: Set(Decimal::from(50)),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Ledger entries for both users
        let deposit = transaction::ActiveModel {
            user_id: Set(alice.id),
            kind: Set("deposit".to_string()),
            amount: Set(Decimal::from(250)),
            status: Set("pending".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let withdrawal = transaction::ActiveModel {
            user_id: Set(bob.id),
            kind: Set("withdrawal".to_string()),
            amount: Set(Decimal::from(-75)),
            status: Set("completed".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Read back and verify data
        let users = User::find().all(&db).await?;
        assert_eq!(users.len(), 2);
        assert!(users.iter().any(|u| u.username == "alice"));
        assert!(users.iter().any(|u| u.username == "bob"));

        let referrals = Referral::find().all(&db).await?;
        assert_eq!(referrals.len(), 1);
        assert_eq!(referrals[0].id, referral.id);
        assert_eq!(referrals[0].referred_by, Some(alice.id));
        assert_eq!(referrals[0].bonus, Decimal::from(50));

        let transactions = Transaction::find().all(&db).await?;
        assert_eq!(transactions.len(), 2);
        assert!(transactions.iter().any(|t| t.id == deposit.id));
        assert!(transactions.iter().any(|t| t.id == withdrawal.id));

        // The store stamps created_at on insertion
        let alice_txs = Transaction::find()
            .filter(transaction::Column::UserId.eq(alice.id))
            .all(&db)
            .await?;
        assert_eq!(alice_txs.len(), 1);
        assert_eq!(alice_txs[0].kind, "deposit");
        assert_eq!(alice_txs[0].status, "pending");

        Ok(())
    }

    #[tokio::test]
    async fn test_unique_username_and_email() -> Result<(), DbErr> {
        let db = setup_db().await?;

        user::ActiveModel {
            username: Set("carol".to_string()),
            email: Set("carol@example.com".to_string()),
            password: Set("pw".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Same username, different email
        let err = user::ActiveModel {
            username: Set("carol".to_string()),
            email: Set("other@example.com".to_string()),
            password: Set("pw".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap_err();
        assert!(matches!(
            err.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(_))
        ));

        // Same email, different username
        let err = user::ActiveModel {
            username: Set("dave".to_string()),
            email: Set("carol@example.com".to_string()),
            password: Set("pw".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap_err();
        assert!(matches!(
            err.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(_))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_user_delete_leaves_rows_dangling() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let user = user::ActiveModel {
            username: Set("erin".to_string()),
            email: Set("erin@example.com".to_string()),
            password: Set("pw".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        referral::ActiveModel {
            user_id: Set(user.id),
            code: Set("ERIN-1".to_string()),
            referred_by: Set(Some(user.id)),
            bonus: Set(Decimal::from(10)),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        transaction::ActiveModel {
            user_id: Set(user.id),
            kind: Set("deposit".to_string()),
            amount: Set(Decimal::from(100)),
            status: Set("pending".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Deleting the user must not cascade
        User::delete_by_id(user.id).exec(&db).await?;

        let referrals = Referral::find()
            .filter(referral::Column::UserId.eq(user.id))
            .all(&db)
            .await?;
        assert_eq!(referrals.len(), 1);

        let transactions = Transaction::find()
            .filter(transaction::Column::UserId.eq(user.id))
            .all(&db)
            .await?;
        assert_eq!(transactions.len(), 1);

        Ok(())
    }
}
