pub mod health;
pub mod leaderboards;
pub mod referrals;
pub mod transactions;
pub mod users;
