//! Reward Account Repository
//!
//! Accounts are looked up by phone number and auto-created on first access
//! (a read that creates data; the lookup endpoint doubles as enrollment).
//! The add-points sequence is read-then-write and therefore not atomic
//! against concurrent additions for the same phone; see DESIGN.md.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{RewardAccount, Tier};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "reward_account";

#[derive(Clone)]
pub struct RewardAccountRepository {
    base: BaseRepository,
}

impl RewardAccountRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_phone(&self, phone: &str) -> RepoResult<Option<RewardAccount>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM reward_account WHERE customer_phone = $phone LIMIT 1")
            .bind(("phone", phone.to_string()))
            .await?;
        let accounts: Vec<RewardAccount> = result.take(0)?;
        Ok(accounts.into_iter().next())
    }

    /// Look up the account for `phone`, creating a fresh Bronze account with
    /// zero points when none exists.
    pub async fn get_or_create(&self, phone: &str) -> RepoResult<RewardAccount> {
        if let Some(account) = self.find_by_phone(phone).await? {
            return Ok(account);
        }

        let account = RewardAccount::new(phone.to_string());
        let created: Option<RewardAccount> =
            self.base.db().create(TABLE).content(account).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create reward account".to_string()))
    }

    /// Apply a point delta (may be negative), clamp the balance at zero,
    /// recompute the tier and persist.
    pub async fn add_points(&self, phone: &str, delta: i64) -> RepoResult<RewardAccount> {
        let account = self.get_or_create(phone).await?;
        let points = (account.points + delta).max(0);
        let tier = Tier::for_points(points);

        let thing = account
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Reward account has no id".to_string()))?;
        self.base
            .db()
            .query("UPDATE $thing SET points = $points, tier = $tier")
            .bind(("thing", thing))
            .bind(("points", points))
            .bind(("tier", tier))
            .await?;

        self.find_by_phone(phone)
            .await?
            .ok_or_else(|| RepoError::Database("Reward account vanished after update".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    async fn repo() -> RewardAccountRepository {
        RewardAccountRepository::new(db::connect_memory().await.unwrap())
    }

    #[tokio::test]
    async fn get_or_create_is_idempotent() {
        let repo = repo().await;
        let first = repo.get_or_create("600111222").await.unwrap();
        assert_eq!(first.points, 0);
        assert_eq!(first.tier, Tier::Bronze);

        let second = repo.get_or_create("600111222").await.unwrap();
        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn add_points_clamps_at_zero() {
        let repo = repo().await;
        let account = repo.add_points("600111222", -50).await.unwrap();
        assert_eq!(account.points, 0);
        assert_eq!(account.tier, Tier::Bronze);
    }

    #[tokio::test]
    async fn add_points_crosses_tier_boundaries() {
        let repo = repo().await;
        assert_eq!(repo.add_points("p", 199).await.unwrap().tier, Tier::Bronze);
        assert_eq!(repo.add_points("p", 1).await.unwrap().tier, Tier::Silver);
        assert_eq!(repo.add_points("p", 299).await.unwrap().tier, Tier::Silver);
        assert_eq!(repo.add_points("p", 1).await.unwrap().tier, Tier::Gold);
    }
}
