//! Restaurant Settings Repository (Singleton)
//!
//! The settings document lives at a fixed well-known record id instead of
//! an unconstrained collection scan, so "at most one document" is enforced
//! by construction.

use super::{BaseRepository, RepoError, RepoResult, make_thing};
use crate::db::models::RestaurantSettings;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "restaurant_settings";
const SINGLETON_ID: &str = "main";

#[derive(Clone)]
pub struct SettingsRepository {
    base: BaseRepository,
}

impl SettingsRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Get the singleton settings document. Reads never create it; callers
    /// fall back to [`RestaurantSettings::default`] when absent.
    pub async fn get(&self) -> RepoResult<Option<RestaurantSettings>> {
        let settings: Option<RestaurantSettings> =
            self.base.db().select((TABLE, SINGLETON_ID)).await?;
        Ok(settings)
    }

    /// Upsert the singleton: whole-document replace of provided fields.
    pub async fn upsert(&self, mut data: RestaurantSettings) -> RepoResult<RestaurantSettings> {
        data.id = None;

        if self.get().await?.is_some() {
            let thing = make_thing(TABLE, SINGLETON_ID);
            self.base
                .db()
                .query("UPDATE $thing CONTENT $data")
                .bind(("thing", thing))
                .bind(("data", data))
                .await?;
        } else {
            let _created: Option<RestaurantSettings> = self
                .base
                .db()
                .create((TABLE, SINGLETON_ID))
                .content(data)
                .await?;
        }

        self.get()
            .await?
            .ok_or_else(|| RepoError::Database("Failed to persist settings".to_string()))
    }
}
