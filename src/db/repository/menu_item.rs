//! Menu Item Repository

use super::{BaseRepository, RepoError, RepoResult, make_thing, parse_record_key};
use crate::db::models::{MenuItem, MenuItemCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// List items sorted ascending by title, optionally filtered by exact
    /// category match. No pagination.
    pub async fn find_all(&self, category: Option<&str>) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = match category {
            Some(category) => {
                self.base
                    .db()
                    .query("SELECT * FROM menu_item WHERE category = $category ORDER BY title ASC")
                    .bind(("category", category.to_string()))
                    .await?
                    .take(0)?
            }
            None => {
                self.base
                    .db()
                    .query("SELECT * FROM menu_item ORDER BY title ASC")
                    .await?
                    .take(0)?
            }
        };
        Ok(items)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let key = parse_record_key(TABLE, id)?;
        let item: Option<MenuItem> = self.base.db().select((TABLE, key)).await?;
        Ok(item)
    }

    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        let item = MenuItem::from(data);
        let created: Option<MenuItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    /// Full-document replace of the fields at `id`.
    pub async fn update(&self, id: &str, data: MenuItemCreate) -> RepoResult<MenuItem> {
        let key = parse_record_key(TABLE, id)?;
        self.find_by_id(&key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {id} not found")))?;

        let item = MenuItem::from(data);
        let thing = make_thing(TABLE, &key);
        self.base
            .db()
            .query("UPDATE $thing CONTENT $data")
            .bind(("thing", thing))
            .bind(("data", item))
            .await?;

        self.find_by_id(&key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {id} not found")))
    }

    /// Hard delete. Returns false when nothing was deleted.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = parse_record_key(TABLE, id)?;
        let deleted: Option<MenuItem> = self.base.db().delete((TABLE, key)).await?;
        Ok(deleted.is_some())
    }
}
