//! Order Repository
//!
//! Orders are insert-then-mutate-status only; they are never deleted.
//! `created_at` is stamped here on insert and drives the newest-first
//! listing order.

use super::{BaseRepository, RepoError, RepoResult, make_thing, parse_record_key};
use crate::db::models::{Order, OrderCreate, OrderStatus};
use crate::utils::time::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "orders";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        let order = Order {
            id: None,
            customer_name: data.customer_name,
            table_number: data.table_number,
            items: data.items,
            total_amount: data.total_amount,
            status: data.status,
            payment_status: data.payment_status,
            created_at: now_millis(),
        };
        let created: Option<Order> = self.base.db().create(TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// List orders newest first, optionally filtered by exact status match.
    pub async fn find_all(&self, status: Option<&str>) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = match status {
            Some(status) => {
                self.base
                    .db()
                    .query(
                        "SELECT * FROM orders WHERE status = $status ORDER BY created_at DESC",
                    )
                    .bind(("status", status.to_string()))
                    .await?
                    .take(0)?
            }
            None => {
                self.base
                    .db()
                    .query("SELECT * FROM orders ORDER BY created_at DESC")
                    .await?
                    .take(0)?
            }
        };
        Ok(orders)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let key = parse_record_key(TABLE, id)?;
        let order: Option<Order> = self.base.db().select((TABLE, key)).await?;
        Ok(order)
    }

    /// Set `status` only; `payment_status` is untouched here. Any status
    /// may replace any other.
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        let key = parse_record_key(TABLE, id)?;
        self.find_by_id(&key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))?;

        let thing = make_thing(TABLE, &key);
        self.base
            .db()
            .query("UPDATE $thing SET status = $status")
            .bind(("thing", thing))
            .bind(("status", status))
            .await?;

        self.find_by_id(&key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
    }
}
