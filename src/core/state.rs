//! 服务器状态
//!
//! [`ServerState`] 持有配置和共享数据库连接，
//! `Clone` 成本极低，所有 handler 共享同一连接。

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db;
use crate::utils::AppResult;

/// Shared application state. One embedded database connection serves all
/// request handlers; the storage engine serializes individual document
/// operations, and no other in-process mutable state exists.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    /// Open the configured database and assemble the state.
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = db::connect(&config.database_path, &config.database_name).await?;
        Ok(Self {
            config: config.clone(),
            db,
        })
    }
}
