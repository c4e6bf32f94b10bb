//! QR Restaurant Ordering Server
//!
//! 单进程餐厅点餐后端：菜单浏览、下单与状态跟踪、顾客评价、
//! 积分账户、管理端餐厅设置，数据存储在嵌入式 SurrealDB。
//!
//! # 模块结构
//!
//! ```text
//! src/
//! ├── core/     # 配置、状态、服务器引导
//! ├── auth/     # 静态管理员令牌鉴权
//! ├── api/      # HTTP 路由和处理器
//! ├── db/       # 数据库连接、模型、仓储
//! └── utils/    # 错误、日志、校验工具
//! ```
//!
//! Every operation is a direct document read/write with light validation;
//! all collections share one embedded database connection held in
//! [`ServerState`].

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
