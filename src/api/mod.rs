//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 存活与健康检查
//! - [`auth`] - 管理员登录
//! - [`settings`] - 餐厅设置 (单例)
//! - [`menu`] - 菜单管理
//! - [`orders`] - 订单创建与状态跟踪
//! - [`reviews`] - 顾客评价
//! - [`rewards`] - 积分账户

pub mod auth;
pub mod health;
pub mod menu;
pub mod orders;
pub mod reviews;
pub mod rewards;
pub mod settings;

// Re-export common types for handlers
pub use crate::utils::{AppJson, AppResult};
