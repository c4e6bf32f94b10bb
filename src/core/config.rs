//! 服务器配置
//!
//! # 环境变量
//!
//! 所有配置项都可以通过环境变量覆盖：
//!
//! | 环境变量 | 默认值 | 说明 |
//! |----------|--------|------|
//! | HTTP_PORT | 3000 | HTTP 服务端口 |
//! | DATABASE_PATH | ./data/qr-ordering.db | 嵌入式数据库路径 |
//! | DATABASE_NAME | qr_ordering | 命名空间/数据库名 |
//! | ADMIN_PASSWORD | admin123 | 管理员登录密码 |
//! | ADMIN_TOKEN | admin-demo-token | 静态管理员 Bearer Token |
//! | CORS_ALLOW_ORIGIN | (未设置 → 全开放) | 允许的跨域来源 |
//!
//! The hardcoded secret fallbacks exist for demo convenience only. Set
//! `ADMIN_PASSWORD` / `ADMIN_TOKEN` in any real deployment.

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 嵌入式数据库路径 (连接串)
    pub database_path: String,
    /// SurrealDB namespace/database 名称
    pub database_name: String,
    /// 管理员登录密码
    pub admin_password: String,
    /// 静态管理员令牌 (非会话、不过期、不轮换)
    pub admin_token: String,
    /// 允许的跨域来源；`None` 表示完全开放 (原始行为)
    pub cors_allow_origin: Option<String>,
}

impl Config {
    /// 从环境变量加载配置，未设置时使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./data/qr-ordering.db".into()),
            database_name: std::env::var("DATABASE_NAME").unwrap_or_else(|_| "qr_ordering".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".into()),
            admin_token: std::env::var("ADMIN_TOKEN")
                .unwrap_or_else(|_| "admin-demo-token".into()),
            cors_allow_origin: std::env::var("CORS_ALLOW_ORIGIN").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
