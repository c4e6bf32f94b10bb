//! 时间工具函数
//!
//! 所有 `created_at` 字段统一使用 Unix millis (`i64`)，
//! 在 repository 层写入时赋值。

/// Current Unix timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
