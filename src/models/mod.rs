//! 数据模型定义
//!
//! - `entities`: 业务实体
//! - `requests`: HTTP 请求体
//! - `responses`: HTTP 响应体

pub mod attendance;
pub mod auth;
pub mod common;
pub mod fees;
pub mod reports;
pub mod students;
pub mod teachers;

pub use common::{ApiResponse, ErrorCode, ListResponse};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
