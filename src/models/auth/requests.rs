use serde::Deserialize;
use ts_rs::TS;

// 管理员登录请求（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
