use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::AdminPrincipal;

// 登录响应模型
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: i64, // 秒
    pub username: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct PrincipalResponse {
    pub principal: AdminPrincipal,
}
