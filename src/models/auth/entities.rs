use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 已认证的管理员身份
///
/// 由 `RequireAdmin` 中间件在校验令牌后放入请求扩展，
/// 每个需要管理员权限的服务在入口处读取它。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct AdminPrincipal {
    pub username: String,
    // 令牌过期时间 (时间戳)
    pub expires_at: i64,
}

/// 管理员登录凭据（启动时从配置解析，放入 app_data）
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password_hash: String,
}
