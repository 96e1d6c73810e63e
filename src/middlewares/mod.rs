//! 请求中间件
//!
//! - `require_admin`: 管理员令牌校验
//! - `rate_limit`: 按客户端 IP 的请求频率限制

pub mod rate_limit;
pub mod require_admin;

pub use rate_limit::RateLimit;
pub use require_admin::RequireAdmin;

use crate::models::{ApiResponse, ErrorCode};
use actix_web::{HttpResponse, http::StatusCode, http::header::CONTENT_TYPE};

// 辅助函数：创建错误响应
pub(crate) fn create_error_response(
    status: StatusCode,
    code: ErrorCode,
    message: &str,
) -> HttpResponse {
    match status {
        StatusCode::NO_CONTENT => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .finish(),
        _ => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
            .json(ApiResponse::<()>::error_empty(code, message)),
    }
}
