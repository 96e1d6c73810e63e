use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_admin::revoked_token_key;
use crate::models::ApiResponse;
use crate::services::require_principal;
use crate::utils::jwt::JwtUtils;

use super::AuthService;

pub async fn handle_logout(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = match require_principal(request) {
        Ok(principal) => principal,
        Err(resp) => return Ok(resp),
    };

    // 中间件已校验过令牌，这里只需要取出原文
    if let Some(token) = JwtUtils::extract_bearer_token(request) {
        let cache = service.get_cache(request)?;
        // 注销记录保留到令牌过期（含校验时 60 秒的 leeway）
        let remaining = (principal.expires_at - chrono::Utc::now().timestamp()).max(0) as u64 + 60;
        cache
            .insert_raw(revoked_token_key(&token), principal.username.clone(), remaining)
            .await;
    }

    tracing::info!("Admin {} logged out", principal.username);
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Logout successful")))
}
