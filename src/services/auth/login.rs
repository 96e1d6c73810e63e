use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let admin = service.get_credentials(request)?;
    let config = service.get_config();

    // 1. 用户名与密码都必须匹配，失败时不区分原因
    if login_request.username != admin.username
        || !verify_password(&login_request.password, &admin.password_hash)
    {
        tracing::info!("Failed login attempt for username: {}", login_request.username);
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Username or password is incorrect",
        )));
    }

    // 2. 签发访问令牌
    match JwtUtils::generate_access_token(&admin.username) {
        Ok(access_token) => {
            tracing::info!("Admin {} logged in successfully", admin.username);

            let response = LoginResponse {
                access_token,
                expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                username: admin.username,
                created_at: chrono::Utc::now(),
            };

            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Login successful")))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::TokenGenerationFailed,
                    "Login failed, unable to generate token",
                )),
            )
        }
    }
}
