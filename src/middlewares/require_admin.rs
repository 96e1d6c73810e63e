/*!
 * 管理员认证中间件
 *
 * 校验 `Authorization: Bearer <token>` 中的访问令牌，只有管理员能通过。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::web;
 * use crate::middlewares::RequireAdmin;
 *
 * web::scope("/api/v1/students")
 *     .wrap(RequireAdmin)
 *     .route("", web::get().to(list_students));
 * ```
 *
 * 处理程序中通过 `RequireAdmin::extract_principal(&req)` 读取当前管理员。
 *
 * ## 认证流程
 *
 * 1. 提取并验证 JWT 签名、过期时间、令牌类型和角色
 * 2. 令牌主体必须是当前配置的管理员用户名
 * 3. 查询缓存，已注销的令牌（`revoked:<token>`）直接拒绝
 * 4. 通过后把 `AdminPrincipal` 放入请求扩展
 */

use super::create_error_response;
use crate::cache::{CacheResult, ObjectCache};
use crate::models::ErrorCode;
use crate::models::auth::entities::{AdminCredentials, AdminPrincipal};
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

/// 注销令牌在缓存中的键
pub fn revoked_token_key(token: &str) -> String {
    format!("revoked:{token}")
}

#[derive(Clone)]
pub struct RequireAdmin;

// 辅助函数：提取并验证管理员令牌
async fn extract_and_validate_admin(req: &ServiceRequest) -> Result<AdminPrincipal, String> {
    let token = JwtUtils::extract_bearer_token(req.request())
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let claims = JwtUtils::verify_access_token(&token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    let admin = req
        .app_data::<web::Data<AdminCredentials>>()
        .ok_or_else(|| "Admin credentials not configured".to_string())?;
    if claims.sub != admin.username {
        return Err("Token subject is not the configured admin".to_string());
    }

    let cache = req
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .ok_or_else(|| "Cache not configured".to_string())?
        .get_ref()
        .clone();

    if let CacheResult::Found(_) | CacheResult::ExistsButNoValue =
        cache.get_raw(&revoked_token_key(&token)).await
    {
        return Err("Token has been revoked".to_string());
    }

    Ok(AdminPrincipal {
        username: claims.sub,
        expires_at: claims.exp as i64,
    })
}

impl<S, B> Transform<S, ServiceRequest> for RequireAdmin
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAdminMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAdminMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireAdminMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireAdminMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Success, "")
                        .map_into_right_body(),
                ));
            }

            match extract_and_validate_admin(&req).await {
                Ok(principal) => {
                    debug!("Admin authentication successful for: {}", principal.username);
                    req.extensions_mut().insert(principal);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "Admin authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

impl RequireAdmin {
    /// 从请求扩展中提取当前管理员
    /// 只在应用了 RequireAdmin 中间件的路由中有值
    pub fn extract_principal(req: &actix_web::HttpRequest) -> Option<AdminPrincipal> {
        req.extensions().get::<AdminPrincipal>().cloned()
    }
}
