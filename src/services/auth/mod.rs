pub mod login;
pub mod logout;
pub mod me;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::config::AppConfig;
use crate::models::auth::{LoginRequest, entities::AdminCredentials};

pub struct AuthService {
    cache: Option<Arc<dyn ObjectCache>>,
}

impl AuthService {
    pub fn new_lazy() -> Self {
        Self { cache: None }
    }

    pub(crate) fn get_cache(&self, request: &HttpRequest) -> ActixResult<Arc<dyn ObjectCache>> {
        if let Some(cache) = &self.cache {
            return Ok(cache.clone());
        }
        request
            .app_data::<web::Data<Arc<dyn ObjectCache>>>()
            .map(|cache| cache.get_ref().clone())
            .ok_or_else(|| actix_web::error::ErrorInternalServerError("Cache not found in app data"))
    }

    pub(crate) fn get_credentials(&self, request: &HttpRequest) -> ActixResult<AdminCredentials> {
        request
            .app_data::<web::Data<AdminCredentials>>()
            .map(|admin| admin.get_ref().clone())
            .ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("Admin credentials not found in app data")
            })
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 管理员登录
    pub async fn login(
        &self,
        login_request: LoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request, request).await
    }

    // 注销当前令牌
    pub async fn logout(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        logout::handle_logout(self, request).await
    }

    // 当前管理员信息
    pub async fn me(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        me::handle_me(self, request).await
    }
}
