pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod fees;
pub mod students;
pub mod teachers;

pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use dashboard::DashboardService;
pub use fees::FeeService;
pub use students::StudentService;
pub use teachers::TeacherService;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::middlewares::RequireAdmin;
use crate::models::auth::AdminPrincipal;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

// 从 app_data 中取出存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|storage| storage.get_ref().clone())
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Storage not found in app data"))
}

/// 管理员权限检查，未认证时返回 401 响应
pub(crate) fn require_principal(request: &HttpRequest) -> Result<AdminPrincipal, HttpResponse> {
    RequireAdmin::extract_principal(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))
    })
}
