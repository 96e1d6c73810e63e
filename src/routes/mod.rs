pub mod attendance;

pub mod auth;

pub mod dashboard;

pub mod fees;

pub mod students;

pub mod teachers;

pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use dashboard::configure_dashboard_routes;
pub use fees::configure_fee_routes;
pub use students::configure_student_routes;
pub use teachers::configure_teacher_routes;

use actix_web::{HttpRequest, HttpResponse, web};

use crate::models::{ApiResponse, ErrorCode};

// 未匹配的路径
async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::NotFound,
        format!("No route for {} {}", req.method(), req.path()),
    ))
}

/// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_student_routes)
        .configure(configure_teacher_routes)
        .configure(configure_attendance_routes)
        .configure(configure_fee_routes)
        .configure(configure_dashboard_routes)
        .default_service(web::to(not_found));
}
