use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::middlewares::RequireAdmin;
use crate::models::attendance::requests::MarkAttendanceRequest;
use crate::services::AttendanceService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn mark_attendance(
    req: HttpRequest,
    mark_data: web::Json<MarkAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .mark_attendance(mark_data.into_inner(), &req)
        .await
}

pub async fn mark_attendance_form(
    req: HttpRequest,
    form: web::Form<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .mark_attendance_form(form.into_inner(), &req)
        .await
}

pub async fn list_attendance(req: HttpRequest) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.list_attendance(&req).await
}

pub async fn delete_attendance(req: HttpRequest, record_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.delete_attendance(record_id.0, &req).await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(RequireAdmin)
            .route("", web::get().to(list_attendance))
            .route("", web::post().to(mark_attendance))
            .route("/form", web::post().to(mark_attendance_form))
            .route("/{id}", web::delete().to(delete_attendance)),
    );
}
