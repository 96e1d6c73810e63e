use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::require_principal;

pub async fn delete_teacher(
    service: &TeacherService,
    teacher_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_principal(request) {
        return Ok(resp);
    }
    let storage = service.get_storage(request)?;

    match storage.delete_teacher(teacher_id).await {
        Ok(false) => {
            tracing::debug!("Teacher {} not found, nothing deleted", teacher_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Teacher deleted successfully")))
        }
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Teacher deleted successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::TeacherDeleteFailed,
                format!("Teacher deletion failed: {e}"),
            )),
        ),
    }
}
