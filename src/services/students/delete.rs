use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::require_principal;

pub async fn delete_student(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = match require_principal(request) {
        Ok(principal) => principal,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request)?;

    // 不存在的 id 同样视为删除成功
    match storage.delete_student(student_id).await {
        Ok(deleted) => {
            tracing::info!(
                "Student {} delete requested by {} (deleted: {})",
                student_id,
                principal.username,
                deleted
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Student deleted successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::StudentDeleteFailed,
                format!("Student deletion failed: {e}"),
            )),
        ),
    }
}
