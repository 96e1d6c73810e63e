use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::require_principal;

pub async fn delete_attendance(
    service: &AttendanceService,
    record_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_principal(request) {
        return Ok(resp);
    }
    let storage = service.get_storage(request)?;

    match storage.delete_attendance_record(record_id).await {
        Ok(_) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Attendance record deleted successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::AttendanceDeleteFailed,
                format!("Attendance record deletion failed: {e}"),
            )),
        ),
    }
}
