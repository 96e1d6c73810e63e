use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::AttendanceService;
use crate::models::{ApiResponse, ErrorCode, attendance::requests::MarkAttendanceRequest};
use crate::services::require_principal;

pub async fn mark_attendance(
    service: &AttendanceService,
    mark_request: MarkAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = match require_principal(request) {
        Ok(principal) => principal,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request)?;

    let entries = mark_request.records.len();
    match storage.mark_attendance(mark_request).await {
        Ok(response) => {
            tracing::info!(
                "{} marked attendance for {}: {} of {} rows inserted",
                principal.username,
                response.date,
                response.inserted,
                entries
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Attendance marked successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::AttendanceMarkFailed,
                format!("Failed to mark attendance: {e}"),
            )),
        ),
    }
}

pub async fn mark_attendance_form(
    service: &AttendanceService,
    fields: HashMap<String, String>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_principal(request) {
        return Ok(resp);
    }

    match MarkAttendanceRequest::from_form_fields(fields) {
        Ok(mark_request) => mark_attendance(service, mark_request, request).await,
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AttendanceFormInvalid,
            format!("Invalid attendance form: {e}"),
        ))),
    }
}
