use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode, ListResponse};
use crate::services::require_principal;

pub async fn list_teachers(
    service: &TeacherService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_principal(request) {
        return Ok(resp);
    }
    let storage = service.get_storage(request)?;

    match storage.list_teachers().await {
        Ok(teachers) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ListResponse::new(teachers),
            "Teacher list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve teacher list: {e}"),
            )),
        ),
    }
}
