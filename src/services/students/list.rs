use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, ListResponse};
use crate::services::require_principal;

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_principal(request) {
        return Ok(resp);
    }
    let storage = service.get_storage(request)?;

    match storage.list_students().await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ListResponse::new(students),
            "Student list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve student list: {e}"),
            )),
        ),
    }
}
