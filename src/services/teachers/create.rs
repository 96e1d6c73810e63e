use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode, teachers::requests::CreateTeacherRequest};
use crate::services::require_principal;

pub async fn create_teacher(
    service: &TeacherService,
    teacher_data: CreateTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_principal(request) {
        return Ok(resp);
    }
    let storage = service.get_storage(request)?;

    match storage.create_teacher(teacher_data).await {
        Ok(teacher) => Ok(HttpResponse::Created().json(ApiResponse::success(
            teacher,
            "Teacher created successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::TeacherCreationFailed,
                format!("Teacher creation failed: {e}"),
            )),
        ),
    }
}
