use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::CreateStudentRequest};

pub async fn admit_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.create_student(student_data).await {
        Ok(student) => {
            tracing::info!(
                "Student admitted: id={}, class={}",
                student.id,
                student.class_name
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                student,
                "Admission submitted successfully",
            )))
        }
        Err(e) => {
            tracing::error!("Admission failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StudentCreationFailed,
                    format!("Admission failed: {e}"),
                )),
            )
        }
    }
}
