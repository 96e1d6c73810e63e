use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::{ApiResponse, ErrorCode, fees::requests::RecordFeeRequest};
use crate::services::require_principal;

pub async fn record_fee(
    service: &FeeService,
    fee_data: RecordFeeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_principal(request) {
        return Ok(resp);
    }
    let storage = service.get_storage(request)?;

    // 学生必须存在
    match storage.get_student_by_id(fee_data.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                format!("Student {} not found", fee_data.student_id),
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::FeeRecordFailed,
                    format!("Failed to look up student: {e}"),
                )),
            );
        }
    }

    match storage.record_fee(fee_data).await {
        Ok(payment) => Ok(HttpResponse::Created().json(ApiResponse::success(
            payment,
            "Fee recorded successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::FeeRecordFailed,
                format!("Failed to record fee: {e}"),
            )),
        ),
    }
}
