use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::require_principal;

pub async fn delete_fee(
    service: &FeeService,
    fee_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_principal(request) {
        return Ok(resp);
    }
    let storage = service.get_storage(request)?;

    match storage.delete_fee_payment(fee_id).await {
        Ok(_) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Fee record deleted successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::FeeDeleteFailed,
                format!("Fee record deletion failed: {e}"),
            )),
        ),
    }
}
