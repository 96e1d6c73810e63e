use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::{ApiResponse, ErrorCode, ListResponse};
use crate::services::require_principal;

pub async fn list_fees(service: &FeeService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_principal(request) {
        return Ok(resp);
    }
    let storage = service.get_storage(request)?;

    match storage.list_fees_report().await {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ListResponse::new(rows),
            "Fee list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ReportQueryFailed,
                format!("Failed to retrieve fee list: {e}"),
            )),
        ),
    }
}
