use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DashboardService;
use crate::errors::Result;
use crate::models::{ApiResponse, ErrorCode, reports::responses::DashboardResponse};
use crate::services::require_principal;
use crate::storage::Storage;

async fn build_summary(storage: &dyn Storage) -> Result<DashboardResponse> {
    Ok(DashboardResponse {
        students_per_class: storage.count_students_per_class().await?,
        fees_by_status: storage.count_fees_by_status().await?,
        attendance_by_status: storage.count_attendance_by_status().await?,
    })
}

pub async fn get_summary(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_principal(request) {
        return Ok(resp);
    }
    let storage = service.get_storage(request)?;

    match build_summary(storage.as_ref()).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            summary,
            "Dashboard retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ReportQueryFailed,
                format!("Failed to build dashboard: {e}"),
            )),
        ),
    }
}
