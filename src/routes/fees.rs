use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireAdmin;
use crate::models::fees::requests::RecordFeeRequest;
use crate::services::FeeService;
use crate::utils::SafeIDI64;

// 懒加载的全局 FeeService 实例
static FEE_SERVICE: Lazy<FeeService> = Lazy::new(FeeService::new_lazy);

pub async fn record_fee(
    req: HttpRequest,
    fee_data: web::Either<web::Json<RecordFeeRequest>, web::Form<RecordFeeRequest>>,
) -> ActixResult<HttpResponse> {
    let fee_data = match fee_data {
        web::Either::Left(json) => json.into_inner(),
        web::Either::Right(form) => form.into_inner(),
    };
    FEE_SERVICE.record_fee(fee_data, &req).await
}

pub async fn list_fees(req: HttpRequest) -> ActixResult<HttpResponse> {
    FEE_SERVICE.list_fees(&req).await
}

pub async fn delete_fee(req: HttpRequest, fee_id: SafeIDI64) -> ActixResult<HttpResponse> {
    FEE_SERVICE.delete_fee(fee_id.0, &req).await
}

// 配置路由
pub fn configure_fee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/fees")
            .wrap(RequireAdmin)
            .route("", web::get().to(list_fees))
            .route("", web::post().to(record_fee))
            .route("/{id}", web::delete().to(delete_fee)),
    );
}
