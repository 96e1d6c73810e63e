pub mod delete;
pub mod list;
pub mod record;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::fees::requests::RecordFeeRequest;
use crate::storage::Storage;

pub struct FeeService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 登记缴费
    pub async fn record_fee(
        &self,
        fee_data: RecordFeeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        record::record_fee(self, fee_data, request).await
    }

    // 缴费列表
    pub async fn list_fees(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_fees(self, request).await
    }

    // 删除缴费记录
    pub async fn delete_fee(&self, fee_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_fee(self, fee_id, request).await
    }
}
