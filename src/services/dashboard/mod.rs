pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct DashboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl DashboardService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 仪表盘汇总
    pub async fn get_summary(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        summary::get_summary(self, request).await
    }
}
