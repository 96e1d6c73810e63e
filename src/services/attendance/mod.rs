pub mod delete;
pub mod list;
pub mod mark;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::attendance::requests::MarkAttendanceRequest;
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 批量登记考勤（JSON）
    pub async fn mark_attendance(
        &self,
        mark_request: MarkAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mark::mark_attendance(self, mark_request, request).await
    }

    // 批量登记考勤（表单 student_<id>=<status>）
    pub async fn mark_attendance_form(
        &self,
        fields: HashMap<String, String>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mark::mark_attendance_form(self, fields, request).await
    }

    // 考勤列表
    pub async fn list_attendance(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_attendance(self, request).await
    }

    // 删除考勤记录
    pub async fn delete_attendance(
        &self,
        record_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_attendance(self, record_id, request).await
    }
}
