pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::CreateStudentRequest;
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 入学申请（公开）
    pub async fn admit_student(
        &self,
        student_data: CreateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::admit_student(self, student_data, request).await
    }

    // 获取学生列表
    pub async fn list_students(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_students(self, request).await
    }

    // 删除学生
    pub async fn delete_student(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, student_id, request).await
    }
}
