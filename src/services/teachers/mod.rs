pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::teachers::requests::CreateTeacherRequest;
use crate::storage::Storage;

pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn create_teacher(
        &self,
        teacher_data: CreateTeacherRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_teacher(self, teacher_data, request).await
    }

    pub async fn list_teachers(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_teachers(self, request).await
    }

    pub async fn delete_teacher(
        &self,
        teacher_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_teacher(self, teacher_id, request).await
    }
}
