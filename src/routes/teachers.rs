use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireAdmin;
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::services::TeacherService;
use crate::utils::SafeIDI64;

// 懒加载的全局 TeacherService 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

pub async fn list_teachers(req: HttpRequest) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_teachers(&req).await
}

pub async fn create_teacher(
    req: HttpRequest,
    teacher_data: web::Either<web::Json<CreateTeacherRequest>, web::Form<CreateTeacherRequest>>,
) -> ActixResult<HttpResponse> {
    let teacher_data = match teacher_data {
        web::Either::Left(json) => json.into_inner(),
        web::Either::Right(form) => form.into_inner(),
    };
    TEACHER_SERVICE.create_teacher(teacher_data, &req).await
}

pub async fn delete_teacher(req: HttpRequest, teacher_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.delete_teacher(teacher_id.0, &req).await
}

// 配置路由
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teachers")
            .wrap(RequireAdmin)
            .route("", web::get().to(list_teachers))
            .route("", web::post().to(create_teacher))
            .route("/{id}", web::delete().to(delete_teacher)),
    );
}
