use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RateLimit, RequireAdmin};
use crate::models::students::requests::CreateStudentRequest;
use crate::services::StudentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// HTTP处理程序
pub async fn admit_student(
    req: HttpRequest,
    student_data: web::Either<web::Json<CreateStudentRequest>, web::Form<CreateStudentRequest>>,
) -> ActixResult<HttpResponse> {
    let student_data = match student_data {
        web::Either::Left(json) => json.into_inner(),
        web::Either::Right(form) => form.into_inner(),
    };
    STUDENT_SERVICE.admit_student(student_data, &req).await
}

pub async fn list_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req).await
}

pub async fn delete_student(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(student_id.0, &req).await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    // 入学申请对外公开
    cfg.service(
        web::resource("/api/v1/admission")
            .wrap(RateLimit::admission())
            .route(web::post().to(admit_student)),
    )
    .service(
        web::scope("/api/v1/students")
            .wrap(RequireAdmin)
            .route("", web::get().to(list_students))
            .route("/{id}", web::delete().to(delete_student)),
    );
}
