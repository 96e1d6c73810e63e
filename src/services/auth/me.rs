use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, auth::PrincipalResponse};
use crate::services::require_principal;

use super::AuthService;

pub async fn handle_me(_service: &AuthService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    match require_principal(request) {
        Ok(principal) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PrincipalResponse { principal },
            "Admin information retrieved successfully",
        ))),
        Err(resp) => Ok(resp),
    }
}
