mod common;

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};

use rust_schooladmin::cache::ObjectCache;
use rust_schooladmin::cache::object_cache::moka::MokaCacheWrapper;
use rust_schooladmin::models::auth::entities::AdminCredentials;
use rust_schooladmin::routes;
use rust_schooladmin::storage::Storage;
use rust_schooladmin::utils::password::hash_password;
use rust_schooladmin::utils::{form_error_handler, json_error_handler, query_error_handler};

use common::temp_storage;

const ADMIN_PASSWORD: &str = "correct horse";

macro_rules! init_app {
    ($prefix:expr) => {{
        let temp = temp_storage($prefix).await;
        let storage: Arc<dyn Storage> = Arc::new(temp.storage.clone());
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::new().unwrap());
        let admin = AdminCredentials {
            username: "admin".to_string(),
            password_hash: hash_password(ADMIN_PASSWORD).unwrap(),
        };
        let app = test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::FormConfig::default().error_handler(form_error_handler))
                .app_data(web::Data::new(storage))
                .app_data(web::Data::new(cache))
                .app_data(web::Data::new(admin))
                .configure(routes::configure_api_routes),
        )
        .await;
        (app, temp)
    }};
}

// 每个测试使用不同的客户端地址，互不占用登录限流额度
macro_rules! login {
    ($app:expr, $ip:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .insert_header(("X-Forwarded-For", $ip))
            .set_json(json!({ "username": "admin", "password": ADMIN_PASSWORD }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        assert_eq!(body["code"], 0, "login should succeed: {body}");
        body["data"]["access_token"]
            .as_str()
            .expect("access token")
            .to_string()
    }};
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

#[actix_web::test]
async fn admin_endpoints_require_token() {
    let (app, _db) = init_app!("api-no-token");

    for uri in [
        "/api/v1/students",
        "/api/v1/teachers",
        "/api/v1/attendance",
        "/api/v1/fees",
        "/api/v1/dashboard",
        "/api/v1/auth/me",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/students")
        .insert_header(bearer("not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn wrong_password_is_rejected() {
    let (app, _db) = init_app!("api-bad-login");

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .insert_header(("X-Forwarded-For", "198.51.100.2"))
        .set_json(json!({ "username": "admin", "password": "guess" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn login_then_logout_revokes_token() {
    let (app, _db) = init_app!("api-logout");
    let token = login!(app, "198.51.100.3");

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["principal"]["username"], "admin");

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/v1/students")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn too_many_logins_are_throttled() {
    let (app, _db) = init_app!("api-throttle");

    let mut last = StatusCode::OK;
    for _ in 0..6 {
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .insert_header(("X-Forwarded-For", "198.51.100.4"))
            .set_json(json!({ "username": "admin", "password": "guess" }))
            .to_request();
        last = test::call_service(&app, req).await.status();
    }
    assert_eq!(last, StatusCode::TOO_MANY_REQUESTS);
}

#[actix_web::test]
async fn admission_is_public_and_listed_for_admin() {
    let (app, _db) = init_app!("api-admission");

    let req = test::TestRequest::post()
        .uri("/api/v1/admission")
        .insert_header(("X-Forwarded-For", "198.51.100.5"))
        .set_json(json!({ "name": "Ana", "class": "5A", "phone": "555-0100" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    // 表单提交同样可以
    let req = test::TestRequest::post()
        .uri("/api/v1/admission")
        .insert_header(("X-Forwarded-For", "198.51.100.5"))
        .set_form([("name", "Ben"), ("class", "5B"), ("phone", "555-0101")])
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let token = login!(app, "198.51.100.5");
    let req = test::TestRequest::get()
        .uri("/api/v1/students")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], 2);
    assert_eq!(body["data"]["items"][0]["name"], "Ana");
    assert_eq!(body["data"]["items"][0]["class"], "5A");
}

#[actix_web::test]
async fn attendance_form_and_dashboard() {
    let (app, _db) = init_app!("api-attendance-form");
    let token = login!(app, "198.51.100.6");

    let req = test::TestRequest::post()
        .uri("/api/v1/admission")
        .insert_header(("X-Forwarded-For", "198.51.100.6"))
        .set_json(json!({ "name": "Ana", "class": "5A", "phone": "555-0100" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let ana_id = body["data"]["id"].as_i64().expect("student id");

    let student_field = format!("student_{ana_id}");
    let req = test::TestRequest::post()
        .uri("/api/v1/attendance/form")
        .insert_header(bearer(&token))
        .set_form([
            ("date", "2024-01-01"),
            (student_field.as_str(), "Present"),
            ("submit", "Save"),
        ])
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["inserted"], 1);
    assert_eq!(body["data"]["date"], "2024-01-01");

    let req = test::TestRequest::post()
        .uri("/api/v1/attendance/form")
        .insert_header(bearer(&token))
        .set_form([("student_abc", "Present")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/fees")
        .insert_header(bearer(&token))
        .set_json(json!({ "student_id": ana_id, "amount": 1200, "status": "Paid", "date": "2024-01-01" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/api/v1/dashboard")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body["data"]["students_per_class"],
        json!([{ "class": "5A", "count": 1 }])
    );
    assert_eq!(
        body["data"]["fees_by_status"],
        json!([{ "status": "Paid", "count": 1 }])
    );
    assert_eq!(
        body["data"]["attendance_by_status"],
        json!([{ "status": "Present", "count": 1 }])
    );
}

#[actix_web::test]
async fn fee_for_unknown_student_is_not_found() {
    let (app, _db) = init_app!("api-fee-unknown");
    let token = login!(app, "198.51.100.7");

    let req = test::TestRequest::post()
        .uri("/api/v1/fees")
        .insert_header(bearer(&token))
        .set_json(json!({ "student_id": 404, "amount": 10, "status": "Due" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn deleting_missing_rows_succeeds() {
    let (app, _db) = init_app!("api-delete-missing");
    let token = login!(app, "198.51.100.8");

    for uri in [
        "/api/v1/students/77",
        "/api/v1/teachers/77",
        "/api/v1/attendance/77",
        "/api/v1/fees/77",
    ] {
        let req = test::TestRequest::delete()
            .uri(uri)
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
    }

    let req = test::TestRequest::delete()
        .uri("/api/v1/teachers/abc")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn unknown_route_returns_not_found() {
    let (app, _db) = init_app!("api-not-found");

    let req = test::TestRequest::get().uri("/api/v1/classes").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1004);
}

#[actix_web::test]
async fn unknown_auth_route_is_not_found_without_token() {
    let (app, _db) = init_app!("api-auth-unknown");

    let req = test::TestRequest::get().uri("/api/v1/auth/foo").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1004);

    let req = test::TestRequest::get().uri("/api/v1/auth/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
