#[macro_use]
mod common;

use actix_web::{test, App};

use task_manager_backend::routes::configure_app;

use common::setup;

#[actix_web::test]
async fn test_welcome_is_plain_text() {
    let locator = setup().await;
    let app = test::init_service(App::new().configure(configure_app(locator))).await;

    let response = test::call_service(&app, test::TestRequest::get().uri("/welcome").to_request()).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = test::read_body(response).await;
    assert_eq!(body, "Welcome to Spring");
}

#[actix_web::test]
async fn test_health_reports_database() {
    let locator = setup().await;
    let app = test::init_service(App::new().configure(configure_app(locator))).await;

    let (status, body) = send!(&app, test::TestRequest::get().uri("/health"));

    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "up");
}

#[actix_web::test]
async fn test_api_docs_served_as_json() {
    let locator = setup().await;
    let app = test::init_service(App::new().configure(configure_app(locator))).await;

    let (status, body) = send!(&app, test::TestRequest::get().uri("/v3/api-docs"));

    assert_eq!(status, 200);
    assert!(body["openapi"].as_str().unwrap().starts_with("3."));
    assert!(body["paths"]["/api/tasks/{id}"].is_object());
    assert!(body["components"]["securitySchemes"]["bearer_auth"].is_object());
}

#[actix_web::test]
async fn test_jwks_unavailable_with_hmac_signing() {
    let locator = setup().await;
    let app = test::init_service(App::new().configure(configure_app(locator))).await;

    let (status, _) = send!(&app, test::TestRequest::get().uri("/.well-known/jwks.json"));
    assert_eq!(status, 404);
}

#[actix_web::test]
async fn test_unknown_route_is_404() {
    let locator = setup().await;
    let app = test::init_service(App::new().configure(configure_app(locator))).await;

    let (status, _) = send!(&app, test::TestRequest::get().uri("/api/unknown"));
    assert_eq!(status, 404);
}
