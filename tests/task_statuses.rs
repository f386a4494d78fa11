#[macro_use]
mod common;

use actix_web::{test, App};
use serde_json::json;

use task_manager_backend::routes::configure_app;

use common::{admin_token, bearer, setup};

#[actix_web::test]
async fn test_default_statuses_are_seeded() {
    let locator = setup().await;
    let token = admin_token(&locator).await;
    let app = test::init_service(App::new().configure(configure_app(locator))).await;

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/task_statuses")
            .insert_header(bearer(&token))
            .to_request(),
    )
    .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.headers().get("X-Total-Count").unwrap(), "5");

    let body: serde_json::Value = test::read_body_json(response).await;
    let slugs: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|status| status["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, ["draft", "to_review", "to_be_fixed", "to_publish", "published"]);
}

#[actix_web::test]
async fn test_status_crud() {
    let locator = setup().await;
    let token = admin_token(&locator).await;
    let app = test::init_service(App::new().configure(configure_app(locator))).await;

    let (status, created) = send!(
        &app,
        test::TestRequest::post()
            .uri("/api/task_statuses")
            .insert_header(bearer(&token))
            .set_json(json!({"name": "Archived", "slug": "archived"}))
    );
    assert_eq!(status, 201);
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send!(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/task_statuses/{}", id))
            .insert_header(bearer(&token))
            .set_json(json!({"name": "Shelved"}))
    );
    assert_eq!(status, 200);
    assert_eq!(updated["name"], "Shelved");
    assert_eq!(updated["slug"], "archived");

    let (status, _) = send!(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/task_statuses/{}", id))
            .insert_header(bearer(&token))
    );
    assert_eq!(status, 204);

    let (status, _) = send!(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/task_statuses/{}", id))
            .insert_header(bearer(&token))
    );
    assert_eq!(status, 404);
}

#[actix_web::test]
async fn test_status_validation_and_conflicts() {
    let locator = setup().await;
    let token = admin_token(&locator).await;
    let app = test::init_service(App::new().configure(configure_app(locator))).await;

    let (status, _) = send!(
        &app,
        test::TestRequest::post()
            .uri("/api/task_statuses")
            .insert_header(bearer(&token))
            .set_json(json!({"name": "", "slug": "empty"}))
    );
    assert_eq!(status, 400);

    let (status, _) = send!(
        &app,
        test::TestRequest::post()
            .uri("/api/task_statuses")
            .insert_header(bearer(&token))
            .set_json(json!({"name": "Another draft", "slug": "draft"}))
    );
    assert_eq!(status, 409);

    let (status, _) = send!(
        &app,
        test::TestRequest::delete()
            .uri("/api/task_statuses/999")
            .insert_header(bearer(&token))
    );
    assert_eq!(status, 404);
}

#[actix_web::test]
async fn test_status_in_use_cannot_be_deleted() {
    let locator = setup().await;
    let token = admin_token(&locator).await;
    let app = test::init_service(App::new().configure(configure_app(locator))).await;

    let (_, task) = send!(
        &app,
        test::TestRequest::post()
            .uri("/api/tasks")
            .insert_header(bearer(&token))
            .set_json(json!({"title": "Draft post", "status": "draft"}))
    );
    assert_eq!(task["status"], "draft");

    let (_, statuses) = send!(
        &app,
        test::TestRequest::get()
            .uri("/api/task_statuses")
            .insert_header(bearer(&token))
    );
    let draft_id = statuses[0]["id"].as_i64().unwrap();

    let (status, _) = send!(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/task_statuses/{}", draft_id))
            .insert_header(bearer(&token))
    );
    assert_eq!(status, 400);
}
