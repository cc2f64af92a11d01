//! HTTP-level integration tests for dancer profile CRUD and the status
//! side-channel protections.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, create_dancer, delete_auth, get_auth, login_token, post_json_auth,
    put_json_auth, signup_user,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_get_dancer(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(app.clone()).await;

    let id = create_dancer(app.clone(), &token, "anton", "MALE", Some("waltz"), Some("B")).await;

    let response = get_auth(app, &format!("/api/v1/dancers/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "anton");
    assert_eq!(json["sex"], "MALE");
    assert_eq!(json["style"], "waltz");
    // Every new profile starts available.
    assert_eq!(json["status"], "IN_SEARCH");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_dancer_invalid_sex_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(app.clone()).await;

    let body = serde_json::json!({
        "name": "anton",
        "secret_name": "anton-alias",
        "sex": "OTHER",
    });
    let response = post_json_auth(app, "/api/v1/dancers", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_missing_dancer_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(app.clone()).await;

    let response = get_auth(app, "/api/v1/dancers/9999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_owner_can_update_profile(pool: PgPool) {
    let app = common::build_test_app(pool);
    let admin = admin_token(app.clone()).await;
    let dancer_id =
        create_dancer(app.clone(), &admin, "anton", "MALE", Some("waltz"), Some("B")).await;

    signup_user(
        app.clone(),
        "anton",
        "anton@quickstep.test",
        "DANCER",
        Some(dancer_id),
    )
    .await;
    let token = login_token(app.clone(), "anton@quickstep.test").await;

    let body = serde_json::json!({ "level": "A", "age": 30 });
    let response = put_json_auth(app, &format!("/api/v1/dancers/{dancer_id}"), &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["level"], "A");
    assert_eq!(json["age"], 30);
    // Untouched fields keep their values.
    assert_eq!(json["style"], "waltz");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_foreign_profile_update_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let admin = admin_token(app.clone()).await;
    let dancer_id =
        create_dancer(app.clone(), &admin, "anton", "MALE", Some("waltz"), Some("B")).await;
    let other_id =
        create_dancer(app.clone(), &admin, "boris", "MALE", Some("waltz"), Some("B")).await;

    signup_user(
        app.clone(),
        "boris",
        "boris@quickstep.test",
        "DANCER",
        Some(other_id),
    )
    .await;
    let token = login_token(app.clone(), "boris@quickstep.test").await;

    let body = serde_json::json!({ "name": "hijacked" });
    let response = put_json_auth(app, &format!("/api/v1/dancers/{dancer_id}"), &token, body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_update_ignores_status_field(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(app.clone()).await;
    let dancer_id =
        create_dancer(app.clone(), &token, "anton", "MALE", Some("waltz"), Some("B")).await;

    // A client smuggling "status" into the update body must not flip
    // availability -- the field does not exist on the update DTO.
    let body = serde_json::json!({ "name": "anton", "status": "IN_PAIR" });
    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/dancers/{dancer_id}"),
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "IN_SEARCH");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_dancer(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(app.clone()).await;
    let dancer_id =
        create_dancer(app.clone(), &token, "anton", "MALE", Some("waltz"), Some("B")).await;

    let response = delete_auth(
        app.clone(),
        &format!("/api/v1/dancers/{dancer_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &format!("/api/v1/dancers/{dancer_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_paired_dancer_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(app.clone()).await;
    let anton = create_dancer(app.clone(), &token, "anton", "MALE", Some("waltz"), Some("B")).await;
    let bella =
        create_dancer(app.clone(), &token, "bella", "FEMALE", Some("waltz"), Some("B")).await;

    // Form the pair through the request lifecycle.
    let body = serde_json::json!({ "sender_id": anton, "receiver_id": bella });
    let request = body_json(post_json_auth(app.clone(), "/api/v1/requests", &token, body).await)
        .await["id"]
        .as_i64()
        .unwrap();
    let body = serde_json::json!({ "status": "ACCEPTED" });
    let response = put_json_auth(app.clone(), &format!("/api/v1/requests/{request}"), &token, body)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete_auth(app, &format!("/api/v1/dancers/{anton}"), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
