//! HTTP-level integration tests for the bookmark ledger.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, get_auth, post_json_auth, token};
use serde_json::json;
use sqlx::PgPool;

fn bookmark(topic_id: &str) -> serde_json::Value {
    json!({
        "topicId": topic_id,
        "topicType": "section",
        "category": "arrays",
        "title": format!("Title of {topic_id}"),
        "url": format!("/data-structures/{topic_id}"),
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_without_token_returns_401(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/bookmarks").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_the_bookmark(pool: PgPool) {
    let token = token("ada@example.com");
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/bookmarks",
        &token,
        bookmark("arrays-intro"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["topicId"], "arrays-intro");
    assert_eq!(json["title"], "Title of arrays-intro");
    assert_eq!(json["url"], "/data-structures/arrays-intro");
    assert!(json["createdAt"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_bookmark_fails_with_conflict_code(pool: PgPool) {
    let token = token("ada@example.com");
    let first = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/bookmarks",
        &token,
        bookmark("arrays-intro"),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/bookmarks",
        &token,
        bookmark("arrays-intro"),
    )
    .await;
    assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(second).await["code"], "CONFLICT");

    let list = get_auth(common::build_test_app(pool), "/api/v1/bookmarks", &token).await;
    assert_eq!(body_json(list).await.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn incomplete_bookmark_is_rejected(pool: PgPool) {
    let token = token("ada@example.com");
    let mut body = bookmark("arrays-intro");
    body.as_object_mut().unwrap().remove("url");

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/bookmarks",
        &token,
        body,
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "url is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_then_delete_again_fails_with_not_found_code(pool: PgPool) {
    let token = token("ada@example.com");
    post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/bookmarks",
        &token,
        bookmark("arrays-intro"),
    )
    .await;

    let first = delete_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/bookmarks?topicId=arrays-intro",
        &token,
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(body_json(first).await, json!({"success": true}));

    let second = delete_auth(
        common::build_test_app(pool),
        "/api/v1/bookmarks?topicId=arrays-intro",
        &token,
    )
    .await;
    assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(second).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_without_topic_id_returns_400(pool: PgPool) {
    let token = token("ada@example.com");
    let response = delete_auth(common::build_test_app(pool), "/api/v1/bookmarks", &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "topicId is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_query_returns_400_json(pool: PgPool) {
    let token = token("ada@example.com");
    let response = delete_auth(
        common::build_test_app(pool),
        "/api/v1/bookmarks?topicId=a&topicId=b",
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Invalid query parameters");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_body_returns_400_json(pool: PgPool) {
    let token = token("ada@example.com");
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/bookmarks",
        &token,
        json!({"topicId": 42, "title": ["not", "a", "string"]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Invalid request body");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_newest_first(pool: PgPool) {
    let token = token("ada@example.com");
    for topic in ["first", "second", "third"] {
        post_json_auth(
            common::build_test_app(pool.clone()),
            "/api/v1/bookmarks",
            &token,
            bookmark(topic),
        )
        .await;
    }

    let list = get_auth(common::build_test_app(pool), "/api/v1/bookmarks", &token).await;
    let list = body_json(list).await;
    let topics: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["topicId"].as_str().unwrap())
        .collect();
    assert_eq!(topics, ["third", "second", "first"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bookmarks_are_scoped_to_their_owner(pool: PgPool) {
    let ada = token("ada@example.com");
    let grace = token("grace@example.com");

    post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/bookmarks",
        &ada,
        bookmark("arrays-intro"),
    )
    .await;

    // Another user cannot see or delete it, but may bookmark the same topic.
    let list = get_auth(common::build_test_app(pool.clone()), "/api/v1/bookmarks", &grace).await;
    assert_eq!(body_json(list).await, json!([]));

    let delete = delete_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/bookmarks?topicId=arrays-intro",
        &grace,
    )
    .await;
    assert_eq!(delete.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(delete).await["code"], "NOT_FOUND");

    let own = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/bookmarks",
        &grace,
        bookmark("arrays-intro"),
    )
    .await;
    assert_eq!(own.status(), StatusCode::OK);

    let list = get_auth(common::build_test_app(pool), "/api/v1/bookmarks", &ada).await;
    assert_eq!(body_json(list).await.as_array().unwrap().len(), 1);
}
