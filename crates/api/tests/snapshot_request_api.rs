//! HTTP-level integration tests for snapshot requests nested under
//! `/client/{client_id}/project/{project_id}/snapshotRequests`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::{json, Value};
use sqlx::PgPool;

use snapspace_core::types::DbId;
use snapspace_db::models::client::CreateClient;
use snapspace_db::models::project::CreateProject;
use snapspace_db::models::snapshot_request::UpsertSnapshotRequest;
use snapspace_db::repositories::{ClientRepo, ProjectRepo, SnapshotRequestRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a client named `name` with one empty project.
async fn seed_project(pool: &PgPool, name: &str) -> (DbId, DbId) {
    let client = ClientRepo::create(
        pool,
        &CreateClient {
            name: Some(name.to_string()),
        },
    )
    .await
    .unwrap();
    let project = ProjectRepo::create(
        pool,
        client.id,
        &CreateProject {
            name: Some("Project".to_string()),
        },
    )
    .await
    .unwrap();
    (client.id, project.id)
}

fn requests_url(client_id: DbId, project_id: DbId) -> String {
    format!("/client/{client_id}/project/{project_id}/snapshotRequests")
}

fn two_new_requests() -> Value {
    json!([
        {"status": "active", "name": "name1", "sequence": 1},
        {"status": "active", "name": "name2", "sequence": 2},
    ])
}

/// Read the project's full request list straight from `GET /clients`.
async fn stored_requests(pool: &PgPool) -> Vec<Value> {
    let app = common::build_test_app(pool.clone());
    let clients = body_json(get(app, "/clients").await).await;
    clients[0]["projects"][0]["snapshotRequests"]
        .as_array()
        .unwrap()
        .clone()
}

// ---------------------------------------------------------------------------
// Upsert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_saves_new_requests_in_input_order(pool: PgPool) {
    let (client_id, project_id) = seed_project(&pool, "Client").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, &requests_url(client_id, project_id), two_new_requests()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(common::is_json(&response));

    let json = body_json(response).await;
    let saved = json.as_array().unwrap();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0]["name"], "name1");
    assert_eq!(saved[1]["name"], "name2");
    assert!(saved[0]["id"].is_number());
    assert!(saved[1]["id"].is_number());
    assert_ne!(saved[0]["id"], saved[1]["id"]);

    let stored = stored_requests(&pool).await;
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0]["sequence"], 1);
    assert_eq!(stored[1]["name"], "name2");
    assert_eq!(stored[1]["status"], "active");
    assert_eq!(stored[1]["id"], saved[1]["id"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_updates_existing_requests_in_place(pool: PgPool) {
    let (client_id, project_id) = seed_project(&pool, "Client").await;
    let url = requests_url(client_id, project_id);

    let app = common::build_test_app(pool.clone());
    let first = body_json(post_json(app, &url, two_new_requests()).await).await;

    let resubmit = json!([
        {"id": first[0]["id"], "status": "active", "name": "name3", "sequence": 1},
        {"id": first[1]["id"], "status": "deleted", "name": "name4", "sequence": 2},
    ]);
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, &url, resubmit).await;
    assert_eq!(response.status(), StatusCode::OK);

    let second = body_json(response).await;
    assert_eq!(second[0]["id"], first[0]["id"]);
    assert_eq!(second[1]["id"], first[1]["id"]);

    let stored = stored_requests(&pool).await;
    assert_eq!(stored.len(), 2, "updates must not create duplicates");
    assert_eq!(stored[0]["name"], "name3");
    assert_eq!(stored[1]["name"], "name4");
    assert_eq!(stored[1]["status"], "deleted");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_accepts_underscore_id_and_leaves_unlisted_requests(pool: PgPool) {
    let (client_id, project_id) = seed_project(&pool, "Client").await;
    let url = requests_url(client_id, project_id);

    let app = common::build_test_app(pool.clone());
    let first = body_json(post_json(app, &url, two_new_requests()).await).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &url,
        json!([
            {"_id": first[1]["id"], "status": "active", "name": "renamed", "sequence": 2},
            {"status": "active", "name": "name5", "sequence": 3},
        ]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let stored = stored_requests(&pool).await;
    let names: Vec<&str> = stored.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["name1", "renamed", "name5"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_with_empty_name_returns_422(pool: PgPool) {
    let (client_id, project_id) = seed_project(&pool, "Client").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &requests_url(client_id, project_id),
        json!([{"status": "active", "name": "", "sequence": 1}]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["error"]["message"], "name must not be empty");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_entry_missing_status_returns_422_json(pool: PgPool) {
    let (client_id, project_id) = seed_project(&pool, "Client").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &requests_url(client_id, project_id),
        json!([{"name": "n", "sequence": 1}]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(common::is_json(&response));
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    let message = json["error"]["message"].as_str().unwrap();
    assert!(message.contains("missing field `status`"), "{message}");

    assert!(stored_requests(&pool).await.is_empty());
}

// ---------------------------------------------------------------------------
// Active listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_returns_only_active_requests(pool: PgPool) {
    let (client_id, project_id) = seed_project(&pool, "Client").await;
    SnapshotRequestRepo::upsert(
        &pool,
        client_id,
        project_id,
        &[
            UpsertSnapshotRequest {
                id: None,
                name: "name1".into(),
                status: "active".into(),
                sequence: 1,
            },
            UpsertSnapshotRequest {
                id: None,
                name: "name2".into(),
                status: "deleted".into(),
                sequence: 2,
            },
        ],
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &requests_url(client_id, project_id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(common::is_json(&response));

    let json = body_json(response).await;
    let active = json.as_array().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["name"], "name1");
    assert_eq!(active[0]["status"], "active");
    assert_eq!(active[0]["sequence"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_on_project_without_requests_returns_empty_array(pool: PgPool) {
    let (client_id, project_id) = seed_project(&pool, "Client").await;

    let app = common::build_test_app(pool);
    let response = get(app, &requests_url(client_id, project_id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

// ---------------------------------------------------------------------------
// Missing client / project
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleted_client_returns_404_for_both_endpoints(pool: PgPool) {
    let (client_id, project_id) = seed_project(&pool, "Client").await;
    assert!(ClientRepo::delete(&pool, client_id).await.unwrap());

    let url = requests_url(client_id, project_id);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &url).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = post_json(app, &url, two_new_requests()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_of_another_client_returns_404(pool: PgPool) {
    let (_, foreign_project) = seed_project(&pool, "Other").await;
    let (client_id, _) = seed_project(&pool, "Client").await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &requests_url(client_id, foreign_project)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(
        json["error"]["message"],
        format!("Project with id {foreign_project} not found")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_ids_return_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/client/5ad9f0c1e2a1b2c3d4e5f601/project/5ad9f0c1e2a1b2c3d4e5f602/snapshotRequests",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
