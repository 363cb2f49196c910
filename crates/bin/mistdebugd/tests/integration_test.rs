//! End-to-end tests for the full mistdebugd stack.
//!
//! Each test starts a fake debug backend (axum on an ephemeral loopback
//! port), points the real reqwest client at it, and exercises the console
//! router via `tower::ServiceExt::oneshot`. The console itself binds no port.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Request, StatusCode, header};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use http_body_util::BodyExt;
use mistdebug_adapter_backend_reqwest::{BackendConfig, ReqwestDebugApi};
use mistdebug_adapter_http_axum::router;
use mistdebug_adapter_http_axum::state::AppState;
use mistdebug_app::services::console_service::ConsoleService;
use serde_json::{Value, json};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Fake debug backend
// ---------------------------------------------------------------------------

#[derive(Default)]
struct FakeBackend {
    tables: Mutex<HashMap<String, Vec<Value>>>,
}

impl FakeBackend {
    fn put(&self, kind: &str, rows: Vec<Value>) {
        self.tables.lock().unwrap().insert(kind.to_string(), rows);
    }

    fn count(&self, kind: &str) -> usize {
        self.tables.lock().unwrap().get(kind).map_or(0, Vec::len)
    }
}

type Shared = Arc<FakeBackend>;
type Failure = (StatusCode, Json<Value>);

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn organization(name: &str) -> Value {
    json!({
        "id": uuid::Uuid::new_v4().to_string(),
        "mail": format!("{}@example.com", name.to_lowercase()),
        "name": name,
        "created_at": now(),
        "updated_at": now(),
        "deleted_at": null,
    })
}

fn user(mail: &str, org_id: &str) -> Value {
    json!({
        "id": uuid::Uuid::new_v4().to_string(),
        "org_id": org_id,
        "mail": mail,
        "created_at": now(),
        "updated_at": now(),
    })
}

fn subject(name: &str, year: i64, org_id: &str) -> Value {
    json!({
        "id": uuid::Uuid::new_v4().to_string(),
        "org_id": org_id,
        "name": name,
        "year": year,
        "created_at": now(),
        "updated_at": now(),
    })
}

fn bad_request(message: &str) -> Failure {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

fn build_record(kind: &str, body: &Value) -> Result<Value, Failure> {
    let text = |field: &str| {
        body.get(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let required = |field: &str| {
        let value = text(field);
        if value.is_empty() {
            Err(bad_request(&format!("{field} is required")))
        } else {
            Ok(value)
        }
    };
    let id = uuid::Uuid::new_v4().to_string();

    Ok(match kind {
        "organizations" => {
            let mut org = organization(&required("name")?);
            org["mail"] = json!(required("mail")?);
            org
        }
        "users" => user(&required("email")?, &required("organization_id")?),
        "rooms" => json!({
            "id": id,
            "org_id": required("organization_id")?,
            "org_room_id": required("org_room_id")?,
            "name": text("name"),
            "caption": text("caption"),
            "created_at": now(),
            "updated_at": now(),
        }),
        "devices" => json!({
            "id": id,
            "user_id": required("user_id")?,
            "device_id": required("device_id")?,
            "is_active": true,
            "last_authenticated": now(),
            "created_at": now(),
            "updated_at": now(),
        }),
        "subjects" => {
            let year = body.get("year").and_then(Value::as_i64).unwrap_or(0);
            subject(&required("name")?, year, &required("organization_id")?)
        }
        "lessons" => json!({
            "id": id,
            "subject_id": required("subject_id")?,
            "room_id": required("room_id")?,
            "org_id": required("org_id")?,
            "day_of_week": 1,
            "start_time": format!("{}:00Z", required("start_time")?),
            "end_time": format!("{}:00Z", required("end_time")?),
            "created_at": now(),
            "updated_at": now(),
        }),
        other => return Err(bad_request(&format!("unknown table {other}"))),
    })
}

async fn list(State(backend): State<Shared>, Path(kind): Path<String>) -> Json<Value> {
    let tables = backend.tables.lock().unwrap();
    // Empty tables come back as `null`, like the real backend does.
    Json(tables.get(&kind).map_or(Value::Null, |rows| json!(rows)))
}

async fn create(
    State(backend): State<Shared>,
    Path(kind): Path<String>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), Failure> {
    let record = build_record(&kind, &body)?;
    backend
        .tables
        .lock()
        .unwrap()
        .entry(kind)
        .or_default()
        .push(record.clone());
    Ok((StatusCode::CREATED, Json(record)))
}

async fn delete_all(State(backend): State<Shared>, Path(kind): Path<String>) -> Json<Value> {
    backend.tables.lock().unwrap().remove(&kind);
    Json(json!({ "message": format!("all {kind} deleted") }))
}

async fn seed(State(backend): State<Shared>) -> Json<Value> {
    let org = organization("Seed");
    let org_id = org["id"].as_str().unwrap().to_string();
    backend.put("organizations", vec![org]);
    backend.put("users", vec![user("staff@example.com", &org_id)]);
    backend.put(
        "subjects",
        vec![subject("Math", 2024, &org_id), subject("English", 2024, &org_id)],
    );
    Json(json!({ "message": "seed data created" }))
}

async fn reset(State(backend): State<Shared>) -> Json<Value> {
    backend.tables.lock().unwrap().clear();
    Json(json!({ "message": "database reset" }))
}

async fn spawn_backend() -> (String, Shared) {
    let backend = Shared::default();
    let app = Router::new()
        .route("/debug/seed", post(seed))
        .route("/debug/reset", delete(reset))
        .route("/debug/{kind}", get(list).post(create).delete(delete_all))
        .with_state(Arc::clone(&backend));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), backend)
}

// ---------------------------------------------------------------------------
// Console under test
// ---------------------------------------------------------------------------

fn console(base_url: &str) -> Router {
    let api = ReqwestDebugApi::new(BackendConfig::new(base_url)).unwrap();
    router::build(AppState::new(ConsoleService::new(api)))
}

async fn setup() -> (Router, Shared) {
    let (url, backend) = spawn_backend().await;
    (console(&url), backend)
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn submit(app: &Router, uri: &str, body: &str) {
    let resp = app.clone().oneshot(form_request(uri, body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER, "POST {uri}");
}

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn snapshot(app: &Router) -> Value {
    let resp = app.clone().oneshot(get_request("/api/console")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    serde_json::from_str(&body_text(resp).await).unwrap()
}

fn section<'a>(snapshot: &'a Value, kind: &str) -> &'a Value {
    snapshot["sections"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["kind"] == kind)
        .unwrap()
}

fn records<'a>(snapshot: &'a Value, kind: &str) -> &'a Vec<Value> {
    section(snapshot, kind)["records"].as_array().unwrap()
}

fn notification(snapshot: &Value) -> (String, String) {
    let n = &snapshot["notification"];
    (
        n["kind"].as_str().unwrap().to_string(),
        n["message"].as_str().unwrap().to_string(),
    )
}

// ---------------------------------------------------------------------------
// Health check and page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (app, _backend) = setup().await;

    let resp = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "OK");
}

#[tokio::test]
async fn should_render_records_after_refresh() {
    let (app, backend) = setup().await;
    backend.put("organizations", vec![organization("Acme")]);

    submit(&app, "/resources/organizations/refresh", "").await;

    let resp = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("acme@example.com"));
    assert!(html.contains("1 records"));
}

#[tokio::test]
async fn should_answer_not_found_for_unknown_kind() {
    let (app, _backend) = setup().await;

    let resp = app
        .oneshot(get_request("/resources/courses/delete"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(body["error"], "unknown resource type: courses");
}

// ---------------------------------------------------------------------------
// Resource actions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_subject_and_clear_form() {
    let (app, backend) = setup().await;

    submit(
        &app,
        "/resources/subjects/create",
        "name=Math&year=2024&organization_id=org1",
    )
    .await;

    assert_eq!(backend.count("subjects"), 1);
    let snap = snapshot(&app).await;
    let rows = records(&snap, "subjects");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Math");
    assert_eq!(rows[0]["year"], 2024);
    assert_eq!(rows[0]["org_id"], "org1");
    assert!(!rows[0]["id"].as_str().unwrap().is_empty());
    assert!(section(&snap, "subjects")["draft"].as_object().unwrap().is_empty());
    assert_eq!(
        notification(&snap),
        ("success".to_string(), "Created subject".to_string())
    );
}

#[tokio::test]
async fn should_keep_form_when_backend_rejects_lesson() {
    let (app, backend) = setup().await;

    submit(
        &app,
        "/resources/lessons/create",
        "subject_id=s-1&room_id=r-1&organization_id=&start_time=2024-04-01T09%3A00&end_time=2024-04-01T10%3A30",
    )
    .await;

    assert_eq!(backend.count("lessons"), 0);
    let snap = snapshot(&app).await;
    assert!(records(&snap, "lessons").is_empty());
    assert_eq!(section(&snap, "lessons")["draft"]["subject_id"], "s-1");
    assert_eq!(
        notification(&snap),
        (
            "error".to_string(),
            "Failed to create: org_id is required".to_string()
        )
    );
}

#[tokio::test]
async fn should_send_lesson_organization_as_org_id() {
    let (app, backend) = setup().await;

    submit(
        &app,
        "/resources/lessons/create",
        "subject_id=s-1&room_id=r-1&organization_id=o-1&start_time=2024-04-01T09%3A00&end_time=2024-04-01T10%3A30",
    )
    .await;

    assert_eq!(backend.count("lessons"), 1);
    let snap = snapshot(&app).await;
    assert_eq!(records(&snap, "lessons")[0]["org_id"], "o-1");
}

#[tokio::test]
async fn should_delete_only_confirmed_resource() {
    let (app, backend) = setup().await;
    backend.put("organizations", vec![organization("Acme")]);
    backend.put("users", vec![user("a@example.com", "o-1"), user("b@example.com", "o-1")]);
    submit(&app, "/resources/organizations/refresh", "").await;
    submit(&app, "/resources/users/refresh", "").await;

    submit(&app, "/resources/users/delete", "confirm=yes").await;

    assert_eq!(backend.count("users"), 0);
    assert_eq!(backend.count("organizations"), 1);
    let snap = snapshot(&app).await;
    assert!(records(&snap, "users").is_empty());
    assert_eq!(records(&snap, "organizations").len(), 1);
    assert_eq!(
        notification(&snap),
        ("success".to_string(), "Deleted all users".to_string())
    );
}

#[tokio::test]
async fn should_not_delete_without_confirmation() {
    let (app, backend) = setup().await;
    backend.put("users", vec![user("a@example.com", "o-1")]);

    let resp = app
        .clone()
        .oneshot(get_request("/resources/users/delete"))
        .await
        .unwrap();
    assert!(body_text(resp).await.contains("Delete all users?"));
    submit(&app, "/resources/users/delete", "confirm=").await;

    assert_eq!(backend.count("users"), 1);
}

// ---------------------------------------------------------------------------
// Global actions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reload_every_card_after_seed() {
    let (app, _backend) = setup().await;

    submit(&app, "/seed", "confirm=yes").await;

    let snap = snapshot(&app).await;
    assert_eq!(records(&snap, "organizations").len(), 1);
    assert_eq!(records(&snap, "users").len(), 1);
    assert_eq!(records(&snap, "subjects").len(), 2);
    assert!(records(&snap, "lessons").is_empty());
    assert_eq!(
        notification(&snap),
        ("success".to_string(), "Seed data created".to_string())
    );
}

#[tokio::test]
async fn should_empty_every_card_after_reset() {
    let (app, backend) = setup().await;
    submit(&app, "/seed", "confirm=yes").await;

    submit(&app, "/reset", "confirm=yes").await;

    assert_eq!(backend.count("organizations"), 0);
    let snap = snapshot(&app).await;
    for kind in ["organizations", "users", "rooms", "devices", "subjects", "lessons"] {
        assert!(records(&snap, kind).is_empty(), "{kind}");
    }
    assert_eq!(
        notification(&snap),
        ("success".to_string(), "Database reset".to_string())
    );
}

// ---------------------------------------------------------------------------
// Backend unavailable
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_notify_when_backend_is_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let app = console(&url);

    submit(&app, "/resources/rooms/refresh", "").await;

    let snap = snapshot(&app).await;
    let (kind, message) = notification(&snap);
    assert_eq!(kind, "error");
    assert!(message.starts_with("Failed to load data: "), "{message}");
    assert!(records(&snap, "rooms").is_empty());
}
