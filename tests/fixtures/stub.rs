//! In-process stand-in for the reqres mock API, serving its public dataset

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Form, Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const REGISTER_TOKEN: &str = "QpwL5tke4Pnpja7X4";
const DEFAULT_PER_PAGE: usize = 6;

const USERS: [(u64, &str, &str); 12] = [
    (1, "George", "Bluth"),
    (2, "Janet", "Weaver"),
    (3, "Emma", "Wong"),
    (4, "Eve", "Holt"),
    (5, "Charles", "Morris"),
    (6, "Tracey", "Ramos"),
    (7, "Michael", "Lawson"),
    (8, "Lindsay", "Ferguson"),
    (9, "Tobias", "Funke"),
    (10, "Byron", "Fields"),
    (11, "George", "Edwards"),
    (12, "Rachel", "Howell"),
];

struct StubState {
    /// Length of one `delay` unit; reqres uses seconds
    delay_unit: Duration,
    next_id: AtomicU64,
}

/// Running stub; the server task stops when this is dropped
pub struct StubServer {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Serve the stub on an ephemeral localhost port, mounted under `/api`
pub async fn spawn(delay_unit: Duration) -> StubServer {
    let state = Arc::new(StubState {
        delay_unit,
        next_id: AtomicU64::new(100),
    });

    let app = Router::new()
        .route(
            "/api/users",
            get(list_users).post(create_user).delete(delete_user),
        )
        .route(
            "/api/users/{id}",
            get(single_user)
                .put(update_user)
                .patch(update_user)
                .delete(delete_user),
        )
        .route("/api/register", post(register))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Stub listener has no address");

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub server failed");
    });

    StubServer {
        base_url: format!("http://{}/api", addr),
        handle,
    }
}

fn user_json(id: u64, first: &str, last: &str) -> Value {
    json!({
        "id": id,
        "email": format!("{}.{}@reqres.in", first.to_lowercase(), last.to_lowercase()),
        "first_name": first,
        "last_name": last,
        "avatar": format!("https://reqres.in/img/faces/{}-image.jpg", id),
    })
}

fn support() -> Value {
    json!({
        "url": "https://contentcaddy.io?utm_source=reqres&utm_medium=json&utm_campaign=referral",
        "text": "Tired of writing endless social media content? Let Content Caddy generate it for you."
    })
}

fn param(params: &HashMap<String, String>, key: &str, default: usize) -> usize {
    params
        .get(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

async fn list_users(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let delay = param(&params, "delay", 0) as u32;
    if delay > 0 {
        tokio::time::sleep(state.delay_unit * delay).await;
    }

    let page = param(&params, "page", 1).max(1);
    let per_page = param(&params, "per_page", DEFAULT_PER_PAGE).max(1);
    let total = USERS.len();

    let data: Vec<Value> = USERS
        .iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .map(|(id, first, last)| user_json(*id, first, last))
        .collect();

    Json(json!({
        "page": page,
        "per_page": per_page,
        "total": total,
        "total_pages": total.div_ceil(per_page),
        "data": data,
        "support": support(),
    }))
}

async fn single_user(Path(id): Path<u64>) -> impl IntoResponse {
    match USERS.iter().find(|(uid, _, _)| *uid == id) {
        Some((id, first, last)) => (
            StatusCode::OK,
            Json(json!({"data": user_json(*id, first, last), "support": support()})),
        ),
        None => (StatusCode::NOT_FOUND, Json(json!({}))),
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

async fn create_user(
    State(state): State<Arc<StubState>>,
    Form(fields): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    let mut body = json!(fields);
    body["id"] = json!(state.next_id.fetch_add(1, Ordering::SeqCst).to_string());
    body["createdAt"] = json!(timestamp());
    (StatusCode::CREATED, Json(body))
}

async fn update_user(Form(fields): Form<HashMap<String, String>>) -> Json<Value> {
    let mut body = json!(fields);
    body["updatedAt"] = json!(timestamp());
    Json(body)
}

async fn delete_user() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn register(Form(fields): Form<HashMap<String, String>>) -> impl IntoResponse {
    let email = fields.get("email").filter(|e| !e.is_empty());
    let password = fields.get("password").filter(|p| !p.is_empty());

    let error = match (email, password) {
        (None, _) => "Missing email or username",
        (Some(_), None) => "Missing password",
        (Some(email), Some(_)) => {
            let known = USERS
                .iter()
                .map(|(id, first, last)| (id, user_json(*id, first, last)))
                .find(|(_, user)| user["email"] == json!(email));
            match known {
                Some((id, _)) => {
                    return (
                        StatusCode::OK,
                        Json(json!({"id": id, "token": REGISTER_TOKEN})),
                    )
                }
                None => "Note: Only defined users succeed registration",
            }
        }
    };

    (StatusCode::BAD_REQUEST, Json(json!({ "error": error })))
}
