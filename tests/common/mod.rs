//! Shared utilities for integration tests.

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, Method, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tower::ServiceExt;

use squad_page::config::SiteConfig;
use squad_page::directory::DirectoryClient;
use squad_page::routing::{self, AppState, SiteScope};
use squad_page::views::{RenderError, Renderer, Template, ViewModel};

/// One request received by the mock content service.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[allow(dead_code)]
impl Recorded {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_param(&self, key: &str) -> bool {
        self.param(key).is_some()
    }
}

type Responder = dyn Fn(&Recorded) -> (u16, String) + Send + Sync;

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    respond: Arc<Responder>,
}

/// Mock content service bound to an ephemeral local port.
pub struct MockDirectory {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

#[allow(dead_code)]
impl MockDirectory {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests to `path` with the given method.
    pub fn requests_to(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }
}

/// Start a mock content service answering through `respond`.
pub async fn start_mock_directory<F>(respond: F) -> MockDirectory
where
    F: Fn(&Recorded) -> (u16, String) + Send + Sync + 'static,
{
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        requests: requests.clone(),
        respond: Arc::new(respond),
    };

    let app = Router::new().fallback(record).with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockDirectory { addr, requests }
}

async fn record(
    State(mock): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let recorded = Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri
            .query()
            .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default(),
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    };

    let (status, body) = (mock.respond)(&recorded);
    mock.requests.lock().unwrap().push(recorded);

    (
        StatusCode::from_u16(status).unwrap(),
        [(CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// `200` with `{ "data": data }`.
#[allow(dead_code)]
pub fn data(data: Value) -> (u16, String) {
    (200, json!({ "data": data }).to_string())
}

/// Sample records shaped like the content service's.
#[allow(dead_code)]
pub fn sample_persons() -> Value {
    json!([
        {
            "id": 7,
            "name": "Sam",
            "birthdate": "2004-03-01",
            "nickname": "sammy",
            "squads": [{ "id": 91, "person_id": 7, "squad_id": 12 }]
        },
        {
            "id": 8,
            "name": "Alex",
            "birthdate": null,
            "squads": [{ "id": 92, "person_id": 8, "squad_id": 13 }]
        }
    ])
}

#[allow(dead_code)]
pub fn sample_squads() -> Value {
    json!([
        { "id": 12, "name": "1I", "cohort": "2526", "tribe": 3 },
        { "id": 13, "name": "1J", "cohort": "2526", "tribe": 3 }
    ])
}

/// Answers like the real service for the routes the site uses.
#[allow(dead_code)]
pub fn standard_responses(request: &Recorded) -> (u16, String) {
    match (request.method.as_str(), request.path.as_str()) {
        ("GET", "/items/person") => data(sample_persons()),
        ("GET", "/items/squad") => data(sample_squads()),
        ("GET", "/items/messages") => data(json!([
            { "id": 1, "text": "hello", "from": "Sam", "for": "Jaar 1 / Team Bliss" }
        ])),
        ("POST", "/items/messages") => data(json!({ "id": 2 })),
        ("GET", path) if path.starts_with("/items/person/") => data(json!({
            "id": 42,
            "name": "Robin",
            "birthdate": "2003-11-20",
            "bio": "Likes CSS",
            "squads": [93]
        })),
        _ => (404, json!({ "errors": [{ "message": "Route doesn't exist" }] }).to_string()),
    }
}

/// Renderer that records every view-model it is asked to render.
#[derive(Default)]
pub struct RecordingRenderer {
    renders: Mutex<Vec<(Template, ViewModel)>>,
}

#[allow(dead_code)]
impl RecordingRenderer {
    pub fn renders(&self) -> Vec<(Template, ViewModel)> {
        self.renders.lock().unwrap().clone()
    }

    pub fn last(&self) -> (Template, ViewModel) {
        self.renders().pop().expect("nothing was rendered")
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, template: Template, model: &ViewModel) -> Result<String, RenderError> {
        self.renders.lock().unwrap().push((template, model.clone()));
        Ok(format!("rendered {}", template))
    }
}

/// Site router talking to `mock`, rendering through a recorder.
#[allow(dead_code)]
pub fn site(mock: &MockDirectory) -> (Router, Arc<RecordingRenderer>) {
    site_at(&mock.base_url())
}

/// Site router talking to whatever listens on `base_url`, rendering through a recorder.
#[allow(dead_code)]
pub fn site_at(base_url: &str) -> (Router, Arc<RecordingRenderer>) {
    let config = SiteConfig::default();
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    let directory = DirectoryClient::with_http_client(http, base_url).unwrap();
    let renderer = Arc::new(RecordingRenderer::default());

    let state = AppState::new(directory, renderer.clone(), SiteScope::from_config(&config));
    (routing::router(state, &config.listings), renderer)
}

#[allow(dead_code)]
pub async fn get(router: &Router, path: &str) -> Response {
    router
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn post_form(router: &Router, path: &str, form: &str) -> Response {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}
