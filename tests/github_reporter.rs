//! GitHubReporter against a local stand-in for the issues API
//!
//! An axum app records every request (method, path, auth header, JSON body)
//! and answers with a configurable status.

use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::{Json, Router};
use issueguard::cli::run::process_issue;
use issueguard::models::{FormKind, IssueContext, Outcome};
use issueguard::{GitHubReporter, IssueReporter};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
struct Captured {
    method: Method,
    path: String,
    authorization: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct ApiState {
    requests: Arc<Mutex<Vec<Captured>>>,
    status: StatusCode,
}

async fn record(
    State(state): State<ApiState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state.requests.lock().unwrap().push(Captured {
        method,
        path: uri.path().to_string(),
        authorization,
        body,
    });

    (state.status, Json(json!({})))
}

/// Start the fake API and return its base URL plus the request log
async fn spawn_api(status: StatusCode) -> (String, Arc<Mutex<Vec<Captured>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().fallback(record).with_state(ApiState {
        requests: requests.clone(),
        status,
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), requests)
}

fn issue(title: &str, body: &str) -> IssueContext {
    IssueContext::new("acme/catalog", 99, title, body)
}

#[tokio::test]
async fn test_calls_hit_issue_endpoints() {
    let (api_url, requests) = spawn_api(StatusCode::OK).await;
    let reporter = GitHubReporter::new(&api_url, "s3cret", &issue("[Bug]: x", "")).unwrap();

    reporter.comment("hello").await.unwrap();
    reporter.add_label("invalid").await.unwrap();
    reporter.close().await.unwrap();

    let requests = requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 3);

    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path, "/repos/acme/catalog/issues/99/comments");
    assert_eq!(requests[0].body, json!({ "body": "hello" }));

    assert_eq!(requests[1].method, Method::POST);
    assert_eq!(requests[1].path, "/repos/acme/catalog/issues/99/labels");
    assert_eq!(requests[1].body, json!({ "labels": ["invalid"] }));

    assert_eq!(requests[2].method, Method::PATCH);
    assert_eq!(requests[2].path, "/repos/acme/catalog/issues/99");
    assert_eq!(requests[2].body, json!({ "state": "closed" }));

    for request in &requests {
        assert_eq!(request.authorization.as_deref(), Some("token s3cret"));
    }
}

#[tokio::test]
async fn test_rejected_request_is_not_an_error() {
    let (api_url, requests) = spawn_api(StatusCode::FORBIDDEN).await;
    let reporter = GitHubReporter::new(&api_url, "bad", &issue("[Bug]: x", "")).unwrap();

    assert!(reporter.comment("hello").await.is_ok());
    assert_eq!(requests.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unreachable_api_propagates() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let reporter =
        GitHubReporter::new(&format!("http://{}", addr), "t", &issue("[Bug]: x", "")).unwrap();

    let error = reporter.close().await.unwrap_err();
    assert!(error.to_string().contains("PATCH"));
}

#[tokio::test]
async fn test_failed_submission_comments_then_labels_then_closes() {
    let (api_url, requests) = spawn_api(StatusCode::OK).await;
    let issue = issue("[New Game]: Foo", "no headings here");
    let reporter = GitHubReporter::new(&api_url, "t", &issue).unwrap();

    let outcome = process_issue(&issue, &FormKind::ALL, &reporter).await.unwrap();
    assert_eq!(outcome, Outcome::NotAForm { form: FormKind::Game });

    let paths: Vec<(Method, String)> = requests
        .lock()
        .unwrap()
        .iter()
        .map(|r| (r.method.clone(), r.path.clone()))
        .collect();
    assert_eq!(
        paths,
        vec![
            (Method::POST, "/repos/acme/catalog/issues/99/comments".to_string()),
            (Method::POST, "/repos/acme/catalog/issues/99/labels".to_string()),
            (Method::PATCH, "/repos/acme/catalog/issues/99".to_string()),
        ]
    );
}
