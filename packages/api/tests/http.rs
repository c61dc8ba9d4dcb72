//! End-to-end sign-in and project loading against a local mock server.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use api::auth::{AuthFlow, HttpTransport, SessionKind, SignInError, SignInForm};
use api::projects::ProjectClient;
use api::{ApiError, Destination};
use reqwest::Url;
use serde_json::json;
use store::config::AuthSettings;
use store::{MemoryStore, SessionStore};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn settings(endpoint: &str, demo_mode: bool) -> AuthSettings {
    AuthSettings {
        signin_endpoint: endpoint.to_string(),
        demo_mode,
        success_delay_ms: 0,
        fallback_delay_ms: 0,
        ..AuthSettings::default()
    }
}

fn flow(settings: AuthSettings) -> AuthFlow<HttpTransport, MemoryStore> {
    let transport = HttpTransport::new(&settings).unwrap();
    AuthFlow::new(transport, SessionStore::new(MemoryStore::new()), settings)
}

#[tokio::test]
async fn test_sign_in_against_server() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signin"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"username": "alice", "password": "hunter22"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"token": "abc", "user": {"username": "alice"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let flow = flow(settings(&format!("{}/api/auth/signin", server.uri()), false));
    let navigations = Arc::new(Mutex::new(Vec::new()));
    let recorded = navigations.clone();

    let outcome = flow
        .submit(&SignInForm::new("alice", "hunter22"), move |d| {
            recorded.lock().unwrap().push(d)
        })
        .await
        .unwrap();

    assert_eq!(outcome.kind, SessionKind::Verified);
    assert!(flow.session().is_authenticated());
    assert_eq!(flow.session().get_user_data().unwrap().username, "alice");
    assert_eq!(*navigations.lock().unwrap(), vec![Destination::Home]);
}

#[tokio::test]
async fn test_unauthorized_against_server() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signin"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "nope"})))
        .mount(&server)
        .await;

    let flow = flow(settings(&format!("{}/api/auth/signin", server.uri()), true));
    let err = flow
        .submit(&SignInForm::new("alice", "wrong"), |_| panic!("navigated"))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid username or password. Please try again."
    );
    assert!(!flow.session().is_authenticated());
}

#[tokio::test]
async fn test_hung_server_times_out_and_releases_form() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signin"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"token": "late"}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let settings = AuthSettings {
        timeout_secs: 1,
        ..settings(&format!("{}/api/auth/signin", server.uri()), true)
    };
    let flow = flow(settings);
    let err = flow
        .submit(&SignInForm::new("alice", "hunter22"), |_| panic!("navigated"))
        .await
        .unwrap_err();

    assert!(
        err.to_string()
            .starts_with("Connection failed: timeout of 1000ms exceeded."),
        "{err}"
    );
    assert!(!flow.is_loading());
    assert!(!flow.session().is_authenticated());
}

#[tokio::test]
async fn test_unreachable_server_falls_back_in_demo_mode() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    // Reserve a port, then free it so nothing is listening there.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let endpoint = format!("http://127.0.0.1:{port}/api/auth/signin");

    let strict = flow(settings(&endpoint, false));
    let err = strict
        .submit(&SignInForm::new("alice", "hunter22"), |_| {})
        .await
        .unwrap_err();
    assert_eq!(err, SignInError::NetworkUnavailable);
    assert!(!strict.session().is_authenticated());

    let demo = flow(settings(&endpoint, true));
    let mut navigations = Vec::new();
    let outcome = demo
        .submit(&SignInForm::new("alice", "hunter22"), |d| navigations.push(d))
        .await
        .unwrap();
    assert_eq!(outcome.kind, SessionKind::Fallback);
    assert!(demo.session().get_user_data().unwrap().fallback);
    assert_eq!(navigations, vec![Destination::Home]);
}

#[tokio::test]
async fn test_project_list_shapes_and_errors() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    let project = json!({
        "title": "Jaffna Port Terminal",
        "category": "Infrastructure",
        "image": "https://example.com/port.jpg",
        "description": "Automated container terminal.",
        "tech": ["Automation"],
        "status": "In Progress",
        "completion": "2027",
        "progress": 40,
        "investment": "$410M",
        "rating": 4.4
    });
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([project.clone()])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"projects": [project]})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({"message": "database offline"})),
        )
        .mount(&server)
        .await;

    let url = |p: &str| Url::parse(&format!("{}{p}", server.uri())).unwrap();

    let list = ProjectClient::with_endpoint(url("/api/projects"))
        .fetch_projects()
        .await
        .unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].title, "Jaffna Port Terminal");

    let wrapped = ProjectClient::with_endpoint(url("/v2/projects"))
        .fetch_projects()
        .await
        .unwrap();
    assert_eq!(wrapped, list);

    let err = ProjectClient::with_endpoint(url("/broken"))
        .fetch_projects()
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 503, .. }));
    assert_eq!(err.to_string(), "database offline");
}
