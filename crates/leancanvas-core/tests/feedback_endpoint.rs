//! Integration tests for FeedbackRequester against a mocked generate endpoint.
//!
//! Uses wiremock for HTTP mocking. Covers the request body contract, response
//! field defaults, malformed bodies, transport failures and the feedback log.

use leancanvas_core::{
    CanvasInput, CanvasSection, FeedbackConfig, FeedbackRequester, FALLBACK_FEEDBACK,
};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_requester(endpoint: String, dir: &TempDir) -> FeedbackRequester {
    let config = FeedbackConfig::default()
        .with_endpoint(endpoint)
        .with_log_path(dir.path().join("lean_canvas.log"));
    FeedbackRequester::new(&config).expect("failed to create requester")
}

fn log_lines(dir: &TempDir) -> Vec<String> {
    std::fs::read_to_string(dir.path().join("lean_canvas.log"))
        .unwrap_or_default()
        .lines()
        .map(String::from)
        .collect()
}

async fn mount_generate(server: &MockServer, body: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(body)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_request_body_names_model_prompt_and_disables_stream() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({"model": "llama3.1:latest", "stream": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let requester = create_requester(format!("{}/api/generate", server.uri()), &dir);
    let mut canvas = CanvasInput::default();
    canvas.set(CanvasSection::Solution, "동네 마트 공동구매 앱");

    let outcome = requester.submit(&canvas).await;
    assert!(outcome.is_success(), "unexpected failure: {}", outcome.text());

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    let prompt = body["prompt"].as_str().unwrap();
    assert!(prompt.contains("솔루션: 동네 마트 공동구매 앱"));
    assert!(prompt.contains(CanvasSection::Problem.placeholder()));
}

#[tokio::test]
async fn test_response_and_scores_are_rendered() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    mount_generate(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"response": "X", "scores": {"A": 8}})),
    )
    .await;

    let requester = create_requester(format!("{}/api/generate", server.uri()), &dir);
    let outcome = requester.submit(&CanvasInput::default()).await;

    assert_eq!(outcome.text(), "X");
    assert_eq!(outcome.scores().len(), 1);
    assert_eq!(outcome.scores()[0].category, "A");
    assert_eq!(outcome.scores()[0].score, 8.0);
}

#[tokio::test]
async fn test_missing_response_uses_fallback_message() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    mount_generate(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"done": true})),
    )
    .await;

    let requester = create_requester(format!("{}/api/generate", server.uri()), &dir);
    let outcome = requester.submit(&CanvasInput::default()).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.text(), FALLBACK_FEEDBACK);
    assert!(outcome.scores().is_empty());
}

#[tokio::test]
async fn test_error_status_with_json_body_degrades_to_fallback() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    mount_generate(
        &server,
        ResponseTemplate::new(404).set_body_json(json!({"error": "model 'llama3.1:latest' not found"})),
    )
    .await;

    let requester = create_requester(format!("{}/api/generate", server.uri()), &dir);
    let outcome = requester.submit(&CanvasInput::default()).await;

    assert_eq!(outcome.text(), FALLBACK_FEEDBACK);
    assert!(outcome.scores().is_empty());
}

#[tokio::test]
async fn test_non_json_body_is_reported_as_error() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    mount_generate(
        &server,
        ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"),
    )
    .await;

    let requester = create_requester(format!("{}/api/generate", server.uri()), &dir);
    let outcome = requester.submit(&CanvasInput::default()).await;

    assert!(!outcome.is_success());
    assert!(outcome.text().starts_with("오류 발생: invalid response"));
    let lines = log_lines(&dir);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(" - ERROR - 오류 발생: invalid response"));
}

#[tokio::test]
async fn test_json_body_that_is_not_an_object_is_reported_as_error() {
    for body in [json!("plain string"), json!([1, 2]), json!(null)] {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        mount_generate(&server, ResponseTemplate::new(200).set_body_json(body.clone())).await;

        let requester = create_requester(format!("{}/api/generate", server.uri()), &dir);
        let outcome = requester.submit(&CanvasInput::default()).await;

        assert!(!outcome.is_success(), "{body} was accepted");
        assert_eq!(
            outcome.text(),
            "오류 발생: invalid response: response body is not a JSON object"
        );
        assert!(outcome.scores().is_empty());

        let lines = log_lines(&dir);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(" - ERROR - "));
        assert!(!lines[0].contains(" - INFO - "));
    }
}

#[tokio::test]
async fn test_connection_refused_is_displayed_and_logged_once() {
    let dir = tempfile::tempdir().unwrap();
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let requester = create_requester(format!("http://127.0.0.1:{port}/api/generate"), &dir);
    let outcome = requester.submit(&CanvasInput::default()).await;

    assert!(!outcome.is_success());
    assert!(outcome.text().starts_with("오류 발생: network error:"));
    assert!(outcome.scores().is_empty());

    let lines = log_lines(&dir);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(" - ERROR - "));
    assert!(lines[0].contains(outcome.request_id()));
}

#[tokio::test]
async fn test_two_triggers_send_two_requests_and_log_two_lines() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "again"})))
        .expect(2)
        .mount(&server)
        .await;

    let requester = create_requester(format!("{}/api/generate", server.uri()), &dir);
    let canvas = CanvasInput::default();

    let first = requester.submit(&canvas).await;
    let second = requester.submit(&canvas).await;

    assert_ne!(first.request_id(), second.request_id());
    assert_eq!(first.text(), second.text());

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].body, received[1].body);

    let lines = log_lines(&dir);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.contains(" - INFO - ")));
}

#[tokio::test]
async fn test_arbitrary_field_contents_do_not_break_submission() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    mount_generate(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"response": "ok"})),
    )
    .await;

    let requester = create_requester(format!("{}/api/generate", server.uri()), &dir);
    let mut canvas = CanvasInput::default();
    let odd = ["", "\"quoted\" {braces} \\backslash", "줄1\n줄2\r\n줄3", "🚀🔥", "\u{0000}"];
    for (i, section) in CanvasSection::ALL.iter().enumerate() {
        canvas.set(*section, odd[i % odd.len()]);
    }

    let outcome = requester.submit(&canvas).await;
    assert!(outcome.is_success(), "unexpected failure: {}", outcome.text());
    assert_eq!(log_lines(&dir).len(), 1);
}
