//! Target, segment and target email tests.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Value};
use std::sync::Arc;
use turret_io::mocks::{MockResponse, MockTransport, TestFixtures};
use turret_io::{EmailContent, HttpMethod, HttpRequest, TurretClient};

fn body_json(request: &HttpRequest) -> Value {
    let raw = STANDARD.decode(request.body.as_ref().unwrap()).unwrap();
    serde_json::from_slice(&raw).unwrap()
}

#[tokio::test]
async fn test_get_target_issues_one_signed_get() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok()));
    let client = TestFixtures::client(transport.clone()).unwrap();

    client.targets().get("foo").await.unwrap();

    assert_eq!(transport.request_count(), 1);
    let request = transport.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.url, "https://api.turret.io/latest/target/foo");
    assert!(request.body.is_none());
    assert_eq!(request.get_header("X-LS-Key"), Some("k1"));
    assert_eq!(request.get_header("Content-Type"), Some("text/json"));

    let time: u64 = request.get_header("X-LS-Time").unwrap().parse().unwrap();
    let expected = client
        .signer()
        .signature(
            "/latest/target/foo",
            turret_io::Timestamp::from_secs(time),
            None,
        )
        .unwrap();
    assert_eq!(request.get_header("X-LS-Auth"), Some(expected.as_str()));
}

#[tokio::test]
async fn test_create_and_update_target() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok()));
    let client = TestFixtures::client(transport.clone()).unwrap();
    let attributes = vec![json!({"name": "plan", "op": "eq", "value": "pro"})];

    client.targets().create("pro", attributes.clone()).await.unwrap();
    client.targets().update("pro", attributes).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://api.turret.io/latest/target/pro");
        assert_eq!(body_json(request)["attributes"][0]["value"], "pro");
    }
}

#[tokio::test]
async fn test_empty_attribute_list_is_sent() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok()));
    let client = TestFixtures::client(transport.clone()).unwrap();

    client.targets().create("empty", Vec::new()).await.unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(body_json(&request), json!({"attributes": []}));
}

#[tokio::test]
async fn test_segment_paths() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok()));
    let client = TestFixtures::client(transport.clone()).unwrap();

    client.segments().get("legacy").await.unwrap();
    client
        .segment_emails()
        .send("legacy", "7", "news@example.com")
        .await
        .unwrap();

    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            "https://api.turret.io/latest/segment/legacy",
            "https://api.turret.io/latest/segment/legacy/email/7/sendEmail",
        ]
    );
}

#[tokio::test]
async fn test_target_email_operations() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok()));
    let client = TestFixtures::client(transport.clone()).unwrap();
    let emails = client.target_emails();
    let content = EmailContent::new("Welcome", "<p>Hi</p>", "Hi");

    emails.get("foo", "42").await.unwrap();
    emails.create("foo", &content).await.unwrap();
    emails.update("foo", "42", &content).await.unwrap();
    emails
        .send_test("foo", "42", "news@example.com", "qa@example.com")
        .await
        .unwrap();
    emails.send("foo", "42", "news@example.com").await.unwrap();

    let requests = transport.requests();
    let summary: Vec<(HttpMethod, &str)> = requests
        .iter()
        .map(|r| (r.method, r.url.trim_start_matches("https://api.turret.io")))
        .collect();
    assert_eq!(
        summary,
        vec![
            (HttpMethod::Get, "/latest/target/foo/email/42"),
            (HttpMethod::Post, "/latest/target/foo/email"),
            (HttpMethod::Post, "/latest/target/foo/email/42"),
            (HttpMethod::Post, "/latest/target/foo/email/42/sendTestEmail"),
            (HttpMethod::Post, "/latest/target/foo/email/42/sendEmail"),
        ]
    );

    assert_eq!(
        body_json(&requests[1]),
        json!({"subject": "Welcome", "html": "<p>Hi</p>", "plain": "Hi"})
    );
    assert_eq!(
        body_json(&requests[3]),
        json!({"email_from": "news@example.com", "recipient": "qa@example.com"})
    );
    assert_eq!(body_json(&requests[4]), json!({"email_from": "news@example.com"}));
}
