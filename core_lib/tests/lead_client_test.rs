use sadopak_core::lead::{CaptchaToken, LeadClient, LeadPayload, LeadSubmitter, LeadType, Plan};
use sadopak_core::SubmissionError;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LEAD_PATH: &str = "/wp-json/sadopak/v1/lead";

fn client_for(server: &MockServer) -> LeadClient {
    let endpoint = Url::parse(&format!("{}{}", server.uri(), LEAD_PATH)).unwrap();
    LeadClient::new(endpoint)
}

fn consultation() -> LeadPayload {
    LeadPayload::new(
        LeadType::Consultation,
        "Jane",
        "+260900000000",
        CaptchaToken::new("P1_token").unwrap(),
    )
    .with_email("jane@x.com")
    .with_plan(Plan::Standard)
}

#[tokio::test]
async fn test_posts_json_payload_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LEAD_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "type": "consultation",
            "name": "Jane",
            "phone": "+260900000000",
            "email": "jane@x.com",
            "plan": "standard",
            "hcaptchaToken": "P1_token"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "id": 77})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server).submit(&consultation()).await.unwrap();
    assert_eq!(body, json!({"ok": true, "id": 77}));
}

#[tokio::test]
async fn test_rejection_surfaces_error_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LEAD_PATH))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"error": "duplicate"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).submit(&consultation()).await.unwrap_err();
    assert_eq!(
        err,
        SubmissionError::Rejected {
            status: 409,
            message: "duplicate".to_string()
        }
    );
}

#[tokio::test]
async fn test_rejection_falls_back_to_message_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LEAD_PATH))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"code": "bad_captcha", "message": "Verification failed"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).submit(&consultation()).await.unwrap_err();
    assert_eq!(err.message(), "Verification failed");
}

#[tokio::test]
async fn test_unparsable_error_body_uses_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LEAD_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>Internal Server Error</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).submit(&consultation()).await.unwrap_err();
    assert_eq!(err.message(), "Submission failed");
}

#[tokio::test]
async fn test_unparsable_success_body_is_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LEAD_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .mount(&server)
        .await;

    let body = client_for(&server).submit(&consultation()).await.unwrap();
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let endpoint = format!("http://127.0.0.1:{}{}", port, LEAD_PATH);
    let client = LeadClient::new(Url::parse(&endpoint).unwrap());
    let err = client.submit(&consultation()).await.unwrap_err();

    assert!(matches!(err, SubmissionError::Transport(_)));
    assert_eq!(err.message(), "Submission failed");
}
