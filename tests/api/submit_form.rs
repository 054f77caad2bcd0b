use crate::helpers::{spawn_app, valid_submission};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn a_valid_submission_is_accepted_and_dispatched_once() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_submission(&valid_submission()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response body");
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Form submitted successfully! We will contact you soon."
    );
    // Mock expectations are checked on drop: exactly one message was dispatched
}

#[tokio::test]
async fn an_invalid_submission_gets_a_400_with_the_reason_and_dispatches_nothing() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (
            serde_json::json!({
                "name": "J",
                "email": "jo@x.com",
                "phone": "9876543210",
                "subject": "Pricing"
            }),
            "Name must be at least 2 characters long",
        ),
        (
            serde_json::json!({
                "name": "Jo",
                "email": "not-an-email",
                "phone": "9876543210",
                "subject": "Pricing"
            }),
            "Please provide a valid email address",
        ),
        (
            serde_json::json!({
                "name": "Jo",
                "email": "jo@x.com",
                "phone": "123",
                "subject": "Pricing"
            }),
            "Please provide a valid phone number",
        ),
        (
            serde_json::json!({
                "name": "Jo",
                "email": "jo@x.com",
                "phone": "9876543210",
                "subject": "   "
            }),
            "Please select a subject",
        ),
    ];

    for (body, expected_reason) in test_cases {
        // Act
        let response = app.post_submission(&body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not reject the submission that should fail with '{}'.",
            expected_reason
        );
        let response_body: serde_json::Value =
            response.json().await.expect("Failed to parse response body");
        assert_eq!(response_body["success"], false);
        assert_eq!(response_body["message"], expected_reason);
    }

    // No request ever reached the relay
    assert!(app
        .email_server
        .received_requests()
        .await
        .expect("Failed to retrieve received requests")
        .is_empty());
}

#[tokio::test]
async fn a_submission_with_missing_fields_fails_its_validation_rule() {
    // Arrange
    let app = spawn_app().await;

    // Act - no phone at all
    let response = app
        .post_submission(&serde_json::json!({
            "name": "Jo",
            "email": "jo@x.com",
            "subject": "Pricing"
        }))
        .await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response body");
    assert_eq!(body["message"], "Please provide a valid phone number");
}

#[tokio::test]
async fn a_relay_failure_gets_a_500_with_a_generic_message() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_submission(&valid_submission()).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response body");
    assert_eq!(body["success"], false);
    // The relay's own error must not leak into the response
    assert_eq!(
        body["message"],
        "Something went wrong. Please try again later."
    );
}

#[tokio::test]
async fn a_malformed_body_gets_a_400_with_the_response_envelope() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.post_raw_submission("definitely not json".into()).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response body");
    assert_eq!(body["success"], false);
    assert!(app
        .email_server
        .received_requests()
        .await
        .expect("Failed to retrieve received requests")
        .is_empty());
}

#[tokio::test]
async fn hostile_form_fields_are_escaped_before_they_reach_the_relay() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app
        .post_submission(&serde_json::json!({
            "name": "<script>alert(1)</script>",
            "email": "jo@x.com",
            "phone": "9876543210",
            "subject": "Hello\r\nBcc: attacker@evil.example"
        }))
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let requests = app
        .email_server
        .received_requests()
        .await
        .expect("Failed to retrieve received requests");
    let relay_body: serde_json::Value =
        serde_json::from_slice(&requests[0].body).expect("Relay request body is not JSON");

    let html_body = relay_body["HtmlBody"].as_str().expect("HtmlBody missing");
    assert!(!html_body.contains("<script>"));
    assert!(html_body.contains("&lt;script&gt;"));

    let subject = relay_body["Subject"].as_str().expect("Subject missing");
    assert!(!subject.contains('\r'));
    assert!(!subject.contains('\n'));
}

#[tokio::test]
async fn the_notification_carries_the_submitter_as_reply_to() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    app.post_submission(&valid_submission()).await;

    // Assert
    let requests = app
        .email_server
        .received_requests()
        .await
        .expect("Failed to retrieve received requests");
    let relay_body: serde_json::Value =
        serde_json::from_slice(&requests[0].body).expect("Relay request body is not JSON");

    assert_eq!(relay_body["ReplyTo"], "jo@x.com");
    assert_eq!(
        relay_body["Subject"],
        "New Contact Form: Pricing - from Jo"
    );
}
