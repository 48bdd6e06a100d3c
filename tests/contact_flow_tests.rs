use portfolio_carousel::config::EmailJsSettings;
use portfolio_carousel::contact::{
    ContactForm, ContactOutcome, EmailJsClient, submit_contact_form,
};
use portfolio_carousel::error::AppError;
use portfolio_carousel::testing_utils::{RecordingSender, TestDataBuilder};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

fn settings(api_base: String) -> EmailJsSettings {
    EmailJsSettings {
        api_base,
        service_id: "service_portfolio".to_string(),
        contact_template_id: "template_contact".to_string(),
        auto_reply_template_id: "template_reply".to_string(),
        public_key: "pk_live".to_string(),
    }
}

#[tokio::test]
async fn test_successful_submission_sends_contact_then_auto_reply() {
    let sender = RecordingSender::new();
    let form = TestDataBuilder::contact_form();

    let outcome = submit_contact_form(&sender, &TestDataBuilder::contact_templates(), &form)
        .await
        .unwrap();

    assert_eq!(outcome, ContactOutcome::Delivered);
    assert_eq!(
        outcome.user_message(),
        "Message sent successfully! Check your email for confirmation."
    );

    let sent = sender.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].0, "template_contact");
    assert_eq!(
        sent[0].1,
        json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "message": "I'd love to collaborate."
        })
    );
    assert_eq!(sent[1].0, "template_reply");
    assert_eq!(
        sent[1].1,
        json!({
            "to_email": "ada@example.com",
            "from_name": "Yashwin",
            "name": "Ada Lovelace",
            "title": "Contact Form Submission"
        })
    );
}

#[tokio::test]
async fn test_contact_failure_skips_auto_reply() {
    let sender = RecordingSender::new().failing_on("template_contact");

    let outcome = submit_contact_form(
        &sender,
        &TestDataBuilder::contact_templates(),
        &TestDataBuilder::contact_form(),
    )
    .await
    .unwrap();

    assert!(!outcome.is_delivered());
    assert_eq!(
        outcome.user_message(),
        "Failed to send message, please try again."
    );
    assert_eq!(sender.sent().len(), 1);
}

#[tokio::test]
async fn test_auto_reply_failure_still_counts_as_delivered() {
    let sender = RecordingSender::new().failing_on("template_reply");

    let outcome = submit_contact_form(
        &sender,
        &TestDataBuilder::contact_templates(),
        &TestDataBuilder::contact_form(),
    )
    .await
    .unwrap();

    assert!(matches!(
        outcome,
        ContactOutcome::DeliveredWithoutAutoReply { .. }
    ));
    assert!(outcome.is_delivered());
    assert_eq!(sender.sent().len(), 2);
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let sender = RecordingSender::new();
    let form = ContactForm::new("Ada", "not-an-email", "Hello");

    let result = submit_contact_form(&sender, &TestDataBuilder::contact_templates(), &form).await;

    assert!(matches!(result, Err(AppError::InvalidContactForm(_))));
    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn test_submission_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .and(body_partial_json(json!({
            "service_id": "service_portfolio",
            "template_id": "template_contact",
            "user_id": "pk_live",
            "template_params": { "email": "ada@example.com" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .and(body_partial_json(json!({
            "template_id": "template_reply",
            "template_params": {
                "to_email": "ada@example.com",
                "title": "Contact Form Submission"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = EmailJsClient::new(settings(mock_server.uri()), 5).unwrap();
    let outcome = submit_contact_form(
        &client,
        &TestDataBuilder::contact_templates(),
        &TestDataBuilder::contact_form(),
    )
    .await
    .unwrap();

    assert_eq!(outcome, ContactOutcome::Delivered);
}

#[tokio::test]
async fn test_http_rejection_of_contact_email() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .respond_with(ResponseTemplate::new(400).set_body_string("The user ID is invalid"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = EmailJsClient::new(settings(mock_server.uri()), 5).unwrap();
    let outcome = submit_contact_form(
        &client,
        &TestDataBuilder::contact_templates(),
        &TestDataBuilder::contact_form(),
    )
    .await
    .unwrap();

    match outcome {
        ContactOutcome::Failed { reason } => assert!(reason.contains("The user ID is invalid")),
        other => panic!("expected failure, got {other:?}"),
    }
}
