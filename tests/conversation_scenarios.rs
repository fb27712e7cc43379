use std::sync::Arc;

use aquamitra::api::HttpBackend;
use aquamitra::core::action::ERROR_REPLY;
use aquamitra::core::controller::Controller;
use aquamitra::core::conversation::Role;
use aquamitra::core::state::App;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn controller_for(server: &MockServer, language: &str) -> Controller {
    let backend = Arc::new(HttpBackend::new(server.uri()));
    Controller::new(App::new(language.to_string()), backend)
}

async fn mount_chat(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn chat_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == "/api/chat")
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect()
}

// ============================================================================
// Submissions
// ============================================================================

#[tokio::test]
async fn test_successful_answer_is_appended() {
    let server = MockServer::start().await;
    mount_chat(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"response": "District A, B, C..."})),
    )
    .await;

    let mut controller = controller_for(&server, "en");
    controller.submit("Top 5 overexploited districts").await;

    let app = controller.app();
    let messages = app.conversation.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role(), Role::User);
    assert_eq!(messages[0].content(), "Top 5 overexploited districts");
    assert_eq!(messages[1].role(), Role::Assistant);
    assert_eq!(messages[1].content(), "District A, B, C...");
    assert!(!app.pending);
}

#[tokio::test]
async fn test_server_error_becomes_apology_turn() {
    let server = MockServer::start().await;
    mount_chat(&server, ResponseTemplate::new(500)).await;

    let mut controller = controller_for(&server, "en");
    controller.submit("Top 5 overexploited districts").await;

    let app = controller.app();
    let messages = app.conversation.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].role(), Role::Assistant);
    assert_eq!(
        messages[1].content(),
        "Sorry, I encountered an error. Please try again."
    );
    assert_eq!(messages[1].content(), ERROR_REPLY);
    assert!(!app.pending);
    assert_eq!(app.status_message, "Request failed");
}

#[tokio::test]
async fn test_malformed_reply_becomes_apology_turn() {
    let server = MockServer::start().await;
    mount_chat(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"text": "no response field"})),
    )
    .await;

    let mut controller = controller_for(&server, "en");
    controller.submit("q").await;

    let messages = controller.app().conversation.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].content(), ERROR_REPLY);
}

#[tokio::test]
async fn test_blank_input_sends_nothing() {
    let server = MockServer::start().await;
    mount_chat(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"response": "unused"})),
    )
    .await;

    let mut controller = controller_for(&server, "en");
    controller.submit("").await;
    controller.submit("   ").await;

    assert!(controller.app().conversation.is_empty());
    assert!(!controller.app().pending);
    assert!(chat_bodies(&server).await.is_empty());
}

#[tokio::test]
async fn test_follow_up_carries_history_and_current_language() {
    let server = MockServer::start().await;
    mount_chat(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"response": "answer", "latency_ms": 120})),
    )
    .await;

    let mut controller = controller_for(&server, "en");
    controller.submit("Status of groundwater in Punjab").await;
    controller.set_language("hi");
    controller.submit("  And in 2022?\n").await;

    assert_eq!(controller.app().conversation.len(), 4);
    assert_eq!(controller.app().status_message, "Answered in 120 ms");

    let bodies = chat_bodies(&server).await;
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0]["language"], "en");
    assert_eq!(bodies[0]["messages"].as_array().unwrap().len(), 1);

    assert_eq!(bodies[1]["language"], "hi");
    let second = bodies[1]["messages"].as_array().unwrap();
    assert_eq!(second.len(), 3);
    assert_eq!(second[1], json!({"role": "assistant", "content": "answer"}));
    // Text is sent exactly as typed
    assert_eq!(second[2], json!({"role": "user", "content": "  And in 2022?\n"}));
}

// ============================================================================
// Language catalog
// ============================================================================

#[tokio::test]
async fn test_catalog_options_keep_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/languages"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"languages": ["en", "hi", "mr"]})),
        )
        .mount(&server)
        .await;

    let mut controller = controller_for(&server, "en");
    controller.load_languages().await;

    let options = controller.app().catalog.options();
    let pairs: Vec<(&str, &str)> = options
        .iter()
        .map(|o| (o.code.as_str(), o.label.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![("en", "English"), ("hi", "हिंदी"), ("mr", "मराठी")]
    );
}

#[tokio::test]
async fn test_failed_catalog_falls_back_to_english() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/languages"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut controller = controller_for(&server, "en");
    controller.load_languages().await;

    let options = controller.app().catalog.options();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].code, "en");
    assert_eq!(options[0].label, "English");
    assert_eq!(controller.app().status_message, "Languages unavailable");
}

#[tokio::test]
async fn test_empty_catalog_falls_back_to_english() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"languages": []})))
        .mount(&server)
        .await;

    let mut controller = controller_for(&server, "en");
    controller.load_languages().await;

    let options = controller.app().catalog.options();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].code, "en");
}

#[tokio::test]
async fn test_reload_failure_keeps_previous_catalog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"languages": ["en", "ta"]})))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/languages"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let mut controller = controller_for(&server, "ta");
    controller.load_languages().await;
    controller.load_languages().await;

    assert_eq!(controller.app().catalog.codes(), ["en", "ta"]);
    assert_eq!(controller.app().language, "ta");
}
