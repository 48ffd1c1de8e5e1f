use legal_assistant::routes::create_router;
use legal_assistant::services::ask_client::AskClient;
use legal_assistant::services::conversation::{
    APOLOGY_MESSAGE, ChatSession, MessageRole,
};
use legal_assistant::services::demo::Topic;
use legal_assistant::state::AppState;

mod common;

use anyhow::anyhow;
use common::FailingGenerator;
use std::sync::Arc;

async fn spawn_server(state: AppState) -> String {
    let app = create_router("public").with_state(Arc::new(state));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[test]
fn test_submit_appends_user_message_and_blocks() {
    let mut session = ChatSession::new();

    let request = session.submit("Can you explain tenant rights?").unwrap();
    assert_eq!(request.message, "Can you explain tenant rights?");
    assert!(session.is_pending());
    assert_eq!(session.messages().len(), 2);
    assert_eq!(session.messages()[1].role, MessageRole::User);

    // Second submission while pending is ignored
    assert!(session.submit("another one").is_none());
    assert_eq!(session.messages().len(), 2);
}

#[test]
fn test_blank_input_is_ignored() {
    let mut session = ChatSession::new();
    assert!(session.submit("").is_none());
    assert!(session.submit("   ").is_none());
    assert_eq!(session.messages().len(), 1);
    assert!(!session.is_pending());
}

#[test]
fn test_resolve_appends_reply_or_apology() {
    let mut session = ChatSession::new();

    session.submit("hello").unwrap();
    assert!(session.resolve(Ok("Hi there".to_string())));
    assert!(!session.is_pending());
    assert_eq!(session.messages().last().unwrap().content, "Hi there");

    session.submit("again").unwrap();
    assert!(session.resolve(Err(anyhow!("status 500"))));
    let last = session.messages().last().unwrap();
    assert_eq!(last.role, MessageRole::Assistant);
    assert_eq!(last.content, APOLOGY_MESSAGE);

    // Nothing in flight
    assert!(!session.resolve(Ok("stray".to_string())));
    assert_eq!(session.messages().len(), 5);
}

#[tokio::test]
async fn test_round_trip_in_demo_mode() {
    let base_url = spawn_server(AppState::demo()).await;
    let client = AskClient::new(base_url);
    let mut session = ChatSession::new();

    let reply = session
        .send("Can you explain tenant rights?", &client)
        .await
        .unwrap();
    assert_eq!(reply.role, MessageRole::Assistant);
    assert_eq!(reply.content, Topic::Tenant.canned_reply());
    assert!(!session.is_pending());
    assert_eq!(session.messages().len(), 3);
}

#[tokio::test]
async fn test_upstream_failure_becomes_apology() {
    let base_url = spawn_server(AppState::with_generator(FailingGenerator)).await;
    let client = AskClient::new(base_url);

    let err = client
        .ask(&legal_assistant::message::AskRequest {
            message: "contract".to_string(),
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("500"));

    let mut session = ChatSession::new();
    let reply = session.send("contract", &client).await.unwrap();
    assert_eq!(reply.content, APOLOGY_MESSAGE);
}

#[tokio::test]
async fn test_unreachable_server_becomes_apology() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = AskClient::new(format!("http://{addr}"));
    let mut session = ChatSession::new();
    let reply = session.send("divorce", &client).await.unwrap();
    assert_eq!(reply.content, APOLOGY_MESSAGE);
    assert!(!session.is_pending());
}
