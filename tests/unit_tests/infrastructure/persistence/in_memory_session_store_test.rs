use std::sync::Arc;
use std::time::Duration;

use docent::application::ports::SessionStore;
use docent::application::services::{DocumentSession, PromptBuilder};
use docent::domain::{ExtractedText, SessionId};
use docent::infrastructure::persistence::{DEFAULT_MAX_OPEN_SESSIONS, InMemorySessionStore};

use crate::helpers::ScriptedGenerator;

fn session(name: &str) -> Arc<DocumentSession> {
    Arc::new(DocumentSession::new(
        name.to_string(),
        ExtractedText::from_pages(["text"]),
        Arc::new(ScriptedGenerator::default()),
        PromptBuilder::default(),
    ))
}

#[tokio::test]
async fn given_inserted_session_when_fetching_by_id_then_returns_same_session() {
    let store = InMemorySessionStore::new();
    let session = session("a.pdf");
    let id = session.id();

    store.insert(Arc::clone(&session)).await;

    let fetched = store.get(id).await.unwrap();
    assert!(Arc::ptr_eq(&fetched, &session));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn given_two_sessions_when_one_is_removed_then_other_remains() {
    let store = InMemorySessionStore::new();
    let first = session("a.pdf");
    let second = session("b.pdf");
    store.insert(Arc::clone(&first)).await;
    store.insert(Arc::clone(&second)).await;

    let removed = store.remove(first.id()).await;

    assert!(removed.is_some());
    assert!(store.get(first.id()).await.is_none());
    assert_eq!(store.get(second.id()).await.unwrap().filename(), "b.pdf");
}

#[tokio::test]
async fn given_unknown_id_when_fetching_or_removing_then_returns_none() {
    let store = InMemorySessionStore::new();

    assert!(store.get(SessionId::new()).await.is_none());
    assert!(store.remove(SessionId::new()).await.is_none());
    assert_eq!(store.len().await, 0);
}

// Spaces creation timestamps so eviction order does not depend on clock resolution.
fn sessions_in_creation_order(names: &[&str]) -> Vec<Arc<DocumentSession>> {
    names
        .iter()
        .map(|name| {
            std::thread::sleep(Duration::from_millis(2));
            session(name)
        })
        .collect()
}

#[tokio::test]
async fn given_full_store_when_inserting_then_oldest_session_is_evicted() {
    let store = InMemorySessionStore::with_max_open(2);
    let sessions = sessions_in_creation_order(&["a.pdf", "b.pdf", "c.pdf"]);

    for session in &sessions {
        store.insert(Arc::clone(session)).await;
    }

    assert_eq!(store.len().await, 2);
    assert!(store.get(sessions[0].id()).await.is_none());
    assert!(store.get(sessions[1].id()).await.is_some());
    assert!(store.get(sessions[2].id()).await.is_some());
}

#[tokio::test]
async fn given_oldest_inserted_last_when_store_overflows_then_eviction_follows_creation_time() {
    let store = InMemorySessionStore::with_max_open(2);
    let sessions = sessions_in_creation_order(&["a.pdf", "b.pdf", "c.pdf"]);

    store.insert(Arc::clone(&sessions[1])).await;
    store.insert(Arc::clone(&sessions[0])).await;
    store.insert(Arc::clone(&sessions[2])).await;

    assert!(store.get(sessions[0].id()).await.is_none());
    assert!(store.get(sessions[1].id()).await.is_some());
    assert!(store.get(sessions[2].id()).await.is_some());
}

#[tokio::test]
async fn given_full_store_when_reinserting_existing_session_then_nothing_is_evicted() {
    let store = InMemorySessionStore::with_max_open(2);
    let sessions = sessions_in_creation_order(&["a.pdf", "b.pdf"]);
    for session in &sessions {
        store.insert(Arc::clone(session)).await;
    }

    store.insert(Arc::clone(&sessions[1])).await;

    assert_eq!(store.len().await, 2);
    assert!(store.get(sessions[0].id()).await.is_some());
}

#[test]
fn given_zero_cap_when_constructing_then_store_keeps_one_session() {
    assert_eq!(InMemorySessionStore::with_max_open(0).max_open(), 1);
    assert_eq!(InMemorySessionStore::new().max_open(), DEFAULT_MAX_OPEN_SESSIONS);
}
