// tests/session_store_test.rs
// Session store lifecycle: create / reset / get / destroy, persona
// fallback, and the single-flight generation latch.

use uuid::Uuid;

use wetsim_backend::error::ChatError;
use wetsim_backend::llm::ChatTurn;
use wetsim_backend::persona::Persona;
use wetsim_backend::session::SessionStore;

#[tokio::test]
async fn create_installs_empty_default_session() {
    let store = SessionStore::new();
    let id = Uuid::new_v4();

    store.create(id).await;

    let session = store.get(id).await.expect("session should exist");
    assert_eq!(session.persona, Persona::Easy);
    assert!(session.history.is_empty());
    assert!(!session.seeded);
}

#[tokio::test]
async fn reset_records_persona_and_clears_history() {
    let store = SessionStore::new();
    let id = Uuid::new_v4();
    store.create(id).await;

    // Simulate a committed exchange, then switch persona.
    store
        .commit(
            id,
            vec![
                ChatTurn::system("instruction"),
                ChatTurn::user("hello"),
                ChatTurn::assistant("hi"),
            ],
        )
        .await
        .unwrap();
    assert!(store.get(id).await.unwrap().seeded);

    let persona = store.reset(id, "hard").await.unwrap();
    assert_eq!(persona, Persona::Hard);

    let session = store.get(id).await.unwrap();
    assert_eq!(session.persona, Persona::Hard);
    assert!(session.history.is_empty());
    assert!(!session.seeded);
}

#[tokio::test]
async fn reset_is_idempotent() {
    let store = SessionStore::new();
    let id = Uuid::new_v4();
    store.create(id).await;

    let first = store.reset(id, "hard").await.unwrap();
    let second = store.reset(id, "hard").await.unwrap();
    assert_eq!(first, second);

    let session = store.get(id).await.unwrap();
    assert_eq!(session.persona, Persona::Hard);
    assert!(session.history.is_empty());
}

#[tokio::test]
async fn unknown_persona_key_falls_back_to_default() {
    let store = SessionStore::new();
    let id = Uuid::new_v4();
    store.create(id).await;

    let persona = store.reset(id, "nightmare").await.unwrap();
    assert_eq!(persona, Persona::Easy);
    assert_eq!(store.get(id).await.unwrap().persona, Persona::Easy);
}

#[tokio::test]
async fn destroy_releases_session_memory() {
    let store = SessionStore::new();
    let id = Uuid::new_v4();
    store.create(id).await;

    store.destroy(id).await;
    assert!(store.get(id).await.is_none());
}

#[tokio::test]
async fn operations_on_unknown_connection_fail() {
    let store = SessionStore::new();
    let id = Uuid::new_v4();

    assert!(matches!(
        store.reset(id, "easy").await,
        Err(ChatError::SessionNotFound(_))
    ));
    assert!(matches!(
        store.begin_generation(id).await,
        Err(ChatError::SessionNotFound(_))
    ));
}

#[tokio::test]
async fn generation_latch_rejects_second_attempt() {
    let store = SessionStore::new();
    let id = Uuid::new_v4();
    store.create(id).await;

    store.begin_generation(id).await.unwrap();
    assert!(matches!(
        store.begin_generation(id).await,
        Err(ChatError::Busy)
    ));

    store.finish_generation(id).await;
    store.begin_generation(id).await.unwrap();
}

#[tokio::test]
async fn sessions_are_independent_across_connections() {
    let store = SessionStore::new();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    store.create(a).await;
    store.create(b).await;

    store.reset(a, "hard").await.unwrap();
    store.begin_generation(a).await.unwrap();

    // Connection b is unaffected by a's persona or latch.
    assert_eq!(store.get(b).await.unwrap().persona, Persona::Easy);
    store.begin_generation(b).await.unwrap();
}
