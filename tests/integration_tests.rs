use domain_nope::config::Config;
use domain_nope::editor::Editor;
use domain_nope::engine::{RequestGate, StoreManager};
use domain_nope::init::init_components;
use domain_nope::messaging::{self, run_listener, RuntimeMessage};
use domain_nope::store::{BlocklistStore, KeyValueStore, MemoryStore};
use std::sync::Arc;
use std::time::Duration;

fn memory_config() -> Config {
    let mut config = Config::default();
    config.storage.backend = "memory".to_string();
    config
}

async fn wait_for<F: Fn() -> bool>(condition: F) -> bool {
    for _ in 0..50 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    false
}

#[tokio::test]
async fn test_component_instantiation() {
    let components = init_components(&memory_config()).await.unwrap();
    assert!(components.gate.is_empty());
    assert!(components.editor.domains().is_empty());
}

#[tokio::test]
async fn test_edit_notifies_background_and_gate_follows() {
    let components = init_components(&memory_config()).await.unwrap();
    let gate = components.gate.clone();
    let mut editor = components.editor;
    tokio::spawn(run_listener(components.receiver, gate.clone()));

    assert!(!gate.should_block("https://ads.example.com/banner.js"));

    editor.add_domain("https://www.Example.com/page").await;
    assert!(
        wait_for(|| gate.should_block("https://ads.example.com/banner.js")).await,
        "Gate should reload after BlocklistUpdated"
    );
    assert!(gate.should_block("https://example.com/path"));
    assert!(!gate.should_block("https://notexample.com"));

    editor.remove_domain("example.com").await;
    assert!(
        wait_for(|| !gate.should_block("https://example.com/path")).await,
        "Gate should unblock after removal"
    );
}

#[tokio::test]
async fn test_reload_survives_saturated_queue() {
    let mut config = memory_config();
    config.messaging.channel_capacity = 4;
    let components = init_components(&config).await.unwrap();
    let gate = components.gate.clone();
    let mut editor = components.editor;

    for _ in 0..8 {
        components.messenger.send(RuntimeMessage::SurfaceMounted);
    }
    editor.add_domain("example.com").await;
    tokio::spawn(run_listener(components.receiver, gate.clone()));

    assert!(
        wait_for(|| gate.should_block("https://example.com")).await,
        "Gate should reload even when informational messages filled the queue"
    );
    assert_eq!(gate.len(), 1);
}

#[tokio::test]
async fn test_gate_loads_existing_list_on_start() {
    let backend = Arc::new(MemoryStore::new());
    let store = BlocklistStore::new(backend.clone(), "blockedDomains");
    store
        .save(&["tracker.io".to_string(), "ads.net".to_string()])
        .await
        .unwrap();

    let gate = RequestGate::new(Arc::new(StoreManager::new(store)));
    assert!(!gate.should_block("https://tracker.io/"));

    gate.reload().await;
    assert_eq!(gate.len(), 2);
    assert!(gate.should_block("https://pixel.tracker.io/p.gif"));
}

#[tokio::test]
async fn test_corrupt_storage_keeps_previous_cache() {
    let backend = Arc::new(MemoryStore::new());
    let store = BlocklistStore::new(backend.clone(), "blockedDomains");
    store.save(&["example.com".to_string()]).await.unwrap();

    let gate = RequestGate::new(Arc::new(StoreManager::new(store.clone())));
    gate.reload().await;

    backend
        .set("blockedDomains", serde_json::json!("garbage"))
        .await
        .unwrap();
    messaging::handle_message(&gate, RuntimeMessage::BlocklistUpdated).await;

    assert!(gate.should_block("https://example.com"));
}

#[tokio::test]
async fn test_round_trip_through_store() {
    let backend = Arc::new(MemoryStore::new());
    let store = BlocklistStore::new(backend, "blockedDomains");
    let (messenger, _rx) = messaging::channel(8);
    let mut editor = Editor::new(store.clone(), messenger);

    editor.add_domain("  WWW.Foo.org/x ").await;
    assert!(store.load().await.unwrap().contains(&"foo.org".to_string()));

    editor.remove_domain("foo.org").await;
    assert!(!store.load().await.unwrap().contains(&"foo.org".to_string()));
}
