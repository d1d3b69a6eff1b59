use startguard_store::{mock::MockScope, ScopeStore, ScopedStore, StoreAdapter, StoreError};
use startguard_types::EntryName;
use std::sync::Arc;

fn name(s: &str) -> EntryName {
    EntryName::new(s).unwrap()
}

fn store_of(scopes: Vec<Arc<MockScope>>) -> ScopedStore {
    ScopedStore::new(scopes.into_iter().map(|s| s as Arc<dyn ScopeStore>).collect())
}

// ── list: union across scopes ─────────────────────────────────────

#[tokio::test]
async fn list_unions_scopes() {
    let user = Arc::new(MockScope::with_entries("user", ["A", "B"]));
    let machine = Arc::new(MockScope::with_entries("machine", ["B", "C"]));
    let store = store_of(vec![user, machine]);

    let snap = store.list().await.unwrap();
    assert_eq!(snap.len(), 3);
    for n in ["A", "B", "C"] {
        assert!(snap.contains(&name(n)));
    }
}

#[tokio::test]
async fn list_skips_unreadable_scope() {
    let user = Arc::new(MockScope::with_entries("user", ["A"]));
    let machine = Arc::new(MockScope::with_entries("machine", ["B"]));
    machine.set_fail_reads(true);
    let store = store_of(vec![user, machine]);

    let snap = store.list().await.unwrap();
    assert_eq!(snap.len(), 1);
    assert!(snap.contains(&name("A")));
}

#[tokio::test]
async fn list_fails_only_when_all_scopes_unreadable() {
    let user = Arc::new(MockScope::with_entries("user", ["A"]));
    let machine = Arc::new(MockScope::with_entries("machine", ["B"]));
    user.set_fail_reads(true);
    machine.set_fail_reads(true);
    let store = store_of(vec![user, machine]);

    match store.list().await {
        Err(StoreError::AllScopesUnreadable { scopes }) => assert_eq!(scopes, 2),
        other => panic!("expected AllScopesUnreadable, got {:?}", other.is_ok()),
    }
}

#[tokio::test]
async fn list_no_scopes_is_empty_snapshot() {
    let store = ScopedStore::new(Vec::new());
    assert!(store.list().await.unwrap().is_empty());
}

// ── delete: priority walk ─────────────────────────────────────────

#[tokio::test]
async fn delete_stops_at_first_scope_holding_the_name() {
    let user = Arc::new(MockScope::with_entries("user", ["X"]));
    let machine = Arc::new(MockScope::with_entries("machine", ["X"]));
    let store = store_of(vec![user.clone(), machine.clone()]);

    assert!(store.delete(&name("X")).await.unwrap());
    assert!(!user.contains("X"));
    // Lower-priority copy untouched, and never asked.
    assert!(machine.contains("X"));
    assert!(machine.delete_calls().is_empty());
}

#[tokio::test]
async fn delete_walks_past_scopes_missing_the_name() {
    let user = Arc::new(MockScope::new("user"));
    let machine = Arc::new(MockScope::with_entries("machine", ["X"]));
    let store = store_of(vec![user.clone(), machine.clone()]);

    assert!(store.delete(&name("X")).await.unwrap());
    assert_eq!(user.delete_calls(), vec![name("X")]);
    assert!(!machine.contains("X"));
}

#[tokio::test]
async fn delete_absent_everywhere_returns_false() {
    let user = Arc::new(MockScope::new("user"));
    let machine = Arc::new(MockScope::new("machine"));
    let store = store_of(vec![user, machine]);

    assert!(!store.delete(&name("Ghost")).await.unwrap());
}

#[tokio::test]
async fn delete_io_failure_surfaces_as_error() {
    let user = Arc::new(MockScope::with_entries("user", ["X"]));
    user.set_fail_deletes(true);
    let store = store_of(vec![user.clone()]);

    match store.delete(&name("X")).await {
        Err(StoreError::DeleteFailed { name, .. }) => assert_eq!(name, "X"),
        other => panic!("expected DeleteFailed, got {:?}", other),
    }
    // Entry survives the failed delete.
    assert!(user.contains("X"));
}

// ── upsert: primary scope only ────────────────────────────────────

#[tokio::test]
async fn upsert_writes_to_primary_scope() {
    let user = Arc::new(MockScope::new("user"));
    let machine = Arc::new(MockScope::new("machine"));
    let store = store_of(vec![user.clone(), machine.clone()]);

    store.upsert(&name("Agent"), "agent --daemon").await.unwrap();
    assert_eq!(user.value_of("Agent").as_deref(), Some("agent --daemon"));
    assert!(!machine.contains("Agent"));
}

#[tokio::test]
async fn upsert_without_scopes_is_an_error() {
    let store = ScopedStore::new(Vec::new());
    assert!(store.upsert(&name("Agent"), "cmd").await.is_err());
}
