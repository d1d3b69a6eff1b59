use startguard_types::EntryName;
use std::collections::HashSet;
use std::str::FromStr;

// ── Construction ──────────────────────────────────────────────────

#[test]
fn name_new_accepts_plain_strings() {
    let name = EntryName::new("OneDrive").unwrap();
    assert_eq!(name.as_str(), "OneDrive");
}

#[test]
fn name_new_accepts_spaces_and_dots() {
    assert!(EntryName::new("AutoStart Manager").is_ok());
    assert!(EntryName::new("updater.v2").is_ok());
}

#[test]
fn name_new_rejects_empty() {
    assert!(EntryName::new("").is_err());
}

#[test]
fn name_new_rejects_path_separators() {
    assert!(EntryName::new("evil/../name").is_err());
    assert!(EntryName::new("evil\\name").is_err());
}

// ── Display / FromStr ─────────────────────────────────────────────

#[test]
fn name_display_and_from_str_roundtrip() {
    let name = EntryName::new("Dropbox").unwrap();
    let s = name.to_string();
    let parsed = EntryName::from_str(&s).unwrap();
    assert_eq!(name, parsed);
}

#[test]
fn name_from_str_invalid() {
    assert!(EntryName::from_str("").is_err());
}

// ── Ordering / hashing ────────────────────────────────────────────

#[test]
fn name_ordering_is_lexicographic() {
    let a = EntryName::new("alpha").unwrap();
    let b = EntryName::new("beta").unwrap();
    assert!(a < b);
}

#[test]
fn name_hash_and_eq() {
    let name = EntryName::new("Steam").unwrap();
    let mut set = HashSet::new();
    set.insert(name.clone());
    set.insert(name);
    assert_eq!(set.len(), 1);
}

// ── Serialization ─────────────────────────────────────────────────

#[test]
fn name_serializes_as_bare_string() {
    let name = EntryName::new("Spotify").unwrap();
    let json = serde_json::to_string(&name).unwrap();
    assert_eq!(json, "\"Spotify\"");
}

#[test]
fn name_serialization_roundtrip() {
    let name = EntryName::new("Discord").unwrap();
    let json = serde_json::to_string(&name).unwrap();
    let parsed: EntryName = serde_json::from_str(&json).unwrap();
    assert_eq!(name, parsed);
}
