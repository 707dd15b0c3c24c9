use super::*;
use crate::test_helpers::MemoryStore;

#[test]
fn theme_default_is_system() {
    assert_eq!(Theme::default(), Theme::System);
}

#[test]
fn parse_accepts_stored_names_only() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("system"), Some(Theme::System));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn switch_goes_dark_unless_already_dark() {
    assert_eq!(Theme::System.switched(), Theme::Dark);
    assert_eq!(Theme::Light.switched(), Theme::Dark);
    assert_eq!(Theme::Dark.switched(), Theme::Light);
}

#[test]
fn flip_follows_what_is_on_screen() {
    assert_eq!(Theme::System.flipped(true), Theme::Light);
    assert_eq!(Theme::System.flipped(false), Theme::Dark);
    assert_eq!(Theme::Light.flipped(true), Theme::Dark);
}

#[test]
fn document_class_resolves_system_preference() {
    assert_eq!(document_class(Theme::Dark, false), Some("dark"));
    assert_eq!(document_class(Theme::Light, true), Some("light"));
    assert_eq!(document_class(Theme::System, true), Some("dark"));
    assert_eq!(document_class(Theme::System, false), None);
}

// =============================================================
// Stored preference
// =============================================================

#[test]
fn stored_theme_wins_over_legacy_flag() {
    assert_eq!(preference_from(Some("light"), Some("true")), Theme::Light);
}

#[test]
fn legacy_flag_is_used_when_theme_is_absent() {
    assert_eq!(preference_from(None, Some("true")), Theme::Dark);
    assert_eq!(preference_from(None, Some("false")), Theme::Light);
    assert_eq!(preference_from(Some("bogus"), None), Theme::System);
    assert_eq!(preference_from(None, None), Theme::System);
}

#[test]
fn persisted_theme_reads_back() {
    let store = MemoryStore::named("local");
    persist_to(&store, Theme::Dark);
    assert_eq!(store.raw("theme").as_deref(), Some("dark"));
    assert_eq!(read_preference_from(&store), Theme::Dark);
}

#[test]
fn legacy_key_read_from_store() {
    let store = MemoryStore::named("local");
    store.set("darkMode", "true").unwrap();
    assert_eq!(read_preference_from(&store), Theme::Dark);
}

#[test]
fn failing_store_reads_system() {
    let store = MemoryStore::failing("local");
    persist_to(&store, Theme::Light);
    assert_eq!(read_preference_from(&store), Theme::System);
}
