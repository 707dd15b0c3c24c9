use super::*;

#[test]
fn default_session_is_logged_out_on_public_tab() {
    let state = SessionState::default();
    assert!(!state.is_logged_in());
    assert_eq!(state.tab, ListTab::Public);
}

#[test]
fn log_in_trims_the_username() {
    let mut state = SessionState::default();
    assert_eq!(state.log_in("  alice \t").as_deref(), Some("alice"));
    assert_eq!(state.username.as_deref(), Some("alice"));
}

#[test]
fn blank_username_does_not_log_in() {
    let mut state = SessionState::default();
    assert_eq!(state.log_in("   "), None);
    assert!(!state.is_logged_in());
}

#[test]
fn remembered_hint_follows_the_draft() {
    let mut state = SessionState::default();
    assert!(!state.has_draft());
    state.draft = "al".to_owned();
    assert!(state.has_draft());
    state.draft.clear();
    assert!(!state.has_draft());
}

#[test]
fn log_out_resets_tab_and_draft() {
    let mut state = SessionState::default();
    state.log_in("alice");
    state.switch_tab(ListTab::Explore);
    state.log_out();
    assert_eq!(state, SessionState::default());
}

#[test]
fn switch_tab_reports_change() {
    let mut state = SessionState::default();
    assert!(!state.switch_tab(ListTab::Public));
    assert!(state.switch_tab(ListTab::Private));
    assert_eq!(state.tab, ListTab::Private);
}

#[test]
fn tab_visibility_and_labels() {
    assert_eq!(ListTab::Public.visibility(), Some(true));
    assert_eq!(ListTab::Private.visibility(), Some(false));
    assert_eq!(ListTab::Explore.visibility(), None);
    let labels: Vec<_> = ListTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Public Lists", "Private Lists", "Explore Lists"]);
}
