use super::*;

fn user(id: i64, username: &str, password: &str) -> User {
    User { id, username: username.into(), password: password.into(), secret_note: format!("note {id}") }
}

// =============================================================================
// seeded
// =============================================================================

#[test]
fn seeded_has_alice_and_bob() {
    let store = UserStore::seeded();
    assert_eq!(store.len(), 2);
    assert_eq!(store.find_by_id(1).unwrap().username, "alice");
    assert_eq!(store.find_by_id(2).unwrap().username, "bob");
}

#[test]
fn seeded_notes_carry_owner_name() {
    let store = UserStore::seeded();
    assert!(store.find_by_id(1).unwrap().secret_note.contains("Alice ka secret"));
    assert!(store.find_by_id(2).unwrap().secret_note.contains("Bob ka secret"));
}

// =============================================================================
// find_by_id
// =============================================================================

#[test]
fn find_by_id_unknown_is_not_found() {
    let store = UserStore::seeded();
    assert_eq!(store.find_by_id(99), Err(UserError::NotFound("99".into())));
    assert_eq!(store.find_by_id(-1), Err(UserError::NotFound("-1".into())));
    assert_eq!(store.find_by_id(0), Err(UserError::NotFound("0".into())));
}

// =============================================================================
// find_by_raw_id / parse_user_id
// =============================================================================

#[test]
fn find_by_raw_id_accepts_numeric_spellings() {
    let store = UserStore::seeded();
    for raw in ["1", "1.0", "1e0", "+1", " 1 "] {
        assert_eq!(store.find_by_raw_id(raw).unwrap().username, "alice", "raw id {raw:?}");
    }
}

#[test]
fn find_by_raw_id_non_numbers_are_not_found() {
    let store = UserStore::seeded();
    for raw in ["abc", "1.5", "NaN", "inf", "", "99999999999999999999", "1e300"] {
        assert_eq!(store.find_by_raw_id(raw), Err(UserError::NotFound(raw.into())), "raw id {raw:?}");
    }
}

#[test]
fn parse_user_id_range_edges() {
    assert_eq!(parse_user_id("9223372036854775807"), Some(i64::MAX));
    assert_eq!(parse_user_id("-9223372036854775808"), Some(i64::MIN));
    assert_eq!(parse_user_id("9223372036854775808"), None);
    assert_eq!(parse_user_id("-2.0"), Some(-2));
}

#[test]
fn find_by_id_is_stable_across_calls() {
    let store = UserStore::seeded();
    let first = store.find_by_id(2).unwrap().secret_note.clone();
    for _ in 0..5 {
        assert_eq!(store.find_by_id(2).unwrap().secret_note, first);
    }
}

// =============================================================================
// authenticate
// =============================================================================

#[test]
fn authenticate_every_seeded_user() {
    let store = UserStore::seeded();
    for (name, pass, id) in [("alice", "password123", 1), ("bob", "qwerty", 2)] {
        assert_eq!(store.authenticate(name, pass).unwrap().id, id);
    }
}

#[test]
fn authenticate_wrong_password_rejected() {
    let store = UserStore::seeded();
    assert_eq!(store.authenticate("alice", "qwerty"), Err(UserError::InvalidCredentials));
}

#[test]
fn authenticate_unknown_user_rejected() {
    let store = UserStore::seeded();
    assert_eq!(store.authenticate("mallory", "password123"), Err(UserError::InvalidCredentials));
}

#[test]
fn authenticate_is_case_sensitive() {
    let store = UserStore::seeded();
    assert!(store.authenticate("Alice", "password123").is_err());
    assert!(store.authenticate("alice", "PASSWORD123").is_err());
}

#[test]
fn authenticate_empty_credentials_rejected() {
    let store = UserStore::seeded();
    assert!(store.authenticate("", "").is_err());
}

// =============================================================================
// new
// =============================================================================

#[test]
fn new_duplicate_id_keeps_last() {
    let store = UserStore::new([user(7, "first", "a"), user(7, "second", "b")]);
    assert_eq!(store.len(), 1);
    assert_eq!(store.find_by_id(7).unwrap().username, "second");
}

#[test]
fn default_store_is_empty() {
    let store = UserStore::default();
    assert_eq!(store.len(), 0);
    assert!(store.authenticate("alice", "password123").is_err());
}

#[test]
fn user_error_display() {
    assert_eq!(UserError::NotFound("42".into()).to_string(), "user not found: 42");
    assert_eq!(UserError::InvalidCredentials.to_string(), "invalid username or password");
}
