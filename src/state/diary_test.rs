use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

fn sample_entry(id: i64, title: &str) -> DiaryEntry {
    DiaryEntry {
        id,
        title: title.to_owned(),
        content: Some(format!("{title} body")),
        created_at: "2024-05-01T09:30:12".to_owned(),
        owner_id: 1,
    }
}

// =============================================================
// fetch_entries_with — credential policy
// =============================================================

#[test]
fn fetch_without_token_makes_no_call_and_sets_error() {
    let diary = RwSignal::new(DiaryState::default());
    let calls = Rc::new(RefCell::new(0_u32));
    let calls_seen = calls.clone();

    block_on(fetch_entries_with(diary, None, move |_token| {
        *calls_seen.borrow_mut() += 1;
        async { Ok(Vec::new()) }
    }));

    assert_eq!(*calls.borrow(), 0);
    let state = diary.get_untracked();
    assert!(state.entries.is_empty());
    assert_eq!(state.error.as_deref(), Some(UNAUTHENTICATED_MESSAGE));
}

#[test]
fn fetch_with_empty_token_is_treated_as_unauthenticated() {
    let diary = RwSignal::new(DiaryState::default());
    let calls = Rc::new(RefCell::new(0_u32));
    let calls_seen = calls.clone();

    block_on(fetch_entries_with(diary, Some(String::new()), move |_token| {
        *calls_seen.borrow_mut() += 1;
        async { Ok(Vec::new()) }
    }));

    assert_eq!(*calls.borrow(), 0);
    assert_eq!(diary.get_untracked().error.as_deref(), Some(UNAUTHENTICATED_MESSAGE));
}

// =============================================================
// fetch_entries_with — success and failure
// =============================================================

#[test]
fn fetch_success_replaces_list_exactly_and_clears_error() {
    let diary = RwSignal::new(DiaryState {
        entries: vec![sample_entry(1, "old")],
        error: Some("stale".to_owned()),
    });
    let payload = vec![sample_entry(2, "fresh"), sample_entry(3, "newer")];
    let returned = payload.clone();

    block_on(fetch_entries_with(diary, Some("abc123".to_owned()), move |token| {
        assert_eq!(token, "abc123");
        async move { Ok(returned) }
    }));

    let state = diary.get_untracked();
    assert_eq!(state.entries, payload);
    assert_eq!(state.error, None);
}

#[test]
fn fetch_failure_keeps_prior_list_and_sets_load_error() {
    let prior = vec![sample_entry(1, "kept")];
    let diary = RwSignal::new(DiaryState {
        entries: prior.clone(),
        error: None,
    });

    block_on(fetch_entries_with(diary, Some("abc123".to_owned()), |_token| async {
        Err("boom".to_owned())
    }));

    let state = diary.get_untracked();
    assert_eq!(state.entries, prior);
    assert_eq!(state.error.as_deref(), Some(LOAD_FAILED_MESSAGE));
}

// =============================================================
// create_entry_with
// =============================================================

#[test]
fn create_without_token_makes_no_calls_and_sets_error() {
    let diary = RwSignal::new(DiaryState::default());
    let log = Rc::new(RefCell::new(Vec::<&str>::new()));
    let create_log = log.clone();
    let fetch_log = log.clone();

    block_on(create_entry_with(
        diary,
        None,
        move |_token, _title, _content| {
            create_log.borrow_mut().push("create");
            async { Ok(()) }
        },
        move |_token| {
            fetch_log.borrow_mut().push("fetch");
            async { Ok(Vec::new()) }
        },
        "t".to_owned(),
        "c".to_owned(),
    ));

    assert!(log.borrow().is_empty());
    assert_eq!(diary.get_untracked().error.as_deref(), Some(UNAUTHENTICATED_MESSAGE));
}

#[test]
fn create_success_runs_exactly_one_fetch_after_the_create() {
    let diary = RwSignal::new(DiaryState::default());
    let log = Rc::new(RefCell::new(Vec::<&str>::new()));
    let create_log = log.clone();
    let fetch_log = log.clone();
    let payload = vec![sample_entry(7, "saved")];
    let returned = payload.clone();

    block_on(create_entry_with(
        diary,
        Some("abc123".to_owned()),
        move |token, title, content| {
            assert_eq!(token, "abc123");
            assert_eq!(title, "saved");
            assert_eq!(content, "body");
            create_log.borrow_mut().push("create");
            async { Ok(()) }
        },
        move |token| {
            assert_eq!(token, "abc123");
            fetch_log.borrow_mut().push("fetch");
            async move { Ok(returned) }
        },
        "saved".to_owned(),
        "body".to_owned(),
    ));

    assert_eq!(*log.borrow(), vec!["create", "fetch"]);
    let state = diary.get_untracked();
    assert_eq!(state.entries, payload);
    assert_eq!(state.error, None);
}

#[test]
fn create_failure_skips_the_fetch_and_sets_save_error() {
    let prior = vec![sample_entry(1, "kept")];
    let diary = RwSignal::new(DiaryState {
        entries: prior.clone(),
        error: None,
    });
    let fetches = Rc::new(RefCell::new(0_u32));
    let fetches_seen = fetches.clone();

    block_on(create_entry_with(
        diary,
        Some("abc123".to_owned()),
        |_token, _title, _content| async { Err("422".to_owned()) },
        move |_token| {
            *fetches_seen.borrow_mut() += 1;
            async { Ok(Vec::new()) }
        },
        "t".to_owned(),
        "c".to_owned(),
    ));

    assert_eq!(*fetches.borrow(), 0);
    let state = diary.get_untracked();
    assert_eq!(state.entries, prior);
    assert_eq!(state.error.as_deref(), Some(SAVE_FAILED_MESSAGE));
}

#[test]
fn create_clears_prior_error_before_attempting() {
    let diary = RwSignal::new(DiaryState {
        entries: Vec::new(),
        error: Some("stale".to_owned()),
    });

    block_on(create_entry_with(
        diary,
        Some("abc123".to_owned()),
        |_token, _title, _content| async { Ok(()) },
        |_token| async { Ok(Vec::new()) },
        "t".to_owned(),
        "c".to_owned(),
    ));

    assert_eq!(diary.get_untracked().error, None);
}

// =============================================================
// DiaryEntry wire format
// =============================================================

#[test]
fn entry_deserializes_backend_shape() {
    let entry: DiaryEntry = serde_json::from_value(serde_json::json!({
        "id": 42,
        "title": "First day",
        "content": "It rained.",
        "created_at": "2024-05-01T09:30:12",
        "owner_id": 7
    }))
    .unwrap();

    assert_eq!(entry.id, 42);
    assert_eq!(entry.title, "First day");
    assert_eq!(entry.content.as_deref(), Some("It rained."));
    assert_eq!(entry.owner_id, 7);
}

#[test]
fn entry_tolerates_null_and_missing_content() {
    let with_null: DiaryEntry = serde_json::from_value(serde_json::json!({
        "id": 1,
        "title": "t",
        "content": null,
        "created_at": "2024-05-01T09:30:12",
        "owner_id": 1
    }))
    .unwrap();
    assert_eq!(with_null.content, None);

    let missing: DiaryEntry = serde_json::from_value(serde_json::json!({
        "id": 2,
        "title": "t",
        "created_at": "2024-05-01T09:30:12",
        "owner_id": 1
    }))
    .unwrap();
    assert_eq!(missing.content, None);
}
