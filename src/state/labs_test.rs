use super::*;
use crate::net::api::LabService;
use crate::net::fake_service::{FakeLabService, lab};
use futures::executor::block_on;

// =============================================================
// Helpers
// =============================================================

fn three_labs() -> Vec<Lab> {
    vec![lab("LAB01", "Física", 30), lab("LAB02", "Química", 24), lab("LAB03", "Biologia", 18)]
}

fn loaded(labs: Vec<Lab>) -> LabsState {
    let mut state = LabsState::default();
    let seq = state.begin_load();
    assert!(state.finish_load(seq, Ok(labs)));
    state
}

fn load_from(service: &FakeLabService, state: &mut LabsState) -> bool {
    let seq = state.begin_load();
    let result = block_on(service.list_labs());
    state.finish_load(seq, result)
}

fn selected_count(state: &LabsState) -> usize {
    state.rows().iter().filter(|row| row.selected).count()
}

// =============================================================
// Loading
// =============================================================

#[test]
fn default_state_is_idle_and_empty() {
    let state = LabsState::default();
    assert!(state.labs.is_empty());
    assert!(state.selected.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.load_seq, 0);
}

#[test]
fn begin_load_sets_loading_and_clears_error() {
    let mut state = LabsState { error: Some("old".to_owned()), ..LabsState::default() };
    let seq = state.begin_load();
    assert_eq!(seq, 1);
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn successful_load_renders_one_row_per_lab_in_server_order() {
    let service = FakeLabService::with_lists(vec![Ok(three_labs())]);
    let mut state = LabsState::default();
    assert!(load_from(&service, &mut state));

    let rows = state.rows();
    assert_eq!(rows.len(), 3);
    let nicknames: Vec<&str> = rows.iter().map(|row| row.lab.nickname.as_str()).collect();
    assert_eq!(nicknames, vec!["LAB01", "LAB02", "LAB03"]);
    assert_eq!(rows[1].lab.name, "Química");
    assert_eq!(capacity_label(&rows[1].lab), "Cap: 24");
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn failed_load_clears_labs_and_sets_fixed_message() {
    let mut state = loaded(three_labs());
    let seq = state.begin_load();
    assert!(state.finish_load(seq, Err(ApiError::Status { status: 500, message: Some("db down".to_owned()) })));

    assert!(state.labs.is_empty());
    assert_eq!(state.error.as_deref(), Some(LOAD_ERROR_MESSAGE));
    assert!(!state.loading);
    assert!(!state.show_empty_notice());
}

#[test]
fn failure_message_is_independent_of_cause() {
    for err in [ApiError::Transport("offline".to_owned()), ApiError::Decode("eof".to_owned()), ApiError::NotFound] {
        let mut state = LabsState::default();
        let seq = state.begin_load();
        state.finish_load(seq, Err(err));
        assert_eq!(state.error.as_deref(), Some(LOAD_ERROR_MESSAGE));
    }
}

#[test]
fn retry_after_failure_replaces_error_with_list() {
    let service = FakeLabService::with_lists(vec![Err(ApiError::Transport("offline".to_owned())), Ok(three_labs())]);
    let mut state = LabsState::default();

    load_from(&service, &mut state);
    assert!(state.labs.is_empty());
    assert!(state.error.is_some());

    load_from(&service, &mut state);
    assert_eq!(state.labs.len(), 3);
    assert!(state.error.is_none());
    assert_eq!(service.list_calls.get(), 2);
}

#[test]
fn stale_load_response_is_dropped() {
    let mut state = LabsState::default();
    let first = state.begin_load();
    let second = state.begin_load();

    assert!(state.finish_load(second, Ok(vec![lab("NEW", "Newer", 5)])));
    assert!(!state.finish_load(first, Err(ApiError::Transport("late".to_owned()))));

    assert_eq!(state.labs.len(), 1);
    assert_eq!(state.labs[0].nickname, "NEW");
    assert!(state.error.is_none());
}

#[test]
fn superseded_load_keeps_loading_until_newest_finishes() {
    let mut state = LabsState::default();
    let first = state.begin_load();
    let second = state.begin_load();
    assert!(!state.finish_load(first, Ok(three_labs())));
    assert!(state.loading);
    assert!(state.finish_load(second, Ok(three_labs())));
    assert!(!state.loading);
}

#[test]
fn empty_notice_only_for_successful_empty_load() {
    let mut state = LabsState::default();
    let seq = state.begin_load();
    assert!(!state.show_empty_notice());
    state.finish_load(seq, Ok(Vec::new()));
    assert!(state.show_empty_notice());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_marks_exactly_one_row() {
    let mut state = loaded(three_labs());
    assert_eq!(selected_count(&state), 0);

    assert!(state.select("LAB02"));
    assert_eq!(selected_count(&state), 1);
    assert!(state.rows()[1].selected);
}

#[test]
fn selecting_another_row_moves_indicator() {
    let mut state = loaded(three_labs());
    state.select("LAB01");
    state.select("LAB03");

    assert_eq!(selected_count(&state), 1);
    assert!(!state.rows()[0].selected);
    assert!(state.rows()[2].selected);
}

#[test]
fn reselecting_same_row_keeps_selection() {
    let mut state = loaded(three_labs());
    state.select("LAB01");
    state.select("LAB01");
    assert_eq!(state.selected.as_deref(), Some("LAB01"));
    assert_eq!(selected_count(&state), 1);
}

#[test]
fn selecting_unknown_nickname_is_ignored() {
    let mut state = loaded(three_labs());
    state.select("LAB01");
    assert!(!state.select("NOPE"));
    assert_eq!(state.selected.as_deref(), Some("LAB01"));
}

#[test]
fn selection_survives_reload_when_lab_still_listed() {
    let mut state = loaded(three_labs());
    state.select("LAB02");
    let seq = state.begin_load();
    state.finish_load(seq, Ok(three_labs()));
    assert_eq!(state.selected.as_deref(), Some("LAB02"));
}

#[test]
fn selection_dropped_when_lab_disappears() {
    let mut state = loaded(three_labs());
    state.select("LAB02");
    let seq = state.begin_load();
    state.finish_load(seq, Ok(vec![lab("LAB01", "Física", 30)]));
    assert!(state.selected.is_none());
}

#[test]
fn selection_dropped_on_failed_reload() {
    let mut state = loaded(three_labs());
    state.select("LAB02");
    let seq = state.begin_load();
    state.finish_load(seq, Err(ApiError::Transport("offline".to_owned())));
    assert!(state.selected.is_none());
    assert!(state.proceed_target().is_none());
}

// =============================================================
// Proceed
// =============================================================

#[test]
fn proceed_target_absent_without_selection() {
    let state = loaded(three_labs());
    assert_eq!(state.proceed_target(), None);
}

#[test]
fn proceed_target_is_selected_nickname() {
    let mut state = loaded(three_labs());
    state.select("LAB03");
    assert_eq!(state.proceed_target(), Some("LAB03"));
    assert_eq!(state.selected_lab().map(|l| l.name.as_str()), Some("Biologia"));
}

// =============================================================
// Append + labels
// =============================================================

#[test]
fn append_lab_adds_row_at_end() {
    let mut state = loaded(three_labs());
    state.append_lab(lab("LX1", "Lab X", 20));
    assert_eq!(state.rows().len(), 4);
    assert_eq!(state.labs.last().map(|l| l.nickname.as_str()), Some("LX1"));
    assert!(state.select("LX1"));
}

#[test]
fn bookings_label_only_when_reported() {
    let mut subject = lab("LAB01", "Física", 30);
    assert_eq!(bookings_label(&subject), None);
    subject.active_bookings = Some(0);
    assert_eq!(bookings_label(&subject).as_deref(), Some("0 reservas ativas"));
}
