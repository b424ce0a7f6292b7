// tests/round_robin_tests.rs

use tennis_engine::domain::matches::{BracketSlot, MatchStatus};
use tennis_engine::domain::score::{BestOf, MatchScore};
use tennis_engine::domain::tournament::TournamentFormat;
use tennis_engine::domain::EntrantId;
use tennis_engine::engine::events::ProgressionEventKind;
use tennis_engine::engine::{build_initial_round, propagate_initial_byes, record_result, BracketState};

const T_ID: u64 = 9;

fn round_robin_state(n: u64) -> BracketState {
    let entrants: Vec<EntrantId> = (1..=n).collect();
    let matches = build_initial_round(T_ID, &entrants, TournamentFormat::RoundRobin).unwrap();
    BracketState::from_initial_round(
        T_ID,
        TournamentFormat::RoundRobin,
        BestOf::Three,
        n as u32,
        matches,
    )
    .unwrap()
}

fn win_a() -> MatchScore {
    MatchScore::from_pairs(&[(6, 3), (6, 4)])
}

fn slot(idx: u32) -> BracketSlot {
    BracketSlot::new(1, idx)
}

//
// TEST 1 — запись результата не двигает никакую сетку
//
#[test]
fn record_result_never_advances() {
    let mut state = round_robin_state(4);

    let outcome = record_result(&mut state, slot(0), win_a()).unwrap();

    assert!(outcome.advanced.is_none());
    assert!(!outcome.tournament_complete);
    assert_eq!(state.match_count(), 6);
    assert_eq!(state.matches_in_round(2).count(), 0);
}

//
// TEST 2 — турнир завершён только когда сыграны все пары
//
#[test]
fn completes_on_last_pairwise_match() {
    let mut state = round_robin_state(4);
    let total = state.match_count() as u32;
    assert_eq!(total, 6);

    for idx in 0..total - 1 {
        let outcome = record_result(&mut state, slot(idx), win_a()).unwrap();
        assert!(
            !outcome.tournament_complete,
            "tournament must not complete after match {}",
            idx
        );
    }

    let outcome = record_result(&mut state, slot(total - 1), win_a()).unwrap();
    assert!(outcome.tournament_complete);

    // Чемпиона в круговом формате движок не объявляет.
    assert_eq!(state.champion(), None);
    assert!(matches!(
        outcome.events.events.last().map(|e| &e.kind),
        Some(ProgressionEventKind::TournamentCompleted { champion: None, .. })
    ));
}

//
// TEST 3 — частичный счёт оставляет матч в IN_PROGRESS
//
#[test]
fn partial_score_in_round_robin() {
    let mut state = round_robin_state(3);

    let partial = MatchScore::from_pairs(&[(6, 4)]);
    let outcome = record_result(&mut state, slot(0), partial).unwrap();

    assert_eq!(outcome.updated.status, MatchStatus::InProgress);
    assert!(!outcome.tournament_complete);

    // Матч можно доиграть.
    let outcome = record_result(&mut state, slot(0), win_a()).unwrap();
    assert_eq!(outcome.updated.status, MatchStatus::Completed);
}

//
// TEST 4 — byes в круговом формате не продвигаются (их просто нет)
//
#[test]
fn propagate_byes_is_a_noop() {
    let mut state = round_robin_state(5);

    let events = propagate_initial_byes(&mut state).unwrap();
    assert!(events.is_empty());
    assert_eq!(state.match_count(), 10);
}

//
// TEST 5 — геометрия кругового формата
//
#[test]
fn round_robin_geometry() {
    let state = round_robin_state(5);

    assert_eq!(state.rounds_total(), 1);
    assert_eq!(state.slots_in_round(1), 10);
    assert_eq!(state.slots_in_round(2), 0);
    assert!(!state.is_terminal_round(1));
    assert!(state.final_match().is_none());
}
