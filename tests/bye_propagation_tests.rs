// tests/bye_propagation_tests.rs

use tennis_engine::domain::matches::{BracketSlot, Match, MatchStatus, PlayerSide};
use tennis_engine::domain::score::{BestOf, MatchScore};
use tennis_engine::domain::tournament::TournamentFormat;
use tennis_engine::domain::EntrantId;
use tennis_engine::engine::errors::EngineError;
use tennis_engine::engine::{
    advance_on_bye, build_initial_round, propagate_initial_byes, record_result, BracketState,
};

const T_ID: u64 = 5;

fn fresh_state(n: u64) -> BracketState {
    let entrants: Vec<EntrantId> = (1..=n).collect();
    let matches =
        build_initial_round(T_ID, &entrants, TournamentFormat::SingleElimination).unwrap();
    BracketState::from_initial_round(
        T_ID,
        TournamentFormat::SingleElimination,
        BestOf::Three,
        n as u32,
        matches,
    )
    .unwrap()
}

fn win_a() -> MatchScore {
    MatchScore::from_pairs(&[(6, 3), (6, 4)])
}

fn slot(round: u32, idx: u32) -> BracketSlot {
    BracketSlot::new(round, idx)
}

//
// TEST 1 — 5 участников: 3 bye-победителя без счёта
// автоматически попадают во второй раунд
//
#[test]
fn five_entrants_byes_advance_into_round_two() {
    let mut state = fresh_state(5);

    // До продвижения второго раунда ещё нет.
    assert_eq!(state.matches_in_round(2).count(), 0);
    assert_eq!(state.bye_slots(), vec![0, 1, 2]);

    propagate_initial_byes(&mut state).unwrap();

    // Bye-матчи завершены без счёта.
    for idx in 0..3u32 {
        let m = state.match_at(slot(1, idx)).unwrap();
        assert_eq!(m.status, MatchStatus::Completed);
        assert!(m.score.is_none());
        assert_eq!(m.winner, Some((idx + 1) as u64));
    }

    // Победители byes стоят во втором раунде: слот 0 = (1 vs 2), слот 1 = (3 vs TBD).
    let m0 = state.match_at(slot(2, 0)).unwrap();
    assert_eq!(m0.player_a, Some(1));
    assert_eq!(m0.player_b, Some(2));
    assert_eq!(m0.status, MatchStatus::Scheduled);

    let m1 = state.match_at(slot(2, 1)).unwrap();
    assert_eq!(m1.player_a, Some(3));
    assert_eq!(m1.player_b, None);
}

//
// TEST 2 — повторное продвижение byes безопасно (идемпотентность)
//
#[test]
fn propagate_initial_byes_is_idempotent() {
    let mut state = fresh_state(5);

    let first = propagate_initial_byes(&mut state).unwrap();
    assert!(!first.is_empty());
    let snapshot = state.all_matches().to_vec();

    let second = propagate_initial_byes(&mut state).unwrap();
    assert!(second.is_empty());
    assert_eq!(state.all_matches(), snapshot.as_slice());
}

//
// TEST 3 — 5 участников: турнир доигрывается до чемпиона
//
#[test]
fn five_entrant_tournament_runs_to_completion() {
    let mut state = fresh_state(5);
    propagate_initial_byes(&mut state).unwrap();

    // Единственный реальный матч первого раунда: (4,5).
    let outcome = record_result(&mut state, slot(1, 3), win_a()).unwrap();
    let advanced = outcome.advanced.unwrap();
    assert_eq!(advanced.slot, slot(2, 1));
    assert_eq!(advanced.player_a, Some(3));
    assert_eq!(advanced.player_b, Some(4));

    // Второй раунд.
    record_result(&mut state, slot(2, 0), win_a()).unwrap(); // 1 побеждает 2
    record_result(&mut state, slot(2, 1), win_a()).unwrap(); // 3 побеждает 4

    // Финал: (1,3).
    let final_match = state.match_at(slot(3, 0)).unwrap();
    assert_eq!(final_match.player_a, Some(1));
    assert_eq!(final_match.player_b, Some(3));

    let outcome = record_result(&mut state, slot(3, 0), win_a()).unwrap();
    assert!(outcome.tournament_complete);
    assert_eq!(state.champion(), Some(1));
}

//
// TEST 4 — 3 участника: bye уходит прямо в финал
//
#[test]
fn three_entrant_bye_feeds_the_final() {
    let mut state = fresh_state(3);
    propagate_initial_byes(&mut state).unwrap();

    let final_match = state.match_at(slot(2, 0)).unwrap();
    assert_eq!(final_match.player_a, Some(1));
    assert_eq!(final_match.player_b, None);

    let outcome = record_result(&mut state, slot(1, 1), win_a()).unwrap();
    assert!(!outcome.tournament_complete);

    let final_match = state.match_at(slot(2, 0)).unwrap();
    assert_eq!(final_match.player_a, Some(1));
    assert_eq!(final_match.player_b, Some(2));

    let outcome = record_result(&mut state, slot(2, 0), win_a()).unwrap();
    assert!(outcome.tournament_complete);
    assert_eq!(state.champion(), Some(1));
}

//
// TEST 5 — advance_on_bye: односторонний матч завершается без счёта
//
#[test]
fn advance_on_bye_resolves_one_sided_match() {
    // Руками собираем сетку, где (1,1) – односторонний запланированный матч.
    let matches = vec![
        Match::new_scheduled(1, T_ID, slot(1, 0), 1, 2),
        Match::new_partial(2, T_ID, slot(1, 1), PlayerSide::A, 3),
    ];
    let mut state = BracketState::from_initial_round(
        T_ID,
        TournamentFormat::SingleElimination,
        BestOf::Three,
        4,
        matches,
    )
    .unwrap();

    let outcome = advance_on_bye(&mut state, slot(1, 1)).unwrap();

    assert_eq!(outcome.updated.status, MatchStatus::Completed);
    assert!(outcome.updated.bye);
    assert_eq!(outcome.updated.winner, Some(3));
    assert!(outcome.updated.score.is_none());

    // Победитель ушёл во второй раунд (сторона B: нечётный фидер).
    let advanced = outcome.advanced.unwrap();
    assert_eq!(advanced.slot, slot(2, 0));
    assert_eq!(advanced.player_b, Some(3));
}

//
// TEST 6 — advance_on_bye по матчу с двумя игроками → ошибка,
// по завершённому → AlreadyCompleted
//
#[test]
fn advance_on_bye_guards() {
    let mut state = fresh_state(5);
    propagate_initial_byes(&mut state).unwrap();

    // (1,3) – обычный матч с двумя игроками.
    let err = advance_on_bye(&mut state, slot(1, 3)).unwrap_err();
    match err {
        EngineError::Internal(_) => {}
        e => panic!("expected Internal, got {:?}", e),
    }

    // (1,0) – уже завершённый bye.
    let err = advance_on_bye(&mut state, slot(1, 0)).unwrap_err();
    match err {
        EngineError::AlreadyCompleted { .. } => {}
        e => panic!("expected AlreadyCompleted, got {:?}", e),
    }
}

//
// TEST 7 — каскад: в усечённой сетке у крайнего слота нет парного фидера,
// его победитель авторазрешается дальше как bye
//
#[test]
fn missing_sibling_feeder_cascades_as_bye() {
    // Усечённая сетка встраивающего приложения: три матча первого раунда
    // (нечётная ширина), у слота 2 парного фидера не будет никогда.
    let matches = vec![
        Match::new_scheduled(1, T_ID, slot(1, 0), 1, 2),
        Match::new_scheduled(2, T_ID, slot(1, 1), 3, 4),
        Match::new_scheduled(3, T_ID, slot(1, 2), 5, 6),
    ];
    let mut state = BracketState::from_initial_round(
        T_ID,
        TournamentFormat::SingleElimination,
        BestOf::Three,
        6,
        matches,
    )
    .unwrap();

    assert_eq!(state.rounds_total(), 3);
    assert_eq!(state.slots_in_round(2), 2);

    // Победитель слота 2 попадает в (2,1), где второго фидера нет:
    // матч авторазрешается как bye и каскадом уходит в финал.
    let outcome = record_result(&mut state, slot(1, 2), win_a()).unwrap();

    let round_two = state.match_at(slot(2, 1)).unwrap();
    assert_eq!(round_two.status, MatchStatus::Completed);
    assert!(round_two.bye);
    assert_eq!(round_two.winner, Some(5));

    let final_match = state.match_at(slot(3, 0)).unwrap();
    assert_eq!(final_match.player_b, Some(5));
    assert_eq!(final_match.player_a, None);

    assert!(!outcome.tournament_complete);

    // Доигрываем левую половину: (1,2) и (3,4), потом полуфинал и финал.
    record_result(&mut state, slot(1, 0), win_a()).unwrap();
    record_result(&mut state, slot(1, 1), win_a()).unwrap();
    record_result(&mut state, slot(2, 0), win_a()).unwrap();

    let final_match = state.match_at(slot(3, 0)).unwrap();
    assert_eq!(final_match.player_a, Some(1));
    assert_eq!(final_match.player_b, Some(5));

    let outcome = record_result(&mut state, slot(3, 0), win_a()).unwrap();
    assert!(outcome.tournament_complete);
    assert_eq!(state.champion(), Some(1));
}
