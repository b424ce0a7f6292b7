// tests/resolver_tests.rs

use tennis_engine::domain::matches::PlayerSide;
use tennis_engine::domain::score::{BestOf, MatchScore, SetScore};
use tennis_engine::scoring::resolve;

//
// TEST 1 — победа в двух сетах (best-of-3)
//
#[test]
fn straight_sets_win_for_player_a() {
    let score = MatchScore::from_pairs(&[(6, 3), (6, 4)]);
    let r = resolve(&score, BestOf::Three);

    assert_eq!(r.winner, Some(PlayerSide::A));
    assert_eq!(r.sets_a, 2);
    assert_eq!(r.sets_b, 0);
}

//
// TEST 2 — победа в трёх сетах
//
#[test]
fn three_set_win_for_player_a() {
    let score = MatchScore::from_pairs(&[(6, 3), (3, 6), (7, 6)]);
    let r = resolve(&score, BestOf::Three);

    assert_eq!(r.winner, Some(PlayerSide::A));
    assert_eq!(r.sets_a, 2);
    assert_eq!(r.sets_b, 1);
}

//
// TEST 3 — пустой сет → победителя нет, 0-0
//
#[test]
fn all_null_sets_resolve_to_no_winner() {
    let score = MatchScore::new(vec![SetScore::empty()]);
    let r = resolve(&score, BestOf::Three);

    assert_eq!(r.winner, None);
    assert_eq!(r.sets_a, 0);
    assert_eq!(r.sets_b, 0);
}

//
// TEST 4 — пустой список сетов
//
#[test]
fn empty_score_resolves_to_no_winner() {
    let score = MatchScore::new(Vec::new());
    let r = resolve(&score, BestOf::Three);

    assert_eq!(r.winner, None);
    assert!(!r.is_decided());
}

//
// TEST 5 — один сыгранный сет ещё не решает матч
//
#[test]
fn single_set_is_partial() {
    let score = MatchScore::from_pairs(&[(6, 0)]);
    let r = resolve(&score, BestOf::Three);

    assert_eq!(r.winner, None);
    assert_eq!(r.sets_a, 1);
    assert_eq!(r.sets_b, 0);
}

//
// TEST 6 — равный счёт в сете не идёт в зачёт никому
//
#[test]
fn tied_set_counts_for_neither_side() {
    let score = MatchScore::from_pairs(&[(6, 6), (6, 3), (6, 4)]);
    let r = resolve(&score, BestOf::Three);

    assert_eq!(r.winner, Some(PlayerSide::A));
    assert_eq!(r.sets_a, 2);
    assert_eq!(r.sets_b, 0);
}

//
// TEST 7 — наполовину заполненный сет не учитывается
//
#[test]
fn half_filled_set_is_ignored() {
    let score = MatchScore::new(vec![
        SetScore {
            player_a: Some(6),
            player_b: None,
        },
        SetScore::new(6, 2),
    ]);
    let r = resolve(&score, BestOf::Three);

    assert_eq!(r.winner, None);
    assert_eq!(r.sets_a, 1);
    assert_eq!(r.sets_b, 0);
}

//
// TEST 8 — best-of-5: двух сетов мало, трёх достаточно
//
#[test]
fn best_of_five_needs_three_sets() {
    let two_sets = MatchScore::from_pairs(&[(6, 3), (6, 4)]);
    assert_eq!(resolve(&two_sets, BestOf::Five).winner, None);

    let three_sets = MatchScore::from_pairs(&[(6, 3), (6, 4), (7, 5)]);
    assert_eq!(resolve(&three_sets, BestOf::Five).winner, Some(PlayerSide::A));
}

//
// TEST 9 — победа стороны B
//
#[test]
fn player_b_wins() {
    let score = MatchScore::from_pairs(&[(3, 6), (6, 4), (4, 6)]);
    let r = resolve(&score, BestOf::Three);

    assert_eq!(r.winner, Some(PlayerSide::B));
    assert_eq!(r.sets_a, 1);
    assert_eq!(r.sets_b, 2);
}

//
// TEST 10 — детерминированность: один и тот же вход → один и тот же выход
//
#[test]
fn resolve_is_deterministic() {
    let score = MatchScore::from_pairs(&[(6, 3), (3, 6), (7, 6)]);

    let first = resolve(&score, BestOf::Three);
    let second = resolve(&score, BestOf::Three);

    assert_eq!(first, second);
}
