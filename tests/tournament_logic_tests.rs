// tests/tournament_logic_tests.rs

use tennis_engine::domain::score::BestOf;
use tennis_engine::domain::tournament::{
    Tournament, TournamentConfig, TournamentError, TournamentFormat, TournamentStatus,
};
use tennis_engine::domain::EntrantId;
use tennis_engine::infra::rng::DeterministicRng;
use tennis_engine::tournament::{RuntimeError, TournamentLobby, TournamentRuntime};

fn sample_config() -> TournamentConfig {
    TournamentConfig {
        name: "Test".into(),
        description: None,
        format: TournamentFormat::SingleElimination,
        best_of: BestOf::Three,
        max_entrants: 3,
        min_entrants_to_start: 2,
        shuffle_seeding: false,
    }
}

//
// TEST 1 — регистрация добавляет участников
//
#[test]
fn registration_adds_entrants() {
    let owner: EntrantId = 999;
    let cfg = sample_config();

    let mut t = Tournament::new(1, owner, cfg).unwrap();

    t.register_entrant(10).unwrap();
    t.register_entrant(20).unwrap();
    t.register_entrant(30).unwrap();

    assert_eq!(t.roster(), vec![10, 20, 30]);
    assert_eq!(t.active_entrant_count(), 3);
}

//
// TEST 2 — порядок регистрации = порядок посева
//
#[test]
fn roster_preserves_registration_order() {
    let mut t = Tournament::new(1, 555, sample_config()).unwrap();

    t.register_entrant(30).unwrap();
    t.register_entrant(10).unwrap();
    t.register_entrant(20).unwrap();

    assert_eq!(t.roster(), vec![30, 10, 20]);
}

//
// TEST 3 — max_entrants ограничивает
//
#[test]
fn registration_respects_max_entrants() {
    let mut t = Tournament::new(1, 1000, sample_config()).unwrap(); // max = 3

    t.register_entrant(1).unwrap();
    t.register_entrant(2).unwrap();
    t.register_entrant(3).unwrap();

    let err = t.register_entrant(4).unwrap_err();
    match err {
        TournamentError::TournamentFull { .. } => {}
        e => panic!("expected TournamentFull, got {:?}", e),
    }
}

//
// TEST 4 — повторная регистрация отклоняется
//
#[test]
fn duplicate_registration_rejected() {
    let mut t = Tournament::new(1, 1, sample_config()).unwrap();

    t.register_entrant(10).unwrap();
    let err = t.register_entrant(10).unwrap_err();
    match err {
        TournamentError::AlreadyRegistered { entrant_id, .. } => assert_eq!(entrant_id, 10),
        e => panic!("expected AlreadyRegistered, got {:?}", e),
    }
}

//
// TEST 5 — снятие участника убирает его из ростера,
// место освобождается
//
#[test]
fn withdraw_frees_roster_spot() {
    let mut t = Tournament::new(1, 1, sample_config()).unwrap();

    t.register_entrant(10).unwrap();
    t.register_entrant(20).unwrap();
    t.withdraw_entrant(10).unwrap();

    assert_eq!(t.roster(), vec![20]);

    // Снявшегося можно зарегистрировать заново.
    t.register_entrant(10).unwrap();
    assert_eq!(t.roster(), vec![20, 10]);

    let err = t.withdraw_entrant(777).unwrap_err();
    match err {
        TournamentError::NotRegistered { .. } => {}
        e => panic!("expected NotRegistered, got {:?}", e),
    }
}

//
// TEST 6 — турнир НЕ стартует, если мало участников
//
#[test]
fn tournament_not_ready_with_too_few_entrants() {
    let mut t = Tournament::new(1, 777, sample_config()).unwrap();

    t.register_entrant(1).unwrap(); // только один участник
    assert!(!t.can_start());

    let mut rng = DeterministicRng::from_seed(1);
    let err = TournamentRuntime::start_tournament(&mut t, &mut rng).unwrap_err();
    match err {
        RuntimeError::Tournament(TournamentError::InvalidStatusForStart { .. }) => {}
        e => panic!("expected InvalidStatusForStart, got {:?}", e),
    }
    assert_eq!(t.status, TournamentStatus::Registering);
}

//
// TEST 7 — старт при достаточном количестве участников,
// регистрация после старта закрыта
//
#[test]
fn tournament_starts_when_enough_entrants() {
    let mut t = Tournament::new(1, 888, sample_config()).unwrap();

    t.register_entrant(1).unwrap();
    t.register_entrant(2).unwrap();
    assert!(t.can_start());

    let mut rng = DeterministicRng::from_seed(7);
    let generated = TournamentRuntime::start_tournament(&mut t, &mut rng).expect("must start");

    assert_eq!(t.status, TournamentStatus::Running);
    assert_eq!(generated.state.match_count(), 1);

    let err = t.register_entrant(3).unwrap_err();
    match err {
        TournamentError::RegistrationClosed { .. } => {}
        e => panic!("expected RegistrationClosed, got {:?}", e),
    }
}

//
// TEST 8 — запись результата через рантайм завершает турнир
// и проставляет чемпиона
//
#[test]
fn runtime_record_result_finishes_tournament() {
    use tennis_engine::domain::matches::BracketSlot;
    use tennis_engine::domain::score::MatchScore;

    let mut t = Tournament::new(1, 888, sample_config()).unwrap();
    t.register_entrant(1).unwrap();
    t.register_entrant(2).unwrap();

    let mut rng = DeterministicRng::from_seed(7);
    let generated = TournamentRuntime::start_tournament(&mut t, &mut rng).unwrap();
    let mut state = generated.state;

    let outcome = TournamentRuntime::record_result(
        &mut t,
        &mut state,
        BracketSlot::new(1, 0),
        MatchScore::from_pairs(&[(6, 0), (6, 0)]),
    )
    .unwrap();

    assert!(outcome.tournament_complete);
    assert!(t.is_finished());
    assert_eq!(t.champion, Some(1));
}

//
// TEST 9 — валидация конфига
//
#[test]
fn config_validation() {
    let mut cfg = sample_config();
    cfg.name = "  ".into();
    match Tournament::new(1, 1, cfg).unwrap_err() {
        TournamentError::InvalidConfig(_) => {}
        e => panic!("expected InvalidConfig, got {:?}", e),
    }

    let mut cfg = sample_config();
    cfg.min_entrants_to_start = 1;
    assert!(matches!(
        Tournament::new(1, 1, cfg).unwrap_err(),
        TournamentError::InvalidConfig(_)
    ));

    let mut cfg = sample_config();
    cfg.min_entrants_to_start = 5; // > max_entrants = 3
    assert!(matches!(
        Tournament::new(1, 1, cfg).unwrap_err(),
        TournamentError::InvalidConfig(_)
    ));
}

//
// TEST 10 — лобби: создание, поиск, регистрация
//
#[test]
fn lobby_creates_and_registers() {
    let mut lobby = TournamentLobby::new();

    let t1 = lobby.create_tournament(999, sample_config()).unwrap();
    let t2 = lobby.create_tournament(999, sample_config()).unwrap();
    assert_ne!(t1, t2);

    lobby.register_entrant(t1, 10).unwrap();
    lobby.register_entrant(t1, 20).unwrap();
    lobby.withdraw_entrant(t1, 10).unwrap();

    assert_eq!(lobby.get(t1).unwrap().roster(), vec![20]);
    assert_eq!(lobby.all().count(), 2);

    let err = lobby.register_entrant(777, 1).unwrap_err();
    match err {
        TournamentError::TournamentNotFound { tournament_id } => assert_eq!(tournament_id, 777),
        e => panic!("expected TournamentNotFound, got {:?}", e),
    }
}

//
// TEST 11 — детерминированная жеребьёвка: одинаковый seed
// даёт одинаковую сетку
//
#[test]
fn shuffle_seeding_is_reproducible() {
    let make = |seed: u64| {
        let mut cfg = sample_config();
        cfg.shuffle_seeding = true;
        cfg.max_entrants = 8;

        let mut t = Tournament::new(1, 1, cfg).unwrap();
        for e in 1..=8 {
            t.register_entrant(e).unwrap();
        }

        let mut rng = DeterministicRng::from_seed(seed);
        let generated = TournamentRuntime::start_tournament(&mut t, &mut rng).unwrap();
        generated
            .state
            .all_matches()
            .iter()
            .map(|m| (m.player_a, m.player_b))
            .collect::<Vec<_>>()
    };

    assert_eq!(make(42), make(42));
}
