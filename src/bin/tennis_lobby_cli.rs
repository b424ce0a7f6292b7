// src/bin/tennis_lobby_cli.rs

use tennis_engine::domain::score::BestOf;
use tennis_engine::domain::tournament::{TournamentConfig, TournamentError, TournamentFormat};
use tennis_engine::domain::EntrantId;
use tennis_engine::infra::rng::DeterministicRng;
use tennis_engine::tournament::{TournamentLobby, TournamentRuntime};

fn main() {
    env_logger::init();

    println!("=== TENNIS LOBBY CLI ===\n");

    let mut lobby = TournamentLobby::new();

    // Турнир 1: олимпийская система на 5 участников (3 bye).
    let cfg1 = TournamentConfig {
        name: "Weekend Knockout".to_string(),
        description: None,
        format: TournamentFormat::SingleElimination,
        best_of: BestOf::Three,
        max_entrants: 8,
        min_entrants_to_start: 2,
        shuffle_seeding: false,
    };

    // Турнир 2: круговой на 4 участника.
    let cfg2 = TournamentConfig {
        name: "Club Round Robin".to_string(),
        description: Some("Everyone plays everyone".to_string()),
        format: TournamentFormat::RoundRobin,
        best_of: BestOf::Three,
        max_entrants: 4,
        min_entrants_to_start: 3,
        shuffle_seeding: true,
    };

    let t1_id = match lobby.create_tournament(999, cfg1) {
        Ok(id) => id,
        Err(err) => {
            println!("Не удалось создать турнир 1: {}", err);
            return;
        }
    };
    let t2_id = match lobby.create_tournament(999, cfg2) {
        Ok(id) => id,
        Err(err) => {
            println!("Не удалось создать турнир 2: {}", err);
            return;
        }
    };

    println!("Созданы турниры {} и {}\n", t1_id, t2_id);

    // Хелпер для регистрации диапазона участников.
    let mut register_range = |t_id: u64, range: std::ops::RangeInclusive<EntrantId>| {
        for entrant in range {
            if let Err(err) = lobby.register_entrant(t_id, entrant) {
                match err {
                    TournamentError::TournamentFull { .. } => {
                        println!("  Турнир {} полон, прекращаем регистрацию.", t_id);
                        break;
                    }
                    other => {
                        println!("  Ошибка регистрации {} в {}: {}", entrant, t_id, other);
                    }
                }
            }
        }
    };

    println!("Регистрируем 5 участников (1..=5) в турнир id={}", t1_id);
    register_range(t1_id, 1..=5);

    println!("Регистрируем 6 участников (10..=15) в турнир id={} (cap=4)", t2_id);
    register_range(t2_id, 10..=15);

    // Жеребьёвка обоих турниров.
    let mut rng = DeterministicRng::from_seed(42);

    for t_id in [t1_id, t2_id] {
        let Some(tournament) = lobby.get_mut(t_id) else {
            continue;
        };

        match TournamentRuntime::start_tournament(tournament, &mut rng) {
            Ok(generated) => {
                println!(
                    "\nТурнир {} ({}): {} матчей, bye-слоты {:?}",
                    t_id,
                    tournament.config.name,
                    generated.state.match_count(),
                    generated.state.bye_slots()
                );

                for m in generated.state.all_matches() {
                    println!(
                        "    {} | {:?} vs {:?} | status={:?} | bye={}",
                        m.slot, m.player_a, m.player_b, m.status, m.bye
                    );
                }
            }
            Err(err) => println!("Не удалось стартовать турнир {}: {}", t_id, err),
        }
    }

    println!("\nТекущее состояние лобби:\n");
    for (_tid, t) in lobby.all() {
        println!(
            "- id={} | name=\"{}\" | status={:?} | entrants={} / max={}",
            t.id,
            t.config.name,
            t.status,
            t.active_entrant_count(),
            t.config.max_entrants
        );
    }

    println!("\n=== TENNIS LOBBY CLI DONE ===");
}
