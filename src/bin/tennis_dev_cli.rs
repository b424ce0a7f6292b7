// src/bin/tennis_dev_cli.rs

use tennis_engine::api::commands::{
    Command, CreateTournamentCommand, MatchCommand, RecordResultCommand, RegisterEntrantCommand,
    StartTournamentCommand, TournamentCommand,
};
use tennis_engine::api::dto::{CommandResponse, SetScoreDto, TournamentConfigApi};
use tennis_engine::api::queries::{Query, QueryResponse};
use tennis_engine::api::TournamentService;
use tennis_engine::infra::notifications::MemoryNotifier;
use tennis_engine::infra::persistence::InMemoryTournamentStorage;

fn set(a: i64, b: i64) -> SetScoreDto {
    SetScoreDto {
        player_a: Some(a),
        player_b: Some(b),
    }
}

fn main() {
    env_logger::init();

    println!("=== TENNIS DEV CLI ===\n");

    let mut service = TournamentService::new(
        InMemoryTournamentStorage::new(),
        Box::new(MemoryNotifier::new()),
    );

    // Турнир на 8 участников, олимпийская система, best-of-3.
    let create = Command::Tournament(TournamentCommand::CreateTournament(
        CreateTournamentCommand {
            owner: 999,
            config: TournamentConfigApi {
                name: "City Open".to_string(),
                description: Some("Dev run".to_string()),
                format: "SINGLE_ELIMINATION".to_string(),
                best_of: 3,
                max_entrants: 16,
                min_entrants_to_start: 2,
                shuffle_seeding: false,
            },
        },
    ));

    let tournament_id = match service.handle_command(create) {
        Ok(CommandResponse::TournamentCreated { tournament_id }) => tournament_id,
        other => {
            println!("Не удалось создать турнир: {:?}", other);
            return;
        }
    };
    println!("Создан турнир id={}", tournament_id);

    // Регистрируем 8 игроков.
    for entrant_id in 1..=8u64 {
        let cmd = Command::Tournament(TournamentCommand::RegisterEntrant(
            RegisterEntrantCommand {
                tournament_id,
                entrant_id,
                display_name: format!("Player {}", entrant_id),
            },
        ));
        if let Err(err) = service.handle_command(cmd) {
            println!("  Ошибка регистрации игрока {}: {:?}", entrant_id, err);
        }
    }
    println!("Зарегистрировано 8 игроков, стартуем\n");

    let start = Command::Tournament(TournamentCommand::StartTournament(
        StartTournamentCommand {
            tournament_id,
            shuffle_seed: None,
        },
    ));
    match service.handle_command(start) {
        Ok(CommandResponse::BracketGenerated(bracket)) => {
            println!(
                "Сетка построена: {} раундов, {} матчей первого раунда",
                bracket.rounds_total,
                bracket.matches.len()
            );
        }
        other => {
            println!("Не удалось стартовать: {:?}", other);
            return;
        }
    }

    // Доигрываем турнир: в каждом запланированном матче побеждает
    // игрок стороны A со счётом 6-3 6-4.
    loop {
        let bracket = match service.handle_query(Query::GetBracket { tournament_id }) {
            Ok(QueryResponse::Bracket(b)) => b,
            other => {
                println!("Не удалось получить сетку: {:?}", other);
                return;
            }
        };

        if bracket.complete {
            println!("\nТурнир завершён, чемпион: {:?}", bracket.champion);
            break;
        }

        let playable: Vec<(u32, u32)> = bracket
            .matches
            .iter()
            .filter(|m| m.status == "SCHEDULED" && m.player_a.is_some() && m.player_b.is_some())
            .map(|m| (m.round_number, m.slot_index))
            .collect();

        for (round_number, slot_index) in playable {
            let cmd = Command::Match(MatchCommand::RecordResult(RecordResultCommand {
                tournament_id,
                round_number,
                slot_index,
                sets: vec![set(6, 3), set(6, 4)],
            }));

            match service.handle_command(cmd) {
                Ok(CommandResponse::ResultRecorded {
                    updated,
                    advanced,
                    tournament_complete,
                }) => {
                    println!(
                        "R{}#{}: победил {:?} ({})",
                        round_number,
                        slot_index,
                        updated.winner,
                        if tournament_complete {
                            "ФИНАЛ"
                        } else {
                            "дальше по сетке"
                        }
                    );
                    if let Some(a) = advanced {
                        println!(
                            "    следующий раунд: R{}#{} [{:?} vs {:?}]",
                            a.round_number, a.slot_index, a.player_a_name, a.player_b_name
                        );
                    }
                }
                other => println!("R{}#{}: ошибка {:?}", round_number, slot_index, other),
            }
        }
    }

    println!("\n=== TENNIS DEV CLI DONE ===");
}
