use serde::{Deserialize, Serialize};

use crate::api::dto::{
    format_to_api, set_scores_to_api, BracketViewDto, MatchViewDto, TournamentViewDto,
};
use crate::domain::matches::Match;
use crate::domain::score::BestOf;
use crate::domain::tournament::{Tournament, TournamentStatus};
use crate::domain::{EntrantId, TournamentId};
use crate::engine::state::BracketState;
use crate::scoring::resolve;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Получить минимальную инфу о турнире.
    GetTournament { tournament_id: TournamentId },

    /// Список турниров (для лобби).
    ListTournaments,

    /// Получить всю сетку турнира.
    GetBracket { tournament_id: TournamentId },

    /// Получить один матч по позиции в сетке.
    GetMatch {
        tournament_id: TournamentId,
        round_number: u32,
        slot_index: u32,
    },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Tournament(TournamentViewDto),
    Tournaments(Vec<TournamentViewDto>),
    Bracket(BracketViewDto),
    Match(MatchViewDto),
}

/// Сформировать DTO матча.
/// `resolve_name` достаёт отображаемое имя участника (из хранилища).
pub fn build_match_view(
    m: &Match,
    best_of: BestOf,
    resolve_name: impl Fn(EntrantId) -> String,
) -> MatchViewDto {
    let (sets_a, sets_b) = match &m.score {
        Some(score) => {
            let r = resolve(score, best_of);
            (r.sets_a, r.sets_b)
        }
        None => (0, 0),
    };

    MatchViewDto {
        match_id: m.id,
        tournament_id: m.tournament_id,
        round_number: m.slot.round,
        slot_index: m.slot.slot,
        player_a: m.player_a,
        player_a_name: m.player_a.map(&resolve_name),
        player_b: m.player_b,
        player_b_name: m.player_b.map(&resolve_name),
        status: m.status.as_str().to_string(),
        sets: m.score.as_ref().map(set_scores_to_api).unwrap_or_default(),
        sets_a,
        sets_b,
        winner: m.winner,
        bye: m.bye,
    }
}

/// Сформировать DTO всей сетки.
pub fn build_bracket_view(
    state: &BracketState,
    resolve_name: impl Fn(EntrantId) -> String,
) -> BracketViewDto {
    let matches = state
        .all_matches()
        .iter()
        .map(|m| build_match_view(m, state.best_of, &resolve_name))
        .collect();

    BracketViewDto {
        tournament_id: state.tournament_id,
        format: format_to_api(state.format).to_string(),
        rounds_total: state.rounds_total(),
        complete: state.is_complete(),
        champion: state.champion(),
        matches,
    }
}

/// Сформировать DTO турнира.
pub fn build_tournament_view(tournament: &Tournament) -> TournamentViewDto {
    let status = match tournament.status {
        TournamentStatus::Registering => "Registering",
        TournamentStatus::Running => "Running",
        TournamentStatus::Finished => "Finished",
    };

    TournamentViewDto {
        tournament_id: tournament.id,
        name: tournament.config.name.clone(),
        status: status.to_string(),
        format: format_to_api(tournament.config.format).to_string(),
        entrants_registered: tournament.active_entrant_count() as u32,
        champion: tournament.champion,
    }
}
