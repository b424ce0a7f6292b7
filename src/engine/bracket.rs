// src/engine/bracket.rs

use std::collections::HashSet;

use crate::domain::matches::{BracketSlot, Match};
use crate::domain::tournament::TournamentFormat;
use crate::domain::{EntrantId, MatchId, RoundNumber, TournamentId};
use crate::engine::errors::EngineError;

/// Сколько раундов нужно олимпийской сетке на `entrant_count` участников:
/// ceil(log2(N)). Для N=2 → 1, N=3..4 → 2, N=5..8 → 3.
pub fn bracket_rounds(entrant_count: u32) -> RoundNumber {
    let n = entrant_count.max(2);
    u32::BITS - (n - 1).leading_zeros()
}

/// Сколько byes нужно, чтобы добить сетку до полной: 2^rounds - N.
pub fn byes_for(entrant_count: u32) -> u32 {
    (1u32 << bracket_rounds(entrant_count)) - entrant_count.max(2)
}

/// Построить первый раунд сетки.
///
/// `entrants` уже в том порядке, в котором их надо спаривать:
/// перемешивание/посев – забота вызывающей стороны (см. tournament::runtime).
///
/// Олимпийская система: первые `byes` участников получают bye-матчи
/// (созданы сразу завершёнными, единственный игрок – победитель),
/// остальные спариваются подряд. Всего слотов первого раунда ровно
/// `2^(rounds-1)` – раунд заполнен полностью.
///
/// Круговой формат: каждая неупорядоченная пара участников – ровно один матч,
/// все в раунде 1, слоты уникальны в порядке генерации.
///
/// Идентификаторы матчей – последовательные с 1 внутри сетки;
/// ленивые матчи следующих раундов продолжают эту нумерацию
/// (см. engine::state::BracketState).
///
/// Побочных эффектов нет: билдер только возвращает матчи,
/// сохранять их – задача вызывающей стороны.
pub fn build_initial_round(
    tournament_id: TournamentId,
    entrants: &[EntrantId],
    format: TournamentFormat,
) -> Result<Vec<Match>, EngineError> {
    if entrants.len() < 2 {
        return Err(EngineError::InsufficientEntrants {
            found: entrants.len(),
        });
    }

    let mut seen = HashSet::with_capacity(entrants.len());
    for &e in entrants {
        if !seen.insert(e) {
            return Err(EngineError::DuplicateEntrant { entrant_id: e });
        }
    }

    match format {
        TournamentFormat::SingleElimination => {
            Ok(build_single_elimination(tournament_id, entrants))
        }
        TournamentFormat::RoundRobin => Ok(build_round_robin(tournament_id, entrants)),
    }
}

fn build_single_elimination(tournament_id: TournamentId, entrants: &[EntrantId]) -> Vec<Match> {
    let n = entrants.len() as u32;
    let byes = byes_for(n) as usize;

    let mut matches = Vec::new();
    let mut next_id: MatchId = 1;
    let mut slot: u32 = 0;

    // Первые `byes` участников проходят дальше без игры.
    for &entrant in &entrants[..byes] {
        matches.push(Match::new_bye(
            next_id,
            tournament_id,
            BracketSlot::new(1, slot),
            entrant,
        ));
        next_id += 1;
        slot += 1;
    }

    // Остальные спариваются подряд: (byes, byes+1), (byes+2, byes+3), ...
    // Количество оставшихся всегда чётное: N - (2^r - N) = 2N - 2^r.
    let mut rest = entrants[byes..].chunks_exact(2);
    for pair in &mut rest {
        matches.push(Match::new_scheduled(
            next_id,
            tournament_id,
            BracketSlot::new(1, slot),
            pair[0],
            pair[1],
        ));
        next_id += 1;
        slot += 1;
    }

    matches
}

fn build_round_robin(tournament_id: TournamentId, entrants: &[EntrantId]) -> Vec<Match> {
    let mut matches = Vec::new();
    let mut next_id: MatchId = 1;
    let mut slot: u32 = 0;

    for (i, &a) in entrants.iter().enumerate() {
        for &b in &entrants[i + 1..] {
            matches.push(Match::new_scheduled(
                next_id,
                tournament_id,
                BracketSlot::new(1, slot),
                a,
                b,
            ));
            next_id += 1;
            slot += 1;
        }
    }

    matches
}
