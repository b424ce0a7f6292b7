// src/tournament/runtime.rs

use log::debug;
use thiserror::Error;

use crate::domain::matches::{BracketSlot, Match, MatchStatus};
use crate::domain::score::MatchScore;
use crate::domain::tournament::{Tournament, TournamentError, TournamentStatus};
use crate::domain::EntrantId;
use crate::engine::errors::EngineError;
use crate::engine::events::ProgressionLog;
use crate::engine::progression::{self, RecordOutcome};
use crate::engine::state::BracketState;
use crate::engine::{bracket, RandomSource};

/// Ошибки рантайм-слоя (над движком одной сетки).
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Ошибка доменной логики турнира (статусы, регистрации).
    #[error(transparent)]
    Tournament(#[from] TournamentError),

    /// Проброшенная ошибка движка сетки.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Результат жеребьёвки: готовое состояние сетки + события
/// продвижения bye-победителей.
#[derive(Debug)]
pub struct GeneratedBracket {
    pub state: BracketState,
    pub events: ProgressionLog,
}

/// Рантайм-слой для турнира. Умеет:
/// - взять подтверждённый состав турнира;
/// - при необходимости перемешать его (жеребьёвка);
/// - построить первый раунд и состояние сетки;
/// - продвинуть bye-победителей;
/// - записывать результаты с синхронизацией статуса турнира;
/// - отменять матчи (внешняя административная операция).
pub struct TournamentRuntime;

impl TournamentRuntime {
    /// Запустить турнир: жеребьёвка + генерация сетки.
    ///
    /// Порядок `roster()` – это порядок посева; при config.shuffle_seeding
    /// он перемешивается переданным RNG ДО вызова билдера (сам билдер
    /// считает список уже готовым к спариванию).
    pub fn start_tournament<R: RandomSource>(
        tournament: &mut Tournament,
        rng: &mut R,
    ) -> Result<GeneratedBracket, RuntimeError> {
        if tournament.status != TournamentStatus::Registering {
            return Err(TournamentError::InvalidStatusForStart {
                status: tournament.status,
            }
            .into());
        }

        let mut roster = tournament.roster();
        if roster.len() < tournament.config.min_entrants_to_start as usize {
            return Err(TournamentError::InvalidStatusForStart {
                status: tournament.status,
            }
            .into());
        }

        if tournament.config.shuffle_seeding {
            rng.shuffle(&mut roster);
        }

        let matches = bracket::build_initial_round(
            tournament.id,
            &roster,
            tournament.config.format,
        )?;

        let mut state = BracketState::from_initial_round(
            tournament.id,
            tournament.config.format,
            tournament.config.best_of,
            roster.len() as u32,
            matches,
        )?;

        let events = progression::propagate_initial_byes(&mut state)?;

        tournament.start()?;
        debug!(
            "tournament {} started: {} entrants, {} first-round matches",
            tournament.id,
            roster.len(),
            state.matches_in_round(1).count()
        );

        Ok(GeneratedBracket { state, events })
    }

    /// Записать результат матча и синхронизировать статус турнира:
    /// когда сетка доиграна, турнир переводится в Finished с чемпионом.
    pub fn record_result(
        tournament: &mut Tournament,
        state: &mut BracketState,
        slot: BracketSlot,
        score: MatchScore,
    ) -> Result<RecordOutcome, RuntimeError> {
        let outcome = progression::record_result(state, slot, score)?;

        if outcome.tournament_complete && !tournament.is_finished() {
            tournament.finish(state.champion())?;
        }

        Ok(outcome)
    }

    /// Авторазрешить односторонний матч (bye) с той же синхронизацией статуса.
    pub fn advance_on_bye(
        tournament: &mut Tournament,
        state: &mut BracketState,
        slot: BracketSlot,
    ) -> Result<RecordOutcome, RuntimeError> {
        let outcome = progression::advance_on_bye(state, slot)?;

        if outcome.tournament_complete && !tournament.is_finished() {
            tournament.finish(state.champion())?;
        }

        Ok(outcome)
    }

    /// Отменить матч – внешняя административная операция,
    /// движок сам статус Canceled никогда не ставит.
    ///
    /// Завершённый матч отменить нельзя.
    pub fn cancel_match(
        state: &mut BracketState,
        slot: BracketSlot,
    ) -> Result<Match, RuntimeError> {
        let current = state
            .match_at(slot)
            .ok_or(EngineError::MatchNotFound { slot })?;

        if current.is_completed() {
            return Err(EngineError::AlreadyCompleted {
                match_id: current.id,
            }
            .into());
        }

        let Some(m) = state.match_at_mut(slot) else {
            return Err(EngineError::Internal("match disappeared during cancel").into());
        };
        m.status = MatchStatus::Canceled;
        Ok(m.clone())
    }

    /// Чемпион, если турнир доигран.
    pub fn champion(state: &BracketState) -> Option<EntrantId> {
        if state.is_complete() {
            state.champion()
        } else {
            None
        }
    }
}
