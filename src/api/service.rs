// src/api/service.rs

use crate::api::commands::{Command, MatchCommand, TournamentCommand};
use crate::api::dto::{
    set_scores_from_api, tournament_config_from_api, CommandResponse, MatchViewDto,
};
use crate::api::errors::ApiError;
use crate::api::queries::{
    build_bracket_view, build_match_view, build_tournament_view, Query, QueryResponse,
};
use crate::domain::matches::BracketSlot;
use crate::domain::tournament::Tournament;
use crate::domain::{EntrantId, TournamentId};
use crate::engine::events::ProgressionLog;
use crate::infra::ids::IdGenerator;
use crate::infra::notifications::{NullNotifier, ResultNotifier};
use crate::infra::persistence::{InMemoryTournamentStorage, TournamentStorage};
use crate::infra::rng::{DeterministicRng, SystemRng};
use crate::tournament::TournamentRuntime;

/// Сервис команд/запросов поверх хранилища.
///
/// Это офчейн-диспетчер: загрузил турнир и сетку, выполнил доменную
/// операцию, сохранил, раздал события нотификатору. Сбой нотификатора
/// не влияет на результат команды (fire-and-forget).
pub struct TournamentService<S: TournamentStorage> {
    storage: S,
    ids: IdGenerator,
    notifier: Box<dyn ResultNotifier>,
}

impl TournamentService<InMemoryTournamentStorage> {
    /// Сервис целиком в памяти – для тестов и dev CLI.
    pub fn in_memory() -> Self {
        Self::new(InMemoryTournamentStorage::new(), Box::new(NullNotifier))
    }
}

impl<S: TournamentStorage> TournamentService<S> {
    pub fn new(storage: S, notifier: Box<dyn ResultNotifier>) -> Self {
        Self {
            storage,
            ids: IdGenerator::new(),
            notifier,
        }
    }

    /// Доступ к хранилищу (read-only) – для встраивающего кода.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Выполнить команду.
    pub fn handle_command(&mut self, command: Command) -> Result<CommandResponse, ApiError> {
        match command {
            Command::Tournament(cmd) => self.handle_tournament_command(cmd),
            Command::Match(cmd) => self.handle_match_command(cmd),
        }
    }

    /// Выполнить запрос (только чтение).
    pub fn handle_query(&self, query: Query) -> Result<QueryResponse, ApiError> {
        match query {
            Query::GetTournament { tournament_id } => {
                let t = self.load_tournament(tournament_id)?;
                Ok(QueryResponse::Tournament(build_tournament_view(&t)))
            }

            Query::ListTournaments => {
                let mut views = Vec::new();
                for id in self.storage.tournament_ids() {
                    if let Some(t) = self.storage.load_tournament(id) {
                        views.push(build_tournament_view(&t));
                    }
                }
                Ok(QueryResponse::Tournaments(views))
            }

            Query::GetBracket { tournament_id } => {
                let state = self.load_bracket(tournament_id)?;
                Ok(QueryResponse::Bracket(build_bracket_view(&state, |id| {
                    self.resolve_name(id)
                })))
            }

            Query::GetMatch {
                tournament_id,
                round_number,
                slot_index,
            } => {
                let state = self.load_bracket(tournament_id)?;
                let slot = BracketSlot::new(round_number, slot_index);
                let m = state.match_at(slot).ok_or(ApiError::MatchNotFound {
                    round_number,
                    slot_index,
                })?;
                Ok(QueryResponse::Match(build_match_view(
                    m,
                    state.best_of,
                    |id| self.resolve_name(id),
                )))
            }
        }
    }

    fn handle_tournament_command(
        &mut self,
        command: TournamentCommand,
    ) -> Result<CommandResponse, ApiError> {
        match command {
            TournamentCommand::CreateTournament(cmd) => {
                let config = tournament_config_from_api(cmd.config)?;
                let id = self.ids.next_tournament_id();
                let tournament = Tournament::new(id, cmd.owner, config)?;
                self.storage.save_tournament(&tournament);
                Ok(CommandResponse::TournamentCreated { tournament_id: id })
            }

            TournamentCommand::RegisterEntrant(cmd) => {
                let mut t = self.load_tournament(cmd.tournament_id)?;
                t.register_entrant(cmd.entrant_id)?;
                self.storage.save_tournament(&t);
                self.storage
                    .save_entrant_name(cmd.entrant_id, &cmd.display_name);
                Ok(CommandResponse::TournamentState(build_tournament_view(&t)))
            }

            TournamentCommand::WithdrawEntrant(cmd) => {
                let mut t = self.load_tournament(cmd.tournament_id)?;
                t.withdraw_entrant(cmd.entrant_id)?;
                self.storage.save_tournament(&t);
                Ok(CommandResponse::TournamentState(build_tournament_view(&t)))
            }

            TournamentCommand::StartTournament(cmd) => {
                let mut t = self.load_tournament(cmd.tournament_id)?;

                let generated = match cmd.shuffle_seed {
                    Some(seed) => {
                        let mut rng = DeterministicRng::from_seed(seed);
                        TournamentRuntime::start_tournament(&mut t, &mut rng)?
                    }
                    None => {
                        let mut rng = SystemRng;
                        TournamentRuntime::start_tournament(&mut t, &mut rng)?
                    }
                };

                self.storage.save_tournament(&t);
                self.storage.save_bracket(&generated.state);
                self.dispatch_events(t.id, &generated.events);

                Ok(CommandResponse::BracketGenerated(build_bracket_view(
                    &generated.state,
                    |id| self.resolve_name(id),
                )))
            }
        }
    }

    fn handle_match_command(&mut self, command: MatchCommand) -> Result<CommandResponse, ApiError> {
        match command {
            MatchCommand::RecordResult(cmd) => {
                let mut t = self.load_tournament(cmd.tournament_id)?;
                let mut state = self.load_bracket(cmd.tournament_id)?;
                let slot = BracketSlot::new(cmd.round_number, cmd.slot_index);
                let score = set_scores_from_api(&cmd.sets)?;

                let outcome = TournamentRuntime::record_result(&mut t, &mut state, slot, score)?;

                self.storage.save_bracket(&state);
                self.storage.save_tournament(&t);
                self.dispatch_events(t.id, &outcome.events);

                let best_of = state.best_of;
                let updated = build_match_view(&outcome.updated, best_of, |id| self.resolve_name(id));
                let advanced: Option<MatchViewDto> = outcome
                    .advanced
                    .as_ref()
                    .map(|m| build_match_view(m, best_of, |id| self.resolve_name(id)));

                Ok(CommandResponse::ResultRecorded {
                    updated,
                    advanced,
                    tournament_complete: outcome.tournament_complete,
                })
            }

            MatchCommand::CancelMatch(cmd) => {
                let mut state = self.load_bracket(cmd.tournament_id)?;
                let slot = BracketSlot::new(cmd.round_number, cmd.slot_index);

                let canceled = TournamentRuntime::cancel_match(&mut state, slot)?;
                self.storage.save_bracket(&state);

                let view = build_match_view(&canceled, state.best_of, |id| self.resolve_name(id));
                Ok(CommandResponse::MatchCanceled(view))
            }
        }
    }

    fn dispatch_events(&mut self, tournament_id: TournamentId, log: &ProgressionLog) {
        for event in &log.events {
            self.notifier.notify(tournament_id, event);
        }
    }

    fn load_tournament(&self, id: TournamentId) -> Result<Tournament, ApiError> {
        self.storage
            .load_tournament(id)
            .ok_or(ApiError::TournamentNotFound(id))
    }

    fn load_bracket(&self, id: TournamentId) -> Result<crate::engine::BracketState, ApiError> {
        // Турнир должен существовать, иначе отдаём TournamentNotFound.
        self.load_tournament(id)?;
        self.storage.load_bracket(id).ok_or_else(|| {
            ApiError::InvalidCommand(format!("tournament {} has no bracket yet", id))
        })
    }

    fn resolve_name(&self, entrant_id: EntrantId) -> String {
        self.storage
            .entrant_name(entrant_id)
            .unwrap_or_else(|| format!("Entrant {}", entrant_id))
    }
}
