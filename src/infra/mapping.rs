use crate::api::dto::{BracketViewDto, MatchViewDto};
use crate::api::queries::{build_bracket_view, build_match_view};
use crate::domain::matches::Match;
use crate::domain::EntrantId;
use crate::engine::state::BracketState;

/// Утилита: получить отображаемое имя участника.
///
/// В сервисном слое имена лежат в `TournamentStorage::entrant_name`,
/// но здесь оставляем сигнатуру, которую можно реализовать по-разному.
pub trait EntrantNameResolver {
    fn resolve_name(&self, entrant_id: EntrantId) -> String;
}

/// Простая реализация: отображаемое имя = "Entrant {id}".
pub struct DefaultNameResolver;

impl EntrantNameResolver for DefaultNameResolver {
    fn resolve_name(&self, entrant_id: EntrantId) -> String {
        format!("Entrant {}", entrant_id)
    }
}

/// Маппинг Match -> MatchViewDto через резолвер имён.
pub fn map_match_to_dto(
    m: &Match,
    state: &BracketState,
    resolver: &impl EntrantNameResolver,
) -> MatchViewDto {
    build_match_view(m, state.best_of, |id| resolver.resolve_name(id))
}

/// Маппинг BracketState -> BracketViewDto через резолвер имён.
pub fn map_bracket_to_dto(
    state: &BracketState,
    resolver: &impl EntrantNameResolver,
) -> BracketViewDto {
    build_bracket_view(state, |id| resolver.resolve_name(id))
}
