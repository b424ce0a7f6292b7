use std::collections::HashMap;

use crate::domain::tournament::Tournament;
use crate::domain::{EntrantId, TournamentId};
use crate::engine::state::BracketState;

/// Абстракция хранилища турниров и сеток.
///
/// Встраивающее приложение подставляет сюда свою БД; загрузка/сохранение
/// выполняются внутри границы сериализации записей (см. контракт движка:
/// записи результатов, целящиеся в один слот следующего раунда,
/// сериализует вызывающая сторона).
pub trait TournamentStorage {
    /// Загрузить турнир.
    fn load_tournament(&self, id: TournamentId) -> Option<Tournament>;

    /// Сохранить турнир.
    fn save_tournament(&mut self, tournament: &Tournament);

    /// Загрузить состояние сетки турнира (если жеребьёвка уже была).
    fn load_bracket(&self, tournament_id: TournamentId) -> Option<BracketState>;

    /// Сохранить состояние сетки.
    fn save_bracket(&mut self, state: &BracketState);

    /// Все известные турниры (для лобби/списков).
    fn tournament_ids(&self) -> Vec<TournamentId>;

    /// Отображаемое имя участника.
    fn entrant_name(&self, id: EntrantId) -> Option<String>;

    /// Сохранить отображаемое имя участника.
    fn save_entrant_name(&mut self, id: EntrantId, name: &str);
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryTournamentStorage {
    tournaments: HashMap<TournamentId, Tournament>,
    brackets: HashMap<TournamentId, BracketState>,
    entrant_names: HashMap<EntrantId, String>,
}

impl InMemoryTournamentStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TournamentStorage for InMemoryTournamentStorage {
    fn load_tournament(&self, id: TournamentId) -> Option<Tournament> {
        self.tournaments.get(&id).cloned()
    }

    fn save_tournament(&mut self, tournament: &Tournament) {
        self.tournaments.insert(tournament.id, tournament.clone());
    }

    fn load_bracket(&self, tournament_id: TournamentId) -> Option<BracketState> {
        self.brackets.get(&tournament_id).cloned()
    }

    fn save_bracket(&mut self, state: &BracketState) {
        self.brackets.insert(state.tournament_id, state.clone());
    }

    fn tournament_ids(&self) -> Vec<TournamentId> {
        let mut ids: Vec<TournamentId> = self.tournaments.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    fn entrant_name(&self, id: EntrantId) -> Option<String> {
        self.entrant_names.get(&id).cloned()
    }

    fn save_entrant_name(&mut self, id: EntrantId, name: &str) {
        self.entrant_names.insert(id, name.to_string());
    }
}
