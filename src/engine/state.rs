// src/engine/state.rs

use serde::{Deserialize, Serialize};

use crate::domain::matches::{BracketSlot, Match, MatchStatus, PlayerSide};
use crate::domain::score::BestOf;
use crate::domain::tournament::TournamentFormat;
use crate::domain::{EntrantId, MatchId, RoundNumber, SlotIndex, TournamentId};
use crate::engine::errors::EngineError;

/// Явное состояние сетки одного турнира.
///
/// Это то самое отображение (round_number, slot_index) -> Match,
/// которым владеет вызывающая сторона: движок получает его по &mut,
/// никакого собственного I/O у движка нет.
///
/// Матчи хранятся отсортированным вектором по слоту – так состояние
/// сериализуется в JSON без фокусов со структурными ключами карт,
/// а поиск по слоту на сетках турнирного размера дешёвый.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BracketState {
    pub tournament_id: TournamentId,
    pub format: TournamentFormat,
    pub best_of: BestOf,
    /// Количество участников на момент жеребьёвки.
    pub entrant_count: u32,
    /// Ширина первого раунда (число слотов). Дальше раунды
    /// ужимаются вдвое с округлением вверх до финала в один слот.
    first_round_slots: u32,
    matches: Vec<Match>,
    next_match_id: MatchId,
}

impl BracketState {
    /// Собрать состояние из результата билдера первого раунда.
    pub fn from_initial_round(
        tournament_id: TournamentId,
        format: TournamentFormat,
        best_of: BestOf,
        entrant_count: u32,
        matches: Vec<Match>,
    ) -> Result<Self, EngineError> {
        let first_round_slots = matches
            .iter()
            .filter(|m| m.slot.round == 1)
            .map(|m| m.slot.slot + 1)
            .max()
            .unwrap_or(0);
        if first_round_slots == 0 {
            return Err(EngineError::Internal("initial round is empty"));
        }

        let mut state = Self {
            tournament_id,
            format,
            best_of,
            entrant_count,
            first_round_slots,
            matches: Vec::with_capacity(matches.len()),
            next_match_id: 1,
        };

        for m in matches {
            if state.match_at(m.slot).is_some() {
                return Err(EngineError::Internal("duplicate slot in initial round"));
            }
            state.next_match_id = state.next_match_id.max(m.id + 1);
            state.matches.push(m);
        }
        state.matches.sort_by_key(|m| m.slot);

        Ok(state)
    }

    /// Всего раундов в сетке.
    pub fn rounds_total(&self) -> RoundNumber {
        match self.format {
            TournamentFormat::SingleElimination => {
                let mut slots = self.first_round_slots;
                let mut rounds = 1;
                while slots > 1 {
                    slots = (slots + 1) / 2;
                    rounds += 1;
                }
                rounds
            }
            // Круговой формат не имеет раундов на выбывание.
            TournamentFormat::RoundRobin => 1,
        }
    }

    /// Количество слотов в раунде `round` (1-based).
    ///
    /// Олимпийская система: первый раунд задаёт ширину, каждый следующий
    /// вдвое уже (с округлением вверх), финал = 1 слот. Стандартный билдер
    /// даёт ширину 2^(rounds-1); усечённые сетки встраивающих приложений
    /// могут давать нечётную ширину – тогда у крайнего слота нет парного
    /// фидера и движок авторазрешает его как bye.
    /// Запрос за пределами сетки → 0.
    pub fn slots_in_round(&self, round: RoundNumber) -> u32 {
        match self.format {
            TournamentFormat::SingleElimination => {
                if round == 0 {
                    return 0;
                }
                let mut slots = self.first_round_slots;
                let mut r = 1;
                while r < round && slots > 1 {
                    slots = (slots + 1) / 2;
                    r += 1;
                }
                if r == round {
                    slots
                } else {
                    0
                }
            }
            TournamentFormat::RoundRobin => {
                if round == 1 {
                    self.entrant_count * (self.entrant_count - 1) / 2
                } else {
                    0
                }
            }
        }
    }

    /// Терминальный ли это раунд (ровно один слот = финал).
    pub fn is_terminal_round(&self, round: RoundNumber) -> bool {
        self.format == TournamentFormat::SingleElimination && self.slots_in_round(round) == 1
    }

    /// Матч в слоте (read-only).
    pub fn match_at(&self, slot: BracketSlot) -> Option<&Match> {
        self.matches.iter().find(|m| m.slot == slot)
    }

    /// Матч в слоте (для изменения) – только для движка.
    pub(crate) fn match_at_mut(&mut self, slot: BracketSlot) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.slot == slot)
    }

    /// Создать матч в слоте с очередным id. Слот должен быть свободен.
    pub(crate) fn insert_partial(
        &mut self,
        slot: BracketSlot,
        side: PlayerSide,
        entrant: EntrantId,
    ) -> MatchId {
        let id = self.next_match_id;
        self.next_match_id += 1;

        let m = Match::new_partial(id, self.tournament_id, slot, side, entrant);
        let pos = self
            .matches
            .partition_point(|existing| existing.slot < slot);
        self.matches.insert(pos, m);
        id
    }

    /// Все матчи сетки в порядке слотов.
    pub fn all_matches(&self) -> &[Match] {
        &self.matches
    }

    /// Матчи одного раунда.
    pub fn matches_in_round(&self, round: RoundNumber) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(move |m| m.slot.round == round)
    }

    /// Финальный матч (олимпийская система).
    pub fn final_match(&self) -> Option<&Match> {
        match self.format {
            TournamentFormat::SingleElimination => {
                self.match_at(BracketSlot::new(self.rounds_total(), 0))
            }
            TournamentFormat::RoundRobin => None,
        }
    }

    /// Чемпион турнира: победитель финала. Для кругового формата None.
    pub fn champion(&self) -> Option<EntrantId> {
        self.final_match().and_then(|m| m.winner)
    }

    /// Завершён ли турнир.
    ///
    /// Олимпийская система: финал сыгран. Круговой формат: завершены
    /// все N*(N-1)/2 парных матчей.
    pub fn is_complete(&self) -> bool {
        match self.format {
            TournamentFormat::SingleElimination => self
                .final_match()
                .map(|m| m.status == MatchStatus::Completed)
                .unwrap_or(false),
            TournamentFormat::RoundRobin => {
                let expected = self.slots_in_round(1) as usize;
                self.matches.len() == expected
                    && self
                        .matches
                        .iter()
                        .all(|m| m.status == MatchStatus::Completed)
            }
        }
    }

    /// Сколько матчей уже есть в сетке (включая ленивые).
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Слоты первого раунда, занятые bye-матчами.
    pub fn bye_slots(&self) -> Vec<SlotIndex> {
        self.matches
            .iter()
            .filter(|m| m.bye && m.slot.round == 1)
            .map(|m| m.slot.slot)
            .collect()
    }
}
