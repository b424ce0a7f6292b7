use serde::{Deserialize, Serialize};

use crate::domain::matches::{BracketSlot, PlayerSide};
use crate::domain::{EntrantId, MatchId, TournamentId};

/// Тип события при продвижении сетки.
///
/// Вместо observer-иерархии движок возвращает явный список событий:
/// кто и куда продвинулся, какие матчи созданы, завершился ли турнир.
/// Вызывающая сторона сама решает, куда их отправить (почта, фронт, лог).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum ProgressionEventKind {
    /// Записан частичный счёт, победитель ещё не определён.
    ScoreRecorded {
        match_id: MatchId,
        slot: BracketSlot,
        sets_a: u32,
        sets_b: u32,
    },

    /// Матч завершён с победителем.
    MatchCompleted {
        match_id: MatchId,
        slot: BracketSlot,
        winner: EntrantId,
    },

    /// Односторонний матч разрешён автоматически (bye).
    ByeResolved {
        match_id: MatchId,
        slot: BracketSlot,
        winner: EntrantId,
    },

    /// Победитель продвинут в слот следующего раунда.
    WinnerAdvanced {
        entrant: EntrantId,
        from: BracketSlot,
        to: BracketSlot,
        side: PlayerSide,
    },

    /// Лениво создан матч следующего раунда.
    MatchCreated {
        match_id: MatchId,
        slot: BracketSlot,
    },

    /// Турнир завершён.
    ///
    /// champion = None для кругового формата (там нет финального слота).
    TournamentCompleted {
        tournament_id: TournamentId,
        champion: Option<EntrantId>,
    },
}

/// Событие продвижения с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgressionEvent {
    pub index: u32,
    pub kind: ProgressionEventKind,
}

/// Журнал событий одной операции движка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ProgressionLog {
    pub events: Vec<ProgressionEvent>,
}

impl ProgressionLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: ProgressionEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(ProgressionEvent { index: idx, kind });
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
