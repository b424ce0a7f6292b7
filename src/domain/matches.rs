// src/domain/matches.rs

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::score::MatchScore;
use crate::domain::{EntrantId, MatchId, RoundNumber, SlotIndex, TournamentId};

/// Сторона матча: A = player_a, B = player_b.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlayerSide {
    A,
    B,
}

impl PlayerSide {
    pub fn other(self) -> PlayerSide {
        match self {
            PlayerSide::A => PlayerSide::B,
            PlayerSide::B => PlayerSide::A,
        }
    }
}

/// Позиция в турнирной сетке: (раунд, слот внутри раунда).
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct BracketSlot {
    pub round: RoundNumber,
    pub slot: SlotIndex,
}

impl BracketSlot {
    pub fn new(round: RoundNumber, slot: SlotIndex) -> Self {
        Self { round, slot }
    }

    /// Слот в следующем раунде, который кормит этот слот:
    /// победитель слота `s` раунда `r` попадает в слот `s / 2` раунда `r + 1`.
    pub fn next_round_slot(self) -> BracketSlot {
        BracketSlot {
            round: self.round + 1,
            slot: self.slot / 2,
        }
    }

    /// В какую сторону целевого матча попадает победитель этого слота:
    /// чётный слот → player_a, нечётный → player_b.
    pub fn feeder_side(self) -> PlayerSide {
        if self.slot % 2 == 0 {
            PlayerSide::A
        } else {
            PlayerSide::B
        }
    }

    /// Парный слот-фидер, кормящий тот же целевой матч.
    pub fn sibling(self) -> BracketSlot {
        BracketSlot {
            round: self.round,
            slot: self.slot ^ 1,
        }
    }
}

impl fmt::Display for BracketSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}#{}", self.round, self.slot)
    }
}

/// Статус матча.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Completed,
    Canceled,
}

impl MatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "SCHEDULED",
            MatchStatus::InProgress => "IN_PROGRESS",
            MatchStatus::Completed => "COMPLETED",
            MatchStatus::Canceled => "CANCELED",
        }
    }
}

/// Матч – единица соревнования в сетке.
///
/// Обе стороны опциональны: матч раунда r+1 создаётся лениво,
/// когда известен хотя бы один из фидеров, вторая сторона остаётся TBD.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Match {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub slot: BracketSlot,
    pub player_a: Option<EntrantId>,
    pub player_b: Option<EntrantId>,
    pub status: MatchStatus,
    pub score: Option<MatchScore>,
    pub winner: Option<EntrantId>,
    /// Синтетический матч-bye: одна сторона, победитель назначен без счёта.
    pub bye: bool,
}

impl Match {
    /// Обычный матч с двумя игроками, ожидает игры.
    pub fn new_scheduled(
        id: MatchId,
        tournament_id: TournamentId,
        slot: BracketSlot,
        player_a: EntrantId,
        player_b: EntrantId,
    ) -> Self {
        Self {
            id,
            tournament_id,
            slot,
            player_a: Some(player_a),
            player_b: Some(player_b),
            status: MatchStatus::Scheduled,
            score: None,
            winner: None,
            bye: false,
        }
    }

    /// Bye-матч: единственный игрок сразу объявлен победителем, счёт не нужен.
    pub fn new_bye(
        id: MatchId,
        tournament_id: TournamentId,
        slot: BracketSlot,
        entrant: EntrantId,
    ) -> Self {
        Self {
            id,
            tournament_id,
            slot,
            player_a: Some(entrant),
            player_b: None,
            status: MatchStatus::Completed,
            score: None,
            winner: Some(entrant),
            bye: true,
        }
    }

    /// Лениво созданный матч следующего раунда: известна только одна сторона.
    pub fn new_partial(
        id: MatchId,
        tournament_id: TournamentId,
        slot: BracketSlot,
        side: PlayerSide,
        entrant: EntrantId,
    ) -> Self {
        let (player_a, player_b) = match side {
            PlayerSide::A => (Some(entrant), None),
            PlayerSide::B => (None, Some(entrant)),
        };
        Self {
            id,
            tournament_id,
            slot,
            player_a,
            player_b,
            status: MatchStatus::Scheduled,
            score: None,
            winner: None,
            bye: false,
        }
    }

    /// Игрок на указанной стороне.
    pub fn player(&self, side: PlayerSide) -> Option<EntrantId> {
        match side {
            PlayerSide::A => self.player_a,
            PlayerSide::B => self.player_b,
        }
    }

    /// Поставить игрока на сторону (перезаписывает без проверок –
    /// проверку конфликта делает движок до вызова).
    pub fn set_player(&mut self, side: PlayerSide, entrant: EntrantId) {
        match side {
            PlayerSide::A => self.player_a = Some(entrant),
            PlayerSide::B => self.player_b = Some(entrant),
        }
    }

    /// На какой стороне стоит данный игрок.
    pub fn side_of(&self, entrant: EntrantId) -> Option<PlayerSide> {
        if self.player_a == Some(entrant) {
            Some(PlayerSide::A)
        } else if self.player_b == Some(entrant) {
            Some(PlayerSide::B)
        } else {
            None
        }
    }

    /// Обе ли стороны заполнены.
    pub fn has_both_players(&self) -> bool {
        self.player_a.is_some() && self.player_b.is_some()
    }

    /// Сколько сторон заполнено (0, 1 или 2).
    pub fn player_count(&self) -> usize {
        self.player_a.iter().count() + self.player_b.iter().count()
    }

    /// Единственный игрок, если заполнена ровно одна сторона.
    pub fn sole_player(&self) -> Option<EntrantId> {
        match (self.player_a, self.player_b) {
            (Some(p), None) => Some(p),
            (None, Some(p)) => Some(p),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    pub fn is_canceled(&self) -> bool {
        self.status == MatchStatus::Canceled
    }

    pub fn is_scheduled(&self) -> bool {
        self.status == MatchStatus::Scheduled
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == MatchStatus::InProgress
    }
}
