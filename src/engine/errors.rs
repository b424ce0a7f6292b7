use crate::domain::matches::BracketSlot;
use crate::domain::{EntrantId, MatchId};

use thiserror::Error;

/// Ошибки движка турнирной сетки.
#[derive(Debug, Error, Clone)]
pub enum EngineError {
    #[error("Need at least 2 entrants to build a bracket, found {found}")]
    InsufficientEntrants { found: usize },

    #[error("Unsupported tournament format: {format}")]
    UnsupportedFormat { format: String },

    #[error("Entrant {entrant_id} appears more than once in the entrant list")]
    DuplicateEntrant { entrant_id: EntrantId },

    #[error("Match {match_id} is already completed")]
    AlreadyCompleted { match_id: MatchId },

    #[error("Match {match_id} is canceled")]
    MatchCanceled { match_id: MatchId },

    #[error("No match at slot {slot}")]
    MatchNotFound { slot: BracketSlot },

    #[error("Match {match_id} at {slot} has unassigned players, cannot record a result")]
    PlayersNotAssigned { match_id: MatchId, slot: BracketSlot },

    #[error(
        "Slot {slot} already holds entrant {occupant} on that side, refusing to place {incoming}"
    )]
    SlotConflict {
        slot: BracketSlot,
        occupant: EntrantId,
        incoming: EntrantId,
    },

    #[error("Invalid score: {reason}")]
    InvalidScore { reason: String },

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
