//! Доменная модель теннисного турнира: счета, матчи, сетка, турниры.

pub mod matches;
pub mod score;
pub mod tournament;

// Базовые идентификаторы (потом можно вынести в отдельный модуль ids/infra)
pub type EntrantId = u64;
pub type TournamentId = u64;
pub type MatchId = u64;

/// Номер раунда (1 = первый раунд сетки).
pub type RoundNumber = u32;
/// Индекс слота внутри раунда (0-based).
pub type SlotIndex = u32;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Match и т.п.
pub use matches::*;
pub use score::*;
pub use tournament::*;
