//! Движок турнирной сетки: генерация первого раунда, продвижение
//! победителей, авторазрешение bye.
//!
//! Основные операции:
//!   - `build_initial_round` – построить пары первого раунда
//!   - `record_result` – записать счёт матча и продвинуть сетку
//!   - `advance_on_bye` – авторазрешить односторонний матч
//!   - `propagate_initial_byes` – продвинуть bye-победителей после жеребьёвки

pub mod bracket;
pub mod errors;
pub mod events;
pub mod progression;
pub mod state;

pub use bracket::{bracket_rounds, build_initial_round, byes_for};
pub use errors::EngineError;
pub use events::{ProgressionEvent, ProgressionEventKind, ProgressionLog};
pub use progression::{advance_on_bye, propagate_initial_byes, record_result, RecordOutcome};
pub use state::BracketState;

/// RNG интерфейс для движка и рантайма.
/// Реализации живут в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
