use serde::{Deserialize, Serialize};

use crate::domain::tournament::TournamentError;
use crate::domain::TournamentId;
use crate::engine::EngineError;
use crate::tournament::RuntimeError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый формат или best_of).
    BadRequest(String),

    /// Турнир не найден.
    TournamentNotFound(TournamentId),

    /// Матч не найден в сетке.
    MatchNotFound { round_number: u32, slot_index: u32 },

    /// Команда не может быть выполнена в текущем состоянии.
    InvalidCommand(String),

    /// Ошибка движка сетки (продвижение, счёт).
    EngineError(String),

    /// Ошибка доменной логики турнира (регистрации, статусы).
    TournamentError(String),

    /// Внутренняя ошибка сервера.
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::EngineError(err.to_string())
    }
}

impl From<TournamentError> for ApiError {
    fn from(err: TournamentError) -> Self {
        ApiError::TournamentError(err.to_string())
    }
}

impl From<RuntimeError> for ApiError {
    fn from(err: RuntimeError) -> Self {
        match err {
            RuntimeError::Tournament(e) => e.into(),
            RuntimeError::Engine(e) => e.into(),
        }
    }
}
