use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::domain::{EntrantId, TournamentId};

/// Простая генерация ID на основе монотонных счётчиков.
/// Это удобно для локальных тестов, CLI и встраивающих приложений.
///
/// ID матчей сюда не входят: они последовательные внутри каждой сетки
/// и их выдаёт `engine::state::BracketState`.
#[derive(Debug)]
pub struct IdGenerator {
    tournament_counter: AtomicU64,
    entrant_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для всех сущностей.
    pub fn new() -> Self {
        Self {
            tournament_counter: AtomicU64::new(1),
            entrant_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_tournament_id(&self) -> TournamentId {
        self.tournament_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_entrant_id(&self) -> EntrantId {
        self.entrant_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Иногда удобно иметь "человекочитаемый" внешний ID,
/// но внутри всё равно использовать числовые.
/// На будущее – тип-обёртка над строкой.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ExternalId(pub String);
