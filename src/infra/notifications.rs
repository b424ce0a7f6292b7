use log::info;

use crate::domain::TournamentId;
use crate::engine::events::{ProgressionEvent, ProgressionEventKind};

/// Получатель событий продвижения (fire-and-forget).
///
/// Движок возвращает события явным списком; сервисный слой раздаёт их
/// нотификатору ПОСЛЕ сохранения состояния. Сбой нотификатора никогда
/// не откатывает записанный результат, поэтому интерфейс не возвращает
/// Result – реализация глотает свои ошибки сама.
pub trait ResultNotifier {
    fn notify(&mut self, tournament_id: TournamentId, event: &ProgressionEvent);
}

/// Заглушка: ничего не делает.
#[derive(Clone, Debug, Default)]
pub struct NullNotifier;

impl ResultNotifier for NullNotifier {
    fn notify(&mut self, _tournament_id: TournamentId, _event: &ProgressionEvent) {}
}

/// Пишет события в лог.
#[derive(Clone, Debug, Default)]
pub struct LogNotifier;

impl ResultNotifier for LogNotifier {
    fn notify(&mut self, tournament_id: TournamentId, event: &ProgressionEvent) {
        info!("tournament {}: {:?}", tournament_id, event.kind);
    }
}

/// Копит события в памяти – для тестов и CLI.
#[derive(Clone, Debug, Default)]
pub struct MemoryNotifier {
    pub received: Vec<(TournamentId, ProgressionEventKind)>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultNotifier for MemoryNotifier {
    fn notify(&mut self, tournament_id: TournamentId, event: &ProgressionEvent) {
        self.received.push((tournament_id, event.kind.clone()));
    }
}
