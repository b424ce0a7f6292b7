use serde::{Deserialize, Serialize};

use crate::api::dto::{SetScoreDto, TournamentConfigApi};
use crate::domain::{EntrantId, TournamentId};

/// Команда верхнего уровня.
///
/// Встраивающее приложение (веб-слой, CLI) превращает действия
/// пользователей в эти команды и отдаёт их TournamentService.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Турнирные команды (создание, регистрация, жеребьёвка).
    Tournament(TournamentCommand),

    /// Операции над конкретным матчем.
    Match(MatchCommand),
}

/// Турнирные команды верхнего уровня.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TournamentCommand {
    /// Создать новый турнир с заданным конфигом.
    CreateTournament(CreateTournamentCommand),

    /// Зарегистрировать участника в турнир.
    RegisterEntrant(RegisterEntrantCommand),

    /// Снять участника с турнира (до старта).
    WithdrawEntrant(WithdrawEntrantCommand),

    /// Старт турнира:
    /// - жеребьёвка (при shuffle_seeding состав перемешивается);
    /// - строится первый раунд сетки;
    /// - bye-победители продвигаются автоматически;
    /// - статус турнира → Running.
    StartTournament(StartTournamentCommand),
}

/// Команда на создание турнира.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateTournamentCommand {
    /// Организатор турнира.
    pub owner: EntrantId,
    /// Конфигурация (см. `dto::TournamentConfigApi`).
    pub config: TournamentConfigApi,
}

/// Зарегистрировать участника в турнир.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterEntrantCommand {
    pub tournament_id: TournamentId,
    pub entrant_id: EntrantId,
    /// Отображаемое имя участника в лобби/сетке.
    pub display_name: String,
}

/// Снять участника (пока турнир не начался).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WithdrawEntrantCommand {
    pub tournament_id: TournamentId,
    pub entrant_id: EntrantId,
}

/// Старт турнира.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StartTournamentCommand {
    pub tournament_id: TournamentId,
    /// Seed жеребьёвки: задан – детерминированная (тесты/реплей),
    /// не задан – системный RNG.
    pub shuffle_seed: Option<u64>,
}

/// Команды, которые относятся к существующему матчу.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum MatchCommand {
    /// Записать посетовый счёт матча (судейская операция).
    RecordResult(RecordResultCommand),

    /// Отменить матч (административная операция).
    CancelMatch(CancelMatchCommand),
}

/// Записать счёт матча.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordResultCommand {
    pub tournament_id: TournamentId,
    pub round_number: u32,
    pub slot_index: u32,
    /// Посетовый счёт; частично заполненный счёт переводит матч
    /// в IN_PROGRESS без продвижения сетки.
    pub sets: Vec<SetScoreDto>,
}

/// Отменить матч.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CancelMatchCommand {
    pub tournament_id: TournamentId,
    pub round_number: u32,
    pub slot_index: u32,
}
