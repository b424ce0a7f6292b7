// src/domain/tournament.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::score::BestOf;
use crate::domain::{EntrantId, TournamentId};

/// Формат турнира.
///
/// Вместо иерархии стратегий – простой тегированный enum,
/// по которому билдер сетки выбирает алгоритм.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TournamentFormat {
    SingleElimination,
    RoundRobin,
}

impl TournamentFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            TournamentFormat::SingleElimination => "SINGLE_ELIMINATION",
            TournamentFormat::RoundRobin => "ROUND_ROBIN",
        }
    }
}

/// Статус турнира.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TournamentStatus {
    Registering,
    Running,
    Finished,
}

/// Конфигурация турнира.
/// Всё, что приходит при создании турнира через фронт.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Название турнира.
    pub name: String,

    /// Краткое описание.
    pub description: Option<String>,

    /// Формат: олимпийская система или круговой.
    pub format: TournamentFormat,

    /// До скольких выигранных сетов играются матчи.
    pub best_of: BestOf,

    /// Максимальное количество участников (cap).
    pub max_entrants: u32,

    /// Минимальное количество участников для старта (не меньше 2).
    pub min_entrants_to_start: u32,

    /// Перемешивать ли список участников перед жеребьёвкой.
    ///
    /// false = порядок регистрации и есть порядок посева.
    pub shuffle_seeding: bool,
}

impl TournamentConfig {
    /// Жёсткая валидация конфига турнира.
    pub fn validate_full(&self) -> Result<(), TournamentError> {
        if self.name.trim().is_empty() {
            return Err(TournamentError::InvalidConfig(
                "TournamentConfig: name is empty".into(),
            ));
        }

        if self.max_entrants == 0 {
            return Err(TournamentError::InvalidConfig(
                "TournamentConfig: max_entrants = 0".into(),
            ));
        }

        if self.min_entrants_to_start < 2 {
            return Err(TournamentError::InvalidConfig(
                "TournamentConfig: min_entrants_to_start must be at least 2".into(),
            ));
        }

        if self.min_entrants_to_start > self.max_entrants {
            return Err(TournamentError::InvalidConfig(
                "TournamentConfig: min_entrants_to_start > max_entrants".into(),
            ));
        }

        Ok(())
    }
}

/// Регистрация участника в турнире.
///
/// Порядок регистраций = порядок посева при жеребьёвке
/// (если включён shuffle_seeding – рантайм перемешает).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntrantRegistration {
    pub entrant_id: EntrantId,
    /// Снялся ли участник до старта.
    pub withdrawn: bool,
}

/// Основной объект турнира.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// Организатор (внешний идентификатор пользователя).
    pub owner: EntrantId,
    pub config: TournamentConfig,
    pub status: TournamentStatus,
    registrations: Vec<EntrantRegistration>,

    /// Чемпион турнира (если уже известен).
    pub champion: Option<EntrantId>,
}

impl Tournament {
    pub fn new(
        id: TournamentId,
        owner: EntrantId,
        config: TournamentConfig,
    ) -> Result<Self, TournamentError> {
        config.validate_full()?;

        Ok(Self {
            id,
            owner,
            config,
            status: TournamentStatus::Registering,
            registrations: Vec::new(),
            champion: None,
        })
    }

    /// Регистрируем участника (пока турнир в статусе Registering).
    pub fn register_entrant(&mut self, entrant_id: EntrantId) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Registering {
            return Err(TournamentError::RegistrationClosed {
                tournament_id: self.id,
            });
        }

        if self.active_entrant_count() as u32 >= self.config.max_entrants {
            return Err(TournamentError::TournamentFull {
                tournament_id: self.id,
            });
        }

        if self
            .registrations
            .iter()
            .any(|r| r.entrant_id == entrant_id && !r.withdrawn)
        {
            return Err(TournamentError::AlreadyRegistered {
                entrant_id,
                tournament_id: self.id,
            });
        }

        self.registrations.push(EntrantRegistration {
            entrant_id,
            withdrawn: false,
        });
        Ok(())
    }

    /// Снять участника с турнира (до старта).
    pub fn withdraw_entrant(&mut self, entrant_id: EntrantId) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Registering {
            return Err(TournamentError::RegistrationClosed {
                tournament_id: self.id,
            });
        }

        let reg = self
            .registrations
            .iter_mut()
            .find(|r| r.entrant_id == entrant_id && !r.withdrawn)
            .ok_or(TournamentError::NotRegistered {
                entrant_id,
                tournament_id: self.id,
            })?;

        reg.withdrawn = true;
        Ok(())
    }

    /// Подтверждённый состав в порядке посева (поставщик ростера).
    pub fn roster(&self) -> Vec<EntrantId> {
        self.registrations
            .iter()
            .filter(|r| !r.withdrawn)
            .map(|r| r.entrant_id)
            .collect()
    }

    /// Все регистрации (включая снявшихся) – для отображения.
    pub fn registrations(&self) -> &[EntrantRegistration] {
        &self.registrations
    }

    /// Количество активных (не снявшихся) участников.
    pub fn active_entrant_count(&self) -> usize {
        self.registrations.iter().filter(|r| !r.withdrawn).count()
    }

    /// Можно ли стартовать: статус Registering и набран минимум.
    pub fn can_start(&self) -> bool {
        self.status == TournamentStatus::Registering
            && self.active_entrant_count() as u32 >= self.config.min_entrants_to_start
    }

    /// Помечает турнир как запущенный.
    pub fn start(&mut self) -> Result<(), TournamentError> {
        if !self.can_start() {
            return Err(TournamentError::InvalidStatusForStart {
                status: self.status,
            });
        }

        self.status = TournamentStatus::Running;
        self.champion = None;
        Ok(())
    }

    /// Завершить турнир с известным чемпионом (или без него – круговой формат).
    pub fn finish(&mut self, champion: Option<EntrantId>) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Running {
            return Err(TournamentError::InvalidStatus {
                expected: TournamentStatus::Running,
                found: self.status,
            });
        }

        self.status = TournamentStatus::Finished;
        self.champion = champion;
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.status == TournamentStatus::Finished
    }
}

/// Ошибки, которые могут возникать при работе с турниром.
#[derive(Debug, Error, Clone)]
pub enum TournamentError {
    #[error("Tournament not found: id={tournament_id}")]
    TournamentNotFound { tournament_id: TournamentId },

    #[error("Tournament is full: id={tournament_id}")]
    TournamentFull { tournament_id: TournamentId },

    #[error("Entrant {entrant_id} is already registered in tournament {tournament_id}")]
    AlreadyRegistered {
        entrant_id: EntrantId,
        tournament_id: TournamentId,
    },

    #[error("Entrant {entrant_id} is not registered in tournament {tournament_id}")]
    NotRegistered {
        entrant_id: EntrantId,
        tournament_id: TournamentId,
    },

    #[error("Registration is closed in tournament {tournament_id}")]
    RegistrationClosed { tournament_id: TournamentId },

    #[error("Invalid tournament status, expected {expected:?}, found {found:?}")]
    InvalidStatus {
        expected: TournamentStatus,
        found: TournamentStatus,
    },

    #[error("Invalid tournament status for start: {status:?}")]
    InvalidStatusForStart { status: TournamentStatus },

    #[error("Invalid tournament config: {0}")]
    InvalidConfig(String),
}
