use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::domain::score::{BestOf, MatchScore, SetScore};
use crate::domain::tournament::{TournamentConfig, TournamentFormat};
use crate::domain::{EntrantId, MatchId, TournamentId};
use crate::engine::EngineError;

/// DTO одного сета (API-слой).
///
/// Числа приходят как i64: отрицательные и заведомо нереальные значения
/// отвергаются при конверсии в домен (InvalidScore).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetScoreDto {
    pub player_a: Option<i64>,
    pub player_b: Option<i64>,
}

/// Конверсия посетового счёта из API в домен.
pub fn set_scores_from_api(sets: &[SetScoreDto]) -> Result<MatchScore, EngineError> {
    fn convert(set_no: usize, value: Option<i64>) -> Result<Option<u32>, EngineError> {
        match value {
            None => Ok(None),
            Some(v) if v < 0 => Err(EngineError::InvalidScore {
                reason: format!("set {}: negative score {}", set_no, v),
            }),
            Some(v) if v > u32::MAX as i64 => Err(EngineError::InvalidScore {
                reason: format!("set {}: score {} is out of range", set_no, v),
            }),
            Some(v) => Ok(Some(v as u32)),
        }
    }

    let mut out = Vec::with_capacity(sets.len());
    for (i, s) in sets.iter().enumerate() {
        out.push(SetScore {
            player_a: convert(i + 1, s.player_a)?,
            player_b: convert(i + 1, s.player_b)?,
        });
    }
    Ok(MatchScore::new(out))
}

/// Обратная конверсия – для отображения.
pub fn set_scores_to_api(score: &MatchScore) -> Vec<SetScoreDto> {
    score
        .sets
        .iter()
        .map(|s| SetScoreDto {
            player_a: s.player_a.map(i64::from),
            player_b: s.player_b.map(i64::from),
        })
        .collect()
}

/// Формат турнира на API-слое приходит текстом –
/// неизвестное значение это UnsupportedFormat.
pub fn format_from_api(format: &str) -> Result<TournamentFormat, EngineError> {
    match format {
        "SINGLE_ELIMINATION" => Ok(TournamentFormat::SingleElimination),
        "ROUND_ROBIN" => Ok(TournamentFormat::RoundRobin),
        other => Err(EngineError::UnsupportedFormat {
            format: other.to_string(),
        }),
    }
}

pub fn format_to_api(format: TournamentFormat) -> &'static str {
    format.as_str()
}

/// best_of на API-слое – число; принимаем только 3 и 5.
pub fn best_of_from_api(best_of: u32) -> Result<BestOf, ApiError> {
    match best_of {
        3 => Ok(BestOf::Three),
        5 => Ok(BestOf::Five),
        other => Err(ApiError::BadRequest(format!(
            "best_of must be 3 or 5, got {}",
            other
        ))),
    }
}

/// Конфиг турнира в том виде, как его присылает фронт.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TournamentConfigApi {
    pub name: String,
    pub description: Option<String>,
    /// "SINGLE_ELIMINATION" / "ROUND_ROBIN".
    pub format: String,
    /// 3 или 5.
    pub best_of: u32,
    pub max_entrants: u32,
    pub min_entrants_to_start: u32,
    pub shuffle_seeding: bool,
}

/// Конверсия конфига из API в домен.
pub fn tournament_config_from_api(api: TournamentConfigApi) -> Result<TournamentConfig, ApiError> {
    let format = format_from_api(&api.format)?;
    let best_of = best_of_from_api(api.best_of)?;

    Ok(TournamentConfig {
        name: api.name,
        description: api.description,
        format,
        best_of,
        max_entrants: api.max_entrants,
        min_entrants_to_start: api.min_entrants_to_start,
        shuffle_seeding: api.shuffle_seeding,
    })
}

/// DTO матча.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchViewDto {
    pub match_id: MatchId,
    pub tournament_id: TournamentId,
    pub round_number: u32,
    pub slot_index: u32,
    pub player_a: Option<EntrantId>,
    pub player_a_name: Option<String>,
    pub player_b: Option<EntrantId>,
    pub player_b_name: Option<String>,
    /// Статус в текстовом виде: "SCHEDULED", "IN_PROGRESS", "COMPLETED", "CANCELED".
    pub status: String,
    pub sets: Vec<SetScoreDto>,
    pub sets_a: u32,
    pub sets_b: u32,
    pub winner: Option<EntrantId>,
    pub bye: bool,
}

/// DTO всей сетки.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BracketViewDto {
    pub tournament_id: TournamentId,
    pub format: String,
    pub rounds_total: u32,
    pub complete: bool,
    pub champion: Option<EntrantId>,
    pub matches: Vec<MatchViewDto>,
}

/// DTO турнира (минимальное представление для лобби).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TournamentViewDto {
    pub tournament_id: TournamentId,
    pub name: String,
    /// Статус в текстовом виде: "Registering", "Running", "Finished".
    pub status: String,
    pub format: String,
    pub entrants_registered: u32,
    pub champion: Option<EntrantId>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,

    /// Создан новый турнир.
    TournamentCreated { tournament_id: TournamentId },

    /// Состояние турнира после команды.
    TournamentState(TournamentViewDto),

    /// Жеребьёвка проведена, сетка построена.
    BracketGenerated(BracketViewDto),

    /// Записан результат матча.
    ResultRecorded {
        updated: MatchViewDto,
        /// Созданный/дополненный матч следующего раунда.
        advanced: Option<MatchViewDto>,
        tournament_complete: bool,
    },

    /// Матч отменён.
    MatchCanceled(MatchViewDto),
}
