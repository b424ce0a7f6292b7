use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::matches::PlayerSide;

/// Максимальное количество сетов в теннисном матче.
pub const MAX_SETS: usize = 5;

/// Формат матча: до скольких выигранных сетов играем.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BestOf {
    /// До двух выигранных сетов (максимум 3 сета).
    Three,
    /// До трёх выигранных сетов (максимум 5 сетов).
    Five,
}

impl BestOf {
    /// Сколько сетов нужно выиграть, чтобы взять матч.
    pub fn sets_to_win(self) -> u32 {
        match self {
            BestOf::Three => 2,
            BestOf::Five => 3,
        }
    }

    /// Максимально возможное количество сетов в этом формате.
    pub fn max_sets(self) -> usize {
        match self {
            BestOf::Three => 3,
            BestOf::Five => 5,
        }
    }
}

/// Счёт одного сета.
///
/// Обе стороны могут быть незаполнены (сет ещё не сыгран/не введён):
/// сет учитывается только когда присутствуют оба числа.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetScore {
    pub player_a: Option<u32>,
    pub player_b: Option<u32>,
}

impl SetScore {
    pub fn new(player_a: u32, player_b: u32) -> Self {
        Self {
            player_a: Some(player_a),
            player_b: Some(player_b),
        }
    }

    /// Пустой (ещё не введённый) сет.
    pub fn empty() -> Self {
        Self {
            player_a: None,
            player_b: None,
        }
    }

    /// Заполнены ли оба значения.
    pub fn is_scored(&self) -> bool {
        self.player_a.is_some() && self.player_b.is_some()
    }

    /// Кто выиграл сет.
    ///
    /// None – если сет не заполнен целиком или счёт равный
    /// (равный счёт не засчитывается ни одной стороне).
    pub fn winner_side(&self) -> Option<PlayerSide> {
        match (self.player_a, self.player_b) {
            (Some(a), Some(b)) if a > b => Some(PlayerSide::A),
            (Some(a), Some(b)) if b > a => Some(PlayerSide::B),
            _ => None,
        }
    }
}

/// Посетовый счёт матча (до 5 сетов).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MatchScore {
    pub sets: Vec<SetScore>,
}

impl MatchScore {
    pub fn new(sets: Vec<SetScore>) -> Self {
        Self { sets }
    }

    /// Удобный конструктор из пар (a, b).
    pub fn from_pairs(pairs: &[(u32, u32)]) -> Self {
        Self {
            sets: pairs.iter().map(|&(a, b)| SetScore::new(a, b)).collect(),
        }
    }

    /// Есть ли хотя бы один полностью заполненный сет.
    pub fn has_scored_sets(&self) -> bool {
        self.sets.iter().any(|s| s.is_scored())
    }
}

impl fmt::Display for MatchScore {
    /// Текстовый вид "6-3 6-4" – только полностью заполненные сеты.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for set in &self.sets {
            if let (Some(a), Some(b)) = (set.player_a, set.player_b) {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}-{}", a, b)?;
                first = false;
            }
        }
        Ok(())
    }
}
