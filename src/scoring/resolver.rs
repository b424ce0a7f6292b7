use serde::{Deserialize, Serialize};

use crate::domain::matches::PlayerSide;
use crate::domain::score::{BestOf, MatchScore};

/// Результат разбора счёта: количество выигранных сетов и победитель.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resolution {
    /// Победившая сторона, если матч уже решён.
    pub winner: Option<PlayerSide>,
    pub sets_a: u32,
    pub sets_b: u32,
}

impl Resolution {
    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }
}

/// Чистая функция: по посетовому счёту определить победителя.
///
/// Считаются только сеты, где заполнены оба числа; равный счёт в сете
/// не идёт в зачёт ни одной стороне. Сторона побеждает, когда набирает
/// `best_of.sets_to_win()` сетов – до этого матч считается нерешённым
/// (частичный счёт, матч ещё идёт).
///
/// Пустой или полностью незаполненный список сетов → победителя нет, 0-0.
pub fn resolve(score: &MatchScore, best_of: BestOf) -> Resolution {
    let mut sets_a = 0u32;
    let mut sets_b = 0u32;

    for set in &score.sets {
        match set.winner_side() {
            Some(PlayerSide::A) => sets_a += 1,
            Some(PlayerSide::B) => sets_b += 1,
            None => {}
        }
    }

    let need = best_of.sets_to_win();
    let winner = if sets_a >= need {
        Some(PlayerSide::A)
    } else if sets_b >= need {
        Some(PlayerSide::B)
    } else {
        None
    };

    Resolution {
        winner,
        sets_a,
        sets_b,
    }
}
