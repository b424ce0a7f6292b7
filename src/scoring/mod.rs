//! Модуль разбора посетового счёта теннисного матча.
//!
//! Основная функция:
//!   `resolve(score, best_of) -> Resolution`

pub mod resolver;

pub use resolver::{resolve, Resolution};
