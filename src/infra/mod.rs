//! Инфраструктурный слой: генерация ID, RNG, хранилище, нотификации,
//! маппинг в DTO.

pub mod ids;
pub mod mapping;
pub mod notifications;
pub mod persistence;
pub mod rng;

pub use ids::{ExternalId, IdGenerator};
pub use notifications::{LogNotifier, MemoryNotifier, NullNotifier, ResultNotifier};
pub use persistence::{InMemoryTournamentStorage, TournamentStorage};
pub use rng::{DeterministicRng, SystemRng};
