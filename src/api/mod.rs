//! Внешний API движка турниров.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (создать турнир, зарегистрировать участника, записать счёт);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — удобные структуры для фронта;
//! - ошибки (errors.rs) — то, что видит клиент;
//! - сервис (service.rs) — диспетчер команд/запросов поверх хранилища.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;
pub mod service;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
pub use service::TournamentService;
