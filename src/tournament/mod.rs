//! Турнирный слой поверх движка: лобби (регистрация) и рантайм
//! (жеребьёвка, запись результатов, отмена матчей).

pub mod lobby;
pub mod runtime;

pub use lobby::TournamentLobby;
pub use runtime::{GeneratedBracket, RuntimeError, TournamentRuntime};
