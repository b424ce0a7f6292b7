//! Движок теннисных турниров: сетки, продвижение победителей, счёт по сетам.
//!
//! Ядро – чистые синхронные функции над явным состоянием сетки
//! (`engine::BracketState`), которым владеет вызывающая сторона.
//! Веб-слой, аутентификация, рассылки и персистентность остаются
//! снаружи: крейт общается с ними через `infra::TournamentStorage`
//! и `infra::ResultNotifier`.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod scoring;
pub mod tournament;
