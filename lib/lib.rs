/// Chess domain types.
pub mod chess;
/// Game settings.
pub mod config;
/// Periodic turn resolution.
pub mod schedule;
/// The majority vote turn engine.
pub mod vote;
