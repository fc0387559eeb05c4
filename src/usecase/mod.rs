//! ユースケース層

pub mod board;

pub use board::{BoardDeps, BoardUseCase, RefreshOutcome, SubmitOutcome};
