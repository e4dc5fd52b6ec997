//! In-memory live scoreboard for ongoing matches.
//!
//! The [`ScoreBoard`] owns every active [`Match`](domain::Match) and renders them as a summary
//! ordered by total score, most recently started first on ties.

pub mod adapters;
pub mod commands;
pub mod config;
pub mod domain;
pub mod ports;

pub use commands::{
    end_match::EndMatch, shared::SharedScoreBoard, start_match::StartMatch,
    summary::MatchSummary, update_score::UpdateScore, Error, InvalidArgument, ScoreBoard,
};
pub use config::ScoreBoardConfig;
pub use domain::{Match, MatchId, Team};
