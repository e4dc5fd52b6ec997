use std::sync::PoisonError;

use crate::{
    adapters::{clock::SystemClock, id::UuidGenerator, store::memory::MemoryMatchStore},
    config::ScoreBoardConfig,
    domain::{Match, MatchId},
    ports::store::MatchStore,
};

pub mod end_match;
pub mod shared;
pub mod start_match;
pub mod summary;
pub mod update_score;

/// Scoreboard of ongoing matches
///
/// The board exclusively owns its store. Wrap it in a
/// [`SharedScoreBoard`](shared::SharedScoreBoard) to share it between threads.
#[derive(Debug)]
pub struct ScoreBoard<S = MemoryMatchStore, C = SystemClock, G = UuidGenerator> {
    store: S,
    clock: C,
    ids: G,
    config: ScoreBoardConfig,
    /// `start_order` handed to the next started match
    next_start_order: u64,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::with_config(ScoreBoardConfig::default())
    }

    pub fn with_config(config: ScoreBoardConfig) -> Self {
        Self::with_ports(
            MemoryMatchStore::default(),
            SystemClock,
            UuidGenerator,
            config,
        )
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, C, G> ScoreBoard<S, C, G>
where
    S: MatchStore,
{
    pub fn with_ports(store: S, clock: C, ids: G, config: ScoreBoardConfig) -> Self {
        Self {
            store,
            clock,
            ids,
            config,
            next_start_order: 0,
        }
    }

    pub fn config(&self) -> &ScoreBoardConfig {
        &self.config
    }

    pub fn get_match(&self, match_id: &MatchId) -> Option<&Match> {
        self.store.get(match_id)
    }

    /// Number of ongoing matches
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("match does not exist with given id: {0}")]
    NotFound(MatchId),
    #[error("match store error: {0}")]
    Store(#[from] crate::ports::store::Error),

    /// A thread panicked while holding a [`SharedScoreBoard`](shared::SharedScoreBoard)
    #[error("poison error: {0}")]
    Poisoned(String),
}

/// Caller input that can never be applied to the board
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("team names cannot be null or blank")]
    BlankTeamName,
    #[error("team names cannot be the same")]
    SameTeamNames,
    #[error("score cannot be negative")]
    NegativeScore,
    /// The supplied names are not the home and away teams of the match, in that order
    #[error("match teams do not match given team names")]
    TeamMismatch,
    #[error("team {0} already has an ongoing match")]
    TeamAlreadyPlaying(String),
}

/// `PoisonError` keeps the guard internally, so only its string representation is kept.
impl<T> From<PoisonError<T>> for Error {
    fn from(err: PoisonError<T>) -> Self {
        Self::Poisoned(err.to_string())
    }
}

/// Both names must be non-blank and differ from each other (case-sensitive)
fn validate_team_names(home_team: &str, away_team: &str) -> Result<(), InvalidArgument> {
    if home_team.trim().is_empty() || away_team.trim().is_empty() {
        return Err(InvalidArgument::BlankTeamName);
    }
    if home_team == away_team {
        return Err(InvalidArgument::SameTeamNames);
    }

    Ok(())
}

/// Deterministic ports for the command tests
#[cfg(test)]
pub(crate) mod testing {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use super::ScoreBoard;
    use crate::{
        adapters::store::memory::MemoryMatchStore,
        config::ScoreBoardConfig,
        ports::{clock::MockClock, id::MockIdGenerator},
    };

    pub type TestScoreBoard = ScoreBoard<MemoryMatchStore, MockClock, MockIdGenerator>;

    pub fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 14, 19, 0, 0).unwrap()
    }

    /// Clock that moves one minute forward on every call
    pub fn ticking_clock() -> MockClock {
        let mut clock = MockClock::new();
        let mut ticks = 0;
        clock.expect_now().returning(move || {
            ticks += 1;
            epoch() + Duration::minutes(ticks)
        });
        clock
    }

    /// Clock that never moves
    pub fn frozen_clock() -> MockClock {
        let mut clock = MockClock::new();
        clock.expect_now().returning(epoch);
        clock
    }

    /// Ids `match-1`, `match-2`, ...
    pub fn sequential_ids() -> MockIdGenerator {
        let mut ids = MockIdGenerator::new();
        let mut next = 0;
        ids.expect_next_id().returning(move || {
            next += 1;
            format!("match-{next}").into()
        });
        ids
    }

    pub fn scoreboard(config: ScoreBoardConfig) -> TestScoreBoard {
        ScoreBoard::with_ports(
            MemoryMatchStore::default(),
            ticking_clock(),
            sequential_ids(),
            config,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use speculoos::prelude::*;

    #[rstest]
    #[case("", "Canada")]
    #[case("Mexico", "")]
    #[case("   ", "Canada")]
    #[case("Mexico", "\t")]
    fn test_validate_blank_names(#[case] home_team: &str, #[case] away_team: &str) {
        assert_that!(validate_team_names(home_team, away_team))
            .is_err()
            .is_equal_to(InvalidArgument::BlankTeamName);
    }

    #[test]
    fn test_validate_same_names() {
        assert_that!(validate_team_names("Mexico", "Mexico"))
            .is_err()
            .is_equal_to(InvalidArgument::SameTeamNames);
    }

    #[test]
    fn test_validate_names_case_sensitive() {
        assert_that!(validate_team_names("Mexico", "mexico")).is_ok();
    }

    #[test]
    fn test_error_messages() {
        assert_that!(Error::from(InvalidArgument::BlankTeamName).to_string())
            .is_equal_to("invalid argument: team names cannot be null or blank".to_string());
        assert_that!(Error::NotFound("invalid-id".into()).to_string())
            .is_equal_to("match does not exist with given id: invalid-id".to_string());
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = ScoreBoard::new();

        assert_that!(board.is_empty()).is_true();
        assert_that!(board.config()).is_equal_to(&ScoreBoardConfig::default());
    }
}
