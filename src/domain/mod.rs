use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Opaque identifier of an ongoing match
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MatchId(String);

impl MatchId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for MatchId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for MatchId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One side of a match
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Team {
    pub name: String,
    pub score: u32,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }
}

/// A match between two teams that is currently being played
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Match {
    pub home_team: Team,
    pub away_team: Team,
    /// When the match was started
    pub start_time: DateTime<Utc>,
    /// Position of this match in the order matches were started on the board
    ///
    /// Breaks ties between matches sharing the same `start_time`.
    pub start_order: u64,
}

impl Match {
    pub fn new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        start_time: DateTime<Utc>,
        start_order: u64,
    ) -> Self {
        Self {
            home_team: Team::new(home_team),
            away_team: Team::new(away_team),
            start_time,
            start_order,
        }
    }

    pub fn total_score(&self) -> u64 {
        u64::from(self.home_team.score) + u64::from(self.away_team.score)
    }

    pub fn set_score(&mut self, home_score: u32, away_score: u32) {
        self.home_team.score = home_score;
        self.away_team.score = away_score;
    }

    /// Whether the team plays on either side of this match
    pub fn involves(&self, team_name: &str) -> bool {
        self.home_team.name == team_name || self.away_team.name == team_name
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team.name, self.home_team.score, self.away_team.score, self.away_team.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speculoos::prelude::*;

    #[test]
    fn test_new_match_starts_scoreless() {
        let game = Match::new("Mexico", "Canada", Utc::now(), 0);

        assert_that!(game.home_team).is_equal_to(Team::new("Mexico"));
        assert_that!(game.away_team.score).is_equal_to(0);
        assert_that!(game.total_score()).is_equal_to(0);
    }

    #[test]
    fn test_total_score_does_not_overflow() {
        let mut game = Match::new("Spain", "Brazil", Utc::now(), 0);
        game.set_score(u32::MAX, u32::MAX);

        assert_that!(game.total_score()).is_equal_to(2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_display() {
        let mut game = Match::new("Spain", "Brazil", Utc::now(), 0);
        game.set_score(10, 2);

        assert_that!(game.to_string()).is_equal_to("Spain 10 - 2 Brazil".to_string());
    }

    #[test]
    fn test_involves() {
        let game = Match::new("Germany", "France", Utc::now(), 0);

        assert_that!(game.involves("Germany")).is_true();
        assert_that!(game.involves("France")).is_true();
        assert_that!(game.involves("france")).is_false();
    }
}
