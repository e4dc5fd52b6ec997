use serde::Deserialize;

/// Behaviour switches for a [`ScoreBoard`](crate::ScoreBoard)
///
/// Missing fields fall back to their defaults, so hosts can embed a partial section in their own
/// configuration file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScoreBoardConfig {
    /// Refuse to start a match when one of its teams already plays in an ongoing match
    pub reject_busy_teams: bool,
    /// End the last summary line with a newline, like every other line
    pub trailing_newline: bool,
}

impl Default for ScoreBoardConfig {
    fn default() -> Self {
        Self {
            reject_busy_teams: false,
            trailing_newline: true,
        }
    }
}
