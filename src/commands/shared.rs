use std::sync::{Arc, Mutex};

use crate::{
    domain::{Match, MatchId},
    ports::{clock::Clock, id::IdGenerator, store::MatchStore},
};

use super::{Error, ScoreBoard};

/// Cloneable handle to a [`ScoreBoard`] shared between threads
///
/// Every operation holds a single lock over the whole board, so each one observes and leaves the
/// store in a consistent state.
#[derive(Debug)]
pub struct SharedScoreBoard<S, C, G> {
    board: Arc<Mutex<ScoreBoard<S, C, G>>>,
}

impl<S, C, G> Clone for SharedScoreBoard<S, C, G> {
    fn clone(&self) -> Self {
        Self {
            board: self.board.clone(),
        }
    }
}

impl<S, C, G> From<ScoreBoard<S, C, G>> for SharedScoreBoard<S, C, G> {
    fn from(board: ScoreBoard<S, C, G>) -> Self {
        Self {
            board: Arc::new(Mutex::new(board)),
        }
    }
}

impl<S, C, G> SharedScoreBoard<S, C, G>
where
    S: MatchStore,
    C: Clock,
    G: IdGenerator,
{
    pub fn start_match(&self, home_team: &str, away_team: &str) -> Result<MatchId, Error> {
        self.board.lock()?.start_match(home_team, away_team)
    }

    pub fn update_score(
        &self,
        match_id: &MatchId,
        home_team: &str,
        away_team: &str,
        home_score: i32,
        away_score: i32,
    ) -> Result<(), Error> {
        self.board
            .lock()?
            .update_score(match_id, home_team, away_team, home_score, away_score)
    }

    pub fn end_match(&self, match_id: &MatchId) -> Result<Match, Error> {
        self.board.lock()?.end_match(match_id)
    }

    pub fn match_summary(&self) -> Result<String, Error> {
        Ok(self.board.lock()?.match_summary())
    }

    /// Run several operations while holding the lock
    pub fn with_board<R>(&self, f: impl FnOnce(&mut ScoreBoard<S, C, G>) -> R) -> Result<R, Error> {
        Ok(f(&mut *self.board.lock()?))
    }
}
