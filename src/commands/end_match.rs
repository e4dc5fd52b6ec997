use std::{
    future::{ready, Ready},
    task::{Context, Poll},
};

use tower::Service;

use crate::{
    domain::{Match, MatchId},
    ports::store::MatchStore,
};

use super::{Error, ScoreBoard};

pub struct EndMatch {
    pub match_id: MatchId,
}

impl<S, C, G> ScoreBoard<S, C, G>
where
    S: MatchStore,
{
    /// Remove a match from the board, returning its final state
    pub fn end_match(&mut self, match_id: &MatchId) -> Result<Match, Error> {
        let game = self
            .store
            .remove(match_id)
            .ok_or_else(|| Error::NotFound(match_id.clone()))?;

        tracing::debug!(%match_id, final_score = %game, "match ended");
        Ok(game)
    }
}

impl<S, C, G> Service<EndMatch> for ScoreBoard<S, C, G>
where
    S: MatchStore,
{
    type Response = Match;
    type Error = Error;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: EndMatch) -> Self::Future {
        ready(self.end_match(&req.match_id))
    }
}
