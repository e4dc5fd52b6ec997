use std::{
    future::{ready, Ready},
    task::{Context, Poll},
};

use tower::Service;

use crate::{domain::MatchId, ports::store::MatchStore};

use super::{validate_team_names, Error, InvalidArgument, ScoreBoard};

pub struct UpdateScore {
    pub match_id: MatchId,
    pub home_team: String,
    pub away_team: String,
    pub home_score: i32,
    pub away_score: i32,
}

impl<S, C, G> ScoreBoard<S, C, G>
where
    S: MatchStore,
{
    /// Overwrite both scores of an ongoing match
    ///
    /// Scores may go down, to correct an earlier update. Nothing is changed when any check fails.
    pub fn update_score(
        &mut self,
        match_id: &MatchId,
        home_team: &str,
        away_team: &str,
        home_score: i32,
        away_score: i32,
    ) -> Result<(), Error> {
        validate_team_names(home_team, away_team)?;
        let (Ok(home_score), Ok(away_score)) =
            (u32::try_from(home_score), u32::try_from(away_score))
        else {
            tracing::debug!(%match_id, home_score, away_score, "rejected negative score");
            return Err(InvalidArgument::NegativeScore.into());
        };

        let game = self
            .store
            .get_mut(match_id)
            .ok_or_else(|| Error::NotFound(match_id.clone()))?;
        if game.home_team.name != home_team || game.away_team.name != away_team {
            tracing::debug!(
                %match_id,
                home_team,
                away_team,
                "team names do not match the stored match"
            );
            return Err(InvalidArgument::TeamMismatch.into());
        }

        game.set_score(home_score, away_score);
        tracing::debug!(%match_id, home_score, away_score, "score updated");
        Ok(())
    }
}

impl<S, C, G> Service<UpdateScore> for ScoreBoard<S, C, G>
where
    S: MatchStore,
{
    type Response = ();
    type Error = Error;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: UpdateScore) -> Self::Future {
        ready(self.update_score(
            &req.match_id,
            &req.home_team,
            &req.away_team,
            req.home_score,
            req.away_score,
        ))
    }
}
