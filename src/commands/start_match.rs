use std::{
    future::{ready, Ready},
    task::{Context, Poll},
};

use tower::Service;

use crate::{
    domain::{Match, MatchId},
    ports::{clock::Clock, id::IdGenerator, store::MatchStore},
};

use super::{validate_team_names, Error, InvalidArgument, ScoreBoard};

pub struct StartMatch {
    pub home_team: String,
    pub away_team: String,
}

impl<S, C, G> ScoreBoard<S, C, G>
where
    S: MatchStore,
    C: Clock,
    G: IdGenerator,
{
    /// Start a scoreless match and return its identifier
    pub fn start_match(&mut self, home_team: &str, away_team: &str) -> Result<MatchId, Error> {
        if let Err(err) = validate_team_names(home_team, away_team) {
            tracing::debug!(home_team, away_team, error = %err, "rejected match start");
            return Err(err.into());
        }
        if self.config.reject_busy_teams {
            self.ensure_not_playing(home_team)?;
            self.ensure_not_playing(away_team)?;
        }

        let game = Match::new(
            home_team,
            away_team,
            self.clock.now(),
            self.next_start_order,
        );
        let match_id = self.ids.next_id();
        self.store.insert(match_id.clone(), game)?;
        self.next_start_order += 1;

        tracing::debug!(%match_id, home_team, away_team, "match started");
        Ok(match_id)
    }

    fn ensure_not_playing(&self, team_name: &str) -> Result<(), InvalidArgument> {
        if self.store.matches().any(|(_, game)| game.involves(team_name)) {
            tracing::debug!(team_name, "team already has an ongoing match");
            return Err(InvalidArgument::TeamAlreadyPlaying(team_name.to_string()));
        }

        Ok(())
    }
}

impl<S, C, G> Service<StartMatch> for ScoreBoard<S, C, G>
where
    S: MatchStore,
    C: Clock,
    G: IdGenerator,
{
    type Response = MatchId;
    type Error = Error;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: StartMatch) -> Self::Future {
        ready(self.start_match(&req.home_team, &req.away_team))
    }
}
