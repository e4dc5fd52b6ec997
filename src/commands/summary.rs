use std::{
    cmp::Ordering,
    future::{ready, Ready},
    task::{Context, Poll},
};

use tower::Service;

use crate::{
    domain::{Match, MatchId},
    ports::store::MatchStore,
};

use super::{Error, ScoreBoard};

/// Request for the formatted summary of all ongoing matches
pub struct MatchSummary;

impl<S, C, G> ScoreBoard<S, C, G>
where
    S: MatchStore,
{
    /// Ongoing matches in summary order
    ///
    /// Highest total score first. Matches with the same total score are ordered from the most
    /// recently started to the oldest.
    pub fn ongoing_matches(&self) -> Vec<(&MatchId, &Match)> {
        let mut matches: Vec<_> = self.store.matches().collect();
        matches.sort_by(|(_, a), (_, b)| summary_order(a, b));
        matches
    }

    /// One `"{home} {home score} - {away score} {away}"` line per ongoing match
    ///
    /// Empty when no match is being played.
    pub fn match_summary(&self) -> String {
        let lines: Vec<String> = self
            .ongoing_matches()
            .into_iter()
            .map(|(_, game)| game.to_string())
            .collect();
        tracing::trace!(matches = lines.len(), "built match summary");

        let mut summary = lines.join("\n");
        if self.config.trailing_newline && !lines.is_empty() {
            summary.push('\n');
        }
        summary
    }
}

fn summary_order(a: &Match, b: &Match) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.start_time.cmp(&a.start_time))
        .then_with(|| b.start_order.cmp(&a.start_order))
}

impl<S, C, G> Service<MatchSummary> for ScoreBoard<S, C, G>
where
    S: MatchStore,
{
    type Response = String;
    type Error = Error;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _req: MatchSummary) -> Self::Future {
        ready(Ok(self.match_summary()))
    }
}
