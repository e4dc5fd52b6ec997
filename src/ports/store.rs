use crate::domain::{Match, MatchId};

/// Storage for ongoing matches, keyed by their identifier
pub trait MatchStore {
    /// Store a newly started match
    ///
    /// Fails if `match_id` already belongs to an ongoing match. The existing match is left
    /// untouched in that case.
    fn insert(&mut self, match_id: MatchId, game: Match) -> Result<(), Error>;
    fn get(&self, match_id: &MatchId) -> Option<&Match>;
    fn get_mut(&mut self, match_id: &MatchId) -> Option<&mut Match>;
    fn remove(&mut self, match_id: &MatchId) -> Option<Match>;
    /// All ongoing matches, in no particular order
    fn matches(&self) -> Box<dyn Iterator<Item = (&MatchId, &Match)> + '_>;
    fn len(&self) -> usize;

    fn contains(&self, match_id: &MatchId) -> bool {
        self.get(match_id).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Two ongoing matches would share the same identifier
    #[error("match id {0} is already in use")]
    DuplicateId(MatchId),
}
