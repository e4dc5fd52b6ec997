use crate::{
    domain::{Match, MatchId},
    ports::store::{Error, MatchStore},
};
use std::collections::{hash_map::Entry, HashMap};

#[derive(Clone, Debug, Default)]
pub struct MemoryMatchStore {
    matches: HashMap<MatchId, Match>,
}

impl MatchStore for MemoryMatchStore {
    fn insert(&mut self, match_id: MatchId, game: Match) -> Result<(), Error> {
        match self.matches.entry(match_id) {
            // Identifier already belongs to an ongoing match
            Entry::Occupied(entry) => Err(Error::DuplicateId(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(game);
                Ok(())
            }
        }
    }

    fn get(&self, match_id: &MatchId) -> Option<&Match> {
        self.matches.get(match_id)
    }

    fn get_mut(&mut self, match_id: &MatchId) -> Option<&mut Match> {
        self.matches.get_mut(match_id)
    }

    fn remove(&mut self, match_id: &MatchId) -> Option<Match> {
        self.matches.remove(match_id)
    }

    fn matches(&self) -> Box<dyn Iterator<Item = (&MatchId, &Match)> + '_> {
        Box::new(self.matches.iter())
    }

    fn len(&self) -> usize {
        self.matches.len()
    }
}
