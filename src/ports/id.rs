use crate::domain::MatchId;

/// Generator for match identifiers
///
/// Identifiers only need to be unique among ongoing matches, but concrete generators should make
/// collisions negligible so that ended identifiers are not handed out again.
#[mockall::automock]
pub trait IdGenerator {
    fn next_id(&self) -> MatchId;
}
