use uuid::Uuid;

use crate::{domain::MatchId, ports::id::IdGenerator};

/// Random v4 UUIDs, rendered in their hyphenated form
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> MatchId {
        Uuid::new_v4().to_string().into()
    }
}
