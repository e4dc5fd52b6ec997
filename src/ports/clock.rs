use chrono::{DateTime, Utc};

/// Source of start times for new matches
#[mockall::automock]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
