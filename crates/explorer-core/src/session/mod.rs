// crates/explorer-core/src/session/mod.rs

//! # Page Sessions
//!
//! Per-page units that fetch on mount and expose loading/error state:
//! [`CountryListSession`] for the searchable list and
//! [`CountryDetailSession`] for one country plus its border countries.
//!
//! Both units follow `Idle -> Loading -> {Ready, Error}`. A unit that is torn
//! down (or superseded by a newer load) drops any result that arrives late,
//! so a consumer that went away is never updated.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

mod detail;
mod list;

pub use detail::{BorderState, CountryDetailSession, DetailState};
pub use list::CountryListSession;

/// Coarse state of a session unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// LIFECYCLE GUARD
// -----------------------------------------------------------------------------

/// Identifies one load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ticket(u64);

/// Tracks the newest load attempt and whether the unit was torn down.
#[derive(Debug, Default)]
pub(crate) struct Lifecycle {
    generation: AtomicU64,
    torn_down: AtomicBool,
}

impl Lifecycle {
    /// Starts a new attempt, superseding older ones. `None` after teardown.
    pub(crate) fn begin(&self) -> Option<Ticket> {
        if self.torn_down.load(Ordering::SeqCst) {
            return None;
        }
        Some(Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1))
    }

    pub(crate) fn is_current(&self, ticket: Ticket) -> bool {
        !self.torn_down.load(Ordering::SeqCst)
            && self.generation.load(Ordering::SeqCst) == ticket.0
    }

    pub(crate) fn teardown(&self) {
        self.torn_down.store(true, Ordering::SeqCst);
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }
}

/// Session state is plain data; a poisoned lock still holds a usable value.
pub(crate) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}


#[cfg(test)]
pub(crate) mod test_support;
