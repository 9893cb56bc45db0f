// Shortcut identifiers - opaque 128-bit ids and the generators that mint them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Opaque unique identifier for a shortcut
///
/// Serializes as a plain hyphenated UUID string so hosts can store it as a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortcutId(Uuid);

impl ShortcutId {
    /// Generate a fresh random (v4) identifier
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, e.g. one loaded from host storage
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ShortcutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ShortcutId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for ShortcutId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Source of fresh shortcut identifiers.
///
/// Every call must return an id the generator has never returned before.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ShortcutId;
}

/// Default generator backed by UUID v4
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> ShortcutId {
        ShortcutId::new_random()
    }
}

/// Deterministic generator yielding ids 1, 2, 3, ... for reproducible tests
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a generator whose first id is `start`
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> ShortcutId {
        let value = self.next.fetch_add(1, Ordering::Relaxed);
        ShortcutId(Uuid::from_u128(u128::from(value)))
    }
}

#[cfg(test)]
#[path = "id_test.rs"]
mod tests;
