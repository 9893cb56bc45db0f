// Shortcut store - ordered in-memory collection of shortcuts with suffix matching
//
// Insertion order is significant: it is the tie-break order when several
// triggers are suffixes of the same text.

use super::entry::Shortcut;
use super::id::ShortcutId;

/// Error types for shortcut store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortcutError {
    /// No shortcut with this ID is held by the store
    #[error("Shortcut with ID {0} not found")]
    NotFound(ShortcutId),
}

/// Owner of an ordered collection of shortcuts
///
/// Not synchronized. Hosts sharing a store across threads must wrap it in
/// their own lock.
#[derive(Debug, Clone, Default)]
pub struct ShortcutStore {
    /// Shortcuts in insertion order
    entries: Vec<Shortcut>,
}

impl ShortcutStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// All shortcuts in insertion order
    ///
    /// The slice cannot be used to modify the store. Clone an entry, edit the
    /// copy, then pass it to [`ShortcutStore::update`].
    pub fn list(&self) -> &[Shortcut] {
        &self.entries
    }

    /// Append a shortcut to the end of the collection
    ///
    /// Ids are not checked for uniqueness; keeping them unique is the caller's job.
    pub fn add(&mut self, entry: Shortcut) {
        crate::debug!(
            "Adding shortcut {} (trigger {:?})",
            entry.id(),
            entry.trigger()
        );
        self.entries.push(entry);
        crate::debug!("Shortcut store now holds {} entries", self.entries.len());
    }

    /// Replace the first shortcut whose id matches `entry`'s, keeping its position
    #[must_use = "this returns a Result that should be handled"]
    pub fn update(&mut self, entry: Shortcut) -> Result<(), ShortcutError> {
        let id = entry.id();
        match self.entries.iter_mut().find(|existing| existing.id() == id) {
            Some(slot) => {
                *slot = entry;
                crate::debug!("Updated shortcut {}", id);
                Ok(())
            }
            None => {
                crate::warn!("Cannot update shortcut {}: not found", id);
                Err(ShortcutError::NotFound(id))
            }
        }
    }

    /// Remove every shortcut with the given id
    ///
    /// Returns true if anything was removed.
    pub fn delete(&mut self, id: ShortcutId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id() != id);
        let removed = before - self.entries.len();

        if removed > 0 {
            crate::debug!(
                "Deleted {} shortcut(s) with ID {}, {} remaining",
                removed,
                id,
                self.entries.len()
            );
        }
        removed > 0
    }

    /// Find the expansion for text that ends in a shortcut trigger
    ///
    /// Shortcuts are tried in insertion order and the first whose
    /// `keyword + command` is a case-sensitive suffix of `text` wins, even if a
    /// later trigger is longer or shorter. `None` input never matches.
    pub fn find_expansion<'t>(&self, text: impl Into<Option<&'t str>>) -> Option<&str> {
        let text = text.into()?;

        let hit = self.entries.iter().find(|entry| entry.is_triggered_by(text))?;
        crate::trace!("Text matched shortcut {} ({:?})", hit.id(), hit.trigger());
        Some(hit.expansion_text())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
