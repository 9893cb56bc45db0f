// Shortcut entry - a keyword+command trigger and the text it expands into

use serde::{Deserialize, Serialize};

use super::id::{IdGenerator, ShortcutId};

/// A text-expansion rule
///
/// Typing `keyword` immediately followed by `command` (e.g. "gm" + ";")
/// expands into `expansion_text`. No field is validated; empty strings are
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortcut {
    id: ShortcutId,
    command: String,
    keyword: String,
    expansion_text: String,
}

impl Shortcut {
    /// Create a shortcut with a freshly generated random id
    pub fn new(
        command: impl Into<String>,
        keyword: impl Into<String>,
        expansion_text: impl Into<String>,
    ) -> Self {
        Self::with_id(ShortcutId::new_random(), command, keyword, expansion_text)
    }

    /// Create a shortcut with a caller-supplied id, e.g. when reconstituting
    /// entries from host storage
    pub fn with_id(
        id: ShortcutId,
        command: impl Into<String>,
        keyword: impl Into<String>,
        expansion_text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            command: command.into(),
            keyword: keyword.into(),
            expansion_text: expansion_text.into(),
        }
    }

    /// Create a shortcut whose id is drawn from `generator`
    pub fn with_generator(
        generator: &(impl IdGenerator + ?Sized),
        command: impl Into<String>,
        keyword: impl Into<String>,
        expansion_text: impl Into<String>,
    ) -> Self {
        Self::with_id(generator.next_id(), command, keyword, expansion_text)
    }

    pub fn id(&self) -> ShortcutId {
        self.id
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn set_command(&mut self, command: impl Into<String>) {
        self.command = command.into();
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    pub fn expansion_text(&self) -> &str {
        &self.expansion_text
    }

    pub fn set_expansion_text(&mut self, expansion_text: impl Into<String>) {
        self.expansion_text = expansion_text.into();
    }

    /// The literal string that fires this shortcut: keyword then command, no separator
    pub fn trigger(&self) -> String {
        format!("{}{}", self.keyword, self.command)
    }

    /// Whether `text` ends with this shortcut's trigger (case-sensitive)
    pub fn is_triggered_by(&self, text: &str) -> bool {
        text.strip_suffix(self.command.as_str())
            .is_some_and(|rest| rest.ends_with(self.keyword.as_str()))
    }
}

#[cfg(test)]
#[path = "entry_test.rs"]
mod tests;
