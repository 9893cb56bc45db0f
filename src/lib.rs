// Text-expansion shortcuts: an ordered rule store and the suffix matcher that
// decides which rule applies to freshly typed text.

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod shortcuts;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use shortcuts::{
    IdGenerator, RandomIdGenerator, SequentialIdGenerator, Shortcut, ShortcutError, ShortcutId,
    ShortcutStore,
};
