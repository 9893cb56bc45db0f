// Shortcuts module - keyword+command rules that expand into full text

pub mod entry;
pub mod id;
pub mod store;

pub use entry::Shortcut;
pub use id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator, ShortcutId};
pub use store::{ShortcutError, ShortcutStore};
