mod entry;
mod structure;

pub use entry::{EntryKind, FsEntry};
pub use structure::ProjectStructure;
