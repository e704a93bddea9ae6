pub mod filter;
pub mod gitignore;
pub mod render;
pub mod walk;

pub use filter::IgnoreRules;
pub use gitignore::GitignorePatterns;
pub use walk::walk_dir;
