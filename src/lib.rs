// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod io;
pub mod transform;

// Re-export commonly used types
pub use crate::commands::migrate::{migrate_directory, MigrateConfig};
pub use crate::io::walker::FileWalker;
pub use crate::transform::{clean_attributes, migrate_component};
