//! Command handlers for the Prompt Forge CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod generate;
pub mod optimize;
pub mod structured;
pub mod templates;

// Re-export command types for convenience
pub use generate::GenerateCommand;
pub use optimize::OptimizeCommand;
pub use structured::StructuredCommand;
pub use templates::TemplatesCommand;
