//! Prompt engine for Prompt Forge.
//!
//! This crate provides the prompt-construction engine:
//! - Category-keyed template catalog with named slots
//! - Slot filling with Handlebars rendering
//! - Structured prompt assembly at three detail levels
//! - Heuristic optimization of free-text prompts
//! - YAML-based user template files
//!
//! Every operation is a pure function over immutable, caller-supplied
//! input and static catalogs; no state is kept between calls.

pub mod assembler;
pub mod catalog;
pub mod filler;
pub mod loader;
pub mod optimizer;
pub mod persona;
pub mod types;

// Re-export the engine entry points and main types
pub use assembler::generate_structured;
pub use catalog::{Template, TemplateCatalog};
pub use filler::{fill, generate_basic};
pub use loader::{list_template_files, load_templates, TemplateDefinition, TemplateFile};
pub use optimizer::optimize;
pub use persona::PersonaCatalog;
pub use types::{Category, DetailLevel, Gap, OptimizationResult, Section};
