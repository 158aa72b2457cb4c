//! Loader for user-supplied template files.
//!
//! A template file is YAML with a list of named templates and an
//! optional list of optimization tips:
//!
//! ```yaml
//! templates:
//!   - name: explicacao-rapida
//!     category: technical
//!     template: "Explique {{conceito}} para {{publico}}."
//!     example:
//!       conceito: ownership
//!       publico: iniciantes
//! tips:
//!   - "Seja específico sobre o formato de saída desejado."
//! ```
//!
//! Loaded templates extend the built-in catalog; they never replace it.

use crate::catalog::Template;
use crate::types::Category;
use promptforge_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A named user template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDefinition {
    /// Unique template name
    pub name: String,

    /// Category this template belongs to
    pub category: Category,

    /// Template text with `{{slot}}` markers
    pub template: String,

    /// Example slot values, used for listing and documentation
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub example: HashMap<String, String>,
}

impl TemplateDefinition {
    /// Convert into an engine template for filling.
    pub fn to_template(&self) -> Template {
        Template::new(self.category, self.template.clone())
    }
}

/// Parsed contents of a template file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateFile {
    #[serde(default)]
    pub templates: Vec<TemplateDefinition>,

    /// Optimization tips, shown by the CLI in file order
    #[serde(default)]
    pub tips: Vec<String>,
}

impl TemplateFile {
    /// Find a template by name, case-insensitively.
    pub fn find(&self, name: &str) -> Option<&TemplateDefinition> {
        let name = name.to_lowercase();
        self.templates
            .iter()
            .find(|t| t.name.to_lowercase() == name)
    }

    /// All templates of a category, in file order.
    pub fn by_category(&self, category: Category) -> Vec<&TemplateDefinition> {
        self.templates
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }
}

/// Load and validate a template file.
pub fn load_templates(path: &Path) -> AppResult<TemplateFile> {
    tracing::debug!("Loading template file: {:?}", path);

    if !path.exists() {
        return Err(AppError::Config(format!(
            "Template file not found: {:?}",
            path
        )));
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("Failed to read template file {:?}: {}", path, e)))?;

    let file: TemplateFile = serde_yaml::from_str(&contents).map_err(|e| {
        AppError::Serialization(format!("Failed to parse template file {:?}: {}", path, e))
    })?;

    validate_templates(&file)?;

    tracing::info!(
        "Loaded {} templates and {} tips from {:?}",
        file.templates.len(),
        file.tips.len(),
        path
    );

    Ok(file)
}

/// List template files (.yml/.yaml) in a directory, sorted by name.
pub fn list_template_files(dir: &Path) -> AppResult<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let is_yaml = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("yml") | Some("yaml")
        );
        if path.is_file() && is_yaml {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Validate a loaded template file.
fn validate_templates(file: &TemplateFile) -> AppResult<()> {
    let mut seen = Vec::new();

    for def in &file.templates {
        if def.name.trim().is_empty() {
            return Err(AppError::Template(
                "Template name cannot be empty".to_string(),
            ));
        }

        if def.template.trim().is_empty() {
            return Err(AppError::Template(format!(
                "Template '{}' has an empty body",
                def.name
            )));
        }

        let lower = def.name.to_lowercase();
        if seen.contains(&lower) {
            return Err(AppError::Template(format!(
                "Duplicate template name: '{}'",
                def.name
            )));
        }
        seen.push(lower);
    }

    Ok(())
}
