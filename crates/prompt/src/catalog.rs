//! Built-in template catalog.
//!
//! One parametrized text pattern per category, with Handlebars-style
//! `{{slot}}` markers. The catalog is a closed, fixed set: extension
//! happens through user template files (see `loader`), never by mutating
//! the built-ins.

use crate::types::Category;
use serde::{Deserialize, Serialize};

/// Template body per category. Slot names are ASCII so they are valid
/// Handlebars paths; the surrounding text keeps the original Portuguese
/// phrasing.
const BUILTIN_TEMPLATES: [(Category, &str); 5] = [
    (
        Category::Creative,
        "Atue como {{persona}}. {{contexto}} Crie {{tipo_saida}} sobre {{tema}} com {{estilo}}.",
    ),
    (
        Category::Technical,
        "Você é um especialista em {{area}}. {{contexto}} Explique {{conceito}} com {{nivel_detalhe}}.",
    ),
    (
        Category::Analysis,
        "Como {{persona}}, analise {{objeto_analise}}. {{contexto}} Forneça {{tipo_analise}} considerando {{aspectos}}.",
    ),
    (
        Category::Instruction,
        "Atue como {{persona}}. {{contexto}} Forneça instruções detalhadas sobre como {{tarefa}}, considerando {{consideracoes}}.",
    ),
    (
        Category::Research,
        "Como pesquisador em {{area}}, {{contexto}} Investigue {{topico}} e forneça {{tipo_resultado}} focando em {{aspectos}}.",
    ),
];

/// A parametrized prompt template: literal text interleaved with named
/// slots, keyed by category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Category this template belongs to
    pub category: Category,

    /// Template text with `{{slot}}` markers
    pub text: String,
}

impl Template {
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }

    /// Slot names referenced by this template, in order of first
    /// appearance. The order matches the template text, which is what
    /// determines the assembled prompt's word order.
    pub fn slots(&self) -> Vec<String> {
        let mut names = Vec::new();
        let mut rest = self.text.as_str();

        while let Some(start) = rest.find("{{") {
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => {
                    let name = after[..end].trim();
                    if !name.is_empty() && !names.iter().any(|n| n == name) {
                        names.push(name.to_string());
                    }
                    rest = &after[end + 2..];
                }
                None => break, // unterminated marker, nothing more to scan
            }
        }

        names
    }
}

/// Static mapping from category to its built-in template.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Build the catalog of the five built-in templates.
    pub fn builtin() -> Self {
        let templates = BUILTIN_TEMPLATES
            .iter()
            .map(|(category, text)| Template::new(*category, *text))
            .collect();
        Self { templates }
    }

    /// Look up the template for a category.
    ///
    /// `Category` is a closed enum and every category has a built-in
    /// template, so lookup is total. Unknown category strings are
    /// rejected earlier, at `Category` parsing.
    pub fn lookup(&self, category: Category) -> &Template {
        self.templates
            .iter()
            .find(|t| t.category == category)
            .unwrap_or(&self.templates[0])
    }

    /// All built-in templates, in catalog order.
    pub fn all(&self) -> &[Template] {
        &self.templates
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
