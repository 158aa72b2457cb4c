//! Slot filler: renders a template with caller-supplied slot values.

use crate::catalog::{Template, TemplateCatalog};
use crate::types::Category;
use handlebars::Handlebars;
use promptforge_core::{AppError, AppResult};
use std::collections::HashMap;

/// Fill a template with slot values.
///
/// Every slot referenced by the template must have a value; otherwise
/// this fails with `MissingSlot` naming the first absent slot, before
/// any text is produced. Values are inserted verbatim (no escaping),
/// in template segment order.
///
/// # Example
/// ```
/// use promptforge_prompt::catalog::TemplateCatalog;
/// use promptforge_prompt::types::Category;
/// use promptforge_prompt::filler::fill;
/// use std::collections::HashMap;
///
/// let catalog = TemplateCatalog::builtin();
/// let template = catalog.lookup(Category::Technical);
///
/// let mut values = HashMap::new();
/// values.insert("area".to_string(), "Rust".to_string());
/// values.insert("contexto".to_string(), "Estou escrevendo um tutorial.".to_string());
/// values.insert("conceito".to_string(), "ownership".to_string());
/// values.insert("nivel_detalhe".to_string(), "exemplos simples".to_string());
///
/// let prompt = fill(template, &values).unwrap();
/// assert!(prompt.contains("Rust"));
/// ```
pub fn fill(template: &Template, slot_values: &HashMap<String, String>) -> AppResult<String> {
    // Validate before rendering so failure never leaks partial output
    // and the error carries the offending slot name.
    for slot in template.slots() {
        if !slot_values.contains_key(&slot) {
            return Err(AppError::MissingSlot {
                slot,
                category: template.category.to_string(),
            });
        }
    }

    render_template(&template.text, slot_values)
}

/// Generate a basic prompt for a category from the built-in catalog.
pub fn generate_basic(
    category: Category,
    slot_values: &HashMap<String, String>,
) -> AppResult<String> {
    tracing::debug!("Generating basic prompt for category: {}", category);

    let catalog = TemplateCatalog::builtin();
    fill(catalog.lookup(category), slot_values)
}

/// Render a Handlebars template with slot values.
fn render_template(template: &str, values: &HashMap<String, String>) -> AppResult<String> {
    let mut handlebars = Handlebars::new();

    // Disable HTML escaping for plain text
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .register_template_string("prompt", template)
        .map_err(|e| AppError::Template(format!("Failed to register template: {}", e)))?;

    let rendered = handlebars
        .render("prompt", &values)
        .map_err(|e| AppError::Template(format!("Failed to render template: {}", e)))?;

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn technical_values() -> HashMap<String, String> {
        let mut values = HashMap::new();
        values.insert("area".to_string(), "inteligência artificial".to_string());
        values.insert(
            "contexto".to_string(),
            "Estou criando um tutorial introdutório.".to_string(),
        );
        values.insert(
            "conceito".to_string(),
            "como funcionam os transformers".to_string(),
        );
        values.insert(
            "nivel_detalhe".to_string(),
            "analogias simples e exemplos visuais".to_string(),
        );
        values
    }

    #[test]
    fn test_generate_basic_contains_all_values() {
        let values = technical_values();
        let prompt = generate_basic(Category::Technical, &values).unwrap();

        for value in values.values() {
            assert!(prompt.contains(value), "missing value: {}", value);
        }
        // no literal slot markers remain
        assert!(!prompt.contains("{{"));
        assert!(!prompt.contains("}}"));
    }

    #[test]
    fn test_generate_basic_missing_slot() {
        let mut values = technical_values();
        values.remove("conceito");

        let err = generate_basic(Category::Technical, &values).unwrap_err();
        match err {
            AppError::MissingSlot { slot, category } => {
                assert_eq!(slot, "conceito");
                assert_eq!(category, "technical");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_slot_for_every_category() {
        // an empty value map must fail for all five categories, never
        // returning partial text
        for category in Category::ALL {
            let result = generate_basic(category, &HashMap::new());
            assert!(matches!(result, Err(AppError::MissingSlot { .. })));
        }
    }

    #[test]
    fn test_fill_inserts_values_verbatim() {
        let template = Template::new(Category::Creative, "Antes {{x}} depois");
        let mut values = HashMap::new();
        values.insert("x".to_string(), "<b> & \"texto\"</b>".to_string());

        let rendered = fill(&template, &values).unwrap();
        assert_eq!(rendered, "Antes <b> & \"texto\"</b> depois");
    }

    #[test]
    fn test_fill_preserves_segment_order() {
        let template = Template::new(Category::Creative, "{{b}}-{{a}}");
        let mut values = HashMap::new();
        values.insert("a".to_string(), "1".to_string());
        values.insert("b".to_string(), "2".to_string());

        assert_eq!(fill(&template, &values).unwrap(), "2-1");
    }
}
