//! Persona catalog.
//!
//! Static mapping from category (and optionally a domain hint) to a
//! short ordered list of persona descriptions. An empty suggestion list
//! is a normal outcome, not an error: creative prompts deliberately ship
//! with no default persona so open-ended requests are not biased toward
//! an expert framing.

use crate::types::Category;

/// Base persona suggestions per category, in preference order.
const BASE_PERSONAS: [(Category, &[&str]); 5] = [
    (Category::Creative, &[]),
    (
        Category::Technical,
        &["um especialista renomado", "um consultor experiente"],
    ),
    (
        Category::Analysis,
        &["um analista crítico", "um estrategista inovador"],
    ),
    (
        Category::Instruction,
        &["um mentor dedicado", "um comunicador habilidoso"],
    ),
    (
        Category::Research,
        &["um pesquisador premiado", "um professor universitário"],
    ),
];

/// Domain-specific personas. When a domain hint matches one of these
/// keys the domain list wins over the category base list.
const DOMAIN_PERSONAS: [(&str, &[&str]); 4] = [
    ("código", &["um engenheiro de software experiente"]),
    ("dados", &["um cientista de dados"]),
    ("api", &["um arquiteto de sistemas"]),
    ("algoritmo", &["um cientista da computação"]),
];

/// Static persona lookup table.
#[derive(Debug, Clone, Default)]
pub struct PersonaCatalog;

impl PersonaCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Suggest personas for a category, optionally refined by a domain
    /// hint (e.g. the keyword that classified the prompt).
    ///
    /// Returns an ordered, possibly empty list. Absence of a suggestion
    /// is a normal, non-exceptional outcome.
    pub fn suggest(&self, category: Category, domain_hint: Option<&str>) -> &'static [&'static str] {
        if let Some(hint) = domain_hint {
            let hint = hint.trim().to_lowercase();
            for (domain, personas) in DOMAIN_PERSONAS {
                if domain == hint {
                    return personas;
                }
            }
        }

        for (cat, personas) in BASE_PERSONAS {
            if cat == category {
                return personas;
            }
        }

        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technical_has_personas() {
        let catalog = PersonaCatalog::new();
        let personas = catalog.suggest(Category::Technical, None);
        assert!(!personas.is_empty());
        assert_eq!(personas[0], "um especialista renomado");
    }

    #[test]
    fn test_creative_has_no_default_persona() {
        let catalog = PersonaCatalog::new();
        assert!(catalog.suggest(Category::Creative, None).is_empty());
    }

    #[test]
    fn test_domain_hint_wins_over_base_list() {
        let catalog = PersonaCatalog::new();
        let personas = catalog.suggest(Category::Technical, Some("código"));
        assert_eq!(personas, &["um engenheiro de software experiente"]);
    }

    #[test]
    fn test_unmatched_hint_falls_back_to_base_list() {
        let catalog = PersonaCatalog::new();
        let personas = catalog.suggest(Category::Research, Some("astronomia"));
        assert_eq!(personas[0], "um pesquisador premiado");
    }
}
