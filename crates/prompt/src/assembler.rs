//! Structured prompt assembler.
//!
//! Builds a multi-section prompt at one of three detail levels. Sections
//! are emitted in a fixed canonical order (instruction, context,
//! objective, format, constraints, examples) and labeled with stable
//! Portuguese headers; the labels are part of the contract, not
//! incidental formatting.

use crate::types::{DetailLevel, Section};
use promptforge_core::{AppError, AppResult};
use std::collections::HashMap;

/// Assemble a structured prompt.
///
/// Validation and emission rules:
/// - every section required by `level` must be present as a key,
///   otherwise `MissingSection(name)`;
/// - a present-but-empty section (other than the instruction) is
///   silently omitted;
/// - sections beyond the requested level are ignored;
/// - emission follows `Section::CANONICAL` order.
///
/// Pure function of its inputs.
pub fn generate_structured(
    level: DetailLevel,
    sections: &HashMap<Section, String>,
) -> AppResult<String> {
    let required = level.required_sections();

    for section in required {
        if !sections.contains_key(section) {
            return Err(AppError::MissingSection(section.key().to_string()));
        }
    }

    tracing::debug!("Assembling {} prompt with {} sections", level, required.len());

    let output = match level {
        DetailLevel::Basic => sections[&Section::Instruction].trim().to_string(),
        DetailLevel::Detailed => assemble_detailed(sections, required),
        DetailLevel::Advanced => assemble_advanced(sections, required),
    };

    Ok(output)
}

/// Inline labels for the detailed level.
fn inline_label(section: Section) -> &'static str {
    match section {
        Section::Instruction => "",
        Section::Context => "Contexto:",
        Section::Objective => "Objetivo:",
        Section::Format => "Formato desejado:",
        Section::Constraints => "Restrições:",
        Section::Examples => "Exemplos:",
    }
}

/// Markdown headers for the advanced level.
fn header_label(section: Section) -> &'static str {
    match section {
        Section::Instruction => "# TAREFA",
        Section::Context => "# CONTEXTO",
        Section::Objective => "# OBJETIVO",
        Section::Format => "# FORMATO",
        Section::Constraints => "# RESTRIÇÕES",
        Section::Examples => "# EXEMPLOS",
    }
}

fn assemble_detailed(sections: &HashMap<Section, String>, required: &[Section]) -> String {
    let mut lines = Vec::new();

    for section in required.iter().skip(1) {
        let value = sections[section].trim();
        if value.is_empty() {
            continue;
        }
        lines.push(format!("{} {}", inline_label(*section), value));
    }

    let instruction = sections[&Section::Instruction].trim();
    if lines.is_empty() {
        instruction.to_string()
    } else {
        format!("{}\n\n{}", instruction, lines.join("\n"))
    }
}

fn assemble_advanced(sections: &HashMap<Section, String>, required: &[Section]) -> String {
    let mut blocks = Vec::new();

    for section in required {
        let value = sections[section].trim();
        if value.is_empty() && *section != Section::Instruction {
            continue;
        }
        blocks.push(format!("{}\n{}", header_label(*section), value));
    }

    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_sections() -> HashMap<Section, String> {
        let mut sections = HashMap::new();
        sections.insert(Section::Instruction, "Crie um plano de estudos".to_string());
        sections.insert(Section::Context, "Sou iniciante".to_string());
        sections.insert(Section::Objective, "Aprender Rust".to_string());
        sections.insert(Section::Format, "Plano semanal".to_string());
        sections.insert(Section::Constraints, "Recursos gratuitos".to_string());
        sections.insert(Section::Examples, "Semana 1: leitura do livro".to_string());
        sections
    }

    #[test]
    fn test_basic_emits_instruction_only() {
        // extra sections beyond the level are ignored, not an error
        let prompt = generate_structured(DetailLevel::Basic, &full_sections()).unwrap();
        assert_eq!(prompt, "Crie um plano de estudos");
        assert!(!prompt.contains("Contexto:"));
        assert!(!prompt.contains("# CONTEXTO"));
    }

    #[test]
    fn test_detailed_emits_labels_in_canonical_order() {
        let prompt = generate_structured(DetailLevel::Detailed, &full_sections()).unwrap();

        let ctx = prompt.find("Contexto:").unwrap();
        let obj = prompt.find("Objetivo:").unwrap();
        let fmt = prompt.find("Formato desejado:").unwrap();
        assert!(ctx < obj && obj < fmt);
        // advanced-only sections are not emitted at the detailed level
        assert!(!prompt.contains("Restrições:"));
        assert!(!prompt.contains("Exemplos:"));
    }

    #[test]
    fn test_detailed_omits_empty_optional_section() {
        let mut sections = full_sections();
        sections.insert(Section::Format, "".to_string());

        let prompt = generate_structured(DetailLevel::Detailed, &sections).unwrap();
        assert!(prompt.contains("Contexto:"));
        assert!(prompt.contains("Objetivo:"));
        assert!(!prompt.contains("Formato desejado:"));
    }

    #[test]
    fn test_detailed_missing_section_is_error() {
        let mut sections = full_sections();
        sections.remove(&Section::Objective);

        let err = generate_structured(DetailLevel::Detailed, &sections).unwrap_err();
        assert!(matches!(err, AppError::MissingSection(ref name) if name == "objective"));
    }

    #[test]
    fn test_advanced_emits_all_six_headers_in_order() {
        let prompt = generate_structured(DetailLevel::Advanced, &full_sections()).unwrap();

        let positions: Vec<usize> = [
            "# TAREFA",
            "# CONTEXTO",
            "# OBJETIVO",
            "# FORMATO",
            "# RESTRIÇÕES",
            "# EXEMPLOS",
        ]
        .iter()
        .map(|label| prompt.find(label).expect(label))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_advanced_missing_examples_is_error() {
        let mut sections = full_sections();
        sections.remove(&Section::Examples);

        let err = generate_structured(DetailLevel::Advanced, &sections).unwrap_err();
        assert!(matches!(err, AppError::MissingSection(ref name) if name == "examples"));
    }

    #[test]
    fn test_assemble_is_pure() {
        let sections = full_sections();
        let a = generate_structured(DetailLevel::Advanced, &sections).unwrap();
        let b = generate_structured(DetailLevel::Advanced, &sections).unwrap();
        assert_eq!(a, b);
    }
}
