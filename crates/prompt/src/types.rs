//! Domain entities for the prompt engine.
//!
//! Everything here is a value object: no shared mutable state, no
//! identity beyond content, constructed and consumed within one call.

use promptforge_core::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prompt category. A closed set: the built-in catalogs cover exactly
/// these five tags.
///
/// Parsing accepts both the English names and the Portuguese aliases
/// used by the original templates (e.g. "técnico" for technical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[serde(alias = "criativo")]
    Creative,
    #[serde(alias = "técnico", alias = "tecnico")]
    Technical,
    #[serde(alias = "análise", alias = "analise")]
    Analysis,
    #[serde(alias = "instrução", alias = "instrucao")]
    Instruction,
    #[serde(alias = "pesquisa")]
    Research,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Creative,
        Category::Technical,
        Category::Analysis,
        Category::Instruction,
        Category::Research,
    ];

    /// Stable lowercase name, used in error messages and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Creative => "creative",
            Category::Technical => "technical",
            Category::Analysis => "analysis",
            Category::Instruction => "instruction",
            Category::Research => "research",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "creative" | "criativo" => Ok(Category::Creative),
            "technical" | "técnico" | "tecnico" => Ok(Category::Technical),
            "analysis" | "análise" | "analise" => Ok(Category::Analysis),
            "instruction" | "instrução" | "instrucao" => Ok(Category::Instruction),
            "research" | "pesquisa" => Ok(Category::Research),
            other => Err(AppError::UnknownCategory(other.to_string())),
        }
    }
}

/// Detail level for structured prompt assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    #[serde(alias = "básico", alias = "basico")]
    Basic,
    #[serde(alias = "detalhado")]
    Detailed,
    #[serde(alias = "avançado", alias = "avancado")]
    Advanced,
}

impl DetailLevel {
    /// Sections required at this level, in canonical order.
    ///
    /// Basic requires only the instruction; detailed adds context,
    /// objective and format; advanced adds constraints and examples.
    pub fn required_sections(&self) -> &'static [Section] {
        match self {
            DetailLevel::Basic => &Section::CANONICAL[..1],
            DetailLevel::Detailed => &Section::CANONICAL[..4],
            DetailLevel::Advanced => &Section::CANONICAL[..6],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DetailLevel::Basic => "basic",
            DetailLevel::Detailed => "detailed",
            DetailLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DetailLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" | "básico" | "basico" => Ok(DetailLevel::Basic),
            "detailed" | "detalhado" => Ok(DetailLevel::Detailed),
            "advanced" | "avançado" | "avancado" => Ok(DetailLevel::Advanced),
            other => Err(AppError::Config(format!(
                "Unknown detail level: '{}'. Available: basic, detailed, advanced",
                other
            ))),
        }
    }
}

/// A structural section of an assembled prompt.
///
/// `CANONICAL` fixes the emission order; the assembler never emits
/// sections in any other order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Instruction,
    Context,
    Objective,
    Format,
    Constraints,
    Examples,
}

impl Section {
    /// Canonical emission order.
    pub const CANONICAL: [Section; 6] = [
        Section::Instruction,
        Section::Context,
        Section::Objective,
        Section::Format,
        Section::Constraints,
        Section::Examples,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Section::Instruction => "instruction",
            Section::Context => "context",
            Section::Objective => "objective",
            Section::Format => "format",
            Section::Constraints => "constraints",
            Section::Examples => "examples",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A structural element judged absent from a raw prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gap {
    Context,
    Objective,
    Format,
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gap::Context => "missing context",
            Gap::Objective => "missing objective",
            Gap::Format => "missing format",
        };
        f.write_str(name)
    }
}

/// Result of optimizing a raw prompt.
///
/// Produced fresh per call; never stored by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// The rewritten prompt text
    pub text: String,

    /// Category the raw prompt was classified into
    pub category: Category,

    /// Structural gaps detected, in detection order
    pub gaps: Vec<Gap>,

    /// Persona framing applied, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_english_and_portuguese() {
        assert_eq!("technical".parse::<Category>().unwrap(), Category::Technical);
        assert_eq!("técnico".parse::<Category>().unwrap(), Category::Technical);
        assert_eq!("Pesquisa".parse::<Category>().unwrap(), Category::Research);
        assert_eq!("  creative ".parse::<Category>().unwrap(), Category::Creative);
    }

    #[test]
    fn test_category_parse_unknown() {
        let err = "poetry".parse::<Category>().unwrap_err();
        assert!(matches!(err, AppError::UnknownCategory(ref s) if s == "poetry"));
    }

    #[test]
    fn test_detail_level_required_sections() {
        assert_eq!(DetailLevel::Basic.required_sections(), &[Section::Instruction]);
        assert_eq!(
            DetailLevel::Detailed.required_sections(),
            &[
                Section::Instruction,
                Section::Context,
                Section::Objective,
                Section::Format
            ]
        );
        assert_eq!(DetailLevel::Advanced.required_sections().len(), 6);
    }

    #[test]
    fn test_detail_level_parse_aliases() {
        assert_eq!("básico".parse::<DetailLevel>().unwrap(), DetailLevel::Basic);
        assert_eq!(
            "avancado".parse::<DetailLevel>().unwrap(),
            DetailLevel::Advanced
        );
        assert!("extreme".parse::<DetailLevel>().is_err());
    }

    #[test]
    fn test_optimization_result_json_shape() {
        let result = OptimizationResult {
            text: "x".to_string(),
            category: Category::Creative,
            gaps: vec![Gap::Objective, Gap::Format],
            persona: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["category"], "creative");
        assert_eq!(json["gaps"][0], "objective");
        // persona is omitted entirely when absent
        assert!(json.get("persona").is_none());
    }
}
