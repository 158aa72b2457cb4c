//! Structured command handler.
//!
//! Assembles a multi-section prompt at a chosen detail level. Sections
//! not given on the command line are absent, which is an error when the
//! level requires them; passing an empty string omits the section
//! gracefully.

use crate::export::{save_record, PromptRecord};
use clap::Args;
use promptforge_core::{AppConfig, AppResult};
use promptforge_prompt::{generate_structured, DetailLevel, Section};
use std::collections::HashMap;
use std::path::PathBuf;

/// Assemble a structured prompt at a detail level
#[derive(Args, Debug)]
pub struct StructuredCommand {
    /// Detail level (basic, detailed, advanced)
    #[arg(short, long, default_value = "basic")]
    pub level: String,

    /// Main instruction
    #[arg(short, long)]
    pub instruction: String,

    /// Context section
    #[arg(long)]
    pub context: Option<String>,

    /// Objective section
    #[arg(long)]
    pub objective: Option<String>,

    /// Desired output format section
    #[arg(long)]
    pub format: Option<String>,

    /// Constraints section
    #[arg(long)]
    pub constraints: Option<String>,

    /// Examples section
    #[arg(long)]
    pub examples: Option<String>,

    /// Save the assembled prompt to a JSON file
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl StructuredCommand {
    pub fn execute(&self, _config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing structured command");
        tracing::debug!("Structured options: {:?}", self);

        let level: DetailLevel = self.level.parse()?;
        let sections = self.sections();

        let prompt = generate_structured(level, &sections)?;

        if self.json {
            let output = serde_json::json!({
                "prompt": prompt,
                "level": level.name(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", prompt);
        }

        if let Some(ref path) = self.save {
            let mut record = PromptRecord::new(prompt, "structured");
            record.level = Some(level.name().to_string());
            save_record(path, &record)?;
        }

        Ok(())
    }

    /// Collect supplied sections. Only flags actually given become keys;
    /// the engine enforces which keys the level requires.
    fn sections(&self) -> HashMap<Section, String> {
        let mut sections = HashMap::new();
        sections.insert(Section::Instruction, self.instruction.clone());

        let optional = [
            (Section::Context, &self.context),
            (Section::Objective, &self.objective),
            (Section::Format, &self.format),
            (Section::Constraints, &self.constraints),
            (Section::Examples, &self.examples),
        ];

        for (section, value) in optional {
            if let Some(value) = value {
                sections.insert(section, value.clone());
            }
        }

        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(level: &str) -> StructuredCommand {
        StructuredCommand {
            level: level.to_string(),
            instruction: "Crie um plano".to_string(),
            context: Some("Sou iniciante".to_string()),
            objective: Some("Aprender Rust".to_string()),
            format: None,
            constraints: None,
            examples: None,
            save: None,
            json: false,
        }
    }

    #[test]
    fn test_sections_only_includes_given_flags() {
        let sections = command("detailed").sections();
        assert_eq!(sections.len(), 3);
        assert!(sections.contains_key(&Section::Instruction));
        assert!(!sections.contains_key(&Section::Format));
    }

    #[test]
    fn test_missing_required_section_surfaces_engine_error() {
        // detailed requires format; the flag was not given
        let cmd = command("detailed");
        let level: DetailLevel = cmd.level.parse().unwrap();
        let result = generate_structured(level, &cmd.sections());
        assert!(result.is_err());
    }
}
