//! Generate command handler.
//!
//! Fills a category template (built-in or from a user template file)
//! with slot values given as `key=value` pairs.

use crate::export::{save_record, PromptRecord};
use clap::Args;
use promptforge_core::{AppConfig, AppError, AppResult};
use promptforge_prompt::{fill, generate_basic, load_templates, Category};
use std::collections::HashMap;
use std::path::PathBuf;

/// Generate a basic prompt from a category template
#[derive(Args, Debug)]
pub struct GenerateCommand {
    /// Prompt category (creative, technical, analysis, instruction, research)
    #[arg(short = 'C', long)]
    pub category: String,

    /// Slot value as key=value (repeatable)
    #[arg(short, long = "slot", value_name = "KEY=VALUE")]
    pub slots: Vec<String>,

    /// Use a named template from the user template file instead of the
    /// built-in one
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Save the generated prompt to a JSON file
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing generate command");
        tracing::debug!("Generate options: {:?}", self);

        let category: Category = self.category.parse()?;
        let slot_values = parse_slots(&self.slots)?;

        let prompt = match &self.name {
            Some(name) => self.fill_named_template(config, name, &slot_values)?,
            None => generate_basic(category, &slot_values)?,
        };

        if self.json {
            let output = serde_json::json!({
                "prompt": prompt,
                "category": category.name(),
                "slots": slot_values,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", prompt);
        }

        if let Some(ref path) = self.save {
            let mut record = PromptRecord::new(prompt, "generate");
            record.category = Some(category.name().to_string());
            save_record(path, &record)?;
        }

        Ok(())
    }

    fn fill_named_template(
        &self,
        config: &AppConfig,
        name: &str,
        slot_values: &HashMap<String, String>,
    ) -> AppResult<String> {
        let path = config.templates_file.as_ref().ok_or_else(|| {
            AppError::Config(
                "No template file configured. Use --templates or PROMPTFORGE_TEMPLATES"
                    .to_string(),
            )
        })?;

        let file = load_templates(path)?;
        let def = file.find(name).ok_or_else(|| {
            AppError::Template(format!("Template '{}' not found in {:?}", name, path))
        })?;

        fill(&def.to_template(), slot_values)
    }
}

/// Parse `key=value` slot arguments.
fn parse_slots(raw: &[String]) -> AppResult<HashMap<String, String>> {
    let mut values = HashMap::new();

    for pair in raw {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            AppError::Config(format!("Invalid slot '{}': expected KEY=VALUE", pair))
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::Config(format!(
                "Invalid slot '{}': empty key",
                pair
            )));
        }

        values.insert(key.to_string(), value.to_string());
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slots() {
        let raw = vec![
            "area=segurança".to_string(),
            "conceito=injeção de SQL".to_string(),
        ];
        let values = parse_slots(&raw).unwrap();
        assert_eq!(values["area"], "segurança");
        assert_eq!(values["conceito"], "injeção de SQL");
    }

    #[test]
    fn test_parse_slots_value_may_contain_equals() {
        let raw = vec!["formula=a=b+c".to_string()];
        let values = parse_slots(&raw).unwrap();
        assert_eq!(values["formula"], "a=b+c");
    }

    #[test]
    fn test_parse_slots_rejects_missing_separator() {
        let raw = vec!["sem-igual".to_string()];
        assert!(parse_slots(&raw).is_err());
    }

    #[test]
    fn test_parse_slots_rejects_empty_key() {
        let raw = vec!["=valor".to_string()];
        assert!(parse_slots(&raw).is_err());
    }
}
