//! Optimize command handler.
//!
//! Runs the heuristic rewriter over a free-text prompt given inline or
//! read from a file.

use crate::export::{save_record, PromptRecord};
use clap::Args;
use promptforge_core::{AppConfig, AppError, AppResult};
use promptforge_prompt::optimize;
use std::path::PathBuf;

/// Optimize a free-text prompt
#[derive(Args, Debug)]
pub struct OptimizeCommand {
    /// The prompt to optimize
    pub prompt: Option<String>,

    /// Read the prompt from a file
    #[arg(short, long, conflicts_with = "prompt")]
    pub file: Option<PathBuf>,

    /// Save the optimized prompt to a JSON file
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Output as JSON (includes category, gaps and persona)
    #[arg(long)]
    pub json: bool,
}

impl OptimizeCommand {
    pub fn execute(&self, _config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing optimize command");

        let raw = self.get_prompt()?;
        let result = optimize(&raw)?;

        tracing::debug!(
            "Category: {}, gaps: {:?}, persona: {:?}",
            result.category,
            result.gaps,
            result.persona
        );

        if self.json {
            // OptimizationResult serializes with camelCase fields
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", result.text);

            // Rationale goes to stderr so stdout stays clean
            for gap in &result.gaps {
                tracing::info!("Detected gap: {}", gap);
            }
            if let Some(ref persona) = result.persona {
                tracing::info!("Applied persona: {}", persona);
            }
        }

        if let Some(ref path) = self.save {
            let mut record = PromptRecord::new(result.text.clone(), "optimize");
            record.category = Some(result.category.name().to_string());
            record.gaps = result.gaps.iter().map(|g| g.to_string()).collect();
            record.persona = result.persona.clone();
            save_record(path, &record)?;
        }

        Ok(())
    }

    /// Get the prompt text from the positional argument or a file.
    fn get_prompt(&self) -> AppResult<String> {
        if let Some(ref prompt) = self.prompt {
            return Ok(prompt.clone());
        }

        if let Some(ref path) = self.file {
            return std::fs::read_to_string(path).map_err(|e| {
                AppError::Config(format!("Failed to read prompt file {:?}: {}", path, e))
            });
        }

        Err(AppError::Config(
            "No prompt provided. Pass it inline or use --file".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn command(prompt: Option<&str>, file: Option<PathBuf>) -> OptimizeCommand {
        OptimizeCommand {
            prompt: prompt.map(|s| s.to_string()),
            file,
            save: None,
            json: false,
        }
    }

    #[test]
    fn test_get_prompt_inline() {
        let cmd = command(Some("texto"), None);
        assert_eq!(cmd.get_prompt().unwrap(), "texto");
    }

    #[test]
    fn test_get_prompt_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prompt.txt");
        fs::write(&path, "conteúdo do arquivo").unwrap();

        let cmd = command(None, Some(path));
        assert_eq!(cmd.get_prompt().unwrap(), "conteúdo do arquivo");
    }

    #[test]
    fn test_get_prompt_missing_sources() {
        let cmd = command(None, None);
        assert!(matches!(cmd.get_prompt(), Err(AppError::Config(_))));
    }
}
