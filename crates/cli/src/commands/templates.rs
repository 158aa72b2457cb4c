//! Templates command handler.
//!
//! Lists the built-in catalog, user templates and optimization tips.

use clap::Args;
use promptforge_core::{AppConfig, AppResult};
use promptforge_prompt::{load_templates, Category, TemplateCatalog};

/// List templates and optimization tips
#[derive(Args, Debug)]
pub struct TemplatesCommand {
    /// Filter by category
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Show optimization tips from the user template file
    #[arg(long)]
    pub tips: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl TemplatesCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing templates command");

        let filter: Option<Category> = match &self.category {
            Some(raw) => Some(raw.parse()?),
            None => None,
        };

        let catalog = TemplateCatalog::builtin();
        let user_file = match &config.templates_file {
            Some(path) => Some(load_templates(path)?),
            None => None,
        };

        if self.json {
            return self.print_json(&catalog, user_file.as_ref(), filter);
        }

        println!("Built-in templates:");
        for template in catalog.all() {
            if filter.map_or(false, |c| c != template.category) {
                continue;
            }
            println!(
                "  {} (slots: {})",
                template.category,
                template.slots().join(", ")
            );
        }

        if let Some(ref file) = user_file {
            println!("\nUser templates:");
            for def in &file.templates {
                if filter.map_or(false, |c| c != def.category) {
                    continue;
                }
                println!("  {} ({})", def.name, def.category);
            }

            if self.tips && !file.tips.is_empty() {
                println!("\nOptimization tips:");
                for tip in &file.tips {
                    println!("  - {}", tip);
                }
            }
        } else if self.tips {
            tracing::warn!("No template file configured; tips are defined there");
        }

        Ok(())
    }

    fn print_json(
        &self,
        catalog: &TemplateCatalog,
        user_file: Option<&promptforge_prompt::TemplateFile>,
        filter: Option<Category>,
    ) -> AppResult<()> {
        let builtin: Vec<_> = catalog
            .all()
            .iter()
            .filter(|t| filter.map_or(true, |c| c == t.category))
            .map(|t| {
                serde_json::json!({
                    "category": t.category.name(),
                    "slots": t.slots(),
                })
            })
            .collect();

        let user: Vec<_> = user_file
            .map(|f| {
                f.templates
                    .iter()
                    .filter(|d| filter.map_or(true, |c| c == d.category))
                    .map(|d| {
                        serde_json::json!({
                            "name": d.name,
                            "category": d.category.name(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        let output = serde_json::json!({
            "builtin": builtin,
            "user": user,
            "tips": user_file.map(|f| f.tips.clone()).unwrap_or_default(),
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}
