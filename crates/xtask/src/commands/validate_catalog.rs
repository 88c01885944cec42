//! Validate an item catalog file
//!
//! Parses the catalog, runs every load-time check and prints what each item
//! declares. Exits with an error if any issue is found.

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use item_content::{CatalogLoader, ItemCatalog, ValidationIssue, validate_catalog};

/// Check an item catalog and print a per-item summary
#[derive(Parser)]
pub struct ValidateCatalog {
    /// Path to the catalog RON file
    #[arg(value_name = "CATALOG")]
    path: PathBuf,

    /// Only print issues
    #[arg(short, long)]
    quiet: bool,
}

impl ValidateCatalog {
    pub fn execute(self) -> Result<()> {
        let catalog = CatalogLoader::load_unchecked(&self.path)?;
        let issues = validate_catalog(&catalog);

        println!(
            "{} {}",
            style("Catalog:").bold().cyan(),
            self.path.display()
        );
        println!("{} {}", style("Items:").bold().cyan(), catalog.len());
        println!();

        if !self.quiet {
            print_summary(&catalog, &issues);
        }

        if issues.is_empty() {
            println!("{}", style("✓ Catalog is valid").bold().green());
            return Ok(());
        }

        println!("{}", style("Issues:").bold().red());
        for issue in &issues {
            println!("  {} {}", style("✗").red(), issue);
        }
        println!();
        anyhow::bail!("{} validation issue(s) found", issues.len())
    }
}

fn print_summary(catalog: &ItemCatalog, issues: &[ValidationIssue]) {
    for entry in &catalog.items {
        let item_issues = issues.iter().filter(|issue| issue.item == entry.item).count();
        let marker = if item_issues == 0 {
            style("✓").green()
        } else {
            style("✗").red()
        };

        println!(
            "{} {} ({})",
            marker,
            style(entry.display_name()).bold(),
            entry.item
        );

        for effect in &entry.effects {
            let mut notes = Vec::new();
            if effect.priority != 0 {
                notes.push(format!("priority {}", effect.priority));
            }
            if effect.restrictions.once_per_battle {
                notes.push("once per battle".to_string());
            }
            if let Some(max) = effect.restrictions.max_uses_per_battle {
                notes.push(format!("max {max} per battle"));
            }
            if let Some(turns) = effect.restrictions.cooldown_turns {
                notes.push(format!("cooldown {turns}"));
            }

            println!(
                "    {} [{}] {} condition(s), {} action(s){}",
                effect.id,
                style(effect.trigger).yellow(),
                effect.conditions.len(),
                effect.actions.len(),
                if notes.is_empty() {
                    String::new()
                } else {
                    format!(" - {}", notes.join(", "))
                }
            );
        }
    }
    println!();
}
