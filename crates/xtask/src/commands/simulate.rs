//! Run one item's effects against a context fixture
//!
//! Loads a catalog, a context fixture and (optionally) an engine config, runs
//! the pipeline for one trigger and prints the results and the mutated
//! context. `--times` repeats the call with usage recorded in between, which
//! shows restrictions kicking in.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use console::style;
use std::path::PathBuf;
use std::str::FromStr;
use strum::IntoEnumIterator;

use item_content::{CatalogLoader, ConfigLoader, ContextLoader};
use item_effects::{
    EffectContext, EffectPipeline, EffectResult, EngineConfig, PcgRng, Trigger, UsageLedger,
};

/// Run one item's effects against a context fixture
#[derive(Parser)]
pub struct Simulate {
    /// Path to the catalog RON file
    #[arg(short, long, value_name = "FILE")]
    catalog: PathBuf,

    /// Item id to use
    #[arg(short, long, value_name = "ITEM")]
    item: String,

    /// Path to the context fixture RON file
    #[arg(long, value_name = "FILE")]
    context: PathBuf,

    /// Trigger to fire (e.g. on_use, on_low_hp)
    #[arg(short, long, default_value = "on_use", value_parser = parse_trigger)]
    trigger: Trigger,

    /// RNG seed
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Engine config TOML (defaults to built-in values)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of consecutive calls, recording usage in between
    #[arg(long, default_value_t = 1)]
    times: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable results
    Summary,
    /// Full JSON output (results per call and the final context)
    Json,
}

fn parse_trigger(value: &str) -> Result<Trigger, String> {
    Trigger::from_str(value).map_err(|_| {
        let known: Vec<String> = Trigger::iter().map(|t| t.to_string()).collect();
        format!("unknown trigger `{value}`; expected one of: {}", known.join(", "))
    })
}

impl Simulate {
    pub fn execute(self) -> Result<()> {
        let catalog = CatalogLoader::load(&self.catalog)?;
        let mut ctx = ContextLoader::load(&self.context)?;
        let config = match &self.config {
            Some(path) => ConfigLoader::load(path)?,
            None => EngineConfig::default(),
        };

        let effects = catalog
            .effects_for(&self.item)
            .ok_or_else(|| anyhow!("Item `{}` not found in {}", self.item, self.catalog.display()))?;

        let pipeline = EffectPipeline::new(config);
        let mut ledger = UsageLedger::new();
        let mut rng = PcgRng::seeded(self.seed);
        let mut calls = Vec::new();

        for _ in 0..self.times.max(1) {
            let results = pipeline.process(effects, self.trigger, &mut ctx, &ledger, &mut rng);
            ledger.record_results(&results, ctx.current_turn());
            if let Some(battle) = ctx.battle.as_mut() {
                battle.turn += 1;
            }
            calls.push(results);
        }

        match self.format {
            OutputFormat::Summary => self.print_summary(&calls, &ctx),
            OutputFormat::Json => print_json(&calls, &ctx)?,
        }
        Ok(())
    }

    fn print_summary(&self, calls: &[Vec<EffectResult>], ctx: &EffectContext) {
        println!("{} {}", style("Item:").bold().cyan(), self.item);
        println!("{} {}", style("Trigger:").bold().cyan(), self.trigger);
        println!("{} {}", style("Seed:").bold().cyan(), self.seed);
        println!();

        for (call, results) in calls.iter().enumerate() {
            println!("{}", style(format!("=== Call {} ===", call + 1)).bold().green());
            if results.is_empty() {
                println!("  (no effects bound to {})", self.trigger);
            }
            for result in results {
                let marker = if result.success {
                    style("✓").green()
                } else {
                    style("✗").red()
                };
                println!(
                    "  {} {}: {}{}",
                    marker,
                    style(&result.effect_id).bold(),
                    result.message,
                    if result.consumed_item { " (item consumed)" } else { "" }
                );
                for action in &result.effects_applied {
                    println!("      - {} [{}]: {}", action.kind, action.target, action.message);
                }
                for error in &result.errors {
                    println!("      {} {}", style("error:").red(), error);
                }
            }
            println!();
        }

        let creature = &ctx.creature;
        println!("{}", style("Creature after:").bold().yellow());
        println!("  Species: {}", creature.species);
        println!("  HP: {}/{}", creature.hp, creature.max_hp);
        println!(
            "  Status: {}",
            creature
                .status
                .map_or_else(|| "none".to_string(), |status| status.to_string())
        );
        for (stat, value) in &creature.stats {
            println!("  {stat}: {value}");
        }
        println!("  Moves: {}", creature.moves.join(", "));
        if let Some(battle) = &ctx.battle {
            println!("  Catch rate modifier: {}", battle.catch_rate_modifier);
        }
        if ctx.field.repel_steps > 0 {
            println!("  Repel steps: {}", ctx.field.repel_steps);
        }
    }
}

fn print_json(calls: &[Vec<EffectResult>], ctx: &EffectContext) -> Result<()> {
    let report = serde_json::json!({
        "calls": calls,
        "context": ctx,
    });
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize results to JSON")?;
    println!("{}", json);
    Ok(())
}
