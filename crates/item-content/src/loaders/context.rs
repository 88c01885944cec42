//! Effect context fixture loader.

use std::path::Path;

use item_effects::EffectContext;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`EffectContext`] fixtures from RON files.
pub struct ContextLoader;

impl ContextLoader {
    pub fn load(path: &Path) -> LoadResult<EffectContext> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a context. Omitted fields take their defaults; a creature that
    /// claims more HP than its maximum is rejected here.
    pub fn parse(content: &str) -> LoadResult<EffectContext> {
        let ctx: EffectContext = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse context RON: {}", e))?;

        let creatures = std::iter::once(&ctx.creature).chain(ctx.opponent.as_ref());
        for creature in creatures {
            anyhow::ensure!(
                creature.hp <= creature.max_hp,
                "{} has hp {} above max_hp {}",
                creature.species,
                creature.hp,
                creature.max_hp
            );
        }

        Ok(ctx)
    }
}
