//! Item catalog structure.

use item_effects::{Effect, Trigger};

/// All items known to a content pack, each with its declared effects.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemCatalog {
    pub items: Vec<ItemEffects>,
}

/// One item and the effects it carries.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemEffects {
    pub item: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    pub effects: Vec<Effect>,
}

impl ItemEffects {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.item)
    }

    /// Triggers this item responds to, in first-declared order.
    pub fn triggers(&self) -> Vec<Trigger> {
        let mut triggers = Vec::new();
        for effect in &self.effects {
            if !triggers.contains(&effect.trigger) {
                triggers.push(effect.trigger);
            }
        }
        triggers
    }
}

impl ItemCatalog {
    pub fn get(&self, item: &str) -> Option<&ItemEffects> {
        self.items.iter().find(|entry| entry.item == item)
    }

    /// Effects declared for `item`, or `None` for an unknown item.
    pub fn effects_for(&self, item: &str) -> Option<&[Effect]> {
        self.get(item).map(|entry| entry.effects.as_slice())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
