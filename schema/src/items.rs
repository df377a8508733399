use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// The two consumable items sold by the mart, in catalog order.
///
/// Like [`crate::Species`], the discriminant is the item id used by the
/// save-file codec (the owned-quantity counters are written in this order).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumCount, EnumIter,
)]
pub enum ItemId {
    /// Healing consumable: restores a fixed amount of HP in battle.
    Elixir,
    /// Capture consumable: one capture attempt against a wild creature.
    Pokeball,
}

impl ItemId {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<ItemId> {
        ItemId::iter().nth(index)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            ItemId::Elixir => "Elixir",
            ItemId::Pokeball => "Pokeball",
        };
        write!(f, "{}", display_name)
    }
}
