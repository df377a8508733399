use serde::{Deserialize, Serialize};

/// Number of moves every species knows. Move 0 is the normal attack, move 1
/// the special attack; the battle engine indexes this array directly.
pub const MOVES_PER_SPECIES: usize = 2;

/// Catalog entry for one species: display name plus its two move names.
///
/// Moves carry no damage or type data of their own; which move is used only
/// selects the power formula and the text shown in battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesDefinition {
    pub name: String,
    pub moves: [String; MOVES_PER_SPECIES],
}

impl SpeciesDefinition {
    /// Name of the move at the given slot (0 = normal, 1 = special).
    pub fn move_name(&self, slot: usize) -> &str {
        &self.moves[slot]
    }
}
