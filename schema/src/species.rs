use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// The fixed roster of species in the game, in catalog order.
///
/// The discriminant doubles as the species id used by the save-file codec and
/// the catalog lookup tables, so the variant order here is load-bearing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumCount, EnumIter,
)]
pub enum Species {
    Bulbasaur,
    Charmander,
    Squirtle,
    Caterpie,
    Pidgey,
    Pikachu,
    Ekans,
    Oddish,
    Diglett,
    Psyduck,
}

/// The three species offered during starter selection.
pub const STARTERS: [Species; 3] = [Species::Bulbasaur, Species::Charmander, Species::Squirtle];

impl Species {
    /// Catalog index of this species (0-based, stable across saves).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look a species up by its catalog index, as stored in save files.
    pub fn from_index(index: usize) -> Option<Species> {
        Species::iter().nth(index)
    }

    /// Canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            Species::Bulbasaur => "Bulbasaur",
            Species::Charmander => "Charmander",
            Species::Squirtle => "Squirtle",
            Species::Caterpie => "Caterpie",
            Species::Pidgey => "Pidgey",
            Species::Pikachu => "Pikachu",
            Species::Ekans => "Ekans",
            Species::Oddish => "Oddish",
            Species::Diglett => "Diglett",
            Species::Psyduck => "Psyduck",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
