// Pokemon Trainer Schema - Shared type definitions
// This crate contains the core enums and catalog data structs that are shared
// between the main pokemon-trainer crate and its embedded data fixtures.

// Re-export the main types
pub use item_data::*;
pub use items::*;
pub use species::*;
pub use species_data::*;

pub mod item_data;
pub mod items;
pub mod species;
pub mod species_data;
