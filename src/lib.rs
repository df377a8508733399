// In: src/lib.rs

//! Pokemon Trainer Battle Engine
//!
//! A single-player creature-collector combat simulator: wild encounters,
//! a menu-driven battle state machine, capture/flee/leveling mechanics,
//! and a line-oriented save-record codec. The engine core is I/O-free;
//! the `ui` module and the binary wrap it in a console frontend.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod battle;
pub mod catalog;
pub mod creature;
pub mod errors;
pub mod persistence;
pub mod trainer;
pub mod ui;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pokemon-trainer`
// crate, making it easy to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the shared catalog definitions and id enums.
pub use schema::{ItemDefinition, ItemId, Species, SpeciesDefinition, STARTERS};

// --- From this crate's modules (`src/`) ---

// Core battle engine types and the session driver.
pub use battle::generator::generate_wild_creature;
pub use battle::session::{BattleSession, SessionPhase, ELIXIR_HEAL};
pub use battle::state::{
    BattleEvent, BattleRng, BattleStatus, CaptureFailure, Encounter, EventBus, MenuLocation, Side,
};

// Core runtime entities.
pub use catalog::Catalog;
pub use creature::{Creature, DamageOutcome, ExperienceOutcome};
pub use trainer::{Trainer, PARTY_CAPACITY, STARTING_BALANCE};

// Crate-specific error and result types.
pub use errors::{
    CatalogError, CatalogResult, CodecError, CodecResult, GameError, GameResult,
};
