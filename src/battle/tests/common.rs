use crate::battle::session::BattleSession;
use crate::battle::state::{BattleRng, EventBus, Side};
use crate::catalog::Catalog;
use crate::creature::Creature;
use crate::trainer::Trainer;
use schema::{ItemId, Species};

/// A builder for creating test creatures with common defaults.
///
/// # Example
/// ```ignore
/// let creature = TestCreatureBuilder::new(Species::Pikachu, 5)
///     .with_hp(1)
///     .build(&catalog);
/// ```
pub struct TestCreatureBuilder {
    species: Species,
    level: u32,
    hp: Option<u32>,
    fainted: bool,
}

impl TestCreatureBuilder {
    pub fn new(species: Species, level: u32) -> Self {
        Self {
            species,
            level,
            hp: None,
            fainted: false,
        }
    }

    /// Sets current HP. If not set, HP is the level-derived maximum.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = Some(hp);
        self
    }

    /// Marks the creature as fainted (zero HP, flag set).
    pub fn fainted(mut self) -> Self {
        self.fainted = true;
        self
    }

    pub fn build(self, catalog: &Catalog) -> Creature {
        let mut creature =
            Creature::new(self.species, catalog.species_def(self.species), self.level);
        if self.fainted {
            creature.health = 0;
            creature.fainted = true;
        } else if let Some(hp) = self.hp {
            creature.health = hp.min(creature.max_health);
        }
        creature
    }
}

pub fn test_catalog() -> Catalog {
    Catalog::standard()
}

/// Trainer "Red" with the given party, in order.
pub fn create_test_trainer(party: Vec<Creature>) -> Trainer {
    let mut trainer = Trainer::new("Red".to_string(), "Blue".to_string());
    for creature in party {
        trainer
            .acquire_creature(creature)
            .expect("test party fits in six slots");
    }
    trainer
}

/// Stock an item without disturbing the trainer's balance.
pub fn stock_item(trainer: &mut Trainer, item: ItemId, count: u32, catalog: &Catalog) {
    let price = catalog.item_def(item).price;
    for _ in 0..count {
        trainer.earn(price);
        assert!(trainer.purchase_item(item, catalog));
    }
}

/// Start a battle against a fixed opponent with scripted rolls.
///
/// Roll consumption order, for scripting: the computer's turn takes a
/// move-choice roll (bound 10) then a power roll (bound 5 normal / 9
/// special); a player attack takes one power roll; flee takes one bound-2
/// roll; a pokeball takes one bound-10 roll.
pub fn start_scripted_battle<'a>(
    trainer: &'a mut Trainer,
    catalog: &'a Catalog,
    opponent: Creature,
    first_mover: Side,
    rolls: Vec<u32>,
) -> (BattleSession<'a>, EventBus) {
    BattleSession::with_opponent(
        trainer,
        catalog,
        opponent,
        first_mover,
        BattleRng::scripted(rolls),
    )
}
