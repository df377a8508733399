use schema::{Species, SpeciesDefinition};
use serde::{Deserialize, Serialize};

/// Health points granted per level; a creature's max health is always
/// `HEALTH_PER_LEVEL * level`.
pub const HEALTH_PER_LEVEL: u32 = 5;

/// Experience needed to leave a level is `EXP_PER_LEVEL * level`.
pub const EXP_PER_LEVEL: u32 = 25;

/// Result of applying damage to a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Zero incoming damage; nothing changed.
    Missed,
    /// Damage landed and the creature is still standing.
    Hit,
    /// Damage reduced health to zero; the creature fainted.
    Fainted,
}

/// Result of granting experience to a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceOutcome {
    /// Experience banked, threshold not crossed.
    Gained,
    /// The creature crossed its threshold and gained exactly one level.
    LeveledUp,
}

/// A combat-capable species instance: the unit of the trainer's party and
/// the wild opponent in an encounter.
///
/// `name` is independent of the species display name so renamed and captured
/// creatures keep whatever the save record says. `fainted` is stored rather
/// than derived from `health == 0`: save records treat it as authoritative,
/// so a loaded creature keeps the flag it was saved with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
    pub species: Species,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
    pub experience: u32,
    pub next_level_up: u32,
    pub fainted: bool,
}

impl Creature {
    /// Create a fresh creature of a species at the given level, fully healed
    /// with zero banked experience. `level` is expected to be >= 1.
    pub fn new(species: Species, definition: &SpeciesDefinition, level: u32) -> Creature {
        Creature {
            name: definition.name.clone(),
            species,
            level,
            health: level * HEALTH_PER_LEVEL,
            max_health: level * HEALTH_PER_LEVEL,
            experience: 0,
            next_level_up: level * EXP_PER_LEVEL,
            fainted: false,
        }
    }

    /// Apply incoming damage.
    ///
    /// Zero damage is a miss and changes nothing. Damage at or above current
    /// health floors health at zero and faints the creature.
    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        if amount == 0 {
            return DamageOutcome::Missed;
        }

        if amount >= self.health {
            self.health = 0;
            self.fainted = true;
            return DamageOutcome::Fainted;
        }

        self.health -= amount;
        DamageOutcome::Hit
    }

    /// Bank experience, applying at most one level-up per call.
    ///
    /// The threshold must be strictly exceeded, and the excess carried over
    /// is measured against the pre-increment threshold. A level-up fully
    /// heals: health and max health both reset to the new level's maximum.
    /// Excess large enough to cross two thresholds still yields one level.
    pub fn grant_experience(&mut self, amount: u32) -> ExperienceOutcome {
        self.experience += amount;

        if self.experience > self.next_level_up {
            self.experience -= self.next_level_up;
            self.level += 1;
            self.next_level_up = self.level * EXP_PER_LEVEL;
            self.health = self.level * HEALTH_PER_LEVEL;
            self.max_health = self.level * HEALTH_PER_LEVEL;
            return ExperienceOutcome::LeveledUp;
        }

        ExperienceOutcome::Gained
    }

    /// Restore health, clamped to max health. Does not clear the fainted
    /// flag; that is the healing center's job via [`Creature::revive`].
    pub fn grant_health(&mut self, amount: u32) {
        // saturating: loaded records are not range-checked, so health may
        // already sit above the recomputed maximum.
        let missing = self.max_health.saturating_sub(self.health);
        if amount >= missing {
            self.health = self.max_health;
        } else {
            self.health += amount;
        }
    }

    /// Full heal that also clears the fainted flag (healing-center service).
    pub fn revive(&mut self) {
        self.health = self.max_health;
        self.fainted = false;
    }

    pub fn is_fainted(&self) -> bool {
        self.fainted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rstest::rstest;

    fn level_five_creature() -> Creature {
        let catalog = Catalog::standard();
        Creature::new(Species::Pikachu, catalog.species_def(Species::Pikachu), 5)
    }

    #[test]
    fn new_creature_derives_stats_from_level() {
        let creature = level_five_creature();
        assert_eq!(creature.name, "Pikachu");
        assert_eq!(creature.health, 25);
        assert_eq!(creature.max_health, 25);
        assert_eq!(creature.experience, 0);
        assert_eq!(creature.next_level_up, 125);
        assert!(!creature.fainted);
    }

    #[test]
    fn zero_damage_misses_and_changes_nothing() {
        let mut creature = level_five_creature();
        assert_eq!(creature.take_damage(0), DamageOutcome::Missed);
        assert_eq!(creature.health, 25);
        assert!(!creature.fainted);
    }

    #[test]
    fn damage_subtracts_exactly() {
        let mut creature = level_five_creature();
        assert_eq!(creature.take_damage(7), DamageOutcome::Hit);
        assert_eq!(creature.health, 18);
        assert!(!creature.fainted);
    }

    #[rstest]
    #[case(25)] // exactly lethal
    #[case(26)] // overkill
    #[case(999)]
    fn lethal_damage_floors_health_and_faints(#[case] amount: u32) {
        let mut creature = level_five_creature();
        assert_eq!(creature.take_damage(amount), DamageOutcome::Fainted);
        assert_eq!(creature.health, 0);
        assert!(creature.fainted);
    }

    #[test]
    fn threshold_plus_one_levels_up_exactly_once() {
        let mut creature = level_five_creature();
        assert_eq!(creature.grant_experience(126), ExperienceOutcome::LeveledUp);
        assert_eq!(creature.level, 6);
        assert_eq!(creature.experience, 1);
        assert_eq!(creature.next_level_up, 150);
        assert_eq!(creature.health, 30);
        assert_eq!(creature.max_health, 30);
    }

    #[test]
    fn exact_threshold_does_not_level() {
        let mut creature = level_five_creature();
        assert_eq!(creature.grant_experience(125), ExperienceOutcome::Gained);
        assert_eq!(creature.level, 5);
        assert_eq!(creature.experience, 125);
    }

    #[test]
    fn excess_past_two_thresholds_still_grants_one_level() {
        let mut creature = level_five_creature();
        // 125 + 150 + 10: enough banked to cross two thresholds in sequence,
        // but a single call only applies one.
        assert_eq!(creature.grant_experience(285), ExperienceOutcome::LeveledUp);
        assert_eq!(creature.level, 6);
        assert_eq!(creature.experience, 160);
    }

    #[test]
    fn level_up_fully_heals_a_wounded_creature() {
        let mut creature = level_five_creature();
        creature.take_damage(24);
        assert_eq!(creature.health, 1);
        creature.grant_experience(126);
        assert_eq!(creature.health, creature.max_health);
    }

    #[test]
    fn grant_health_clamps_at_max() {
        let mut creature = level_five_creature();
        creature.take_damage(24);
        assert_eq!(creature.health, 1);
        creature.grant_health(999);
        assert_eq!(creature.health, 25);
    }

    #[test]
    fn grant_health_partial_heal_is_exact() {
        let mut creature = level_five_creature();
        creature.take_damage(20);
        creature.grant_health(10);
        assert_eq!(creature.health, 15);
    }

    #[test]
    fn revive_clears_fainted_and_heals() {
        let mut creature = level_five_creature();
        creature.take_damage(25);
        assert!(creature.fainted);
        creature.revive();
        assert!(!creature.fainted);
        assert_eq!(creature.health, 25);
    }
}
