use crate::battle::state::BattleRng;
use crate::catalog::Catalog;
use crate::creature::Creature;
use schema::Species;

/// How far below the lead creature's level a wild encounter may spawn.
const LEVEL_WINDOW_BELOW: i64 = 3;

/// Exclusive upper bound above the lead level: the window is `[L-3, L+4)`.
const LEVEL_WINDOW_ABOVE: i64 = 4;

/// Generate one wild opponent from the trainer's lead-creature level.
///
/// Species is uniform over the whole catalog; level is uniform in
/// `[lead - 3, lead + 4)`, clamped to a minimum of 1 after the roll.
/// Health and max health both derive from the rolled level.
pub fn generate_wild_creature(
    catalog: &Catalog,
    lead_level: u32,
    rng: &mut BattleRng,
) -> Creature {
    let species_roll = rng.roll(catalog.species_count() as u32, "wild species");
    let species = Species::from_index(species_roll as usize)
        .expect("species roll is bounded by the catalog size");

    let lowest = lead_level as i64 - LEVEL_WINDOW_BELOW;
    let span = (LEVEL_WINDOW_BELOW + LEVEL_WINDOW_ABOVE) as u32;
    let rolled = lowest + rng.roll(span, "wild level") as i64;
    let level = rolled.max(1) as u32;

    Creature::new(species, catalog.species_def(species), level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::HEALTH_PER_LEVEL;

    #[test]
    fn level_window_spans_minus_three_to_plus_three() {
        let catalog = Catalog::standard();

        // Lowest bucket: lead 10 rolls level 7.
        let mut rng = BattleRng::scripted(vec![0, 0]);
        let low = generate_wild_creature(&catalog, 10, &mut rng);
        assert_eq!(low.level, 7);

        // Highest bucket: lead 10 rolls level 13 (the +4 bound is exclusive).
        let mut rng = BattleRng::scripted(vec![0, 6]);
        let high = generate_wild_creature(&catalog, 10, &mut rng);
        assert_eq!(high.level, 13);
    }

    #[test]
    fn low_lead_levels_clamp_to_one() {
        let catalog = Catalog::standard();
        // Lead level 1 would roll level -2 in the lowest bucket.
        let mut rng = BattleRng::scripted(vec![0, 0]);
        let wild = generate_wild_creature(&catalog, 1, &mut rng);
        assert_eq!(wild.level, 1);
    }

    #[test]
    fn wild_health_derives_from_rolled_level() {
        let catalog = Catalog::standard();
        let mut rng = BattleRng::scripted(vec![5, 3]);
        let wild = generate_wild_creature(&catalog, 10, &mut rng);
        assert_eq!(wild.species, Species::Pikachu);
        assert_eq!(wild.level, 10);
        assert_eq!(wild.health, 10 * HEALTH_PER_LEVEL);
        assert_eq!(wild.max_health, wild.health);
        assert_eq!(wild.name, "Pikachu");
    }

    #[test]
    fn species_roll_covers_the_whole_catalog() {
        let catalog = Catalog::standard();
        let mut rng = BattleRng::scripted(vec![9, 0]);
        let wild = generate_wild_creature(&catalog, 5, &mut rng);
        assert_eq!(wild.species, Species::Psyduck);
    }
}
