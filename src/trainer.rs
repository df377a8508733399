use crate::catalog::Catalog;
use crate::creature::Creature;
use schema::ItemId;
use serde::{Deserialize, Serialize};
use strum::EnumCount;

/// Fixed party capacity; slot 0 is always the active battle creature.
pub const PARTY_CAPACITY: usize = 6;

/// Currency balance a brand-new trainer starts with.
pub const STARTING_BALANCE: u32 = 5000;

/// The player: party roster, currency balance, and item inventory.
///
/// Party order is battle order. The balance can never go negative; every
/// deduction goes through [`Trainer::spend`], which refuses rather than
/// overdrafting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trainer {
    pub name: String,
    pub rival_name: String,
    pub money: u32,
    party: Vec<Creature>,
    items: [u32; ItemId::COUNT],
}

impl Trainer {
    pub fn new(name: String, rival_name: String) -> Trainer {
        Trainer {
            name,
            rival_name,
            money: STARTING_BALANCE,
            party: Vec::new(),
            items: [0; ItemId::COUNT],
        }
    }

    /// Rebuild a trainer from decoded save-record fields. The codec is the
    /// only intended caller; it has already checked the party-size bound.
    pub fn from_record(
        name: String,
        rival_name: String,
        money: u32,
        items: [u32; ItemId::COUNT],
        party: Vec<Creature>,
    ) -> Trainer {
        debug_assert!(party.len() <= PARTY_CAPACITY);
        Trainer {
            name,
            rival_name,
            money,
            party,
            items,
        }
    }

    // === Currency ===

    /// Deduct from the balance. Refuses without mutating when the balance
    /// would go negative.
    pub fn spend(&mut self, amount: u32) -> bool {
        if amount > self.money {
            return false;
        }
        self.money -= amount;
        true
    }

    pub fn earn(&mut self, amount: u32) {
        self.money += amount;
    }

    // === Party ===

    /// Append a creature to the party, preserving order. When the party is
    /// already full the creature is handed back untouched.
    pub fn acquire_creature(&mut self, creature: Creature) -> Result<(), Creature> {
        if self.party.len() == PARTY_CAPACITY {
            return Err(creature);
        }
        self.party.push(creature);
        Ok(())
    }

    pub fn party(&self) -> &[Creature] {
        &self.party
    }

    pub fn party_mut(&mut self) -> &mut [Creature] {
        &mut self.party
    }

    /// The active battle creature (slot 0), if the party is non-empty.
    pub fn active(&self) -> Option<&Creature> {
        self.party.first()
    }

    pub fn active_mut(&mut self) -> Option<&mut Creature> {
        self.party.first_mut()
    }

    /// Exchange slot 0 with the given slot; the previous occupant takes the
    /// vacated position. Callers validate the target first.
    pub fn swap_to_front(&mut self, slot: usize) {
        self.party.swap(0, slot);
    }

    pub fn living_party_count(&self) -> usize {
        self.party.iter().filter(|c| !c.is_fainted()).count()
    }

    // === Items ===

    pub fn item_count(&self, item: ItemId) -> u32 {
        self.items[item.index()]
    }

    pub fn has_items(&self) -> bool {
        self.items.iter().any(|&count| count > 0)
    }

    /// Buy one unit of an item at its catalog price. Refuses without
    /// mutating when the balance is short.
    pub fn purchase_item(&mut self, item: ItemId, catalog: &Catalog) -> bool {
        let price = catalog.item_def(item).price;
        if !self.spend(price) {
            return false;
        }
        self.items[item.index()] += 1;
        true
    }

    /// Use up one unit of an item. Refuses when none are owned.
    pub fn consume_item(&mut self, item: ItemId) -> bool {
        if self.items[item.index()] == 0 {
            return false;
        }
        self.items[item.index()] -= 1;
        true
    }

    pub fn item_counts(&self) -> &[u32; ItemId::COUNT] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::Species;

    fn test_catalog() -> Catalog {
        Catalog::standard()
    }

    fn creature(level: u32) -> Creature {
        let catalog = test_catalog();
        Creature::new(Species::Pidgey, catalog.species_def(Species::Pidgey), level)
    }

    fn trainer_with_party(count: usize) -> Trainer {
        let mut trainer = Trainer::new("Red".to_string(), "Blue".to_string());
        for _ in 0..count {
            trainer.acquire_creature(creature(5)).unwrap();
        }
        trainer
    }

    #[test]
    fn spend_refuses_overdraft_without_mutation() {
        let mut trainer = trainer_with_party(0);
        trainer.money = 100;
        assert!(!trainer.spend(150));
        assert_eq!(trainer.money, 100);
    }

    #[test]
    fn spend_deducts_exactly_down_to_zero() {
        let mut trainer = trainer_with_party(0);
        trainer.money = 100;
        assert!(trainer.spend(100));
        assert_eq!(trainer.money, 0);
    }

    #[test]
    fn acquire_refuses_on_a_full_party() {
        let mut trainer = trainer_with_party(PARTY_CAPACITY);
        let refused = trainer.acquire_creature(creature(3));
        assert!(refused.is_err());
        assert_eq!(trainer.party().len(), PARTY_CAPACITY);
    }

    #[test]
    fn acquire_preserves_insertion_order() {
        let catalog = test_catalog();
        let mut trainer = trainer_with_party(0);
        trainer
            .acquire_creature(Creature::new(
                Species::Bulbasaur,
                catalog.species_def(Species::Bulbasaur),
                5,
            ))
            .unwrap();
        trainer
            .acquire_creature(Creature::new(
                Species::Ekans,
                catalog.species_def(Species::Ekans),
                3,
            ))
            .unwrap();
        assert_eq!(trainer.party()[0].species, Species::Bulbasaur);
        assert_eq!(trainer.party()[1].species, Species::Ekans);
    }

    #[test]
    fn swap_to_front_exchanges_slots() {
        let mut trainer = trainer_with_party(3);
        trainer.party_mut()[2].name = "Benched".to_string();
        trainer.party_mut()[0].name = "Lead".to_string();
        trainer.swap_to_front(2);
        assert_eq!(trainer.party()[0].name, "Benched");
        assert_eq!(trainer.party()[2].name, "Lead");
    }

    #[test]
    fn living_party_count_ignores_fainted_members() {
        let mut trainer = trainer_with_party(3);
        trainer.party_mut()[1].take_damage(999);
        assert_eq!(trainer.living_party_count(), 2);
    }

    #[test]
    fn purchase_requires_funds_and_adjusts_both_counters() {
        let catalog = test_catalog();
        let mut trainer = trainer_with_party(0);
        trainer.money = 600;

        assert!(trainer.purchase_item(ItemId::Elixir, &catalog));
        assert_eq!(trainer.money, 100);
        assert_eq!(trainer.item_count(ItemId::Elixir), 1);

        // 100 left, Pokeball costs 2000: refused, nothing changes.
        assert!(!trainer.purchase_item(ItemId::Pokeball, &catalog));
        assert_eq!(trainer.money, 100);
        assert_eq!(trainer.item_count(ItemId::Pokeball), 0);
    }

    #[test]
    fn consume_refuses_at_zero() {
        let mut trainer = trainer_with_party(0);
        assert!(!trainer.consume_item(ItemId::Elixir));

        trainer.money = 500;
        trainer.purchase_item(ItemId::Elixir, &test_catalog());
        assert!(trainer.consume_item(ItemId::Elixir));
        assert_eq!(trainer.item_count(ItemId::Elixir), 0);
    }

    #[test]
    fn has_items_reflects_any_nonzero_counter() {
        let mut trainer = trainer_with_party(0);
        assert!(!trainer.has_items());
        trainer.money = 2000;
        trainer.purchase_item(ItemId::Pokeball, &test_catalog());
        assert!(trainer.has_items());
    }
}
