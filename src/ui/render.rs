//! Battle and roster rendering: the header/footer frames around the menu
//! state machine, health bars, and the trainer stats panel.

use crate::battle::state::MenuLocation;
use crate::catalog::Catalog;
use crate::creature::Creature;
use crate::trainer::Trainer;
use crate::ui::console::{self, RULE_WIDTH};
use crate::ui::icons;
use schema::ItemId;

/// Health bar: one `|` per remaining HP, one `*` per HP lost.
pub fn health_bar(health: u32, max_health: u32) -> String {
    let mut bar = String::with_capacity(max_health as usize);
    for _ in 0..health {
        bar.push('|');
    }
    for _ in health..max_health {
        bar.push('*');
    }
    bar
}

/// Top frame of the battle screen: the wild opponent's name, level, and
/// health bar.
pub fn battle_header(opponent: &Creature) {
    console::draw_rule(RULE_WIDTH);
    println!("= Target Name: {}", opponent.name);
    println!("= Target Level: {}", opponent.level);
    println!(
        "= Target HP: {} ({} HP / {} HP)",
        health_bar(opponent.health, opponent.max_health),
        opponent.health,
        opponent.max_health
    );
    console::draw_rule(RULE_WIDTH);
}

/// Bottom frame of the battle screen: the menu for the current state.
pub fn battle_footer(
    trainer: &Trainer,
    catalog: &Catalog,
    location: MenuLocation,
    forced_swap: bool,
) {
    console::draw_rule(RULE_WIDTH);

    match location {
        MenuLocation::Attack => {
            let lead = trainer.active().expect("battle requires a lead creature");
            let moves = &catalog.species_def(lead.species).moves;

            println!("{:<20}{}", "Select Attack: ", "= Player Pokemon Stats:");
            println!("{:<20}{}", format!("1. {}", moves[0]), "=");
            println!("{:<20}{}", format!("2. {}", moves[1]), format!("= Name:  {}", lead.name));
            println!("{:<20}{}", "", format!("= Level: {}", lead.level));
            println!(
                "{:<20}{}",
                "3. Previous Menu",
                format!("= HP:    {} HP / {} HP", lead.health, lead.max_health)
            );
        }
        MenuLocation::Bag => {
            println!("{}'s Bag:", trainer.name);
            println!();
            if trainer.item_count(ItemId::Elixir) > 0 {
                println!(
                    "1. Elixir   (Quantity: {})",
                    trainer.item_count(ItemId::Elixir)
                );
            }
            if trainer.item_count(ItemId::Pokeball) > 0 {
                println!(
                    "2. Pokeball (Quantity: {})",
                    trainer.item_count(ItemId::Pokeball)
                );
            }
            println!();
            println!("3. Previous Menu");
        }
        MenuLocation::Party => {
            if forced_swap {
                println!("Call out a new POKEMON!");
            } else {
                println!("{}'s Pokemon:", trainer.name);
            }
            println!();
            for (slot, creature) in trainer.party().iter().enumerate() {
                // During a forced swap only the usable replacements are listed.
                if forced_swap && creature.is_fainted() {
                    continue;
                }
                println!(
                    "{}. {:<15} LV: {} HP: {} HP / {} HP",
                    slot + 1,
                    creature.name,
                    creature.level,
                    creature.health,
                    creature.max_health
                );
            }
            if !forced_swap {
                println!();
                println!("7. Previous Menu");
            }
        }
        MenuLocation::Overview => {
            println!("=== 1. Attack == == 2. Bag == == 3. Pokemon == == 4. Flee ==");
        }
    }

    console::draw_rule(RULE_WIDTH);
}

/// Full battle screen for the current menu state.
pub fn battle_screen(
    trainer: &Trainer,
    opponent: &Creature,
    catalog: &Catalog,
    location: MenuLocation,
    forced_swap: bool,
) {
    console::clear_screen();
    battle_header(opponent);
    icons::print_icon(opponent.species);
    battle_footer(trainer, catalog, location, forced_swap);
}

/// Battle screen variant that shows status text instead of a menu and waits
/// for Enter.
pub fn status_screen(opponent: &Creature, text: &str) {
    console::clear_screen();
    battle_header(opponent);
    icons::print_icon(opponent.species);
    console::draw_rule(RULE_WIDTH);
    println!("{}", text);
    console::draw_rule(RULE_WIDTH);
    console::press_enter_to_continue();
}

/// The trainer statistics panel: names, balance, bag, and party roster.
pub fn stats_panel(trainer: &Trainer) {
    console::clear_screen();
    console::draw_rule(RULE_WIDTH);
    println!("Trainer Name: {}", trainer.name);
    println!("Rival's Name: {}", trainer.rival_name);
    println!();
    println!("Money:   {}", trainer.money);
    println!("Pokemon: {}", trainer.party().len());
    println!();

    if trainer.has_items() {
        println!("Bag:");
        if trainer.item_count(ItemId::Elixir) > 0 {
            println!("Elixir   (Quantity: {})", trainer.item_count(ItemId::Elixir));
        }
        if trainer.item_count(ItemId::Pokeball) > 0 {
            println!(
                "Pokeball (Quantity: {})",
                trainer.item_count(ItemId::Pokeball)
            );
        }
        println!();
    }

    console::draw_rule(RULE_WIDTH);

    for creature in trainer.party() {
        let status = if creature.is_fainted() {
            "Fainted"
        } else {
            "Ready for Combat"
        };
        println!("Name:  {}", creature.name);
        println!("Level: {}", creature.level);
        println!("EXP:   {}", creature.experience);
        println!("HP:    {} HP / {} HP", creature.health, creature.max_health);
        println!();
        println!("Status: {}", status);
        println!();
        icons::print_icon(creature.species);
        console::draw_rule(RULE_WIDTH);
    }

    console::press_enter_to_continue();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_bar_mixes_remaining_and_lost_hp() {
        assert_eq!(health_bar(3, 5), "|||**");
        assert_eq!(health_bar(0, 4), "****");
        assert_eq!(health_bar(4, 4), "||||");
    }
}
