//! Console game shell: main menu, shop, healing center, stats panel, and
//! the top-level game loop. All rules live in the `pokemon_trainer` library;
//! this binary only prompts, renders, and saves.

use pokemon_trainer::ui::battle::run_battle;
use pokemon_trainer::ui::{console, icons, render};
use pokemon_trainer::{persistence, Catalog, Creature, ItemId, Species, Trainer, STARTERS};
use std::path::Path;

const SAVE_FILE: &str = "save.txt";

/// Credits charged per missing HP at the healing center.
const HEAL_COST_PER_HP: u32 = 25;

fn main() {
    let catalog = Catalog::standard();
    main_menu(&catalog);
}

fn main_menu(catalog: &Catalog) {
    let save_path = Path::new(SAVE_FILE);

    console::clear_screen();
    println!("Pokemon - Main Menu");
    if persistence::record_exists(save_path) {
        println!("1. Continue Game");
    }
    println!("2. New Game");
    println!("3. Exit Game");

    match console::read_selection() {
        1 if persistence::record_exists(save_path) => match persistence::load(save_path) {
            Ok(mut trainer) => game_loop(&mut trainer, catalog, save_path),
            Err(error) => {
                console::clear_screen();
                println!("Your save file could not be read: {}", error);
                println!();
                println!("1. Start a New Game");
                println!("2. Exit");
                if console::read_selection() == 1 {
                    let mut trainer = new_game(catalog);
                    autosave(&trainer, save_path);
                    game_loop(&mut trainer, catalog, save_path);
                }
            }
        },
        2 => {
            let mut trainer = new_game(catalog);
            autosave(&trainer, save_path);
            game_loop(&mut trainer, catalog, save_path);
        }
        _ => {}
    }
}

fn game_loop(trainer: &mut Trainer, catalog: &Catalog, save_path: &Path) {
    loop {
        console::clear_screen();
        println!("===================================================================");
        println!("== 1. Battle == 2. Shop == 3. Heal == 4. Stats == 5. Save / Quit ==");
        println!("===================================================================");

        match console::read_selection() {
            1 => {
                if trainer.living_party_count() > 0 {
                    run_battle(trainer, catalog);
                    autosave(trainer, save_path);
                } else {
                    console::clear_screen();
                    println!(
                        "None of your Pokemon are fit for battle. \
                         You need to heal one before you can fight again."
                    );
                    console::press_enter_to_continue();
                }
            }
            2 => {
                mart(trainer, catalog);
                autosave(trainer, save_path);
            }
            3 => {
                healing_center(trainer);
                autosave(trainer, save_path);
            }
            4 => render::stats_panel(trainer),
            5 => {
                autosave(trainer, save_path);
                return;
            }
            _ => {}
        }
    }
}

fn autosave(trainer: &Trainer, save_path: &Path) {
    if let Err(error) = persistence::save(trainer, save_path) {
        println!("Warning: the game could not be saved: {}", error);
        console::press_enter_to_continue();
    }
}

// === New game ===

fn new_game(catalog: &Catalog) -> Trainer {
    console::clear_screen();
    let name = console::read_line("Enter your name: ");

    console::clear_screen();
    let rival_name = console::read_line("Enter your rival's name: ");

    let mut trainer = Trainer::new(name, rival_name);
    select_starter(&mut trainer, catalog);
    trainer
}

fn select_starter(trainer: &mut Trainer, catalog: &Catalog) {
    loop {
        console::clear_screen();
        println!("Pick your Starter Pokemon:");
        for (index, species) in STARTERS.iter().enumerate() {
            println!("{}. {}", index + 1, species.name());
        }

        let selection = console::read_selection();
        let Some(&species) = usize::try_from(selection)
            .ok()
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| STARTERS.get(index))
        else {
            continue;
        };

        if confirm_starter(species) {
            let starter = Creature::new(species, catalog.species_def(species), 5);
            trainer
                .acquire_creature(starter)
                .expect("a new trainer's party has room for a starter");
            return;
        }
    }
}

fn confirm_starter(species: Species) -> bool {
    console::clear_screen();
    icons::print_icon(species);
    println!("You have selected {}! Are you sure?", species.name());
    println!();
    println!("1. Accept");
    println!("2. Go Back");
    console::read_selection() == 1
}

// === Shop ===

fn mart(trainer: &mut Trainer, catalog: &Catalog) {
    loop {
        console::clear_screen();
        println!("Pokemon Mart (Select Item to Buy):");
        println!();
        println!(
            "1. Elixir   (Cost: {})",
            catalog.item_def(ItemId::Elixir).price
        );
        println!(
            "2. Pokeball (Cost: {})",
            catalog.item_def(ItemId::Pokeball).price
        );
        println!();
        println!("3. Return to Menu");

        let selection = console::read_selection();
        if selection == 3 {
            return;
        }
        let Some(item) = usize::try_from(selection)
            .ok()
            .and_then(|index| index.checked_sub(1))
            .and_then(ItemId::from_index)
        else {
            continue;
        };
        mart_purchase(trainer, catalog, item);
    }
}

fn mart_purchase(trainer: &mut Trainer, catalog: &Catalog, item: ItemId) {
    let definition = catalog.item_def(item);

    console::clear_screen();
    println!("Item Name:  {}", definition.name);
    println!("Item Price: {}", definition.price);
    println!("Item Description: {}", definition.description);
    println!();
    println!("Would you like to buy this item?");
    println!();
    println!("1. Purchase");
    println!("2. Decline");

    if console::read_selection() != 1 {
        return;
    }

    console::clear_screen();
    if trainer.purchase_item(item, catalog) {
        println!("You have successfully purchased a {}.", definition.name);
    } else {
        println!(
            "You do not have enough money to purchase a {}.",
            definition.name
        );
    }
    console::press_enter_to_continue();
}

// === Healing center ===

fn healing_center(trainer: &mut Trainer) {
    loop {
        console::clear_screen();
        println!("Pokemon Center (Select Pokemon to Heal):");
        println!();
        for (slot, creature) in trainer.party().iter().enumerate() {
            println!(
                "{}. {} ( {} HP / {} HP )",
                slot + 1,
                creature.name,
                creature.health,
                creature.max_health
            );
        }
        println!();
        println!("7. Return to Menu");

        let selection = console::read_selection();
        if selection == 7 {
            return;
        }
        let Some(slot) = usize::try_from(selection)
            .ok()
            .and_then(|index| index.checked_sub(1))
            .filter(|&slot| slot < trainer.party().len())
        else {
            continue;
        };
        center_heal(trainer, slot);
    }
}

fn center_heal(trainer: &mut Trainer, slot: usize) {
    let creature = &trainer.party()[slot];
    let name = creature.name.clone();
    let cost = (creature.max_health - creature.health) * HEAL_COST_PER_HP;
    let max_health = creature.max_health;

    console::clear_screen();
    println!("Pokemon Name: {}", name);
    println!("Current HP: {} HP", creature.health);
    println!();
    println!(
        "Would you like to restore \"{}\" to full health? ({} HP)",
        name, max_health
    );
    println!("It will cost {} to restore them to full health.", cost);
    println!();
    println!("1. Accept");
    println!("2. Decline");

    if console::read_selection() != 1 {
        return;
    }

    console::clear_screen();
    if trainer.spend(cost) {
        trainer.party_mut()[slot].revive();
        println!("Success! You have healed {} to full health!", name);
    } else {
        println!(
            "You do not have enough money to heal {}. Come back when you have the money.",
            name
        );
    }
    console::press_enter_to_continue();
}
