use crate::battle::generator::generate_wild_creature;
use crate::battle::resolver::{
    defeat_penalty, roll_attack_power, roll_capture, roll_computer_attack, roll_first_mover,
    roll_flee, victory_experience, victory_money, MoveKind,
};
use crate::battle::state::{
    BattleEvent, BattleRng, BattleStatus, CaptureFailure, Encounter, EventBus, MenuLocation, Side,
};
use crate::catalog::Catalog;
use crate::creature::{Creature, DamageOutcome, ExperienceOutcome};
use crate::trainer::Trainer;
use schema::ItemId;

/// HP restored by one Elixir used in battle.
pub const ELIXIR_HEAL: u32 = 20;

/// Menu number of "Previous Menu" on the party screen.
const PARTY_BACK_SELECTION: i32 = 7;

/// What the session is waiting for, from the frontend's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// The player must enter a selection for the given menu. When
    /// `forced_swap` is set the party menu is mandatory: a fainted lead must
    /// be replaced and "back" is disabled.
    AwaitingSelection {
        location: MenuLocation,
        forced_swap: bool,
    },
    /// The encounter reached a terminal status and must be discarded.
    Ended { status: BattleStatus },
}

/// One wild-creature battle, driven one menu selection at a time.
///
/// The session owns the turn loop: the frontend reads an integer, submits
/// it, and renders the events that come back. A selection that spends the
/// player's turn automatically runs the computer's reply before returning,
/// so the alternation fixed by the first-mover roll is preserved without
/// any recursion or I/O in here.
#[derive(Debug)]
pub struct BattleSession<'a> {
    trainer: &'a mut Trainer,
    catalog: &'a Catalog,
    encounter: Encounter,
    rng: BattleRng,
    forced_swap: bool,
}

impl<'a> BattleSession<'a> {
    /// Generate a wild encounter from the trainer's lead creature and start
    /// the battle. The returned events cover the encounter announcement and,
    /// when the computer won the first-mover roll, its opening attack.
    ///
    /// Panics if the trainer has no creature in slot 0; callers gate battle
    /// entry on a living party.
    pub fn start(
        trainer: &'a mut Trainer,
        catalog: &'a Catalog,
        mut rng: BattleRng,
    ) -> (Self, EventBus) {
        let lead_level = trainer
            .active()
            .expect("a battle requires a lead creature in slot 0")
            .level;
        let opponent = generate_wild_creature(catalog, lead_level, &mut rng);
        let first_mover = roll_first_mover(&mut rng);
        Self::with_opponent(trainer, catalog, opponent, first_mover, rng)
    }

    /// Start a battle against a specific opponent with a fixed first mover.
    /// [`BattleSession::start`] rolls both; tests and fixtures inject them.
    pub fn with_opponent(
        trainer: &'a mut Trainer,
        catalog: &'a Catalog,
        opponent: Creature,
        first_mover: Side,
        rng: BattleRng,
    ) -> (Self, EventBus) {
        let lead_name = trainer
            .active()
            .expect("a battle requires a lead creature in slot 0")
            .name
            .clone();

        let mut events = EventBus::new();
        events.push(BattleEvent::WildAppeared {
            opponent: opponent.name.clone(),
            lead: lead_name,
        });

        let mut session = BattleSession {
            trainer,
            catalog,
            encounter: Encounter::new(opponent, first_mover),
            rng,
            forced_swap: false,
        };

        if first_mover == Side::Computer {
            session.computer_turn(&mut events);
        }

        (session, events)
    }

    pub fn phase(&self) -> SessionPhase {
        if self.encounter.is_over() {
            SessionPhase::Ended {
                status: self.encounter.status,
            }
        } else {
            SessionPhase::AwaitingSelection {
                location: self.encounter.location,
                forced_swap: self.forced_swap,
            }
        }
    }

    pub fn encounter(&self) -> &Encounter {
        &self.encounter
    }

    pub fn trainer(&self) -> &Trainer {
        self.trainer
    }

    /// Feed one menu selection into the state machine and return everything
    /// that happened as a result. Unrecognized selections change nothing and
    /// the same menu is prompted again.
    ///
    /// Panics when called after the encounter ended; driving a finished
    /// session is a programming error, not a recoverable input.
    pub fn submit_selection(&mut self, selection: i32) -> EventBus {
        assert!(
            !self.encounter.is_over(),
            "selection submitted to a finished battle session"
        );

        let mut events = EventBus::new();

        if self.forced_swap {
            self.party_selection(selection, true, &mut events);
            return events;
        }

        match self.encounter.location {
            MenuLocation::Overview => match selection {
                1 => self.encounter.location = MenuLocation::Attack,
                2 => self.encounter.location = MenuLocation::Bag,
                3 => self.encounter.location = MenuLocation::Party,
                4 => self.attempt_flee(&mut events),
                _ => {}
            },
            MenuLocation::Attack => match selection {
                1 => self.player_attack(MoveKind::Normal, &mut events),
                2 => self.player_attack(MoveKind::Special, &mut events),
                3 => self.encounter.location = MenuLocation::Overview,
                _ => {}
            },
            MenuLocation::Bag => match selection {
                1 => self.use_elixir(&mut events),
                2 => self.throw_pokeball(&mut events),
                3 => self.encounter.location = MenuLocation::Overview,
                _ => {}
            },
            MenuLocation::Party => self.party_selection(selection, false, &mut events),
        }

        events
    }

    // === Player actions ===

    fn player_attack(&mut self, kind: MoveKind, events: &mut EventBus) {
        events.push(BattleEvent::TurnStarted { side: Side::Player });

        let lead = self.trainer.active().expect("lead creature present");
        let attacker = lead.name.clone();
        let level = lead.level;
        let move_name = self
            .catalog
            .species_def(lead.species)
            .move_name(kind.slot())
            .to_string();
        events.push(BattleEvent::MoveUsed {
            side: Side::Player,
            attacker,
            move_name,
        });

        let power = roll_attack_power(kind, level, &mut self.rng);
        match self.encounter.opponent.take_damage(power) {
            DamageOutcome::Missed => {
                self.encounter.status = BattleStatus::Missed;
                events.push(BattleEvent::AttackMissed);
            }
            DamageOutcome::Hit => {
                self.encounter.status = BattleStatus::Hit;
                events.push(BattleEvent::DamageDealt {
                    side: Side::Computer,
                    target: self.encounter.opponent.name.clone(),
                    amount: power,
                });
            }
            DamageOutcome::Fainted => {
                self.encounter.status = BattleStatus::Fainted;
                events.push(BattleEvent::CreatureFainted {
                    side: Side::Computer,
                    name: self.encounter.opponent.name.clone(),
                });
                self.finish_victory(events);
                return;
            }
        }

        self.end_player_turn(events);
    }

    fn attempt_flee(&mut self, events: &mut EventBus) {
        events.push(BattleEvent::TurnStarted { side: Side::Player });

        if roll_flee(&mut self.rng) {
            events.push(BattleEvent::FleeSucceeded);
            self.encounter.status = BattleStatus::Fled;
        } else {
            events.push(BattleEvent::FleeFailed);
            self.encounter.status = BattleStatus::FleeFailed;
            self.end_player_turn(events);
        }
    }

    fn use_elixir(&mut self, events: &mut EventBus) {
        events.push(BattleEvent::TurnStarted { side: Side::Player });

        if self.trainer.consume_item(ItemId::Elixir) {
            let lead = self.trainer.active_mut().expect("lead creature present");
            lead.grant_health(ELIXIR_HEAL);
            events.push(BattleEvent::HealthRestored {
                name: lead.name.clone(),
                amount: ELIXIR_HEAL,
            });
        } else {
            events.push(BattleEvent::ItemMissing);
        }

        self.encounter.status = BattleStatus::Continuing;
        self.end_player_turn(events);
    }

    fn throw_pokeball(&mut self, events: &mut EventBus) {
        events.push(BattleEvent::TurnStarted { side: Side::Player });

        if !self.trainer.consume_item(ItemId::Pokeball) {
            events.push(BattleEvent::ItemMissing);
            self.encounter.status = BattleStatus::Continuing;
            self.end_player_turn(events);
            return;
        }

        events.push(BattleEvent::PokeballThrown {
            trainer: self.trainer.name.clone(),
        });

        if roll_capture(&mut self.rng) {
            let captured_name = self.encounter.opponent.name.clone();
            match self.trainer.acquire_creature(self.encounter.opponent.clone()) {
                Ok(()) => {
                    events.push(BattleEvent::CaptureSucceeded {
                        name: captured_name,
                    });
                    self.encounter.status = BattleStatus::Captured;
                }
                Err(_overflow) => {
                    // Full party: reported exactly like a failed roll.
                    events.push(BattleEvent::CaptureBrokeFree {
                        cause: CaptureFailure::PartyFull,
                    });
                    self.encounter.status = BattleStatus::CaptureFailed;
                    self.end_player_turn(events);
                }
            }
        } else {
            events.push(BattleEvent::CaptureBrokeFree {
                cause: CaptureFailure::Roll,
            });
            self.encounter.status = BattleStatus::CaptureFailed;
            self.end_player_turn(events);
        }
    }

    fn party_selection(&mut self, selection: i32, forced: bool, events: &mut EventBus) {
        if !forced && selection == PARTY_BACK_SELECTION {
            self.encounter.location = MenuLocation::Overview;
            return;
        }

        let party_len = self.trainer.party().len() as i32;
        if selection < 1 || selection > party_len {
            // Out-of-range target: re-prompt, nothing changed.
            return;
        }
        let slot = (selection - 1) as usize;

        let target = &self.trainer.party()[slot];
        if target.is_fainted() {
            events.push(BattleEvent::SwapRejected {
                name: target.name.clone(),
            });
            return;
        }
        if slot == 0 {
            // Already the active creature; re-prompt.
            return;
        }

        let recalled = self.trainer.party()[0].name.clone();
        let sent_out = target.name.clone();
        self.trainer.swap_to_front(slot);

        events.push(BattleEvent::TurnStarted { side: Side::Player });
        events.push(BattleEvent::CreatureSwapped { recalled, sent_out });
        self.encounter.status = BattleStatus::Continuing;

        if forced {
            // Replacement after a faint does not cost the turn that follows:
            // the player acts next, exactly as if their creature still stood.
            self.forced_swap = false;
            self.encounter.location = MenuLocation::Overview;
        } else {
            self.end_player_turn(events);
        }
    }

    // === Turn sequencing ===

    /// Close out a turn-spending player action: back to the overview menu,
    /// then the computer replies unless the battle already ended.
    fn end_player_turn(&mut self, events: &mut EventBus) {
        self.encounter.location = MenuLocation::Overview;
        if !self.encounter.is_over() {
            self.computer_turn(events);
        }
    }

    fn computer_turn(&mut self, events: &mut EventBus) {
        events.push(BattleEvent::TurnStarted {
            side: Side::Computer,
        });

        let attack = roll_computer_attack(self.encounter.opponent.level, &mut self.rng);
        let move_name = self
            .catalog
            .species_def(self.encounter.opponent.species)
            .move_name(attack.kind.slot())
            .to_string();
        events.push(BattleEvent::MoveUsed {
            side: Side::Computer,
            attacker: self.encounter.opponent.name.clone(),
            move_name,
        });

        let lead = self.trainer.active_mut().expect("lead creature present");
        let lead_name = lead.name.clone();
        match lead.take_damage(attack.power) {
            DamageOutcome::Missed => {
                self.encounter.status = BattleStatus::Missed;
                events.push(BattleEvent::AttackMissed);
            }
            DamageOutcome::Hit => {
                self.encounter.status = BattleStatus::Hit;
                events.push(BattleEvent::DamageDealt {
                    side: Side::Player,
                    target: lead_name,
                    amount: attack.power,
                });
            }
            DamageOutcome::Fainted => {
                self.encounter.status = BattleStatus::Fainted;
                events.push(BattleEvent::CreatureFainted {
                    side: Side::Player,
                    name: lead_name,
                });

                if self.trainer.living_party_count() > 0 {
                    // Mandatory replacement before the battle may continue.
                    self.forced_swap = true;
                    self.encounter.location = MenuLocation::Party;
                } else {
                    self.finish_defeat(events);
                }
            }
        }
    }

    // === Battle endings ===

    fn finish_victory(&mut self, events: &mut EventBus) {
        let opponent_level = self.encounter.opponent.level;
        let exp_earned = victory_experience(opponent_level);
        let money_earned = victory_money(opponent_level);

        self.trainer.earn(money_earned);

        let lead = self.trainer.active_mut().expect("lead creature present");
        if lead.grant_experience(exp_earned) == ExperienceOutcome::LeveledUp {
            self.encounter.status = BattleStatus::LeveledUp;
            events.push(BattleEvent::LeveledUp {
                name: lead.name.clone(),
                level: lead.level,
            });
        }

        events.push(BattleEvent::BattleWon {
            trainer: self.trainer.name.clone(),
            opponent: self.encounter.opponent.name.clone(),
            lead: self.trainer.active().expect("lead creature present").name.clone(),
            exp_earned,
            money_earned,
        });
        self.encounter.status = BattleStatus::BattleWon;
    }

    fn finish_defeat(&mut self, events: &mut EventBus) {
        let money_lost = defeat_penalty(self.encounter.opponent.level);
        // The shortfall is absorbed: the balance floors at zero, never debt.
        if !self.trainer.spend(money_lost) {
            self.trainer.money = 0;
        }

        events.push(BattleEvent::BattleLost {
            trainer: self.trainer.name.clone(),
            opponent: self.encounter.opponent.name.clone(),
            money_lost,
        });
        self.encounter.status = BattleStatus::BattleLost;
    }
}
