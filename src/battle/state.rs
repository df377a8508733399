use crate::creature::Creature;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Which side of the encounter is acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

/// Where the player currently is in the in-battle menu tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuLocation {
    /// Top-level choice: attack / bag / party / flee.
    Overview,
    /// Pick one of the active creature's two moves.
    Attack,
    /// Use a consumable from the inventory.
    Bag,
    /// Swap another party member into slot 0.
    Party,
}

/// Outcome status of the most recent battle action, plus the terminal
/// states that end the encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleStatus {
    Continuing,
    Hit,
    Missed,
    Fainted,
    Captured,
    CaptureFailed,
    Fled,
    FleeFailed,
    LeveledUp,
    BattleWon,
    BattleLost,
    BattleEndedByPlayer,
}

impl BattleStatus {
    /// True for the statuses that end the encounter.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            BattleStatus::BattleWon
                | BattleStatus::BattleLost
                | BattleStatus::Fled
                | BattleStatus::Captured
                | BattleStatus::BattleEndedByPlayer
        )
    }

    /// Collapse player-initiated endings (flee, capture) into the single
    /// loop-level signal the out-of-battle caller cares about.
    pub fn end_signal(self) -> Option<BattleStatus> {
        match self {
            BattleStatus::Fled | BattleStatus::Captured => {
                Some(BattleStatus::BattleEndedByPlayer)
            }
            BattleStatus::BattleWon => Some(BattleStatus::BattleWon),
            BattleStatus::BattleLost => Some(BattleStatus::BattleLost),
            BattleStatus::BattleEndedByPlayer => Some(BattleStatus::BattleEndedByPlayer),
            _ => None,
        }
    }
}

/// Why a capture attempt reported failure. Both causes are announced with
/// identical text on purpose; the distinction exists for callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureFailure {
    /// The capture roll missed its 1-in-10 bucket.
    Roll,
    /// The roll succeeded but the party had no free slot.
    PartyFull,
}

/// Everything observable that happens during an encounter.
///
/// The engine never prints; it pushes events and the frontend formats them.
/// Names are carried inside the events so formatting needs no extra context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// A new actor's turn begins. Silent; used to segment status screens.
    TurnStarted { side: Side },
    WildAppeared { opponent: String, lead: String },
    MoveUsed {
        side: Side,
        attacker: String,
        move_name: String,
    },
    DamageDealt {
        side: Side,
        target: String,
        amount: u32,
    },
    AttackMissed,
    CreatureFainted { side: Side, name: String },
    CreatureSwapped { recalled: String, sent_out: String },
    SwapRejected { name: String },
    ItemMissing,
    HealthRestored { name: String, amount: u32 },
    PokeballThrown { trainer: String },
    CaptureSucceeded { name: String },
    CaptureBrokeFree { cause: CaptureFailure },
    FleeSucceeded,
    FleeFailed,
    LeveledUp { name: String, level: u32 },
    BattleWon {
        trainer: String,
        opponent: String,
        lead: String,
        exp_earned: u32,
        money_earned: u32,
    },
    BattleLost {
        trainer: String,
        opponent: String,
        money_lost: u32,
    },
}

impl BattleEvent {
    /// Format the event as user-facing status text.
    /// Returns None for silent bookkeeping events.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::TurnStarted { .. } => None,

            BattleEvent::WildAppeared { opponent, lead } => {
                Some(format!("A wild {} appeared! GO! {}!", opponent, lead))
            }

            BattleEvent::MoveUsed {
                side,
                attacker,
                move_name,
            } => match side {
                Side::Player => Some(format!("{} used {}!", attacker, move_name)),
                Side::Computer => Some(format!("Wild {} used {}!", attacker, move_name)),
            },
            BattleEvent::DamageDealt {
                side,
                target,
                amount,
            } => match side {
                // `side` is the side that was hit.
                Side::Player => Some(format!("{} took {} damage!", target, amount)),
                Side::Computer => Some(format!("Wild {} took {} damage!", target, amount)),
            },
            BattleEvent::AttackMissed => Some("It missed!".to_string()),
            BattleEvent::CreatureFainted { side, name } => match side {
                Side::Player => Some(format!("{} has fainted!", name)),
                Side::Computer => Some(format!("Wild {} has fainted!", name)),
            },

            BattleEvent::CreatureSwapped { recalled, sent_out } => {
                Some(format!("{} come back! Go! {}!", recalled, sent_out))
            }
            BattleEvent::SwapRejected { .. } => {
                Some("This POKEMON is not fit for battle! Cannot swap!".to_string())
            }

            BattleEvent::ItemMissing => Some("You do not have any of that item.".to_string()),
            BattleEvent::HealthRestored { name, amount } => {
                Some(format!("Added {} HP to {}!", amount, name))
            }
            BattleEvent::PokeballThrown { trainer } => {
                Some(format!("{} used a POKEBALL!", trainer))
            }
            BattleEvent::CaptureSucceeded { name } => {
                Some(format!("GOTCHA! Wild {} was caught!", name))
            }
            // Roll failure and full-party rejection read identically.
            BattleEvent::CaptureBrokeFree { .. } => {
                Some("Oh, no! The POKEMON broke free!".to_string())
            }

            BattleEvent::FleeSucceeded => Some("Got away safely!".to_string()),
            BattleEvent::FleeFailed => Some("Can't Escape!".to_string()),

            BattleEvent::LeveledUp { name, level } => {
                Some(format!("{} has leveled up to Level {}!", name, level))
            }
            BattleEvent::BattleWon {
                trainer,
                opponent,
                lead,
                exp_earned,
                money_earned,
            } => Some(format!(
                "{} has defeated {}! {} has earned {} EXP!\n{} has earned {} credits!",
                trainer, opponent, lead, exp_earned, trainer, money_earned
            )),
            BattleEvent::BattleLost {
                trainer,
                opponent,
                money_lost,
            } => Some(format!(
                "{} has been defeated by {}! {} has lost {} credits.",
                trainer, opponent, trainer, money_lost
            )),
        }
    }
}

/// Event bus for collecting battle events in resolution order.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Split into display segments: each [`BattleEvent::TurnStarted`] opens a
    /// new segment, and silent events are dropped from the formatted output.
    pub fn screens(&self) -> Vec<Vec<String>> {
        let mut screens: Vec<Vec<String>> = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for event in &self.events {
            if matches!(event, BattleEvent::TurnStarted { .. }) {
                if !current.is_empty() {
                    screens.push(std::mem::take(&mut current));
                }
                continue;
            }
            if let Some(text) = event.format() {
                current.push(text);
            }
        }
        if !current.is_empty() {
            screens.push(current);
        }
        screens
    }
}

impl std::fmt::Display for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// The state of one wild encounter, created per battle and discarded when
/// the battle reaches a terminal status.
#[derive(Debug, Clone)]
pub struct Encounter {
    /// The wild creature. Owned by the encounter until captured, at which
    /// point ownership transfers into the trainer's party.
    pub opponent: Creature,
    pub location: MenuLocation,
    pub status: BattleStatus,
    /// Fixed at battle start; never changes mid-encounter.
    pub first_mover: Side,
}

impl Encounter {
    pub fn new(opponent: Creature, first_mover: Side) -> Encounter {
        Encounter {
            opponent,
            location: MenuLocation::Overview,
            status: BattleStatus::Continuing,
            first_mover,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Random source for one battle session.
///
/// Either samples a real PRNG seeded once at session start, or replays a
/// scripted list of outcomes so tests can pin every roll. Scripted rolls
/// panic with the roll's reason when the script runs dry, which points
/// straight at the missing value.
#[derive(Debug, Clone)]
pub enum BattleRng {
    Sampled(StdRng),
    Scripted { outcomes: Vec<u32>, index: usize },
}

impl BattleRng {
    /// PRNG seeded from OS entropy.
    pub fn from_entropy() -> Self {
        BattleRng::Sampled(StdRng::from_os_rng())
    }

    /// PRNG with a fixed seed, for reproducible battles.
    pub fn seeded(seed: u64) -> Self {
        BattleRng::Sampled(StdRng::seed_from_u64(seed))
    }

    /// Replay the given outcomes in order. Each must be below the bound of
    /// the roll that consumes it.
    pub fn scripted(outcomes: Vec<u32>) -> Self {
        BattleRng::Scripted { outcomes, index: 0 }
    }

    /// Uniform roll in `[0, bound)`.
    pub fn roll(&mut self, bound: u32, reason: &str) -> u32 {
        match self {
            BattleRng::Sampled(rng) => rng.random_range(0..bound),
            BattleRng::Scripted { outcomes, index } => {
                let Some(&outcome) = outcomes.get(*index) else {
                    panic!(
                        "scripted rng exhausted! tried to roll for: '{}'. Add more outcomes.",
                        reason
                    );
                };
                assert!(
                    outcome < bound,
                    "scripted outcome {} out of range for '{}' (bound {})",
                    outcome,
                    reason,
                    bound
                );
                *index += 1;
                outcome
            }
        }
    }
}
