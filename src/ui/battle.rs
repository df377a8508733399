//! Interactive battle driver: connects the console to a [`BattleSession`],
//! one selection in, one batch of status screens out.

use crate::battle::session::{BattleSession, SessionPhase};
use crate::battle::state::{BattleRng, BattleStatus, EventBus};
use crate::catalog::Catalog;
use crate::creature::Creature;
use crate::trainer::Trainer;
use crate::ui::{console, render};

/// Run one wild encounter to its terminal status.
///
/// The caller has already checked that the trainer has a living party
/// member; the session panics otherwise.
pub fn run_battle(trainer: &mut Trainer, catalog: &Catalog) -> BattleStatus {
    let (mut session, opening) = BattleSession::start(trainer, catalog, BattleRng::from_entropy());
    show_event_screens(&session.encounter().opponent, &opening);

    loop {
        match session.phase() {
            SessionPhase::AwaitingSelection {
                location,
                forced_swap,
            } => {
                render::battle_screen(
                    session.trainer(),
                    &session.encounter().opponent,
                    catalog,
                    location,
                    forced_swap,
                );
                let selection = console::read_selection();
                let events = session.submit_selection(selection);
                show_event_screens(&session.encounter().opponent, &events);
            }
            SessionPhase::Ended { status } => return status,
        }
    }
}

/// Render each display segment of an event batch as its own status screen.
fn show_event_screens(opponent: &Creature, events: &EventBus) {
    for screen in events.screens() {
        render::status_screen(opponent, &screen.join("\n"));
    }
}
