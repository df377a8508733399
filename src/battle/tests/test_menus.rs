use crate::battle::session::SessionPhase;
use crate::battle::state::{MenuLocation, Side};
use crate::battle::tests::common::{
    create_test_trainer, start_scripted_battle, test_catalog, TestCreatureBuilder,
};
use pretty_assertions::assert_eq;
use schema::Species;

fn awaiting(location: MenuLocation) -> SessionPhase {
    SessionPhase::AwaitingSelection {
        location,
        forced_swap: false,
    }
}

#[test]
fn menu_navigation_moves_between_states_without_spending_turns() {
    let catalog = test_catalog();
    let mut trainer = create_test_trainer(vec![
        TestCreatureBuilder::new(Species::Pikachu, 5).build(&catalog),
    ]);
    let opponent = TestCreatureBuilder::new(Species::Pidgey, 4).build(&catalog);

    // No rolls scripted: navigation must not consume any randomness.
    let (mut session, _) =
        start_scripted_battle(&mut trainer, &catalog, opponent, Side::Player, vec![]);

    assert_eq!(session.phase(), awaiting(MenuLocation::Overview));

    assert!(session.submit_selection(1).is_empty());
    assert_eq!(session.phase(), awaiting(MenuLocation::Attack));
    assert!(session.submit_selection(3).is_empty());
    assert_eq!(session.phase(), awaiting(MenuLocation::Overview));

    assert!(session.submit_selection(2).is_empty());
    assert_eq!(session.phase(), awaiting(MenuLocation::Bag));
    assert!(session.submit_selection(3).is_empty());
    assert_eq!(session.phase(), awaiting(MenuLocation::Overview));

    assert!(session.submit_selection(3).is_empty());
    assert_eq!(session.phase(), awaiting(MenuLocation::Party));
    assert!(session.submit_selection(7).is_empty());
    assert_eq!(session.phase(), awaiting(MenuLocation::Overview));

    // No creature was touched along the way.
    assert_eq!(session.trainer().active().unwrap().health, 25);
    assert_eq!(session.encounter().opponent.health, 20);
}

#[test]
fn unrecognized_selections_reprompt_the_same_menu() {
    let catalog = test_catalog();
    let mut trainer = create_test_trainer(vec![
        TestCreatureBuilder::new(Species::Pikachu, 5).build(&catalog),
    ]);
    let opponent = TestCreatureBuilder::new(Species::Pidgey, 4).build(&catalog);

    let (mut session, _) =
        start_scripted_battle(&mut trainer, &catalog, opponent, Side::Player, vec![]);

    for junk in [0, 5, 99, -1] {
        assert!(session.submit_selection(junk).is_empty());
        assert_eq!(session.phase(), awaiting(MenuLocation::Overview));
    }

    session.submit_selection(1);
    for junk in [0, 4, -7] {
        assert!(session.submit_selection(junk).is_empty());
        assert_eq!(session.phase(), awaiting(MenuLocation::Attack));
    }
}

#[test]
fn party_menu_rejects_out_of_range_slots_in_place() {
    let catalog = test_catalog();
    let mut trainer = create_test_trainer(vec![
        TestCreatureBuilder::new(Species::Pikachu, 5).build(&catalog),
        TestCreatureBuilder::new(Species::Oddish, 4).build(&catalog),
    ]);
    let opponent = TestCreatureBuilder::new(Species::Pidgey, 4).build(&catalog);

    let (mut session, _) =
        start_scripted_battle(&mut trainer, &catalog, opponent, Side::Player, vec![]);

    session.submit_selection(3);
    // Slots 3..6 exist on the menu frame but hold no creature here.
    assert!(session.submit_selection(5).is_empty());
    assert_eq!(session.phase(), awaiting(MenuLocation::Party));

    // Selecting the already-active creature is also rejected in place.
    assert!(session.submit_selection(1).is_empty());
    assert_eq!(session.phase(), awaiting(MenuLocation::Party));
    assert_eq!(session.trainer().active().unwrap().name, "Pikachu");
}
