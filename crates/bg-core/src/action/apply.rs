//! Using inventory items
//!
//! Each item kind has its own effect. Passwords and weaknesses are never
//! consumed; a counter item always is.

use tracing::info;

use crate::action::ActionResult;
use crate::gameloop::{GameState, Victory};
use crate::mansion::Feature;
use crate::monster::relocate;
use crate::object::ItemKind;

/// Use the named inventory item
pub fn do_use(state: &mut GameState, name: &str) -> ActionResult {
    if state.player.inventory.is_empty() {
        return ActionResult::Failed("Your inventory is empty.".to_string());
    }
    let Some(index) = state.player.find_item(name) else {
        return ActionResult::Failed("You do not have that item.".to_string());
    };

    match state.player.inventory[index].kind {
        ItemKind::Password => use_password(state),
        ItemKind::Weakness => use_weakness(state),
        ItemKind::Counter => use_counter(state, index),
        ItemKind::Manuscript(_) => {
            state.message(
                "The manuscript cannot be used directly by the player. Its contents have already empowered the Box Girl.",
            );
            ActionResult::Success
        }
        ItemKind::Filler => {
            state.message("This box is empty.");
            ActionResult::Success
        }
    }
}

fn use_password(state: &mut GameState) -> ActionResult {
    let held = state.player.count_kind(ItemKind::Password);
    let needed = state.options.passwords_required;
    if held < needed {
        state.message(format!(
            "You currently have only {held} password(s). You need {needed}."
        ));
        return ActionResult::Success;
    }

    let room = state.mansion.room(state.player.room);
    if !room.has_feature(Feature::HiddenExit) {
        state.message("You hold the passwords, but there is no exit here to open.");
        return ActionResult::Success;
    }

    info!(room = %room.name, "escape");
    state.message("Password match successful!");
    ActionResult::Won(
        Victory::Escape,
        "You entered the correct passwords, and the hidden exit creaked open! You escaped the mansion.".to_string(),
    )
}

fn use_weakness(state: &mut GameState) -> ActionResult {
    let held = state.player.count_kind(ItemKind::Weakness);
    let needed = state.options.weaknesses_required;
    if held < needed {
        state.message(format!(
            "You currently have only {held} weakness item(s). You need {needed} to perform the exorcism."
        ));
        return ActionResult::Success;
    }

    let room = state.mansion.room(state.player.room);
    if !room.feature.is_some_and(|f| f.permits_exorcism()) {
        state.message(
            "You are not in the correct room for exorcism. Find the source of her resentment (Miss Mary's/Corpse Room).",
        );
        return ActionResult::Success;
    }

    info!(room = %room.name, "exorcism");
    state.message("Exorcism successful!");
    ActionResult::Won(
        Victory::Exorcism,
        "You used the weaknesses on the Box Girl! She vanished with a terrifying scream.".to_string(),
    )
}

/// Consume a counter item and chase every pursuer out of the player's room
fn use_counter(state: &mut GameState, index: usize) -> ActionResult {
    let Some(item) = state.player.remove_item(index) else {
        return ActionResult::Failed("You do not have that item.".to_string());
    };

    let here = state.player.room;
    let present: Vec<_> = state
        .pursuers
        .iter()
        .filter(|p| p.room() == here)
        .map(|p| p.id)
        .collect();
    for &id in &present {
        relocate(state, id);
    }
    state.player.set_calmed();

    if present.is_empty() {
        state.message(format!(
            "The aura of the {} calms the atmosphere. You feel safe for now.",
            item.name
        ));
    } else {
        state.message(format!(
            "{}'s power startled the Box Girl, and she fled your room!",
            item.name
        ));
    }
    ActionResult::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mansion::generate_mansion;
    use crate::monster::PursuerId;
    use crate::object::{Item, ItemId, Skill};
    use crate::world::GameOptions;
    use crate::GameRng;

    fn fresh(seed: u64) -> GameState {
        let mut rng = GameRng::new(seed);
        let (mansion, anchors) = generate_mansion(&mut rng);
        GameState::with_mansion(mansion, anchors, GameOptions::default(), rng)
    }

    fn give(state: &mut GameState, n: u32, kind: ItemKind) {
        for i in 0..n {
            state.player.add_item(Item::new(ItemId(100 + i), format!("{kind:?}-{i}"), "", kind));
        }
    }

    fn go_to(state: &mut GameState, feature: Feature) {
        let room = state.mansion.room_with_feature(feature).unwrap().id;
        state.player.move_to(room);
    }

    #[test]
    fn test_empty_inventory() {
        let mut state = fresh(1);
        assert!(matches!(do_use(&mut state, "Axe"), ActionResult::Failed(_)));
    }

    #[test]
    fn test_password_below_threshold_reports_count() {
        let mut state = fresh(2);
        give(&mut state, 2, ItemKind::Password);
        go_to(&mut state, Feature::HiddenExit);

        assert_eq!(do_use(&mut state, "Password-0"), ActionResult::Success);
        assert!(state.messages.last().unwrap().contains("only 2 password(s)"));
        assert_eq!(state.player.inventory.len(), 2);
    }

    #[test]
    fn test_password_in_wrong_room() {
        let mut state = fresh(3);
        give(&mut state, 3, ItemKind::Password);
        assert_eq!(do_use(&mut state, "password-1"), ActionResult::Success);
        assert!(state.messages.last().unwrap().contains("no exit here"));
    }

    #[test]
    fn test_password_escape() {
        let mut state = fresh(4);
        give(&mut state, 3, ItemKind::Password);
        go_to(&mut state, Feature::HiddenExit);
        assert!(matches!(
            do_use(&mut state, "Password-2"),
            ActionResult::Won(Victory::Escape, _)
        ));
    }

    #[test]
    fn test_weakness_needs_the_right_room() {
        let mut state = fresh(5);
        give(&mut state, 2, ItemKind::Weakness);
        go_to(&mut state, Feature::HiddenExit);
        assert_eq!(do_use(&mut state, "Weakness-0"), ActionResult::Success);

        for feature in [Feature::CorpseLocation, Feature::MissMary] {
            go_to(&mut state, feature);
            assert!(matches!(
                do_use(&mut state, "Weakness-1"),
                ActionResult::Won(Victory::Exorcism, _)
            ));
        }
    }

    #[test]
    fn test_single_weakness_is_not_enough() {
        let mut state = fresh(6);
        give(&mut state, 1, ItemKind::Weakness);
        go_to(&mut state, Feature::MissMary);
        assert_eq!(do_use(&mut state, "Weakness-0"), ActionResult::Success);
        assert!(state.messages.last().unwrap().contains("only 1 weakness"));
    }

    #[test]
    fn test_counter_scares_pursuer_out() {
        let mut state = fresh(7);
        let here = state.player.room;
        state.place_pursuer(PursuerId(0), here);
        give(&mut state, 1, ItemKind::Counter);

        assert_eq!(do_use(&mut state, "Counter-0"), ActionResult::Success);
        assert_ne!(state.pursuers[0].room(), here);
        assert!(state.player.inventory.is_empty());
        assert!(state.player.is_calmed());
    }

    #[test]
    fn test_counter_elsewhere_still_calms() {
        let mut state = fresh(8);
        let start = state.pursuers[0].room();
        give(&mut state, 1, ItemKind::Counter);

        do_use(&mut state, "Counter-0");
        assert_eq!(state.pursuers[0].room(), start);
        assert!(state.player.is_calmed());
    }

    #[test]
    fn test_manuscript_refuses() {
        let mut state = fresh(9);
        give(&mut state, 1, ItemKind::Manuscript(Skill::LockedDoor));
        let name = state.player.inventory[0].name.clone();
        assert_eq!(do_use(&mut state, &name), ActionResult::Success);
        assert_eq!(state.player.inventory.len(), 1);
    }
}
