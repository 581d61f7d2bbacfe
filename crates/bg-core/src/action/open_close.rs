//! Opening boxes and putting items back

use tracing::debug;

use crate::action::ActionResult;
use crate::gameloop::{GameState, LossCause};
use crate::monster::{skills, PursuerKind};
use crate::object::{ContainerId, ItemKind, OpenOutcome};

/// Open a box in the player's room
pub fn do_open_box(state: &mut GameState, id: ContainerId) -> ActionResult {
    let room = state.mansion.room(state.player.room);
    if room.unopened_boxes().is_empty() {
        return ActionResult::Failed("All boxes in this room are already open.".to_string());
    }
    if !room.container(id).is_some_and(|b| !b.is_open()) {
        return ActionResult::Failed("Invalid box ID or the box is already open.".to_string());
    }

    resolve_open(state, id)
}

/// Open a box and deal with whatever is inside.
///
/// Shared by the player's own action and by a forced open.
pub(crate) fn resolve_open(state: &mut GameState, id: ContainerId) -> ActionResult {
    let Some(container) = state.mansion.container_mut(id) else {
        return ActionResult::Failed(format!("There is no box {id}."));
    };

    match container.open() {
        OpenOutcome::AlreadyOpen => ActionResult::Failed(format!("Box {id} is already open.")),
        OpenOutcome::Occupied(pursuer) => {
            let kind = state
                .pursuer(pursuer)
                .map_or(PursuerKind::BoxGirl, |p| p.kind);
            debug!(box_id = %id, pursuer = pursuer.0, "opened an occupied box");
            state.message("As you open the box, a monstrous presence emerges!");
            ActionResult::Died(
                LossCause::OpenedHidingBox,
                format!("You opened the box that hid the {kind}. She caught you immediately."),
            )
        }
        OpenOutcome::Empty | OpenOutcome::Spent => {
            state.message("The box is empty.");
            ActionResult::Success
        }
        OpenOutcome::Found(item) => {
            if let ItemKind::Manuscript(skill) = item.kind {
                state.message(format!(
                    "RESENTMENT BURST. A {} was found and activated the Box Girl's power.",
                    item.name
                ));
                skills::unlock(state, skill);
            } else {
                state.message(format!("Obtained: {}", item.name));
                state.message(item.description.clone());
                state.player.add_item(item);
            }
            ActionResult::Success
        }
    }
}

/// Put an inventory item into an open, empty box of the player's room
pub fn do_put_item(state: &mut GameState, id: ContainerId, name: &str) -> ActionResult {
    let Some(index) = state.player.find_item(name) else {
        return ActionResult::Failed("You do not have that item.".to_string());
    };
    let room = state.player.room;
    let Some(container) = state.mansion.room_mut(room).container_mut(id) else {
        return ActionResult::Failed(format!("There is no box {id} in this room."));
    };
    if let Err(reason) = container.check_put() {
        return ActionResult::Failed(format!("You cannot put anything there: {reason}."));
    }

    let Some(item) = state.player.remove_item(index) else {
        return ActionResult::Failed("You do not have that item.".to_string());
    };
    let item_name = item.name.clone();
    match container.put(item) {
        Ok(()) => {
            state.message(format!("You put the {item_name} into Box {id} and close it."));
            ActionResult::Success
        }
        Err(rejected) => {
            let reason = rejected.reason;
            state.player.add_item(rejected.item);
            ActionResult::Failed(format!("You cannot put anything there: {reason}."))
        }
    }
}
