//! Skill effects and manuscript unlocks

use tracing::{debug, info};

use super::{Pursuer, PursuerId, PursuerKind};
use crate::action::open_close::resolve_open;
use crate::action::ActionResult;
use crate::gameloop::{GameState, LossCause};
use crate::object::{scramble, Container, ContainerId, Skill};

/// Carry out a skill on behalf of pursuer `id`
pub fn activate(state: &mut GameState, id: PursuerId, skill: Skill) -> Option<(LossCause, String)> {
    debug!(pursuer = id.0, %skill, "skill activated");
    match skill {
        Skill::RightBesideYou => {
            let room = state.player.room;
            state.place_pursuer(id, room);
            state.message("You catch a glimpse of a moving box in your periphery... It's right beside you!");
        }
        Skill::MovingAround => {
            let room = state.player.room;
            scramble(&mut state.mansion.room_mut(room).boxes, true, &mut state.rng);
            state.message("The boxes in the room seem to have moved, and some have even closed...");
        }
        Skill::IWantToOpenIt => return force_open(state),
        Skill::GiveItToMe => steal_weakness(state),
        Skill::LockedDoor => {
            state.message("You feel an oppressive force around the exits, making the doors feel stuck.");
        }
        // Summons a pursuer on discovery; never held as a repeatable skill
        Skill::TwinSister => {}
    }
    None
}

/// Make the player open a box in their room, manuscripts first
fn force_open(state: &mut GameState) -> Option<(LossCause, String)> {
    state.message("The Box Girl's resentment compels you to a strong impulse! You must open a box!");

    let room = state.mansion.room(state.player.room);
    let unopened: Vec<&Container> = room.boxes.iter().filter(|b| !b.is_open()).collect();
    let manuscripts: Vec<ContainerId> = unopened
        .iter()
        .filter(|b| b.content().is_some_and(|i| i.is_manuscript()))
        .map(|b| b.id())
        .collect();
    let any: Vec<ContainerId> = unopened.iter().map(|b| b.id()).collect();

    let pool = if manuscripts.is_empty() { any } else { manuscripts };
    let Some(&target) = state.rng.choose(&pool) else {
        state.message("The Box Girl tried to force you, but all boxes are already open.");
        return None;
    };

    state.message(format!("Your body moves against your will to open Box {target}!"));
    match resolve_open(state, target) {
        ActionResult::Died(cause, msg) => Some((cause, msg)),
        _ => None,
    }
}

/// Take the player's first weakness and hide it somewhere else
fn steal_weakness(state: &mut GameState) {
    let Some(item) = state.player.take_first_weakness() else {
        state.message("The Box Girl attempted to steal, but you don't possess her greatest fear.");
        return;
    };

    state.message(format!(
        "A shadow quickly sweeps past, and your {} is stolen!",
        item.name
    ));
    match state.mansion.rehide_item(item, &mut state.rng) {
        Ok(container) => {
            debug!(box_id = %container, "stolen item re-hidden");
            state.message("The stolen item has been re-hidden.");
        }
        Err(lost) => {
            info!(item = %lost.name, "stolen item lost, no free box");
            state.message("The item is lost, the Box Girl failed to find a hiding spot.");
        }
    }
}

/// Apply a discovered manuscript
pub fn unlock(state: &mut GameState, skill: Skill) {
    if skill.summons_twin() {
        spawn_twin(state);
        return;
    }

    let mut learned = false;
    for pursuer in &mut state.pursuers {
        learned |= pursuer.unlock(skill);
    }
    if learned {
        info!(%skill, "skill unlocked");
        state.message(format!("Box Girl Skill [{skill}] has been unlocked!"));
    }
}

/// Wake the twin sister in the second floor hall.
///
/// She copies the first pursuer's skills and slips into a random free box
/// there, or waits in plain sight if every box is open or taken.
fn spawn_twin(state: &mut GameState) {
    if state.pursuers.iter().any(|p| p.kind == PursuerKind::TwinSister) {
        debug!("twin sister already awake");
        return;
    }

    let id = PursuerId(state.pursuers.len() as u32);
    let room = state.anchors.second_hall;
    let skills = state.pursuers.first().map(|p| p.skills().to_vec()).unwrap_or_default();
    state
        .pursuers
        .push(Pursuer::new(id, PursuerKind::TwinSister, room).with_skills(&skills));

    let spots: Vec<ContainerId> = state
        .mansion
        .room(room)
        .boxes
        .iter()
        .filter(|b| b.is_hiding_spot())
        .map(Container::id)
        .collect();
    let spot = state.rng.choose(&spots).copied();
    if let Some(container) = spot {
        state.hide_pursuer(id, container);
    }

    info!(pursuer = id.0, hidden = spot.is_some(), "twin sister spawned");
    state.message("Something stirs on the upper floor... Her twin sister has awakened!");
}
