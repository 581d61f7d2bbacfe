//! Pursuer turn
//!
//! Runs once per game turn after the player's action. Pursuers act one at
//! a time in list order; a pursuer woken during the phase first acts on the
//! following turn.

use tracing::{debug, trace};

use super::{skills, PursuerId};
use crate::gameloop::{GameState, LossCause};
use crate::object::{Container, ContainerId, Skill};

/// Run every pursuer's turn.
///
/// Returns the loss if a skill ended the game mid-phase.
pub fn pursuers_turn(state: &mut GameState) -> Option<(LossCause, String)> {
    if state.player.take_calmed() {
        debug!(turn = state.turns, "pursuer phase suppressed");
        state.message("CALM ENVIRONMENT! The item you used temporarily deterred the evil presence.");
        return None;
    }

    let active = state.pursuers.len();
    for index in 0..active {
        let id = state.pursuers[index].id;

        if let Some(skill) = roll_skill(state, index) {
            state.message(format!(
                "!!!! Resentment explodes around you! {skill} is activated!"
            ));
            if let Some(loss) = skills::activate(state, id, skill) {
                return Some(loss);
            }
        }

        relocate(state, id);
        maybe_hide(state, id);
    }
    None
}

/// Pick a skill to fire this turn, if the roll succeeds
fn roll_skill(state: &mut GameState, index: usize) -> Option<Skill> {
    let skills = state.pursuers[index].skills();
    if skills.is_empty() || !state.rng.percent(state.options.skill_chance) {
        return None;
    }
    state.rng.choose(skills).copied()
}

/// Leave any box, then move to a random neighbor of the current room.
///
/// A room with no exits keeps the pursuer where it is.
pub(crate) fn relocate(state: &mut GameState, id: PursuerId) {
    let Some(from) = state.pursuer(id).map(|p| p.room()) else {
        return;
    };
    let neighbors = state.mansion.room(from).neighbors();
    let to = state.rng.choose(&neighbors).copied().unwrap_or(from);

    state.place_pursuer(id, to);
    trace!(
        pursuer = id.0,
        from = %state.mansion.room(from).name,
        to = %state.mansion.room(to).name,
        "pursuer moved"
    );
}

/// Hide in a random closed, unoccupied box of the current room
fn maybe_hide(state: &mut GameState, id: PursuerId) {
    if !state.rng.percent(state.options.hide_chance) {
        return;
    }
    let Some(room) = state.pursuer(id).map(|p| p.room()) else {
        return;
    };

    let spots: Vec<ContainerId> = state
        .mansion
        .room(room)
        .boxes
        .iter()
        .filter(|b| b.is_hiding_spot())
        .map(Container::id)
        .collect();

    if let Some(&container) = state.rng.choose(&spots) {
        state.hide_pursuer(id, container);
        trace!(pursuer = id.0, box_id = %container, "pursuer hid");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mansion::{Anchors, Direction, Mansion};
    use crate::world::GameOptions;
    use crate::GameRng;

    /// Basement - First Floor Hall - Second Floor Hall, nothing else
    fn tower(options: GameOptions) -> GameState {
        let mut mansion = Mansion::new();
        let basement = mansion.create_room("Basement", 0, 1, None);
        let first_hall = mansion.create_room("First Floor Hall", 3, 1, None);
        let second_hall = mansion.create_room("Second Floor Hall", 7, 1, None);
        mansion.connect_both(first_hall, Direction::Up, second_hall);
        mansion.connect_both(first_hall, Direction::Down, basement);
        let anchors = Anchors {
            basement,
            first_hall,
            second_hall,
        };
        GameState::with_mansion(mansion, anchors, options, GameRng::new(5))
    }

    fn quiet() -> GameOptions {
        GameOptions {
            skill_chance: 0,
            hide_chance: 0,
            ..GameOptions::default()
        }
    }

    #[test]
    fn test_calm_flag_skips_whole_phase() {
        let mut state = tower(quiet());
        state.player.set_calmed();

        assert!(pursuers_turn(&mut state).is_none());
        assert_eq!(state.pursuers[0].room(), state.anchors.basement);
        assert!(!state.player.is_calmed());
        assert!(state.messages.iter().any(|m| m.contains("CALM ENVIRONMENT")));
    }

    #[test]
    fn test_pursuer_moves_to_only_neighbor() {
        let mut state = tower(quiet());
        pursuers_turn(&mut state);
        assert_eq!(state.pursuers[0].room(), state.anchors.first_hall);
        assert!(state.pursuers[0].is_visible());
    }

    #[test]
    fn test_hiding_occupies_a_box_in_the_new_room() {
        let options = GameOptions {
            hide_chance: 100,
            ..quiet()
        };
        let mut state = tower(options);
        pursuers_turn(&mut state);

        let pursuer = &state.pursuers[0];
        let container = pursuer.hidden_in().expect("pursuer should hide");
        assert_eq!(state.mansion.room_of_container(container), Some(pursuer.room()));
        assert_eq!(
            state.mansion.container(container).and_then(Container::occupant),
            Some(pursuer.id)
        );
    }

    #[test]
    fn test_hidden_pursuer_vacates_before_moving() {
        let options = GameOptions {
            hide_chance: 100,
            ..quiet()
        };
        let mut state = tower(options);
        pursuers_turn(&mut state);
        let first_box = state.pursuers[0].hidden_in().expect("hidden after first turn");

        state.options.hide_chance = 0;
        pursuers_turn(&mut state);

        assert!(state.pursuers[0].is_visible());
        assert!(state.mansion.container(first_box).is_some_and(|b| b.occupant().is_none()));
    }

    #[test]
    fn test_unlocked_skill_fires_before_moving() {
        let options = GameOptions {
            skill_chance: 100,
            ..quiet()
        };
        let mut state = tower(options);
        state.pursuers[0].unlock(Skill::LockedDoor);

        assert!(pursuers_turn(&mut state).is_none());
        assert!(state.messages.iter().any(|m| m.contains("Locked Door is activated")));
        assert_eq!(state.pursuers[0].room(), state.anchors.first_hall);
    }

    #[test]
    fn test_no_skills_means_no_skill_roll() {
        let options = GameOptions {
            skill_chance: 100,
            ..quiet()
        };
        let mut state = tower(options);
        pursuers_turn(&mut state);
        assert!(!state.messages.iter().any(|m| m.contains("Resentment")));
    }
}
