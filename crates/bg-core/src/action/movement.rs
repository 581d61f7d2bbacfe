//! Walking between rooms

use tracing::trace;

use crate::action::ActionResult;
use crate::gameloop::GameState;
use crate::mansion::Direction;

/// Move through the exit in `dir`
pub fn do_move(state: &mut GameState, dir: Direction) -> ActionResult {
    let Some(to) = state.mansion.room(state.player.room).neighbor(dir) else {
        return ActionResult::Failed("There is no path in that direction.".to_string());
    };

    state.player.move_to(to);
    let name = state.mansion.room(to).name.clone();
    trace!(room = %name, %dir, "player moved");
    state.message(format!("Moved to the {name}."));
    ActionResult::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;

    #[test]
    fn test_move_up_and_back() {
        let mut state = GameState::new(GameRng::new(21));
        let start = state.player.room;

        assert_eq!(do_move(&mut state, Direction::Up), ActionResult::Success);
        assert_eq!(state.player.room, state.anchors.second_hall);
        assert_eq!(do_move(&mut state, Direction::Down), ActionResult::Success);
        assert_eq!(state.player.room, start);
    }

    #[test]
    fn test_move_without_exit_fails() {
        let mut state = GameState::new(GameRng::new(21));
        state.player.move_to(state.anchors.basement);

        let result = do_move(&mut state, Direction::Down);
        assert!(matches!(result, ActionResult::Failed(_)));
        assert_eq!(state.player.room, state.anchors.basement);
    }
}
