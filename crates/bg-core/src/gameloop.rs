//! Main game loop
//!
//! One call to [`GameLoop::tick`] is one turn: the player's command, then
//! the pursuer phase, then the detection check.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, info};

use crate::action::{apply, movement, open_close, ActionResult, Command};
use crate::mansion::{generate_mansion, Anchors, Mansion, RoomId};
use crate::monster::{pursuers_turn, Pursuer, PursuerId, PursuerKind};
use crate::object::{standard_items, ContainerId};
use crate::player::You;
use crate::rng::GameRng;
use crate::world::GameOptions;
use crate::MESSAGE_HISTORY;

/// How the game was won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Victory {
    #[strum(to_string = "ESCAPE VICTORY")]
    Escape,
    #[strum(to_string = "EXORCISM VICTORY")]
    Exorcism,
}

/// How the game was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum LossCause {
    /// A visible pursuer shared the player's room
    #[strum(to_string = "CAUGHT")]
    Caught,
    /// The player opened the box a pursuer hid in
    #[strum(to_string = "REVEALED")]
    OpenedHidingBox,
}

/// Result of a game loop tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// Player won with message
    PlayerWon(Victory, String),
    /// Player lost with message
    PlayerLost(LossCause, String),
    /// Player quit
    PlayerQuit,
}

/// Main game state
#[derive(Debug)]
pub struct GameState {
    /// Player character
    pub player: You,

    /// Room graph with every box
    pub mansion: Mansion,

    /// The fixed hub rooms
    pub anchors: Anchors,

    /// Active pursuers in turn order
    pub pursuers: Vec<Pursuer>,

    /// Rules in effect
    pub options: GameOptions,

    /// Random number generator
    pub rng: GameRng,

    /// Completed turns
    pub turns: u64,

    /// Messages produced since the front end last drained them
    pub messages: Vec<String>,

    /// The most recent messages, oldest first
    pub message_history: VecDeque<String>,

    outcome: Option<GameLoopResult>,
}

impl GameState {
    /// Create a new game with the standard rules
    pub fn new(rng: GameRng) -> Self {
        Self::with_options(rng, GameOptions::default())
    }

    /// Generate a mansion, fill its boxes and place everyone
    pub fn with_options(mut rng: GameRng, options: GameOptions) -> Self {
        let (mut mansion, anchors) = generate_mansion(&mut rng);
        mansion.distribute_items(standard_items(&options), &mut rng);
        info!(
            seed = rng.seed(),
            rooms = mansion.rooms().len(),
            "mansion generated"
        );
        Self::with_mansion(mansion, anchors, options, rng)
    }

    /// Start a game in a prepared mansion, boxes left as they are
    pub fn with_mansion(mansion: Mansion, anchors: Anchors, options: GameOptions, rng: GameRng) -> Self {
        let first = Pursuer::new(PursuerId(0), PursuerKind::BoxGirl, anchors.basement);
        Self {
            player: You::new(anchors.first_hall),
            mansion,
            anchors,
            pursuers: vec![first],
            options,
            rng,
            turns: 0,
            messages: Vec::new(),
            message_history: VecDeque::with_capacity(MESSAGE_HISTORY),
            outcome: None,
        }
    }

    /// Add a message to display
    pub fn message(&mut self, msg: impl Into<String>) {
        let msg_str = msg.into();
        self.messages.push(msg_str.clone());
        if self.message_history.len() == MESSAGE_HISTORY {
            self.message_history.pop_front();
        }
        self.message_history.push_back(msg_str);
    }

    /// Drain pending messages
    pub fn take_messages(&mut self) -> Vec<String> {
        core::mem::take(&mut self.messages)
    }

    pub fn pursuer(&self, id: PursuerId) -> Option<&Pursuer> {
        self.pursuers.get(id.0 as usize)
    }

    /// Move a pursuer, leaving any box it hid in
    pub fn place_pursuer(&mut self, id: PursuerId, room: RoomId) {
        let Some(pursuer) = self.pursuers.get_mut(id.0 as usize) else {
            return;
        };
        if let Some(left) = pursuer.leave_box() {
            if let Some(container) = self.mansion.container_mut(left) {
                container.vacate(id);
            }
        }
        pursuer.set_room(room);
    }

    /// Hide a pursuer in a closed, unoccupied box of its own room.
    ///
    /// Returns false and changes nothing if the box does not qualify.
    pub fn hide_pursuer(&mut self, id: PursuerId, container: ContainerId) -> bool {
        let Some(room) = self.pursuer(id).map(Pursuer::room) else {
            return false;
        };
        let fits = self
            .mansion
            .room(room)
            .container(container)
            .is_some_and(|b| b.is_hiding_spot());
        if !fits {
            return false;
        }

        self.place_pursuer(id, room);
        if let Some(target) = self.mansion.container_mut(container) {
            target.hide(id);
        }
        if let Some(pursuer) = self.pursuers.get_mut(id.0 as usize) {
            pursuer.enter_box(container);
        }
        true
    }

    /// First visible pursuer standing in the player's room
    pub fn caught_by(&self) -> Option<&Pursuer> {
        self.pursuers
            .iter()
            .find(|p| p.room() == self.player.room && p.is_visible())
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Game loop controller
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    /// Create a new game loop with the given state
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Process one player command and the pursuer turn that follows it.
    ///
    /// Every command except quitting costs the turn, failed ones included.
    /// Once the game is over the stored result is returned unchanged.
    pub fn tick(&mut self, command: Command) -> GameLoopResult {
        if let Some(outcome) = &self.state.outcome {
            return outcome.clone();
        }

        match self.execute_command(command) {
            ActionResult::Success => {}
            ActionResult::Failed(msg) => {
                self.state.message(format!("Action failed: {msg}"));
            }
            ActionResult::Won(victory, msg) => {
                return self.finish(GameLoopResult::PlayerWon(victory, msg));
            }
            ActionResult::Died(cause, msg) => {
                return self.finish(GameLoopResult::PlayerLost(cause, msg));
            }
            ActionResult::Quit => {
                return self.finish(GameLoopResult::PlayerQuit);
            }
        }

        self.state.turns += 1;

        if let Some((cause, msg)) = pursuers_turn(&mut self.state) {
            return self.finish(GameLoopResult::PlayerLost(cause, msg));
        }

        if let Some(kind) = self.state.caught_by().map(|p| p.kind) {
            self.state.message(format!(
                "CAUGHT!!! The {kind} is in the room with you and reveals herself!"
            ));
            return self.finish(GameLoopResult::PlayerLost(
                LossCause::Caught,
                format!("You failed to escape the {kind}'s pursuit."),
            ));
        }

        GameLoopResult::Continue
    }

    /// Execute a player command
    fn execute_command(&mut self, command: Command) -> ActionResult {
        debug!(turn = self.state.turns, ?command, "command");
        match command {
            Command::Move(dir) => movement::do_move(&mut self.state, dir),
            Command::OpenBox(id) => open_close::do_open_box(&mut self.state, id),
            Command::PutItem(id, name) => open_close::do_put_item(&mut self.state, id, &name),
            Command::UseItem(name) => apply::do_use(&mut self.state, &name),
            Command::WhereAmI => {
                let name = self.state.mansion.room(self.state.player.room).name.clone();
                self.state.message(format!("You are currently in the {name}."));
                ActionResult::Success
            }
            Command::Inventory => {
                self.list_inventory();
                ActionResult::Success
            }
            Command::Invalid(reason) => ActionResult::Failed(reason),
            Command::Quit => ActionResult::Quit,
        }
    }

    fn list_inventory(&mut self) {
        if self.state.player.inventory.is_empty() {
            self.state.message("You are not carrying anything.");
            return;
        }
        let lines: Vec<String> = self
            .state
            .player
            .inventory
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {} ({})", i + 1, item.name, item.kind.class_name()))
            .collect();
        self.state.message("YOUR ITEMS:");
        for line in lines {
            self.state.message(line);
        }
    }

    fn finish(&mut self, result: GameLoopResult) -> GameLoopResult {
        info!(turns = self.state.turns, ?result, "game over");
        self.state.outcome = Some(result.clone());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mansion::Direction;
    use crate::object::{Item, ItemId, ItemKind};

    fn quiet_game(seed: u64) -> GameLoop {
        let options = GameOptions {
            skill_chance: 0,
            hide_chance: 0,
            ..GameOptions::default()
        };
        GameLoop::new(GameState::with_options(GameRng::new(seed), options))
    }

    #[test]
    fn test_new_game_positions() {
        let gl = GameLoop::new(GameState::new(GameRng::new(42)));
        let state = gl.state();
        assert_eq!(state.player.room, state.anchors.first_hall);
        assert_eq!(state.pursuers.len(), 1);
        assert_eq!(state.pursuers[0].room(), state.anchors.basement);
        assert!(state.pursuers[0].skills().is_empty());
        assert!(state.player.inventory.is_empty());
    }

    #[test]
    fn test_invalid_command_costs_a_turn() {
        let mut gl = quiet_game(1);
        let result = gl.tick(Command::Invalid("Invalid command. Turn lost.".to_string()));

        // Basement only leads up, so the pursuer walks into the player's hall
        assert!(matches!(result, GameLoopResult::PlayerLost(LossCause::Caught, _)));
        assert_eq!(gl.state().turns, 1);
        assert!(gl
            .state()
            .message_history
            .iter()
            .any(|m| m == "Action failed: Invalid command. Turn lost."));
    }

    #[test]
    fn test_game_over_is_sticky() {
        let mut gl = quiet_game(1);
        let first = gl.tick(Command::WhereAmI);
        assert!(gl.state().is_over());
        let again = gl.tick(Command::Move(Direction::Up));
        assert_eq!(first, again);
        assert_eq!(gl.state().turns, 1);
    }

    #[test]
    fn test_quit_ends_without_pursuer_turn() {
        let mut gl = quiet_game(2);
        assert_eq!(gl.tick(Command::Quit), GameLoopResult::PlayerQuit);
        assert_eq!(gl.state().turns, 0);
        assert_eq!(gl.state().pursuers[0].room(), gl.state().anchors.basement);
    }

    #[test]
    fn test_moving_up_dodges_the_first_approach() {
        let mut gl = quiet_game(3);
        assert_eq!(gl.tick(Command::Move(Direction::Up)), GameLoopResult::Continue);
        let state = gl.state();
        assert_eq!(state.player.room, state.anchors.second_hall);
        assert_eq!(state.pursuers[0].room(), state.anchors.first_hall);
    }

    #[test]
    fn test_hidden_pursuer_is_not_detected() {
        let mut gl = quiet_game(4);
        gl.state_mut().options.hide_chance = 100;
        let result = gl.tick(Command::WhereAmI);

        let state = gl.state();
        assert_eq!(state.pursuers[0].room(), state.player.room);
        assert!(state.pursuers[0].is_hidden());
        assert_eq!(result, GameLoopResult::Continue);
    }

    #[test]
    fn test_history_keeps_only_recent_messages() {
        let mut state = GameState::new(GameRng::new(6));
        for i in 0..MESSAGE_HISTORY + 5 {
            state.message(format!("line {i}"));
        }

        assert_eq!(state.message_history.len(), MESSAGE_HISTORY);
        assert_eq!(state.message_history.front().map(String::as_str), Some("line 5"));
        let last = format!("line {}", MESSAGE_HISTORY + 4);
        assert_eq!(state.message_history.back(), Some(&last));
        assert_eq!(state.take_messages().len(), MESSAGE_HISTORY + 5);
    }

    #[test]
    fn test_inventory_listing() {
        let mut gl = quiet_game(5);
        gl.state_mut()
            .player
            .add_item(Item::new(ItemId(99), "Rope", "", ItemKind::Counter));
        gl.tick(Command::Inventory);
        assert!(gl
            .state()
            .message_history
            .iter()
            .any(|m| m == "1. Rope (counter item)"));
    }
}
