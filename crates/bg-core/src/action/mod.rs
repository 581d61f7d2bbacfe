//! Player action system
//!
//! Every command the player can issue, and what it did.

pub mod apply;
pub mod movement;
pub mod open_close;

use crate::gameloop::{LossCause, Victory};
use crate::mansion::Direction;
use crate::object::ContainerId;

/// Player command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Walk through an exit of the current room
    Move(Direction),
    /// Open a box in the current room
    OpenBox(ContainerId),
    /// Put an inventory item into an open, empty box
    PutItem(ContainerId, String),
    /// Use an inventory item by name
    UseItem(String),
    WhereAmI,
    Inventory,
    /// Unrecognized or malformed input; carries the failure text
    Invalid(String),
    Quit,
}

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Action completed
    Success,
    /// Action rejected; the turn is still spent
    Failed(String),
    /// Game won
    Won(Victory, String),
    /// Game lost
    Died(LossCause, String),
    /// Player gave up
    Quit,
}
