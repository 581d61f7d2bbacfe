//! Text rendering of game state

use bg_core::mansion::Direction;
use bg_core::world::GameOptions;
use bg_core::{GameLoopResult, GameState};
use crossterm::style::Color;
use strum::IntoEnumIterator;

use crate::theme::Theme;

const RULE: &str = "-------------------------------------------";

/// Header, feature, exits and box summary of the player's room
pub fn room_lines(state: &GameState, theme: &Theme) -> Vec<String> {
    let room = state.mansion.room(state.player.room);
    let mut lines = Vec::new();

    lines.push(theme.bold(&format!("** Current Room: {} **", room.name), theme.header));
    let feature = room.feature.map_or_else(|| "None".to_string(), |f| f.to_string());
    lines.push(format!("Room Feature: {}", theme.paint(&feature, theme.accent)));

    let exits: Vec<String> = room
        .exits()
        .iter()
        .map(|e| format!("{} -> {}", e.direction, state.mansion.room(e.to).name))
        .collect();
    lines.push("Exits:".to_string());
    if exits.is_empty() {
        lines.push(theme.paint("None. You are trapped!", theme.bad));
    } else {
        lines.push(theme.paint(&exits.join(" | "), theme.accent));
    }

    let unopened: Vec<String> = room.unopened_boxes().iter().map(|id| id.to_string()).collect();
    lines.push(format!("Unopened boxes IDs: {}", unopened.join(" ")));
    let open = room.open_box_count();
    if open > 0 {
        lines.push(theme.paint(&format!("({open} boxes are already open)"), theme.text_dim));
    }
    lines
}

/// Numbered inventory, or `None` when empty
pub fn item_lines(state: &GameState) -> Option<Vec<String>> {
    let inventory = &state.player.inventory;
    if inventory.is_empty() {
        return None;
    }
    let mut lines = vec!["YOUR ITEMS:".to_string()];
    lines.extend(
        inventory
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, item.name)),
    );
    Some(lines)
}

/// Color for a message from the game
pub fn message_color(msg: &str, theme: &Theme) -> Color {
    if msg.starts_with("Action failed") {
        theme.bad
    } else if msg.starts_with("CAUGHT")
        || msg.starts_with("!!!!")
        || msg.starts_with("RESENTMENT")
        || msg.starts_with("As you open")
    {
        theme.alarm
    } else if msg.starts_with("Obtained") || msg.starts_with("CALM") {
        theme.good
    } else {
        theme.text
    }
}

/// Final banner for a finished game
pub fn banner(result: &GameLoopResult, theme: &Theme) -> Vec<String> {
    let (title, message, color) = match result {
        GameLoopResult::PlayerWon(victory, msg) => {
            (format!("VICTORY ACHIEVED! [{victory}]"), msg.as_str(), theme.good)
        }
        GameLoopResult::PlayerLost(cause, msg) => {
            (format!("FAILURE! [{cause}]"), msg.as_str(), theme.bad)
        }
        GameLoopResult::PlayerQuit => (
            "GAME ABANDONED".to_string(),
            "You stop running. The mansion keeps you.",
            theme.text_dim,
        ),
        GameLoopResult::Continue => return Vec::new(),
    };
    vec![
        RULE.to_string(),
        theme.bold(&title, color),
        message.to_string(),
        RULE.to_string(),
    ]
}

/// Command reference
pub fn help_lines(options: &GameOptions) -> Vec<String> {
    let directions: Vec<String> = Direction::iter().map(|d| d.to_string()).collect();
    vec![
        "Commands (each one costs a turn unless marked free):".to_string(),
        "  move [direction]        walk through an exit".to_string(),
        format!("                          directions: {}", directions.join(", ")),
        "  open box [id]           open a box in this room".to_string(),
        "  put item [id] [name]    put a carried item into an open, empty box".to_string(),
        "  use item [name]         use a carried item".to_string(),
        "  inventory               list what you carry".to_string(),
        "  whereami                name the current room".to_string(),
        "  map                     show the mansion layout (free)".to_string(),
        "  history                 replay recent messages (free)".to_string(),
        "  help                    this text (free)".to_string(),
        "  quit                    give up".to_string(),
        format!(
            "Escape: hold {} passwords in the room with the hidden exit.",
            options.passwords_required
        ),
        format!(
            "Exorcism: hold {} weaknesses in Miss Mary's room or where the corpse lies.",
            options.weaknesses_required
        ),
        "Never share a room with her while she can see you.".to_string(),
    ]
}
