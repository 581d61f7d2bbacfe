//! Input handling - convert typed lines to commands
//!
//! An action word may carry its argument on the same line (`move north`,
//! `open 4`, `put 4 rope`, `use rope`); otherwise the app prompts for it.

use bg_core::action::Command;
use bg_core::mansion::Direction;
use bg_core::object::ContainerId;

const INVALID_COMMAND: &str = "Invalid command. Turn lost.";
const NO_PATH: &str = "There is no path in that direction.";
const NOT_A_NUMBER: &str = "Invalid input. Please enter a number.";

/// Front-end only requests that never reach the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meta {
    Help,
    Map,
    History,
}

/// What the first line of a turn asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// A complete command
    Ready(Command),
    /// `move` without a direction
    NeedDirection,
    /// `open box` without an id
    NeedBox,
    /// `put item` without a box id and item name
    NeedPut,
    /// `use item` without a name
    NeedItem,
    Meta(Meta),
}

/// Interpret the first line of a turn
pub fn parse_line(line: &str) -> Parsed {
    let line = line.trim().to_lowercase();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line.as_str(), ""),
    };

    match word {
        "move" | "go" if rest.is_empty() => Parsed::NeedDirection,
        "move" | "go" => Parsed::Ready(parse_direction(rest)),
        "open" => match rest.strip_prefix("box").map_or(rest, str::trim) {
            "" => Parsed::NeedBox,
            id => Parsed::Ready(open_command(id)),
        },
        "put" => match rest.strip_prefix("item").map_or(rest, str::trim) {
            "" => Parsed::NeedPut,
            args => Parsed::Ready(put_command(args)),
        },
        "use" => match rest.strip_prefix("item").map_or(rest, str::trim) {
            "" => Parsed::NeedItem,
            name => Parsed::Ready(Command::UseItem(name.to_string())),
        },
        "whereami" if rest.is_empty() => Parsed::Ready(Command::WhereAmI),
        "inventory" | "i" if rest.is_empty() => Parsed::Ready(Command::Inventory),
        "help" | "h" | "?" if rest.is_empty() => Parsed::Meta(Meta::Help),
        "map" if rest.is_empty() => Parsed::Meta(Meta::Map),
        "history" if rest.is_empty() => Parsed::Meta(Meta::History),
        "quit" | "q" if rest.is_empty() => Parsed::Ready(Command::Quit),
        _ => Parsed::Ready(Command::Invalid(INVALID_COMMAND.to_string())),
    }
}

/// Direction answer to a move prompt
pub fn parse_direction(text: &str) -> Command {
    match text.trim().parse::<Direction>() {
        Ok(dir) => Command::Move(dir),
        Err(_) => Command::Invalid(NO_PATH.to_string()),
    }
}

/// Box id answer to an open prompt
pub fn parse_box_id(text: &str) -> Result<ContainerId, String> {
    text.trim()
        .parse::<u32>()
        .map(ContainerId)
        .map_err(|_| NOT_A_NUMBER.to_string())
}

/// `open` with an id answer
pub fn open_command(text: &str) -> Command {
    match parse_box_id(text) {
        Ok(id) => Command::OpenBox(id),
        Err(reason) => Command::Invalid(reason),
    }
}

/// `put` with a box id followed by the item name
pub fn put_command(args: &str) -> Command {
    let (id, name) = args.trim().split_once(char::is_whitespace).unwrap_or((args, ""));
    put_answers(id, name)
}

/// `put` answers given on separate prompts
pub fn put_answers(id: &str, name: &str) -> Command {
    match parse_box_id(id) {
        Ok(id) => Command::PutItem(id, name.trim().to_string()),
        Err(reason) => Command::Invalid(reason),
    }
}
