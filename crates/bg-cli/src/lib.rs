//! bg-cli: Line-based terminal front end
//!
//! Reads one line of player intent per turn and prints what happened.

pub mod app;
pub mod display;
pub mod input;
pub mod theme;

pub use app::App;
pub use theme::Theme;
