//! Core game constants

/// Mansion grid dimensions (rows x columns)
pub const GRID_ROWS: usize = 9;
pub const GRID_COLS: usize = 3;

/// Every room is built with exactly this many boxes
pub const BOXES_PER_ROOM: usize = 3;

/// Anchor room names
pub const BASEMENT: &str = "Basement";
pub const FIRST_FLOOR_HALL: &str = "First Floor Hall";
pub const SECOND_FLOOR_HALL: &str = "Second Floor Hall";

/// Branch rooms each hall tries to place
pub const BRANCHES_PER_HALL: usize = 3;

/// Boxes in a fully built mansion: three anchors plus both halls' branches
pub const MANSION_BOXES: usize = (3 + 2 * BRANCHES_PER_HALL) * BOXES_PER_ROOM;

/// Victory thresholds
pub const PASSWORDS_REQUIRED: usize = 3;
pub const WEAKNESSES_REQUIRED: usize = 2;

/// Percent chance that an unlocked skill fires on a pursuer turn
pub const SKILL_CHANCE: u32 = 30;

/// Percent chance that a pursuer hides after moving
pub const HIDE_CHANCE: u32 = 40;

/// Number of "Empty Box" fillers in the standard item set
pub const FILLER_COUNT: usize = 4;

/// Name of the filler item
pub const FILLER_NAME: &str = "Empty Box";

/// Messages kept for the history view
pub const MESSAGE_HISTORY: usize = 100;
