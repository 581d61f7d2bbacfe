//! Rooms, exits and features

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::object::{Container, ContainerId};
use crate::BOXES_PER_ROOM;

/// Stable index of a room inside its [`Mansion`](super::Mansion)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub u32);

/// Exit directions
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[strum(to_string = "NORTH", serialize = "N")]
    North,
    #[strum(to_string = "SOUTH", serialize = "S")]
    South,
    #[strum(to_string = "EAST", serialize = "E")]
    East,
    #[strum(to_string = "WEST", serialize = "W")]
    West,
    #[strum(to_string = "UP", serialize = "U")]
    Up,
    #[strum(to_string = "DOWN", serialize = "D")]
    Down,
}

impl Direction {
    /// Compass directions used for branch rooms
    pub const COMPASS: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Get the opposite direction
    pub const fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Grid offset (row, column); north is toward row 0
    pub const fn delta(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::Up | Direction::Down => (0, 0),
        }
    }
}

/// Mechanically significant room markings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Feature {
    /// Where the passwords open the way out
    #[strum(to_string = "Rocking Chair (Hidden Exit)")]
    HiddenExit,
    /// Exorcism location
    #[strum(to_string = "Seeping Walls (Corpse Location)")]
    CorpseLocation,
    /// Exorcism location
    #[strum(to_string = "Carved door (Miss Mary's Location)")]
    MissMary,
}

impl Feature {
    /// Features every mansion must contain
    pub const CRITICAL: [Feature; 3] =
        [Feature::HiddenExit, Feature::CorpseLocation, Feature::MissMary];

    /// Whether weakness items can be used here
    pub const fn permits_exorcism(&self) -> bool {
        matches!(self, Feature::CorpseLocation | Feature::MissMary)
    }
}

/// One directed connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    pub direction: Direction,
    pub to: RoomId,
}

/// A room of the mansion
#[derive(Debug, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,

    /// Unique display name
    pub name: String,

    /// Grid position (generation only)
    pub x: usize,
    pub y: usize,

    pub feature: Option<Feature>,

    /// Directed exits, at most one per direction
    exits: Vec<Exit>,

    /// Always exactly `BOXES_PER_ROOM` boxes
    pub boxes: Vec<Container>,
}

impl Room {
    /// Create a room with fresh boxes numbered from `first_box`
    pub fn new(
        id: RoomId,
        name: impl Into<String>,
        x: usize,
        y: usize,
        feature: Option<Feature>,
        first_box: ContainerId,
    ) -> Self {
        let boxes = (0..BOXES_PER_ROOM as u32)
            .map(|i| Container::new(ContainerId(first_box.0 + i)))
            .collect();
        Self {
            id,
            name: name.into(),
            x,
            y,
            feature,
            exits: Vec::new(),
            boxes,
        }
    }

    /// Add or replace the exit in `direction`
    pub fn add_connection(&mut self, direction: Direction, to: RoomId) {
        match self.exits.iter_mut().find(|e| e.direction == direction) {
            Some(exit) => exit.to = to,
            None => self.exits.push(Exit { direction, to }),
        }
    }

    pub fn neighbor(&self, direction: Direction) -> Option<RoomId> {
        self.exits
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| e.to)
    }

    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    pub fn neighbors(&self) -> Vec<RoomId> {
        self.exits.iter().map(|e| e.to).collect()
    }

    pub fn is_connected_to(&self, other: RoomId) -> bool {
        self.exits.iter().any(|e| e.to == other)
    }

    pub fn has_feature(&self, feature: Feature) -> bool {
        self.feature == Some(feature)
    }

    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.boxes.iter().find(|b| b.id() == id)
    }

    pub fn container_mut(&mut self, id: ContainerId) -> Option<&mut Container> {
        self.boxes.iter_mut().find(|b| b.id() == id)
    }

    /// Ids of boxes not yet opened
    pub fn unopened_boxes(&self) -> Vec<ContainerId> {
        self.boxes
            .iter()
            .filter(|b| !b.is_open())
            .map(Container::id)
            .collect()
    }

    pub fn open_box_count(&self) -> usize {
        self.boxes.iter().filter(|b| b.is_open()).count()
    }
}
