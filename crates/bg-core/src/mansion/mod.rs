//! The mansion
//!
//! Rooms live in an arena indexed by [`RoomId`]; exits are id-to-id edges.
//! Boxes are owned by their room and addressed by [`ContainerId`].

mod generation;
mod render;
mod room;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use generation::{generate_mansion, Anchors};
pub use room::{Direction, Exit, Feature, Room, RoomId};

use crate::object::{Container, ContainerId, Item};
use crate::rng::GameRng;
use crate::{BOXES_PER_ROOM, GRID_COLS, GRID_ROWS};

/// Room graph plus the placement grid used while generating it
#[derive(Debug, Serialize, Deserialize)]
pub struct Mansion {
    rooms: Vec<Room>,
    by_name: HashMap<String, RoomId>,
    grid: [[Option<RoomId>; GRID_COLS]; GRID_ROWS],
    next_box: u32,
}

impl Default for Mansion {
    fn default() -> Self {
        Self::new()
    }
}

impl Mansion {
    /// An empty mansion
    pub fn new() -> Self {
        Self {
            rooms: Vec::new(),
            by_name: HashMap::new(),
            grid: [[None; GRID_COLS]; GRID_ROWS],
            next_box: 1,
        }
    }

    /// Create a room at a free grid cell
    pub fn create_room(
        &mut self,
        name: impl Into<String>,
        x: usize,
        y: usize,
        feature: Option<Feature>,
    ) -> RoomId {
        let name = name.into();
        assert!(
            self.grid[x][y].is_none(),
            "cell ({x}, {y}) already holds a room"
        );
        assert!(
            !self.by_name.contains_key(&name),
            "room name '{name}' is already taken"
        );

        let id = RoomId(self.rooms.len() as u32);
        let room = Room::new(id, name.clone(), x, y, feature, ContainerId(self.next_box));
        self.next_box += BOXES_PER_ROOM as u32;

        self.grid[x][y] = Some(id);
        self.by_name.insert(name, id);
        self.rooms.push(room);
        id
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0 as usize]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0 as usize]
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    pub fn room_by_name(&self, name: &str) -> Option<&Room> {
        self.room_id(name).map(|id| self.room(id))
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Room occupying a grid cell, if any
    pub fn at(&self, x: usize, y: usize) -> Option<RoomId> {
        self.grid.get(x).and_then(|row| row.get(y)).copied().flatten()
    }

    /// Add a one-way exit
    pub fn connect(&mut self, from: RoomId, direction: Direction, to: RoomId) {
        self.room_mut(from).add_connection(direction, to);
    }

    /// Add an exit and its way back
    pub fn connect_both(&mut self, from: RoomId, direction: Direction, to: RoomId) {
        self.connect(from, direction, to);
        self.connect(to, direction.opposite(), from);
    }

    /// The room with the given feature, if any
    pub fn room_with_feature(&self, feature: Feature) -> Option<&Room> {
        self.rooms.iter().find(|r| r.has_feature(feature))
    }

    pub fn room_of_container(&self, id: ContainerId) -> Option<RoomId> {
        self.rooms
            .iter()
            .find(|r| r.container(id).is_some())
            .map(|r| r.id)
    }

    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.rooms.iter().find_map(|r| r.container(id))
    }

    pub fn container_mut(&mut self, id: ContainerId) -> Option<&mut Container> {
        self.rooms.iter_mut().find_map(|r| r.container_mut(id))
    }

    /// Every box in the mansion, room by room
    pub fn containers(&self) -> impl Iterator<Item = &Container> {
        self.rooms.iter().flat_map(|r| r.boxes.iter())
    }

    /// Shuffle items into a shuffled list of every box.
    ///
    /// Key items claim boxes before fillers. Surplus items are dropped and
    /// surplus boxes stay empty.
    pub fn distribute_items(&mut self, mut items: Vec<Item>, rng: &mut GameRng) {
        let mut ids: Vec<ContainerId> = self.containers().map(Container::id).collect();
        rng.shuffle(&mut items);
        rng.shuffle(&mut ids);
        items.sort_by_key(Item::is_filler);

        if items.len() > ids.len() {
            let dropped: Vec<&str> = items[ids.len()..].iter().map(|i| i.name.as_str()).collect();
            warn!(boxes = ids.len(), ?dropped, "more items than boxes");
        }

        for (item, id) in items.into_iter().zip(ids) {
            let Some(container) = self.container_mut(id) else {
                continue;
            };
            if let Err(rejected) = container.stash(item) {
                debug!(box_id = %id, error = %rejected, "item not distributed");
            }
        }
    }

    /// Hide an item in a random closed, empty box anywhere in the mansion.
    ///
    /// Hands the item back if no box qualifies.
    pub fn rehide_item(&mut self, item: Item, rng: &mut GameRng) -> Result<ContainerId, Item> {
        let candidates: Vec<ContainerId> = self
            .containers()
            .filter(|b| !b.is_open() && b.is_empty())
            .map(Container::id)
            .collect();

        let Some(&id) = rng.choose(&candidates) else {
            return Err(item);
        };
        match self.container_mut(id) {
            Some(container) => container.stash(item).map(|()| id).map_err(|r| r.item),
            None => Err(item),
        }
    }
}
