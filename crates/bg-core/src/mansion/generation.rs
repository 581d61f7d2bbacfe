//! Mansion generation
//!
//! Three anchor rooms are stacked in a fixed hierarchy (basement, first
//! floor hall, second floor hall). Each hall then sprouts branch rooms in
//! three random compass directions. Every branch is linked straight back to
//! its hall, so every room is reachable from every anchor.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{Direction, Feature, Mansion, RoomId};
use crate::rng::GameRng;
use crate::{BASEMENT, BRANCHES_PER_HALL, FIRST_FLOOR_HALL, GRID_COLS, GRID_ROWS, SECOND_FLOOR_HALL};

const ROOM_NAMES: [&str; 6] = [
    "Dining Room",
    "Living Room",
    "Bathroom",
    "Children's Room",
    "Study Room",
    "Guest Room",
];

/// Grid cells of the anchors: (row, column)
const BASEMENT_CELL: (usize, usize) = (0, 1);
const FIRST_HALL_CELL: (usize, usize) = (3, 1);
const SECOND_HALL_CELL: (usize, usize) = (7, 1);

/// The three fixed rooms every mansion is built around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchors {
    pub basement: RoomId,
    pub first_hall: RoomId,
    pub second_hall: RoomId,
}

/// Names and features handed out to branch rooms in order
struct Pools {
    names: Vec<&'static str>,
    features: Vec<Option<Feature>>,
    next: usize,
}

impl Pools {
    fn shuffled(rng: &mut GameRng) -> Self {
        let mut names = ROOM_NAMES.to_vec();
        let mut features = vec![None, None, None];
        features.extend(Feature::CRITICAL.iter().copied().map(Some));
        rng.shuffle(&mut names);
        rng.shuffle(&mut features);
        Self {
            names,
            features,
            next: 0,
        }
    }

    /// Next (name, feature). Names get a numeric suffix once the pool wraps.
    fn draw(&mut self) -> (String, Option<Feature>) {
        let i = self.next;
        self.next += 1;

        let base = self.names[i % self.names.len()];
        let name = if i >= self.names.len() {
            format!("{base}-{i}")
        } else {
            base.to_string()
        };
        (name, self.features[i % self.features.len()])
    }
}

/// Build a fresh mansion.
///
/// Rooms start with empty boxes; items are distributed separately.
pub fn generate_mansion(rng: &mut GameRng) -> (Mansion, Anchors) {
    let mut mansion = Mansion::new();
    let mut pools = Pools::shuffled(rng);

    let basement = mansion.create_room(BASEMENT, BASEMENT_CELL.0, BASEMENT_CELL.1, None);
    let first = mansion.create_room(FIRST_FLOOR_HALL, FIRST_HALL_CELL.0, FIRST_HALL_CELL.1, None);
    let second =
        mansion.create_room(SECOND_FLOOR_HALL, SECOND_HALL_CELL.0, SECOND_HALL_CELL.1, None);

    mansion.connect_both(first, Direction::Up, second);
    mansion.connect_both(first, Direction::Down, basement);

    for hall in [first, second] {
        let mut directions = Direction::COMPASS;
        rng.shuffle(&mut directions);

        for &dir in directions.iter().take(BRANCHES_PER_HALL) {
            let Some((x, y)) = branch_cell(&mansion, hall, dir) else {
                debug!(hall = %mansion.room(hall).name, %dir, "no free cell, branch dropped");
                continue;
            };

            let (name, feature) = pools.draw();
            let room = mansion.create_room(name, x, y, feature);
            mansion.connect_both(hall, dir, room);
            trace!(
                room = %mansion.room(room).name,
                x, y,
                hall = %mansion.room(hall).name,
                %dir,
                "branch placed"
            );
        }
    }

    ensure_critical_features(&mut mansion, &[basement, first, second]);
    let anchors = Anchors {
        basement,
        first_hall: first,
        second_hall: second,
    };
    (mansion, anchors)
}

/// Pick the cell for a branch of `hall` in `dir`.
///
/// The preferred cell is the neighbor in `dir`, reflected back inside the
/// grid when it falls off an edge. If it is taken, the first free cell in
/// the 3x3 block around the hall is used instead.
fn branch_cell(mansion: &Mansion, hall: RoomId, dir: Direction) -> Option<(usize, usize)> {
    let room = mansion.room(hall);
    let (hx, hy) = (room.x as isize, room.y as isize);
    let (dx, dy) = dir.delta();

    let mut nx = hx + dx;
    let mut ny = hy + dy;
    if nx < 0 {
        nx = hx + 1;
    }
    if nx >= GRID_ROWS as isize {
        nx = hx - 1;
    }
    if ny < 0 {
        ny = hy + 1;
    }
    if ny >= GRID_COLS as isize {
        ny = hy - 1;
    }

    if mansion.at(nx as usize, ny as usize).is_none() {
        return Some((nx as usize, ny as usize));
    }

    for dx in -1..=1 {
        for dy in -1..=1 {
            let (tx, ty) = (hx + dx, hy + dy);
            if tx < 0 || ty < 0 || tx >= GRID_ROWS as isize || ty >= GRID_COLS as isize {
                continue;
            }
            if mansion.at(tx as usize, ty as usize).is_none() {
                return Some((tx as usize, ty as usize));
            }
        }
    }
    None
}

/// Make sure each critical feature sits on exactly one room.
///
/// Dropped placements can take a feature with them; it then moves to the
/// first featureless branch room, or a featureless anchor as a last resort.
fn ensure_critical_features(mansion: &mut Mansion, anchors: &[RoomId]) {
    for feature in Feature::CRITICAL {
        if mansion.room_with_feature(feature).is_some() {
            continue;
        }

        let target = mansion
            .rooms()
            .iter()
            .filter(|r| r.feature.is_none())
            .min_by_key(|r| anchors.contains(&r.id))
            .map(|r| r.id);

        if let Some(id) = target {
            debug!(room = %mansion.room(id).name, %feature, "critical feature reassigned");
            mansion.room_mut(id).feature = Some(feature);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BOXES_PER_ROOM;

    #[test]
    fn test_anchor_hierarchy() {
        let mut rng = GameRng::new(12345);
        let (mansion, anchors) = generate_mansion(&mut rng);

        let basement = mansion.room_id(BASEMENT).unwrap();
        let first = mansion.room_id(FIRST_FLOOR_HALL).unwrap();
        let second = mansion.room_id(SECOND_FLOOR_HALL).unwrap();
        assert_eq!(anchors.basement, basement);
        assert_eq!(anchors.first_hall, first);
        assert_eq!(anchors.second_hall, second);

        assert_eq!(mansion.room(first).neighbor(Direction::Up), Some(second));
        assert_eq!(mansion.room(second).neighbor(Direction::Down), Some(first));
        assert_eq!(mansion.room(first).neighbor(Direction::Down), Some(basement));
        assert_eq!(mansion.room(basement).neighbor(Direction::Up), Some(first));
        assert!(!mansion.room(basement).is_connected_to(second));
    }

    #[test]
    fn test_standard_layout_places_six_branches() {
        let mut rng = GameRng::new(7);
        let (mansion, _) = generate_mansion(&mut rng);
        assert_eq!(mansion.rooms().len(), 9);
        assert!(mansion.rooms().iter().all(|r| r.boxes.len() == BOXES_PER_ROOM));
    }

    #[test]
    fn test_branch_links_back_to_its_hall() {
        let mut rng = GameRng::new(99);
        let (mansion, anchors) = generate_mansion(&mut rng);
        let first = anchors.first_hall;
        let second = anchors.second_hall;

        for room in mansion.rooms().iter().skip(3) {
            assert_eq!(room.exits().len(), 1, "{} has extra exits", room.name);
            let exit = room.exits()[0];
            assert!(exit.to == first || exit.to == second);
            let hall = mansion.room(exit.to);
            assert_eq!(hall.neighbor(exit.direction.opposite()), Some(room.id));
        }
    }

    #[test]
    fn test_branch_cell_reflects_off_edge() {
        let mut mansion = Mansion::new();
        let hall = mansion.create_room("Hall", 0, 0, None);
        assert_eq!(branch_cell(&mansion, hall, Direction::North), Some((1, 0)));
        assert_eq!(branch_cell(&mansion, hall, Direction::West), Some((0, 1)));
    }

    #[test]
    fn test_branch_cell_probes_neighbors_then_gives_up() {
        let mut mansion = Mansion::new();
        let hall = mansion.create_room("Hall", 1, 1, None);
        mansion.create_room("North", 0, 1, None);
        assert_eq!(branch_cell(&mansion, hall, Direction::North), Some((0, 0)));

        let mut n = 0;
        for x in 0..3 {
            for y in 0..3 {
                if mansion.at(x, y).is_none() {
                    mansion.create_room(format!("Filler {n}"), x, y, None);
                    n += 1;
                }
            }
        }
        assert_eq!(branch_cell(&mansion, hall, Direction::South), None);
    }

    #[test]
    fn test_missing_feature_is_reassigned() {
        let mut mansion = Mansion::new();
        let anchor = mansion.create_room("Anchor", 0, 0, None);
        mansion.create_room("Branch", 1, 0, Some(Feature::HiddenExit));
        mansion.create_room("Other", 2, 0, None);

        ensure_critical_features(&mut mansion, &[anchor]);

        for feature in Feature::CRITICAL {
            let count = mansion.rooms().iter().filter(|r| r.has_feature(feature)).count();
            assert_eq!(count, 1, "{feature}");
        }
        assert_eq!(mansion.room_by_name("Other").unwrap().feature, Some(Feature::CorpseLocation));
        assert_eq!(mansion.room(anchor).feature, Some(Feature::MissMary));
    }

    #[test]
    fn test_pool_suffix_after_wrap() {
        let mut rng = GameRng::new(3);
        let mut pools = Pools::shuffled(&mut rng);
        let names: Vec<String> = (0..7).map(|_| pools.draw().0).collect();
        assert!(names[6].ends_with("-6"));
        let mut distinct = names.clone();
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), 7);
    }
}
