//! Box operations
//!
//! Each room owns a fixed set of boxes. A box may hold one item and may hide
//! one pursuer. The rules here are the only place box state changes.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Item;
use crate::monster::PursuerId;
use crate::rng::GameRng;

/// Unique identifier for boxes, assigned in creation order starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContainerId(pub u32);

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a box refused an operation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    #[error("box {0} is already open")]
    AlreadyOpen(ContainerId),

    #[error("box {0} is closed")]
    Closed(ContainerId),

    #[error("something is inside box {0}")]
    Occupied(ContainerId),

    #[error("box {0} already holds something")]
    NotEmpty(ContainerId),
}

/// An item that could not be placed, handed back to the caller
#[derive(Error, Debug)]
#[error("{reason}")]
pub struct PutRejected {
    pub reason: ContainerError,
    pub item: Item,
}

/// Result of opening a box
#[derive(Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The box was already open; nothing happens
    AlreadyOpen,
    /// A pursuer was hiding inside
    Occupied(PursuerId),
    /// Nothing inside
    Empty,
    /// Only the "Empty Box" marker; it stays in the box
    Spent,
    /// An item, now removed from the box
    Found(Item),
}

/// A box in a room
#[derive(Debug, Serialize, Deserialize)]
pub struct Container {
    id: ContainerId,
    open: bool,
    content: Option<Item>,
    occupant: Option<PursuerId>,
}

impl Container {
    pub fn new(id: ContainerId) -> Self {
        Self {
            id,
            open: false,
            content: None,
            occupant: None,
        }
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn content(&self) -> Option<&Item> {
        self.content.as_ref()
    }

    pub fn occupant(&self) -> Option<PursuerId> {
        self.occupant
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    /// Holds the filler marker and can never be closed again
    pub fn is_spent(&self) -> bool {
        self.content.as_ref().is_some_and(Item::is_filler)
    }

    /// Closed and nobody inside
    pub fn is_hiding_spot(&self) -> bool {
        !self.open && self.occupant.is_none()
    }

    /// Open the box.
    ///
    /// The occupant check runs before any content is handed out, so a box
    /// hiding a pursuer never yields its item.
    pub fn open(&mut self) -> OpenOutcome {
        if self.open {
            return OpenOutcome::AlreadyOpen;
        }
        self.open = true;

        if let Some(pursuer) = self.occupant {
            return OpenOutcome::Occupied(pursuer);
        }

        if self.is_spent() {
            return OpenOutcome::Spent;
        }
        self.content
            .take()
            .map_or(OpenOutcome::Empty, OpenOutcome::Found)
    }

    /// Close the box. Returns whether it is now closed.
    ///
    /// No-op while a pursuer hides inside or when the box is spent.
    pub fn close(&mut self) -> bool {
        if self.occupant.is_some() || self.is_spent() {
            return !self.open;
        }
        self.open = false;
        true
    }

    /// Check whether an item could be put into this box by hand
    pub fn check_put(&self) -> Result<(), ContainerError> {
        if !self.open {
            return Err(ContainerError::Closed(self.id));
        }
        if self.occupant.is_some() {
            return Err(ContainerError::Occupied(self.id));
        }
        if self.content.is_some() {
            return Err(ContainerError::NotEmpty(self.id));
        }
        Ok(())
    }

    /// Put an item into an open, empty box. The box closes afterwards.
    pub fn put(&mut self, item: Item) -> Result<(), PutRejected> {
        if let Err(reason) = self.check_put() {
            return Err(PutRejected { reason, item });
        }
        self.content = Some(item);
        self.close();
        Ok(())
    }

    /// Hide an item in a box without touching its open state.
    ///
    /// Used when filling the mansion and when a stolen item is re-hidden.
    pub fn stash(&mut self, item: Item) -> Result<(), PutRejected> {
        if self.content.is_some() {
            return Err(PutRejected {
                reason: ContainerError::NotEmpty(self.id),
                item,
            });
        }
        self.content = Some(item);
        Ok(())
    }

    /// Pursuer enters the box
    pub fn hide(&mut self, pursuer: PursuerId) {
        assert!(
            self.is_hiding_spot(),
            "pursuer {pursuer:?} cannot hide in box {}: open={} occupant={:?}",
            self.id,
            self.open,
            self.occupant
        );
        self.occupant = Some(pursuer);
    }

    /// Pursuer leaves the box. Returns false if it was not inside.
    pub fn vacate(&mut self, pursuer: PursuerId) -> bool {
        if self.occupant == Some(pursuer) {
            self.occupant = None;
            true
        } else {
            false
        }
    }

    fn take_content(&mut self) -> Option<Item> {
        self.content.take()
    }
}

/// Shuffle the contents of a set of boxes.
///
/// With `reset_open`, every box is closed first (subject to the close rule).
/// Contents are reassigned by a uniform random permutation; an item may land
/// back in its own box. Occupants stay where they are.
pub fn scramble(boxes: &mut [Container], reset_open: bool, rng: &mut GameRng) {
    let mut contents: Vec<Option<Item>> = boxes
        .iter_mut()
        .map(|b| {
            if reset_open {
                b.close();
            }
            b.take_content()
        })
        .collect();

    rng.shuffle(&mut contents);

    for (b, content) in boxes.iter_mut().zip(contents) {
        b.content = content;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{ItemId, ItemKind};

    fn password(id: u32) -> Item {
        Item::new(ItemId(id), format!("Password-{id}"), "", ItemKind::Password)
    }

    #[test]
    fn test_open_returns_content_once() {
        let mut b = Container::new(ContainerId(1));
        b.stash(password(1)).unwrap();

        match b.open() {
            OpenOutcome::Found(item) => assert_eq!(item.id, ItemId(1)),
            other => panic!("expected item, got {other:?}"),
        }
        assert_eq!(b.open(), OpenOutcome::AlreadyOpen);
        assert!(b.is_empty());
    }

    #[test]
    fn test_open_occupied_never_returns_content() {
        let mut b = Container::new(ContainerId(1));
        b.stash(password(1)).unwrap();
        b.hide(PursuerId(0));

        assert_eq!(b.open(), OpenOutcome::Occupied(PursuerId(0)));
        assert_eq!(b.content().map(|i| i.id), Some(ItemId(1)));
    }

    #[test]
    fn test_spent_box_stays_open() {
        let mut b = Container::new(ContainerId(1));
        b.stash(Item::filler(ItemId(9))).unwrap();

        assert_eq!(b.open(), OpenOutcome::Spent);
        assert!(!b.close());
        assert!(b.is_open());
        assert!(b.is_spent());
    }

    #[test]
    fn test_close_noop_while_occupied() {
        let mut b = Container::new(ContainerId(1));
        b.hide(PursuerId(0));
        assert!(b.close());
        assert!(!b.is_open());
        assert!(b.vacate(PursuerId(0)));
        assert!(!b.vacate(PursuerId(0)));
    }

    #[test]
    fn test_put_requires_open_empty_box() {
        let mut b = Container::new(ContainerId(4));
        let err = b.put(password(1)).unwrap_err();
        assert_eq!(err.reason, ContainerError::Closed(ContainerId(4)));

        assert_eq!(b.open(), OpenOutcome::Empty);
        b.put(err.item).unwrap();
        assert!(!b.is_open(), "putting an item closes the box");
        assert_eq!(b.content().map(|i| i.id), Some(ItemId(1)));
    }

    #[test]
    fn test_put_rejected_on_spent_box() {
        let mut b = Container::new(ContainerId(2));
        b.stash(Item::filler(ItemId(9))).unwrap();
        b.open();
        let err = b.put(password(1)).unwrap_err();
        assert_eq!(err.reason, ContainerError::NotEmpty(ContainerId(2)));
        assert_eq!(err.to_string(), "box 2 already holds something");
    }

    #[test]
    #[should_panic(expected = "cannot hide")]
    fn test_hide_in_occupied_box_panics() {
        let mut b = Container::new(ContainerId(1));
        b.hide(PursuerId(0));
        b.hide(PursuerId(1));
    }

    #[test]
    fn test_scramble_keeps_items_and_closes() {
        let mut rng = GameRng::new(3);
        let mut boxes: Vec<Container> = (1..=3).map(|i| Container::new(ContainerId(i))).collect();
        boxes[0].stash(password(1)).unwrap();
        boxes[1].stash(password(2)).unwrap();
        boxes[2].open();

        scramble(&mut boxes, true, &mut rng);

        let mut ids: Vec<u32> = boxes
            .iter()
            .filter_map(|b| b.content().map(|i| i.id.0))
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
        assert!(boxes.iter().all(|b| !b.is_open()));
    }

    #[test]
    fn test_scramble_without_reset_keeps_open_flags() {
        let mut rng = GameRng::new(5);
        let mut boxes: Vec<Container> = (1..=3).map(|i| Container::new(ContainerId(i))).collect();
        boxes[1].open();

        scramble(&mut boxes, false, &mut rng);

        assert!(!boxes[0].is_open());
        assert!(boxes[1].is_open());
        assert!(!boxes[2].is_open());
    }
}
