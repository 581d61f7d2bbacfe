//! Object system
//!
//! Items, the boxes that hold them, and the standard item set.

mod catalog;
mod container;
mod item;

pub use catalog::{key_item_count, standard_items};
pub use container::{scramble, Container, ContainerError, ContainerId, OpenOutcome, PutRejected};
pub use item::{Item, ItemId, ItemKind, Skill};
