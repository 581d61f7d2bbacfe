//! The player character

use serde::{Deserialize, Serialize};

use crate::mansion::RoomId;
use crate::object::{Item, ItemKind};

/// The player: where they stand and what they carry
#[derive(Debug, Serialize, Deserialize)]
pub struct You {
    /// Current room
    pub room: RoomId,

    /// Items in pickup order
    pub inventory: Vec<Item>,

    /// Set by a counter item; suppresses the next pursuer turn
    calmed: bool,
}

impl You {
    pub fn new(room: RoomId) -> Self {
        Self {
            room,
            inventory: Vec::new(),
            calmed: false,
        }
    }

    pub fn move_to(&mut self, room: RoomId) {
        self.room = room;
    }

    /// Add an item to the inventory and mark it obtained
    pub fn add_item(&mut self, mut item: Item) {
        item.obtained = true;
        self.inventory.push(item);
    }

    /// Index of the first item with this name (case-insensitive)
    pub fn find_item(&self, name: &str) -> Option<usize> {
        self.inventory.iter().position(|i| i.matches_name(name))
    }

    pub fn remove_item(&mut self, index: usize) -> Option<Item> {
        (index < self.inventory.len()).then(|| self.inventory.remove(index))
    }

    /// Number of carried items of one kind
    pub fn count_kind(&self, kind: ItemKind) -> usize {
        self.inventory.iter().filter(|i| i.kind == kind).count()
    }

    /// Remove the first weakness item, if any
    pub fn take_first_weakness(&mut self) -> Option<Item> {
        let index = self.inventory.iter().position(Item::is_weakness)?;
        self.remove_item(index)
    }

    pub fn is_calmed(&self) -> bool {
        self.calmed
    }

    pub fn set_calmed(&mut self) {
        self.calmed = true;
    }

    /// Clear the calm flag, returning whether it was set
    pub fn take_calmed(&mut self) -> bool {
        core::mem::take(&mut self.calmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ItemId;

    fn item(id: u32, name: &str, kind: ItemKind) -> Item {
        Item::new(ItemId(id), name, "", kind)
    }

    #[test]
    fn test_add_item_marks_obtained() {
        let mut you = You::new(RoomId(0));
        you.add_item(item(1, "Rope", ItemKind::Counter));
        assert!(you.inventory[0].obtained);
    }

    #[test]
    fn test_count_and_find() {
        let mut you = You::new(RoomId(0));
        you.add_item(item(1, "Password-A", ItemKind::Password));
        you.add_item(item(2, "Gasoline", ItemKind::Weakness));
        you.add_item(item(3, "Password-B", ItemKind::Password));

        assert_eq!(you.count_kind(ItemKind::Password), 2);
        assert_eq!(you.count_kind(ItemKind::Counter), 0);
        assert_eq!(you.find_item("password-b"), Some(2));
        assert_eq!(you.find_item("Axe"), None);
    }

    #[test]
    fn test_take_first_weakness_in_pickup_order() {
        let mut you = You::new(RoomId(0));
        you.add_item(item(1, "Rope", ItemKind::Counter));
        you.add_item(item(2, "Gasoline", ItemKind::Weakness));
        you.add_item(item(3, "Rusty Chain", ItemKind::Weakness));

        assert_eq!(you.take_first_weakness().map(|i| i.name), Some("Gasoline".to_string()));
        assert_eq!(you.inventory.len(), 2);
        assert_eq!(you.take_first_weakness().map(|i| i.id), Some(ItemId(3)));
        assert!(you.take_first_weakness().is_none());
    }

    #[test]
    fn test_calm_flag_lasts_one_check() {
        let mut you = You::new(RoomId(0));
        assert!(!you.take_calmed());
        you.set_calmed();
        assert!(you.is_calmed());
        assert!(you.take_calmed());
        assert!(!you.take_calmed());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut you = You::new(RoomId(0));
        assert!(you.remove_item(0).is_none());
    }
}
