//! The standard set of items hidden in the mansion

use super::{Item, ItemId, ItemKind, Skill};
use crate::world::GameOptions;

/// (name, description, kind)
const ITEM_TABLE: &[(&str, &str, ItemKind)] = &[
    ("Password-A", "A piece of paper with numbers.", ItemKind::Password),
    ("Password-B", "A piece of paper with numbers.", ItemKind::Password),
    ("Password-C", "A piece of paper with numbers.", ItemKind::Password),
    ("White Camellia", "A rare white camellia.", ItemKind::Weakness),
    ("Gasoline", "A small can of gasoline.", ItemKind::Weakness),
    ("Rusty Chain", "A rusty chain with a binding power.", ItemKind::Weakness),
    ("Weakness Fragment-1", "A fragment of a weakness.", ItemKind::Weakness),
    ("Weakness Fragment-2", "A fragment of a weakness.", ItemKind::Weakness),
    ("Matches", "Can temporarily frighten the Box Girl.", ItemKind::Counter),
    ("Rope", "Can temporarily restrain the Box Girl.", ItemKind::Counter),
    ("Axe", "Can temporarily frighten the Box Girl.", ItemKind::Counter),
    (
        "Manuscript-Beside",
        "It is right beside you",
        ItemKind::Manuscript(Skill::RightBesideYou),
    ),
    (
        "Manuscript-Move",
        "Box Girl moves freely on the same floor",
        ItemKind::Manuscript(Skill::MovingAround),
    ),
    (
        "Manuscript-Door",
        "Door cannot be passed",
        ItemKind::Manuscript(Skill::LockedDoor),
    ),
    (
        "Manuscript-Open",
        "Forces player to open a box",
        ItemKind::Manuscript(Skill::IWantToOpenIt),
    ),
    (
        "Manuscript-Take",
        "Box Girl steals an item",
        ItemKind::Manuscript(Skill::GiveItToMe),
    ),
];

const TWIN_MANUSCRIPT: (&str, &str) = ("Manuscript-Twin", "Her sister never left the upper floor");

/// Items other than fillers that the given rules put in the mansion
pub fn key_item_count(options: &GameOptions) -> usize {
    ITEM_TABLE.len() + usize::from(options.twin_sister)
}

/// Build every item that gets distributed into the mansion's boxes
pub fn standard_items(options: &GameOptions) -> Vec<Item> {
    let mut next = ItemId(1);
    let mut alloc = || {
        let id = next;
        next = next.next();
        id
    };

    let mut items: Vec<Item> = ITEM_TABLE
        .iter()
        .map(|&(name, desc, kind)| Item::new(alloc(), name, desc, kind))
        .collect();

    if options.twin_sister {
        let (name, desc) = TWIN_MANUSCRIPT;
        items.push(Item::new(
            alloc(),
            name,
            desc,
            ItemKind::Manuscript(Skill::TwinSister),
        ));
    }

    for _ in 0..options.filler_count {
        items.push(Item::filler(alloc()));
    }

    items
}
