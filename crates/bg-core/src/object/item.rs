//! Item instances
//!
//! Items are deliberately not `Clone`: an item lives in exactly one place
//! at a time (a box or the player's inventory) and is moved between them.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::FILLER_NAME;

/// Unique identifier for item instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    pub fn next(self) -> Self {
        ItemId(self.0 + 1)
    }
}

/// Pursuer behaviors unlocked by manuscripts
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum Skill {
    /// Teleports the pursuer into the player's room
    #[strum(serialize = "Right Beside You")]
    RightBesideYou,
    /// Scrambles the boxes of the player's room
    #[strum(serialize = "Moving Around")]
    MovingAround,
    /// Oppressive atmosphere around the exits; no mechanical effect
    #[strum(serialize = "Locked Door")]
    LockedDoor,
    /// Forces the player to open a box
    #[strum(serialize = "I Want to Open It")]
    IWantToOpenIt,
    /// Steals a weakness item and hides it again
    #[strum(serialize = "Give It to Me")]
    GiveItToMe,
    /// Wakes a second pursuer instead of unlocking a repeatable skill
    #[strum(serialize = "Twin Sister")]
    TwinSister,
}

impl Skill {
    /// Whether discovering this manuscript summons a new pursuer
    pub const fn summons_twin(self) -> bool {
        matches!(self, Skill::TwinSister)
    }
}

/// Item kinds, each with its own use behavior (see `action::apply`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Part of the hidden exit code
    Password,
    /// Something the Box Girl fears; used for the exorcism
    Weakness,
    /// Scares the pursuer away for a turn; consumed on use
    Counter,
    /// Empowers the pursuer when found; never enters the inventory
    Manuscript(Skill),
    /// Placeholder occupying an otherwise empty box
    Filler,
}

impl ItemKind {
    /// Short class name for inventory listings
    pub const fn class_name(&self) -> &'static str {
        match self {
            ItemKind::Password => "password",
            ItemKind::Weakness => "weakness",
            ItemKind::Counter => "counter item",
            ItemKind::Manuscript(_) => "manuscript",
            ItemKind::Filler => "nothing",
        }
    }
}

/// Item instance
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,

    /// Display name, also what the player types to use it
    pub name: String,

    /// Flavor description shown when obtained
    pub description: String,

    /// What the item does
    pub kind: ItemKind,

    /// Set once the item has entered the player's inventory
    pub obtained: bool,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: ItemKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            kind,
            obtained: false,
        }
    }

    /// The "Empty Box" placeholder
    pub fn filler(id: ItemId) -> Self {
        Self::new(
            id,
            FILLER_NAME,
            "A placeholder for an empty box.",
            ItemKind::Filler,
        )
    }

    pub fn is_filler(&self) -> bool {
        self.kind == ItemKind::Filler
    }

    pub fn is_manuscript(&self) -> bool {
        matches!(self.kind, ItemKind::Manuscript(_))
    }

    pub fn is_weakness(&self) -> bool {
        self.kind == ItemKind::Weakness
    }

    /// The skill a manuscript unlocks
    pub fn skill(&self) -> Option<Skill> {
        match self.kind {
            ItemKind::Manuscript(skill) => Some(skill),
            _ => None,
        }
    }

    /// Case-insensitive name match, as typed by the player
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}
