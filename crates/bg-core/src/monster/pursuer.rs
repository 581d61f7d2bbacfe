//! Pursuer instances

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::mansion::RoomId;
use crate::object::{ContainerId, Skill};

/// Index of a pursuer in [`GameState::pursuers`](crate::GameState::pursuers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PursuerId(pub u32);

/// Which entity this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum PursuerKind {
    #[strum(to_string = "Box Girl")]
    BoxGirl,
    #[strum(to_string = "Twin Sister")]
    TwinSister,
}

/// An autonomous pursuer
///
/// A pursuer is either visible in its room or hidden inside one of that
/// room's boxes. Hiding never changes `room`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pursuer {
    pub id: PursuerId,
    pub kind: PursuerKind,
    room: RoomId,
    hidden_in: Option<ContainerId>,
    /// Unlock order; never shrinks
    skills: Vec<Skill>,
}

impl Pursuer {
    pub fn new(id: PursuerId, kind: PursuerKind, room: RoomId) -> Self {
        Self {
            id,
            kind,
            room,
            hidden_in: None,
            skills: Vec::new(),
        }
    }

    /// Start with a copy of another pursuer's skills
    pub fn with_skills(mut self, skills: &[Skill]) -> Self {
        for &skill in skills {
            self.unlock(skill);
        }
        self
    }

    pub fn room(&self) -> RoomId {
        self.room
    }

    pub fn hidden_in(&self) -> Option<ContainerId> {
        self.hidden_in
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden_in.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.hidden_in.is_none()
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn knows(&self, skill: Skill) -> bool {
        self.skills.contains(&skill)
    }

    /// Add a skill. Returns false if it was already known.
    pub fn unlock(&mut self, skill: Skill) -> bool {
        if self.knows(skill) {
            return false;
        }
        self.skills.push(skill);
        true
    }

    pub(crate) fn set_room(&mut self, room: RoomId) {
        self.room = room;
    }

    pub(crate) fn enter_box(&mut self, container: ContainerId) {
        self.hidden_in = Some(container);
    }

    /// Become visible again, returning the box that was left
    pub(crate) fn leave_box(&mut self) -> Option<ContainerId> {
        self.hidden_in.take()
    }
}
