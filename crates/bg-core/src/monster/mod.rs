//! Pursuers: the Box Girl and her twin sister

mod ai;
mod pursuer;
pub mod skills;

pub(crate) use ai::relocate;
pub use ai::pursuers_turn;
pub use pursuer::{Pursuer, PursuerId, PursuerKind};
