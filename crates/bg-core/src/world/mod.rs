//! Game-wide configuration

mod errors;
mod options;

pub use errors::OptionsError;
pub use options::GameOptions;
