//! Player state

mod you;

pub use you::You;
