//! API request handlers

mod events;
mod fallback;

pub use events::*;
pub use fallback::*;
