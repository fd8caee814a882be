//! Adapters layer (Hexagonal Architecture)

mod access;
mod clock;
mod event_bus;

pub use access::*;
pub use clock::*;
pub use event_bus::*;
