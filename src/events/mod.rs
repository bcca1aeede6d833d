//! Listener registrations attached to a map

pub mod event;
pub mod manager;

pub use event::Event;
pub use manager::{EventManager, ListenerKind};
