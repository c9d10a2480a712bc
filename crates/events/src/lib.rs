//! Change notification mechanics for in-memory view state.
//!
//! Stores publish a change event after every observable mutation; the
//! presentation layer subscribes and re-renders. Nothing here knows about
//! products or tables.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{ChangeBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{ChangeBusError, InMemoryChangeBus};
