//! Domain models for event listener registration.
//!
//! This module contains the core listener reference types that are
//! independent of any dispatch or rendering concerns (SRP, DIP).

mod listener;

pub use listener::{EventHandler, RawListener, Receiver, SourceLocation};
