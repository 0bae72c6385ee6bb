//! Listener reporting module.
//!
//! Composes three steps over a dispatcher's raw registrations:
//! collect (normalize), filter, render. Data flows strictly one way
//! and nothing is kept between invocations.

mod collector;
mod filter;
mod renderer;

pub use collector::collect;
pub use filter::filter_events;
pub use renderer::ConsoleRenderer;

use std::collections::BTreeMap;

/// The full event-name-to-listener-display result set.
///
/// Ordered by event name ascending; listener order within an event is
/// the dispatcher's registration order.
pub type EventReport = BTreeMap<String, Vec<String>>;
