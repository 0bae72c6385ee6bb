//! Acara - event wiring inspector.
//!
//! A small string-keyed event dispatch layer with a console report
//! over it: register listeners under event names (by handler path,
//! inline closure, or receiver-method pair) and list the resulting
//! wiring, filtered and sorted, as indented text lines.

pub mod command;
pub mod config;
pub mod dispatcher;
pub mod domain;
pub mod error;
pub mod report;

pub use command::{DispatcherResolver, ListCommand};
pub use config::Config;
pub use dispatcher::{load_manifest, EventDispatcher, ListenerSource};
pub use domain::{EventHandler, RawListener, Receiver, SourceLocation};
pub use error::AcaraError;
pub use report::{collect, filter_events, ConsoleRenderer, EventReport};
