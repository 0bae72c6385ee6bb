//! Listener reference domain models.
//!
//! These types describe how a listener was registered, independent of
//! how (or whether) it can be invoked (SRP).

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use serde_json::Value;

/// Handles dispatched events.
///
/// Implemented by application types registered as live receivers. The
/// provided `type_name` is the receiver identity shown in reports.
pub trait EventHandler: Send + Sync {
    /// Invoked for every event the receiver is registered under.
    fn handle(&self, event: &str, payload: &Value);

    /// Fully qualified runtime type name of the receiver.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Definition site of an anonymous closure listener.
///
/// The path and line are identifying information for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Definition file path; empty when it could not be determined.
    pub file: String,
    /// 1-based line where the closure definition begins.
    pub line: u32,
}

impl SourceLocation {
    /// Record the calling site as the definition location.
    #[track_caller]
    pub fn capture() -> Self {
        let location = Location::caller();
        Self {
            file: location.file().to_string(),
            line: location.line(),
        }
    }

    /// Build a location from known parts.
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// The receiver half of a (receiver, method) listener pair.
#[derive(Clone)]
pub enum Receiver {
    /// An already-stringified type identifier.
    TypeName(String),
    /// A live receiver instance, reduced to its runtime type name for
    /// display.
    Instance(Arc<dyn EventHandler>),
}

impl Receiver {
    /// The identifier shown in reports.
    pub fn identifier(&self) -> &str {
        match self {
            Self::TypeName(name) => name,
            Self::Instance(handler) => handler.type_name(),
        }
    }
}

impl fmt::Debug for Receiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeName(name) => f.debug_tuple("TypeName").field(name).finish(),
            Self::Instance(handler) => f.debug_tuple("Instance").field(&handler.type_name()).finish(),
        }
    }
}

/// An unnormalized listener reference as stored by the dispatcher.
///
/// One variant per registration shape, each carrying exactly the
/// fields its display rule needs.
#[derive(Debug, Clone)]
pub enum RawListener {
    /// A fully qualified handler path registered by name.
    Handler(String),
    /// An inline closure, identified by its definition site.
    Closure(SourceLocation),
    /// A (receiver, method) pair.
    Method {
        /// Who handles the event.
        receiver: Receiver,
        /// The method the receiver handles it through.
        method: String,
    },
}
