//! In-process event dispatcher.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::domain::{EventHandler, RawListener, Receiver, SourceLocation};

/// A closure listener callback.
type Callback = Box<dyn Fn(&str, &Value) + Send + Sync>;

/// One registration: the reference shown in reports, plus the callable
/// half when the registration has one.
struct Registration {
    raw: RawListener,
    callback: Option<Callback>,
}

/// Groups listeners under string event names and dispatches to them.
///
/// Listener order within an event is registration order. Event names
/// carry no uniqueness constraint beyond the grouping itself.
#[derive(Default)]
pub struct EventDispatcher {
    listeners: HashMap<String, Vec<Registration>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an inline closure. Its definition site is captured as
    /// the identifying information shown in reports.
    #[track_caller]
    pub fn listen<F>(&mut self, event: impl Into<String>, callback: F)
    where
        F: Fn(&str, &Value) + Send + Sync + 'static,
    {
        let location = SourceLocation::capture();
        self.push(
            event.into(),
            Registration {
                raw: RawListener::Closure(location),
                callback: Some(Box::new(callback)),
            },
        );
    }

    /// Register a handler by fully qualified path.
    ///
    /// Declarative only: resolving the path to code is the host
    /// application's wiring concern, so `dispatch` skips it.
    pub fn listen_handler(&mut self, event: impl Into<String>, handler: impl Into<String>) {
        self.push(
            event.into(),
            Registration {
                raw: RawListener::Handler(handler.into()),
                callback: None,
            },
        );
    }

    /// Register a live receiver instance together with the method name
    /// it handles the event through.
    pub fn listen_instance(
        &mut self,
        event: impl Into<String>,
        receiver: Arc<dyn EventHandler>,
        method: impl Into<String>,
    ) {
        self.push(
            event.into(),
            Registration {
                raw: RawListener::Method {
                    receiver: Receiver::Instance(receiver),
                    method: method.into(),
                },
                callback: None,
            },
        );
    }

    /// Register a (type name, method) pair. Declarative only, like
    /// `listen_handler`.
    pub fn listen_method(
        &mut self,
        event: impl Into<String>,
        type_name: impl Into<String>,
        method: impl Into<String>,
    ) {
        self.push(
            event.into(),
            Registration {
                raw: RawListener::Method {
                    receiver: Receiver::TypeName(type_name.into()),
                    method: method.into(),
                },
                callback: None,
            },
        );
    }

    fn push(&mut self, event: String, registration: Registration) {
        debug!("listener registered for '{}'", event);
        self.listeners.entry(event).or_default().push(registration);
    }

    /// Snapshot of the raw event-to-listeners mapping, listener order
    /// preserved.
    pub fn raw_listeners(&self) -> HashMap<String, Vec<RawListener>> {
        self.listeners
            .iter()
            .map(|(event, registrations)| {
                let raw = registrations.iter().map(|r| r.raw.clone()).collect();
                (event.clone(), raw)
            })
            .collect()
    }

    /// Dispatch an event to its callable listeners, in registration
    /// order. Returns the number of listeners invoked.
    pub fn dispatch(&self, event: &str, payload: &Value) -> usize {
        let Some(registrations) = self.listeners.get(event) else {
            debug!("dispatch '{}': no listeners", event);
            return 0;
        };

        let mut invoked = 0;
        for registration in registrations {
            if let Some(callback) = &registration.callback {
                callback(event, payload);
                invoked += 1;
            } else if let RawListener::Method {
                receiver: Receiver::Instance(handler),
                ..
            } = &registration.raw
            {
                handler.handle(event, payload);
                invoked += 1;
            } else {
                debug!("dispatch '{}': skipping declarative listener {:?}", event, registration.raw);
            }
        }
        invoked
    }

    /// Number of events with at least one registration.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
