//! Wiring manifest loader.
//!
//! Applications can declare event wiring in a line-oriented config
//! file instead of (or in addition to) registering listeners in code.

use std::path::Path;

use tracing::debug;

use crate::dispatcher::EventDispatcher;
use crate::error::AcaraError;

/// Load a wiring manifest into a fresh dispatcher.
///
/// Syntax: one `event = listener` entry per line; `#` comments and
/// blank lines are ignored; repeated event keys append in file order.
/// A listener of the form `Type@method` registers a (type, method)
/// pair; any other value registers a named handler path.
///
/// A missing file yields an empty dispatcher, not an error.
pub fn load_manifest(path: &Path) -> Result<EventDispatcher, AcaraError> {
    let mut dispatcher = EventDispatcher::new();

    if !path.exists() {
        debug!("no wiring manifest at {}", path.display());
        return Ok(dispatcher);
    }

    let content = std::fs::read_to_string(path)?;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Entries that do not fit a known shape are dropped without any
        // user-facing diagnostic. Surprising (data disappears from the
        // report), but a single bad line must not fail the listing.
        // Do not extend the skip to new shapes without revisiting.
        let Some((event, listener)) = line.split_once('=') else {
            debug!("skipping malformed wiring entry: {}", line);
            continue;
        };
        let event = event.trim();
        let listener = listener.trim();
        if event.is_empty() || listener.is_empty() {
            debug!("skipping malformed wiring entry: {}", line);
            continue;
        }

        match listener.split_once('@') {
            Some((type_name, method)) => {
                if type_name.is_empty() || method.is_empty() || method.contains('@') {
                    debug!("skipping malformed wiring entry: {}", line);
                    continue;
                }
                dispatcher.listen_method(event, type_name, method);
            }
            None => dispatcher.listen_handler(event, listener),
        }
    }

    Ok(dispatcher)
}
