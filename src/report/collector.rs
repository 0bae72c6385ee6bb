//! Listener collection and normalization.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::RawListener;
use crate::report::EventReport;

/// Build a report from the dispatcher's raw mapping, normalizing every
/// listener reference into its display string.
pub fn collect(raw: &HashMap<String, Vec<RawListener>>, root: &Path) -> EventReport {
    raw.iter()
        .map(|(event, listeners)| {
            let displays = listeners
                .iter()
                .map(|listener| display_listener(listener, root))
                .collect();
            (event.clone(), displays)
        })
        .collect()
}

/// Normalize one listener reference:
///
/// - named handler: the path, unchanged
/// - closure: `Closure at: <path>:<line>`, with the path shown
///   relative to the application root when it lives under it
/// - (receiver, method) pair: `<receiver>@<method>`, with instance
///   receivers reduced to their runtime type name
fn display_listener(listener: &RawListener, root: &Path) -> String {
    match listener {
        RawListener::Handler(name) => name.clone(),
        RawListener::Closure(location) => {
            let path = relative_to_root(&location.file, root);
            format!("Closure at: {}:{}", path, location.line)
        }
        RawListener::Method { receiver, method } => {
            format!("{}@{}", receiver.identifier(), method)
        }
    }
}

/// Strip the root prefix from a path, string-wise, so the result keeps
/// its leading separator. Paths outside the root are shown in full.
fn relative_to_root<'a>(file: &'a str, root: &Path) -> &'a str {
    let root = root.to_string_lossy();
    file.strip_prefix(root.as_ref()).unwrap_or(file)
}
