//! Event-name filtering.

use crate::report::EventReport;

/// Keep only events whose name contains the filter substring
/// (case-sensitive). `None` or an empty filter returns the report
/// unchanged.
pub fn filter_events(report: EventReport, filter: Option<&str>) -> EventReport {
    match filter {
        Some(needle) if !needle.is_empty() => report
            .into_iter()
            .filter(|(event, _)| event.contains(needle))
            .collect(),
        _ => report,
    }
}
