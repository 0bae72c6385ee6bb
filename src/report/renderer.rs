//! Console rendering of the listener report.

use std::io::{self, Write};

use console::style;

use crate::report::EventReport;

/// Shown when the (possibly filtered) report has no events. Not an
/// error; the command still exits successfully.
const NO_EVENTS_NOTICE: &str = "No events match the given criteria.";

/// Marker glyph prefixed to listener lines.
const LISTENER_MARKER: &str = "↳";

/// Renders a listener report as indented text lines.
pub struct ConsoleRenderer {
    /// Whether to use colors in output
    use_colors: bool,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Enable or disable colored output.
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Produce the report lines.
    ///
    /// Events render in ascending name order, each followed by its
    /// listeners in registration order. A blank line precedes the
    /// first event and follows the last. An empty report renders the
    /// no-events notice and nothing else.
    pub fn render(&self, report: &EventReport) -> Vec<String> {
        if report.is_empty() {
            return vec![self.paint_notice(NO_EVENTS_NOTICE)];
        }

        let mut lines = vec![String::new()];
        for (event, listeners) in report {
            lines.push(format!("  {}", self.paint_event(event)));
            for listener in listeners {
                lines.push(self.paint_listener(&format!("    {} {}", LISTENER_MARKER, listener)));
            }
        }
        lines.push(String::new());
        lines
    }

    /// Render and write, one line per write.
    pub fn write(&self, report: &EventReport, out: &mut dyn Write) -> io::Result<()> {
        for line in self.render(report) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    fn paint_event(&self, text: &str) -> String {
        if self.use_colors {
            style(text).cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_listener(&self, text: &str) -> String {
        if self.use_colors {
            style(text).dim().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_notice(&self, text: &str) -> String {
        if self.use_colors {
            style(text).yellow().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> ConsoleRenderer {
        ConsoleRenderer::new().with_colors(false)
    }

    #[test]
    fn test_empty_report_renders_only_the_notice() {
        let lines = plain().render(&EventReport::new());
        assert_eq!(lines, vec!["No events match the given criteria.".to_string()]);
    }

    #[test]
    fn test_single_event_with_listener() {
        let report = EventReport::from([(
            "user.created".to_string(),
            vec!["app::listeners::send_welcome_email".to_string()],
        )]);

        let lines = plain().render(&report);
        assert_eq!(
            lines,
            vec![
                "".to_string(),
                "  user.created".to_string(),
                "    ↳ app::listeners::send_welcome_email".to_string(),
                "".to_string(),
            ]
        );
    }

    #[test]
    fn test_events_render_in_ascending_name_order() {
        let report = EventReport::from([
            ("c.d".to_string(), vec!["two".to_string()]),
            ("a.b".to_string(), vec!["one".to_string()]),
        ]);

        let lines = plain().render(&report);
        let first = lines.iter().position(|l| l.contains("a.b")).unwrap();
        let second = lines.iter().position(|l| l.contains("c.d")).unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_listeners_keep_registration_order() {
        let report = EventReport::from([(
            "user.created".to_string(),
            vec!["zeta".to_string(), "alpha".to_string()],
        )]);

        let lines = plain().render(&report);
        assert_eq!(lines[2], "    ↳ zeta");
        assert_eq!(lines[3], "    ↳ alpha");
    }

    #[test]
    fn test_blank_separator_lines_surround_the_report() {
        let report = EventReport::from([("a.b".to_string(), vec!["one".to_string()])]);
        let lines = plain().render(&report);
        assert_eq!(lines.first(), Some(&String::new()));
        assert_eq!(lines.last(), Some(&String::new()));
    }

    #[test]
    fn test_write_emits_one_line_per_entry() {
        let report = EventReport::from([("a.b".to_string(), vec!["one".to_string()])]);
        let mut out = Vec::new();
        plain().write(&report, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\n  a.b\n    ↳ one\n\n");
    }

    #[test]
    fn test_event_without_listeners_still_renders_its_line() {
        let report = EventReport::from([("a.b".to_string(), Vec::new())]);
        let lines = plain().render(&report);
        assert_eq!(lines, vec!["".to_string(), "  a.b".to_string(), "".to_string()]);
    }
}
