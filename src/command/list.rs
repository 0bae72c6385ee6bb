//! The `list` console subcommand.

use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::config::Config;
use crate::dispatcher::{load_manifest, ListenerSource};
use crate::error::AcaraError;
use crate::report::{collect, filter_events, ConsoleRenderer};

/// Strategy producing the dispatcher to introspect.
///
/// The default resolves the wiring manifest named by the
/// configuration; embedding applications install their own resolver to
/// report over a live dispatcher instead.
pub type DispatcherResolver =
    Box<dyn Fn() -> anyhow::Result<Box<dyn ListenerSource>> + Send + Sync>;

/// Lists registered events and their listeners.
pub struct ListCommand {
    resolver: DispatcherResolver,
    renderer: ConsoleRenderer,
    root: PathBuf,
}

impl ListCommand {
    /// Command with the default manifest-backed resolver.
    pub fn from_config(config: &Config) -> Self {
        let manifest_path = config.manifest_path.clone();
        let resolver: DispatcherResolver = Box::new(move || {
            let dispatcher = load_manifest(&manifest_path)?;
            Ok(Box::new(dispatcher) as Box<dyn ListenerSource>)
        });
        Self::new(resolver, config.root.clone())
    }

    /// Command with a host-supplied resolver. `root` is stripped from
    /// closure definition paths in the report.
    pub fn new(resolver: DispatcherResolver, root: PathBuf) -> Self {
        Self {
            resolver,
            renderer: ConsoleRenderer::new(),
            root,
        }
    }

    /// Replace the renderer (e.g., to disable colors).
    pub fn with_renderer(mut self, renderer: ConsoleRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Run one report pass: resolve, collect, filter, render.
    pub fn run(&self, filter: Option<&str>, out: &mut dyn Write) -> Result<(), AcaraError> {
        let source = (self.resolver)().map_err(|e| AcaraError::Resolve(e.to_string()))?;

        let raw = source.raw_listeners();
        debug!("collected {} event(s) from dispatcher", raw.len());

        let report = filter_events(collect(&raw, &self.root), filter);
        self.renderer.write(&report, out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use anyhow::anyhow;

    use crate::dispatcher::EventDispatcher;
    use crate::report::ConsoleRenderer;

    fn command_over(build: impl Fn() -> EventDispatcher + Send + Sync + 'static) -> ListCommand {
        let resolver: DispatcherResolver =
            Box::new(move || Ok(Box::new(build()) as Box<dyn ListenerSource>));
        ListCommand::new(resolver, PathBuf::from("/srv"))
            .with_renderer(ConsoleRenderer::new().with_colors(false))
    }

    fn run_to_string(command: &ListCommand, filter: Option<&str>) -> String {
        let mut out = Vec::new();
        command.run(filter, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_run_reports_registered_listeners() {
        let command = command_over(|| {
            let mut dispatcher = EventDispatcher::new();
            dispatcher.listen_handler("user.created", "app::listeners::send_welcome_email");
            dispatcher
        });

        let output = run_to_string(&command, None);
        assert!(output.contains("  user.created\n"));
        assert!(output.contains("    ↳ app::listeners::send_welcome_email\n"));
    }

    #[test]
    fn test_run_applies_the_event_filter() {
        let command = command_over(|| {
            let mut dispatcher = EventDispatcher::new();
            dispatcher.listen_handler("a.b", "one");
            dispatcher.listen_handler("c.d", "two");
            dispatcher
        });

        let output = run_to_string(&command, Some("a."));
        assert!(output.contains("a.b"));
        assert!(!output.contains("c.d"));
    }

    #[test]
    fn test_run_with_empty_dispatcher_prints_the_notice() {
        let command = command_over(EventDispatcher::new);
        let output = run_to_string(&command, None);
        assert_eq!(output, "No events match the given criteria.\n");
    }

    #[test]
    fn test_run_strips_root_from_closure_paths() {
        let command = command_over(|| {
            let mut dispatcher = EventDispatcher::new();
            dispatcher.listen("audit.log", |_, _| {});
            dispatcher
        });

        let output = run_to_string(&command, None);
        assert!(output.contains("Closure at: "));
        assert!(output.contains("list.rs:"));
    }

    #[test]
    fn test_resolver_failure_surfaces_as_resolve_error() {
        let resolver: DispatcherResolver = Box::new(|| Err(anyhow!("container offline")));
        let command = ListCommand::new(resolver, PathBuf::from("/srv"));

        let mut out = Vec::new();
        let err = command.run(None, &mut out).unwrap_err();
        assert!(matches!(err, AcaraError::Resolve(msg) if msg.contains("container offline")));
        assert!(out.is_empty());
    }
}
