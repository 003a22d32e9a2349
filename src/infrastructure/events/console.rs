//! Console Event Sink
//!
//! One leveled log line per event, `LEVEL    icon message`.

use crate::domain::entities::ASSETS;
use crate::domain::ports::{DeployEvent, DeployEventSink, Severity};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink printing human-readable log lines (stderr by default)
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    unicode: bool,
    verbose: bool,
}

impl ConsoleEventSink {
    pub fn stderr() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Plain, non-verbose sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color: false,
            unicode: false,
            verbose: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_unicode(mut self, unicode: bool) -> Self {
        self.unicode = unicode;
        self
    }

    /// Show debug events (resolved target, command output)
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn level(&self, severity: Severity) -> String {
        let label = format!("{:<8}", severity.label());
        let text = match severity {
            Severity::Debug => ColoredText::info(label),
            Severity::Info => ColoredText::success(label),
            Severity::Warning => ColoredText::warning(label),
            Severity::Error => ColoredText::error(label).bold(),
        };
        text.render(self.color)
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.color, self.unicode)
    }

    fn message(&self, event: &DeployEvent) -> String {
        let total = ASSETS.len();
        match event {
            DeployEvent::Started {
                environment,
                project_dir,
                dry_run,
            } => {
                let suffix = if *dry_run { " (dry run)" } else { "" };
                format!(
                    "{} Deploying {} to {}{}",
                    self.icon(Icon::Deploy),
                    project_dir.display(),
                    environment,
                    suffix
                )
            }
            DeployEvent::TargetResolved {
                bucket_url,
                distribution_id,
            } => format!("Bucket {}, distribution {}", bucket_url, distribution_id),
            DeployEvent::ConfigWarning { warning } => {
                format!("{} {}", self.icon(Icon::Warning), warning)
            }
            DeployEvent::AssetStarted {
                index,
                kind,
                source,
                destination,
                ..
            } => format!(
                "{} [{}/{}] Syncing {}: {} {} {}",
                self.icon(Icon::Progress),
                index + 1,
                total,
                kind.as_str(),
                source.display(),
                self.icon(Icon::Arrow),
                destination
            ),
            DeployEvent::AssetSynced { name, .. } => {
                format!("{} Synced {}", self.icon(Icon::Success), name)
            }
            DeployEvent::AssetSkipped { path, .. } => format!(
                "{} Asset not found, skipping: {}",
                self.icon(Icon::Warning),
                path.display()
            ),
            DeployEvent::EntryPointUploaded {
                destination,
                cache_control,
            } => format!(
                "{} Uploaded {} with Cache-Control \"{}\"",
                self.icon(Icon::Success),
                destination,
                cache_control
            ),
            DeployEvent::EntryPointMissing { path } => format!(
                "{} {} not found, skipping no-cache upload",
                self.icon(Icon::Warning),
                path.display()
            ),
            DeployEvent::InvalidationSubmitted {
                distribution_id,
                invalidation_id,
                ..
            } => format!(
                "{} Submitted CloudFront invalidation for {} (ID: {})",
                self.icon(Icon::Remote),
                distribution_id,
                invalidation_id
            ),
            DeployEvent::InvalidationSkipped { distribution_id } => format!(
                "{} Dry run, not invalidating {}",
                self.icon(Icon::Warning),
                distribution_id
            ),
            DeployEvent::CommandOutput { output } => output.clone(),
            DeployEvent::Completed {
                synced_count,
                skipped_count,
                dry_run,
            } => {
                let verb = if *dry_run { "Dry run complete" } else { "Deploy complete" };
                format!(
                    "{} {}: {} synced, {} skipped",
                    self.icon(Icon::Success),
                    verb,
                    synced_count,
                    skipped_count
                )
            }
            DeployEvent::Failed { error } => format!("{} {}", self.icon(Icon::Error), error),
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let severity = event.severity();
        if severity == Severity::Debug && !self.verbose {
            return;
        }

        let level = self.level(severity);
        let message = self.message(&event);

        if let Ok(mut writer) = self.writer.lock() {
            // Multi-line output (command logs, stderr) keeps the level on every line
            for line in message.lines() {
                let _ = writeln!(writer, "{} {}", level, line);
            }
            let _ = writer.flush();
        }
    }

    fn wants_debug_events(&self) -> bool {
        self.verbose
    }
}
