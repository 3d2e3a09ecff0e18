//! Console Event Sink
//!
//! Human-readable status lines, one per notable event.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{PipelineEvent, PipelineEventSink};

mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const PROGRESS: &str = "●";
    pub const ARROW: &str = "↳";
}

mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const PROGRESS: &str = "[..]";
    pub const ARROW: &str = "[>]";
}

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    unicode: bool,
    verbose: bool,
}

impl ConsoleEventSink {
    pub fn stdout(unicode: bool, verbose: bool) -> Self {
        Self::with_writer(io::stdout(), unicode, verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, unicode: bool, verbose: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            unicode,
            verbose,
        }
    }

    fn icon(&self, unicode: &'static str, ascii: &'static str) -> &'static str {
        if self.unicode {
            unicode
        } else {
            ascii
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }
}

impl PipelineEventSink for ConsoleEventSink {
    fn on_event(&self, event: PipelineEvent) {
        let progress = self.icon(icons::PROGRESS, icons_ascii::PROGRESS);
        let arrow = self.icon(icons::ARROW, icons_ascii::ARROW);
        let ok = self.icon(icons::SUCCESS, icons_ascii::SUCCESS);
        let fail = self.icon(icons::ERROR, icons_ascii::ERROR);

        let text = match event {
            PipelineEvent::Started { workspace, dry_run } => {
                let suffix = if dry_run { " (dry run)" } else { "" };
                match workspace {
                    Some(ws) => format!("{} Preparing {}{}", progress, ws.display(), suffix),
                    None => format!("{} Preparing{}", progress, suffix),
                }
            }
            PipelineEvent::StageStarted { stage } => {
                if !self.verbose {
                    return;
                }
                format!("{} {}", progress, stage)
            }
            PipelineEvent::ConfigLoaded {
                path,
                top_level_keys,
            } => {
                if !self.verbose {
                    return;
                }
                format!("  {} loaded {} ({} keys)", arrow, path.display(), top_level_keys)
            }
            PipelineEvent::Merged { overridden } => {
                if overridden.is_empty() {
                    return;
                }
                format!("  {} project overrides: {}", arrow, overridden.join(", "))
            }
            PipelineEvent::ParamsResolved { params } => format!(
                "  {} project {} -> {}@{}",
                arrow,
                params.project_path.display(),
                params.ssh_username,
                params.ssh_host
            ),
            PipelineEvent::PathPruned { path, pattern } => {
                format!("  {} excluded {} ({})", arrow, path.display(), pattern)
            }
            PipelineEvent::CommandPlanned { action, command } => {
                format!("  {} {}: {}", arrow, action, command)
            }
            PipelineEvent::AttemptFinished {
                action,
                attempt,
                exit_code,
            } => {
                if exit_code == 0 && !self.verbose {
                    return;
                }
                format!(
                    "  {} {} attempt {} exited with {}",
                    arrow, action, attempt, exit_code
                )
            }
            PipelineEvent::StageFailed { stage, error } => {
                format!("{} {} failed: {}", fail, stage, error)
            }
            PipelineEvent::Completed { success } => {
                if success {
                    format!("{} Done", ok)
                } else {
                    format!("{} Aborted", fail)
                }
            }
        };

        self.line(text);
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose
    }
}
