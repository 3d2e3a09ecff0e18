//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use is_terminal::IsTerminal;

use crate::application::PrepareUseCase;
use crate::domain::ports::PipelineEventSink;
use crate::domain::value_objects::PlatformProfile;
use crate::infrastructure::{ConsoleEventSink, JsonEventSink, ProcessRunner};

/// Type alias for the concrete PrepareUseCase
pub type ConcretePrepareUseCase = PrepareUseCase<ProcessRunner>;

/// Create a prepare use case running commands through the host shell
pub fn create_prepare_use_case() -> ConcretePrepareUseCase {
    PrepareUseCase::new(ProcessRunner::new(PlatformProfile::detect()))
}

/// Pick the event sink for the requested output mode
///
/// Unicode icons are only used when stdout is a terminal.
pub fn create_event_sink(json: bool, verbose: bool) -> Arc<dyn PipelineEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        let unicode = std::io::stdout().is_terminal();
        Arc::new(ConsoleEventSink::stdout(unicode, verbose))
    }
}
