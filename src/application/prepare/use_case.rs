//! Prepare Use Case
//!
//! Runs the stages in order:
//! 1. `workspace` - validate the workspace root
//! 2. `load-config` - decode the main config and the project config
//! 3. `merge` - project config over main config
//! 4. `bind` - typed parameters plus required-field and path checks
//! 5. `prune` - delete excluded paths under the project
//! 6. `remote-clean` - delete and recreate the remote directories
//! 7. `copy` - scp the project to the remote host
//!
//! The first failure stops the run and names its stage. Nothing already done
//! is rolled back.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info, info_span};

use crate::domain::entities::DeployParams;
use crate::domain::ports::{
    CommandExecutor, CommandInvocation, ExecutionRecord, NoopEventSink, PipelineEvent,
    PipelineEventSink, Stage,
};
use crate::domain::services::{bind_value, merge_mappings_with_overrides};
use crate::domain::value_objects::{DynamicValue, Mapping};
use crate::error::{ScanprepError, ScanprepResult};
use crate::infrastructure::config::{
    find_config_file, load_mapping, resolve_main_config, resolve_workspace,
};
use crate::infrastructure::fs::{prune, ExclusionSet};
use crate::infrastructure::transfer::{RemoteCleanInvocation, ScpCopyInvocation};

use super::options::PrepareOptions;
use super::result::{PlannedCommand, PrepareFailure, PrepareReport};

/// Prepare use case, parameterized by the command executor so the remote
/// steps can be substituted.
pub struct PrepareUseCase<E: CommandExecutor> {
    executor: E,
}

impl<E: CommandExecutor> PrepareUseCase<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Execute without event reporting
    pub fn execute(&self, options: &PrepareOptions) -> Result<PrepareReport, PrepareFailure> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute, reporting progress to `events`
    pub fn execute_with_events(
        &self,
        options: &PrepareOptions,
        events: Arc<dyn PipelineEventSink>,
    ) -> Result<PrepareReport, PrepareFailure> {
        events.on_event(PipelineEvent::Started {
            workspace: options.workspace.clone(),
            dry_run: options.dry_run,
        });

        let result = self.run_stages(options, events.as_ref());

        events.on_event(PipelineEvent::Completed {
            success: result.is_ok(),
        });
        result
    }

    fn run_stages(
        &self,
        options: &PrepareOptions,
        events: &dyn PipelineEventSink,
    ) -> Result<PrepareReport, PrepareFailure> {
        let mut report = PrepareReport {
            dry_run: options.dry_run,
            ..PrepareReport::default()
        };

        report.workspace = stage(events, Stage::Workspace, || {
            Ok(resolve_workspace(options.workspace.as_deref())?)
        })?;

        let (main, project) = stage(events, Stage::LoadConfig, || {
            let main_path = resolve_main_config(options.main_config.as_deref())?;
            let main = load_document(events, &main_path)?;
            let project_path = find_config_file(&report.workspace, &options.config_name)?;
            let project = load_document(events, &project_path)?;
            report.main_config = main_path;
            report.project_config = project_path;
            Ok((main, project))
        })?;

        let merged = stage(events, Stage::Merge, || {
            let mut merged = main;
            let overrides = merge_mappings_with_overrides(&mut merged, project);
            report.overridden = overrides.into_iter().map(|o| o.path).collect();
            events.on_event(PipelineEvent::Merged {
                overridden: report.overridden.clone(),
            });
            Ok(merged)
        })?;

        report.params = stage(events, Stage::Bind, || {
            let root = DynamicValue::Mapping(merged);
            let params: DeployParams = bind_value(&root)?;
            let params = params.finalize(&report.workspace, Path::is_dir)?;
            events.on_event(PipelineEvent::ParamsResolved {
                params: params.clone(),
            });
            Ok(params)
        })?;

        report.pruned = stage(events, Stage::Prune, || {
            let exclusions = ExclusionSet::compile(&report.params.exclude_patterns)?;
            let pruned = prune(&report.params.project_path, &exclusions, options.dry_run)?;
            for entry in &pruned {
                events.on_event(PipelineEvent::PathPruned {
                    path: entry.path.clone(),
                    pattern: entry.pattern.clone(),
                });
            }
            Ok(pruned)
        })?;

        let mut clean = RemoteCleanInvocation::new(&report.params, options.retries);
        report.remote_clean = stage(events, Stage::RemoteClean, || {
            self.run_remote(events, &mut clean, options.dry_run, &mut report.commands)
        })?;

        let mut copy = ScpCopyInvocation::new(&report.params, options.retries);
        report.copy = stage(events, Stage::Copy, || {
            self.run_remote(events, &mut copy, options.dry_run, &mut report.commands)
        })?;

        Ok(report)
    }

    /// Plan one remote command and, unless `dry_run`, execute it
    fn run_remote(
        &self,
        events: &dyn PipelineEventSink,
        invocation: &mut dyn CommandInvocation,
        dry_run: bool,
        planned: &mut Vec<PlannedCommand>,
    ) -> ScanprepResult<Option<ExecutionRecord>> {
        let platform = self.executor.platform();
        let action = invocation.action();
        let command = invocation.build(platform).render(platform);
        events.on_event(PipelineEvent::CommandPlanned {
            action,
            command: command.clone(),
        });
        planned.push(PlannedCommand { action, command });

        if dry_run {
            return Ok(None);
        }

        let succeeded = self.executor.execute(invocation)?;

        for attempt in invocation.attempt_history() {
            events.on_event(PipelineEvent::AttemptFinished {
                action,
                attempt: attempt.index + 1,
                exit_code: attempt.exit_code,
            });
        }

        let record = invocation.last_record().cloned().unwrap_or_default();
        if !succeeded {
            return Err(ScanprepError::CommandFailed {
                action,
                attempts: record.attempts,
                exit_code: record.exit_code,
            });
        }
        Ok(Some(record))
    }
}

/// Run one stage inside its own span, translating failure into
/// [`PrepareFailure`] and a `StageFailed` event.
fn stage<T>(
    events: &dyn PipelineEventSink,
    stage: Stage,
    body: impl FnOnce() -> ScanprepResult<T>,
) -> Result<T, PrepareFailure> {
    let span = info_span!("stage", stage = stage.as_str());
    let _entered = span.enter();

    if events.wants_detailed_events() {
        events.on_event(PipelineEvent::StageStarted { stage });
    }
    info!("stage started");

    body().map_err(|source| {
        error!(error = %source, "stage failed");
        events.on_event(PipelineEvent::StageFailed {
            stage,
            error: source.to_string(),
        });
        PrepareFailure { stage, source }
    })
}

fn load_document(events: &dyn PipelineEventSink, path: &Path) -> ScanprepResult<Mapping> {
    let mapping = load_mapping(path)?;
    if events.wants_detailed_events() {
        events.on_event(PipelineEvent::ConfigLoaded {
            path: path.to_path_buf(),
            top_level_keys: mapping.len(),
        });
    }
    Ok(mapping)
}
