//! Process Runner
//!
//! Drives the attempt loop for one [`CommandInvocation`]:
//!
//! 1. Build and render the command for the host platform
//! 2. Spawn `<shell> <exec flag> <command>` with piped stdout/stderr
//! 3. Drain both pipes on scoped worker threads while waiting for exit
//! 4. Evaluate the exit code, fire the completion hook, retry or stop
//!
//! A well-formed non-zero exit code is retryable. Spawn failures, missing
//! pipes, wait failures and signal terminations abort the invocation.

use std::io::{BufRead, BufReader, Read};
use std::process::{Child, Command, Stdio};
use std::thread;

use tracing::{debug, info, warn};

use crate::domain::ports::{
    AttemptRecord, CommandExecutor, CommandInvocation, CommandSpec, ExecutionRecord,
};
use crate::domain::value_objects::PlatformProfile;
use crate::error::ProcessError;

/// Captured result of a single attempt
struct AttemptOutput {
    exit_code: i32,
    stdout: Vec<String>,
    stderr: Vec<String>,
}

/// Executes command invocations with retry and output capture
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    platform: PlatformProfile,
}

impl ProcessRunner {
    pub fn new(platform: PlatformProfile) -> Self {
        Self { platform }
    }

    /// Run `invocation` until it succeeds or its attempts are exhausted.
    ///
    /// Returns the overall success flag; the full outcome is written back
    /// onto the invocation through [`CommandInvocation::record`].
    pub fn run(&self, invocation: &mut dyn CommandInvocation) -> Result<bool, ProcessError> {
        let action = invocation.action();
        let mut index: u32 = 0;

        loop {
            let spec = invocation.build(&self.platform);
            let command = spec.render(&self.platform);
            let max_attempts = spec.max_attempts();

            debug!(action, attempt = index + 1, max_attempts, command = %command, "starting attempt");
            let output = self.run_attempt(&spec, &command)?;

            let succeeded = invocation.is_success(output.exit_code);
            invocation.on_attempt_complete(&AttemptRecord {
                index,
                exit_code: output.exit_code,
                succeeded,
            });

            let attempts = index + 1;
            let exhausted = attempts >= max_attempts;
            if succeeded || exhausted {
                if succeeded {
                    info!(action, attempts, "command succeeded");
                } else {
                    warn!(action, attempts, exit_code = output.exit_code, "command failed, no attempts left");
                }
                invocation.record(ExecutionRecord {
                    success: succeeded,
                    exit_code: output.exit_code,
                    attempts,
                    command,
                    stdout: output.stdout,
                    stderr: output.stderr,
                });
                return Ok(succeeded);
            }

            warn!(
                action,
                attempt = attempts,
                exit_code = output.exit_code,
                remaining = max_attempts - attempts,
                "attempt failed, retrying"
            );
            index += 1;
        }
    }

    fn run_attempt(&self, spec: &CommandSpec, command: &str) -> Result<AttemptOutput, ProcessError> {
        let mut cmd = Command::new(self.platform.shell);
        cmd.arg(self.platform.exec_flag)
            .arg(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &spec.working_dir {
            cmd.current_dir(dir);
        }

        let mut child = cmd.spawn().map_err(|source| ProcessError::Spawn {
            program: self.platform.shell.to_string(),
            source,
        })?;

        let Some(stdout) = child.stdout.take() else {
            abandon(&mut child);
            return Err(ProcessError::PipeUnavailable { stream: "stdout" });
        };
        let Some(stderr) = child.stderr.take() else {
            abandon(&mut child);
            return Err(ProcessError::PipeUnavailable { stream: "stderr" });
        };

        let (status, stdout, stderr) = thread::scope(|s| {
            let out = s.spawn(move || drain(stdout, "stdout"));
            let err = s.spawn(move || drain(stderr, "stderr"));

            // Both readers are running; only now block on exit.
            let status = child.wait().map_err(ProcessError::Wait);
            let out = out
                .join()
                .map_err(|_| ProcessError::ReaderPanicked { stream: "stdout" });
            let err = err
                .join()
                .map_err(|_| ProcessError::ReaderPanicked { stream: "stderr" });
            (status, out, err)
        });

        let status = status?;
        let stdout = stdout?;
        let stderr = stderr?;

        let exit_code = status
            .code()
            .ok_or_else(|| ProcessError::AbnormalTermination {
                cause: status.to_string(),
            })?;

        Ok(AttemptOutput {
            exit_code,
            stdout,
            stderr,
        })
    }
}

impl CommandExecutor for ProcessRunner {
    fn platform(&self) -> &PlatformProfile {
        &self.platform
    }

    fn execute(&self, invocation: &mut dyn CommandInvocation) -> Result<bool, ProcessError> {
        self.run(invocation)
    }
}

/// Kill and reap a child we can no longer supervise
fn abandon(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

/// Read `reader` to EOF, one line at a time.
///
/// Lines are decoded lossily; the trailing `\n` and any `\r` before it are
/// stripped. A read error ends the stream early.
fn drain<R: Read>(reader: R, stream: &'static str) -> Vec<String> {
    let mut reader = BufReader::new(reader);
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                }
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
                let line = String::from_utf8_lossy(&buf).into_owned();
                debug!(target: "scanprep::child", stream, "{}", line);
                lines.push(line);
            }
            Err(e) => {
                warn!(stream, error = %e, "stopped reading child output");
                break;
            }
        }
    }

    lines
}
