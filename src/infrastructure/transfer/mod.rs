//! Transfer invocations
//!
//! The two remote commands a prepare run executes, expressed as
//! [`CommandInvocation`](crate::domain::ports::CommandInvocation)s:
//!
//! - [`RemoteCleanInvocation`]: delete the previous upload and report, then
//!   recreate the source directory over ssh
//! - [`ScpCopyInvocation`]: copy the pruned project to the remote user
//!   directory with `scp -r`

mod remote_clean;
mod scp_copy;

pub use remote_clean::RemoteCleanInvocation;
pub use scp_copy::ScpCopyInvocation;

use crate::domain::ports::{AttemptRecord, ExecutionRecord};
use crate::domain::value_objects::{OsFamily, PlatformProfile};

/// Attempt history and final record shared by both invocations
#[derive(Debug, Clone, Default)]
struct RunState {
    history: Vec<AttemptRecord>,
    record: Option<ExecutionRecord>,
}

impl RunState {
    fn push(&mut self, attempt: &AttemptRecord) {
        self.history.push(*attempt);
    }
}

/// Quote one local argument for the shell `platform` hands commands to.
///
/// `sh` gets POSIX single quotes. `cmd` leaves quotes in place for the
/// program's own argument parser, so it gets double quotes with `\"`.
fn quote_arg(platform: &PlatformProfile, s: &str) -> String {
    match platform.family {
        OsFamily::Unix => quote_if_needed(s),
        OsFamily::Windows if is_plain(s) => s.to_string(),
        OsFamily::Windows => cmd_quote(s),
    }
}

/// Quote the command string run by the remote (POSIX) shell as one local
/// argument.
fn quote_remote_command(platform: &PlatformProfile, s: &str) -> String {
    match platform.family {
        OsFamily::Unix => double_quote(s),
        OsFamily::Windows => cmd_quote(s),
    }
}

fn cmd_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\\\""))
}

fn is_plain(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '_' | '-' | '/' | ':' | '+' | '=' | ',')
        })
}

/// Single-quote `s` for a POSIX shell
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Quote `s` only when it contains characters a shell would interpret
fn quote_if_needed(s: &str) -> String {
    if is_plain(s) {
        s.to_string()
    } else {
        shell_quote(s)
    }
}

/// Wrap `s` in double quotes, escaping what the local shell would expand
fn double_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_quote_simple() {
        assert_eq!(shell_quote("/source_codes/u/app"), "'/source_codes/u/app'");
    }

    #[test]
    fn shell_quote_with_single_quote() {
        assert_eq!(shell_quote("it's"), "'it'\\''s'");
    }

    #[test]
    fn quote_if_needed_leaves_plain_words() {
        assert_eq!(quote_if_needed("alice@scan01"), "alice@scan01");
        assert_eq!(quote_if_needed("/ws/services/api"), "/ws/services/api");
    }

    #[test]
    fn quote_if_needed_quotes_spaces_and_empty() {
        assert_eq!(quote_if_needed("/ws/my app"), "'/ws/my app'");
        assert_eq!(quote_if_needed(""), "''");
    }

    #[test]
    fn windows_arguments_use_double_quotes() {
        let windows = PlatformProfile::windows();
        assert_eq!(quote_arg(&windows, "alice@scan01"), "alice@scan01");
        assert_eq!(quote_arg(&windows, "C:\\ws\\my app"), "\"C:\\ws\\my app\"");
        assert_eq!(
            quote_remote_command(&windows, "rm -rf '$x'"),
            "\"rm -rf '$x'\""
        );
    }

    #[test]
    fn unix_arguments_use_posix_quoting() {
        let unix = PlatformProfile::unix();
        assert_eq!(quote_arg(&unix, "/ws/my app"), "'/ws/my app'");
        assert_eq!(quote_remote_command(&unix, "a $b"), "\"a \\$b\"");
    }

    #[test]
    fn double_quote_escapes_expansions() {
        assert_eq!(double_quote("rm -rf '$HOME'"), "\"rm -rf '\\$HOME'\"");
        assert_eq!(double_quote("a\"b"), "\"a\\\"b\"");
    }
}
