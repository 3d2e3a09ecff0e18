//! Process execution
//!
//! Runs [`CommandInvocation`](crate::domain::ports::CommandInvocation)s
//! through the host shell.

mod runner;

pub use runner::ProcessRunner;
