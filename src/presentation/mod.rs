//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Flags and their environment fallbacks
//! - `factory` - Creates use cases and event sinks (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use scanprep::presentation::factory;
//!
//! let use_case = factory::create_prepare_use_case();
//! let report = use_case.execute_with_events(&options, factory::create_event_sink(false, false))?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::Cli;
pub use factory::{create_event_sink, create_prepare_use_case};
