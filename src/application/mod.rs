//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PrepareUseCase` - Orchestrates the prepare flow (workspace, config,
//!   merge, bind, prune, remote clean, copy)

pub mod prepare;

pub use prepare::{
    PlannedCommand, PrepareFailure, PrepareOptions, PrepareReport, PrepareUseCase,
    DEFAULT_CONFIG_NAME,
};
