//! Domain Layer
//!
//! Pure logic of Scanprep, without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Dynamic values, path expressions, safe paths, platform profile
//! - `services/` - Resolver, mapping merger, struct binder
//! - `entities/` - Bound deployment parameters
//! - `ports/` - Command invocation and pipeline event interfaces
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Process spawning and file access live in `infrastructure`
//! 2. **Explicit tables** - Binding is driven by declared field lists, not reflection
//! 3. **Ports & Adapters** - The runner only sees the `CommandInvocation` trait

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
