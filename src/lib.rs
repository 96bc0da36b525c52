//! # Logtree
//!
//! A hierarchical, thread-safe registry that maps dotted logger names
//! (e.g. `"a.b.c"`) to logger instances, with longest-matching-prefix
//! fallback: a name resolves to its nearest registered ancestor, down to a
//! root logger registered under the empty name.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use logtree::{LogManager, NopLogger};
//!
//! let manager = LogManager::new();
//!
//! // Register loggers anywhere in the hierarchy.
//! manager.set("", Arc::new(NopLogger));          // root fallback
//! manager.set("app.db", Arc::new(NopLogger));
//!
//! // "app.db.pool" has no exact entry; it falls back to "app.db".
//! assert!(manager.find("app.db.pool").is_some());
//! // Matching is case-insensitive, and a leading dot is ignored.
//! assert!(manager.find(".APP.DB").is_some());
//! ```
//!
//! ## Features
//!
//! - **Thread-safe**: all registry operations are safe under arbitrary
//!   concurrent invocation
//! - **Prefix fallback**: lookups walk the dotted hierarchy toward the root
//!   and return the nearest registered ancestor
//! - **Self-pruning**: removing a logger also removes the routing nodes it
//!   no longer needs
//! - **Tracing support**: optional callback system for monitoring registry
//!   operations, plus a [`TracingLogger`] adapter for the `tracing` crate
//!
//! ## Main Types
//!
//! - [`LogManager`] - the hierarchical registry (`set` / `find` / `unset`)
//! - [`Logger`] - the capability every logging backend implements
//! - [`NopLogger`], [`TextLogger`], [`LevelFilter`], [`TracingLogger`] -
//!   logger implementations
//! - [`LogRecorder`] - a recording logger for tests
//! - [`LoggerOp`] - per-level convenience shortcuts

mod error;
mod event;
mod filter;
mod finder;
mod level;
mod logger;
mod manager;
mod nop;
mod op;
mod recorder;
mod text;
mod tracing_adapter;

pub use error::LogError;
pub use event::ManagerEvent;
pub use filter::LevelFilter;
pub use finder::{LogFinder, SingleLoggerFinder};
pub use level::Level;
pub use logger::{KeyValues, Logger, Record};
pub use manager::{default_manager, LogManager, TraceCallback};
pub use nop::NopLogger;
pub use op::LoggerOp;
pub use recorder::{LogRecorder, RecordedMessage};
pub use text::TextLogger;
pub use tracing_adapter::TracingLogger;
