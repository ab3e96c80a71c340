//! Startup load and periodic refresh of the two config files.
//!
//! [`handler`] holds the individual load operations; [`Reloader`] sequences
//! them: one initial load, then a tick every `reload_frequency` until the
//! shutdown token is cancelled. Every failure is logged and the loop moves
//! on to the next tick.

pub mod errors;
pub mod handler;
pub mod runner;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use errors::ReloadError;
pub use runner::Reloader;
pub use types::ReloadReport;
