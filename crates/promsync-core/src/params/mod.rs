//! Parameter store access.
//!
//! The reloader reads two named parameters: the main Prometheus config and
//! the discovery namespace list. [`ParameterStore`] is the seam; the only
//! shipped backend is [`SsmParameterStore`].

pub mod errors;
pub mod ssm;
pub mod traits;

pub use errors::ParameterError;
pub use ssm::SsmParameterStore;
pub use traits::ParameterStore;
