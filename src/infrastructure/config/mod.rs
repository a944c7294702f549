//! Infrastructure configuration modules.

pub mod logging;
pub mod paths;
pub mod precedence;
pub mod store;

pub use logging::LoggingConfig;
pub use precedence::{Layered, ResolvedSettings, Source};
pub use store::{ConfigStore, PersistedConfig};
