//! Token mapping port.

use async_trait::async_trait;

use crate::domain::TokenMap;
use crate::error::Result;

/// Initializes the token mapping for a chain.
///
/// The mapping URL is always passed in by the caller; implementations must
/// not read it from process-wide state.
#[async_trait]
pub trait TokenMappingSource: Send + Sync {
    /// Fetch and parse the token mapping at `url`.
    ///
    /// Failures are reported as [`crate::error::Error::TokenMapping`].
    async fn load(&self, url: &str) -> Result<TokenMap>;
}
