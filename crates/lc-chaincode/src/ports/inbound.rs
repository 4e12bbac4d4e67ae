//! # Driving Ports (API - Inbound)
//!
//! The three entry points the host runtime drives. Each receives the
//! requested function name and its ordered string arguments, and returns
//! the result bytes the runtime hands back to the client.
//!
//! - `init` and `invoke` are mutating: their writes commit on `Ok`
//! - `query` is read-only

use crate::errors::ChaincodeError;
use async_trait::async_trait;

/// Primary chaincode API.
///
/// ## Usage
///
/// ```ignore
/// api.init("init", &["[]".to_string()]).await?;
/// api.invoke("create", &[payload]).await?;
/// let bytes = api.query("read", &["LC1".to_string()]).await?;
/// ```
#[async_trait]
pub trait ChaincodeApi: Send + Sync {
    /// Deployment-time initialization.
    ///
    /// The function name is ignored; exactly one argument (the index seed)
    /// is required.
    async fn init(&self, function: &str, args: &[String]) -> Result<Vec<u8>, ChaincodeError>;

    /// State-changing invocation: `init`, `write` or `create`.
    ///
    /// # Returns
    ///
    /// * Empty bytes on success
    async fn invoke(&self, function: &str, args: &[String]) -> Result<Vec<u8>, ChaincodeError>;

    /// Read-only query: `read`.
    ///
    /// # Returns
    ///
    /// * Raw stored bytes for the requested key
    async fn query(&self, function: &str, args: &[String]) -> Result<Vec<u8>, ChaincodeError>;
}
