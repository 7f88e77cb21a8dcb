//! Receipt upload collaborator

use async_trait::async_trait;

use super::ServiceError;

/// Payment receipt image host.
///
/// Image compression is a pre-step owned by the implementation; this core
/// hands over the bytes it was given.
#[async_trait]
pub trait ReceiptUploader: Send + Sync {
    /// Upload an image and return its public URL
    async fn upload(&self, image: &[u8]) -> Result<String, ServiceError>;
}
