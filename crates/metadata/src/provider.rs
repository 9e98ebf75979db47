//! Metadata provider trait definition

use async_trait::async_trait;

use crate::{Platform, ProviderError, VideoMetadata};

/// Normalizing adapter for one video platform.
///
/// Implementations take a provider-native id (as produced by
/// [`crate::classify`]) and return the canonical record, sanitizing
/// free-text fields on the way.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch and normalize metadata for a native video id.
    ///
    /// A single attempt; failures surface immediately and are never
    /// retried here.
    async fn fetch(&self, native_id: &str) -> Result<VideoMetadata, ProviderError>;

    /// Platform this adapter serves.
    fn platform(&self) -> Platform;
}
