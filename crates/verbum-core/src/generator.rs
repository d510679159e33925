//! The seam between study generation and a concrete model backend.

use async_trait::async_trait;

use crate::config::ApiKey;
use crate::error::GenerationError;
use crate::schema::SchemaNode;

/// One structured-output request to the generative service.
#[derive(Debug, Clone)]
pub struct GenerationCall {
    pub system_instruction: String,
    pub user_instruction: String,
    /// Contract the response must satisfy; sent as the response schema.
    pub schema: &'static SchemaNode,
    pub temperature: f32,
}

/// A backend that turns a [`GenerationCall`] into raw JSON text.
///
/// Implementations perform exactly one round-trip per call and map every
/// failure onto [`GenerationError`]. Retrying is the caller's job.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(
        &self,
        api_key: &ApiKey,
        call: &GenerationCall,
    ) -> Result<String, GenerationError>;
}
