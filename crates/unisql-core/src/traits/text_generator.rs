use crate::errors::GenerationError;

/// Text generation service: one prompt in, one response text out.
///
/// Implementations perform exactly one synchronous round trip per call.
/// No schema is enforced on the response; callers validate it.
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` and return the raw response text.
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
