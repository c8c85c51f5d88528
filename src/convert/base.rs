use anyhow::Result;

/// A Simplified Chinese to Traditional Chinese text converter.
///
/// Implementations must be deterministic and free of side effects.
pub trait TextConverter: std::fmt::Debug + Send + Sync {
    /// Converts the whole text.
    fn convert(&self, text: &str) -> Result<String>;

    /// Returns the backend name, printed when a run starts.
    fn name(&self) -> &'static str;
}
