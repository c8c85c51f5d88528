//! Converter backed by the native OpenCC library.
use super::base::*;
use anyhow::Result;
use opencc_rust::{DefaultConfig, OpenCC};

/// Converts text with OpenCC's `s2tw` configuration.
pub struct OpenccConverter {
    convert: OpenCC,
}

impl OpenccConverter {
    pub fn new() -> Result<Self> {
        let convert = OpenCC::new(DefaultConfig::S2TW)
            .map_err(|e| anyhow::anyhow!("Failed to load OpenCC s2tw config: {}", e))?;
        Ok(Self { convert })
    }
}

impl std::fmt::Debug for OpenccConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenccConverter").finish_non_exhaustive()
    }
}

// OpenCC handles are only read after construction.
unsafe impl Send for OpenccConverter {}
unsafe impl Sync for OpenccConverter {}

impl TextConverter for OpenccConverter {
    fn convert(&self, text: &str) -> Result<String> {
        Ok(self.convert.convert(text))
    }

    fn name(&self) -> &'static str {
        "opencc"
    }
}
