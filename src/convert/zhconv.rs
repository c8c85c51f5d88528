//! Converter backed by the `zhconv` crate.
use super::base::*;
use anyhow::Result;
use zhconv::Variant;

#[derive(Debug, Default)]
/// Converts text to Traditional Chinese as used in Taiwan.
pub struct ZhconvConverter {}

impl ZhconvConverter {
    pub fn new() -> Self {
        Self {}
    }
}

impl TextConverter for ZhconvConverter {
    fn convert(&self, text: &str) -> Result<String> {
        Ok(zhconv::zhconv(text, Variant::ZhTW))
    }

    fn name(&self) -> &'static str {
        "zhconv"
    }
}

#[test]
fn test_zhconv_convert() {
    let conv = ZhconvConverter::new();
    assert_eq!(conv.convert("测试").unwrap(), "測試");
    assert_eq!(conv.convert("").unwrap(), "");
    assert_eq!(conv.convert("key1 ABC 123").unwrap(), "key1 ABC 123");
}
