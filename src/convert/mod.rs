//! Simplified to Traditional Chinese conversion backends.
pub mod base;
#[cfg(feature = "opencc")]
pub mod opencc;
pub mod s2tw;
pub mod zhconv;

pub use base::TextConverter;

use crate::types::ConverterType;
use anyhow::Result;

/// Creates the converter for the given backend type.
pub fn build_converter(typ: ConverterType) -> Result<Box<dyn TextConverter>> {
    match typ {
        ConverterType::S2tw => Ok(Box::new(s2tw::S2twConverter::new()?)),
        ConverterType::Zhconv => Ok(Box::new(zhconv::ZhconvConverter::new())),
        #[cfg(feature = "opencc")]
        ConverterType::Opencc => Ok(Box::new(opencc::OpenccConverter::new()?)),
        #[cfg(not(feature = "opencc"))]
        ConverterType::Opencc => Err(anyhow::anyhow!(
            "Converter {} is not enabled in this build (enable the \"opencc\" feature)",
            typ.as_ref()
        )),
    }
}

#[test]
fn test_build_converter() {
    let conv = build_converter(ConverterType::S2tw).unwrap();
    assert_eq!(conv.name(), "s2tw");
    let conv = build_converter(ConverterType::Zhconv).unwrap();
    assert_eq!(conv.name(), "zhconv");
    #[cfg(not(feature = "opencc"))]
    assert!(build_converter(ConverterType::Opencc).is_err());
}
