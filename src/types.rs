use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Text Encoding
pub enum Encoding {
    /// Automatically detect encoding
    Auto,
    /// UTF-8 encoding
    Utf8,
    /// GB2312 encoding
    Gb2312,
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::Utf8
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
/// Text Encoding
pub enum TextEncoding {
    /// Automatically detect encoding
    Auto,
    /// UTF-8 encoding
    Utf8,
    #[value(alias("gbk"))]
    /// GB2312 encoding
    Gb2312,
}

impl From<TextEncoding> for Encoding {
    fn from(value: TextEncoding) -> Self {
        match value {
            TextEncoding::Auto => Encoding::Auto,
            TextEncoding::Utf8 => Encoding::Utf8,
            TextEncoding::Gb2312 => Encoding::Gb2312,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
/// Simplified to Traditional Chinese converter backend
pub enum ConverterType {
    /// OpenCC s2tw conversion with the bundled OpenCC dictionaries
    S2tw,
    /// MediaWiki zh-TW conversion, also rewrites punctuation and regional vocabulary
    Zhconv,
    /// Native OpenCC library with the s2tw configuration
    Opencc,
}

impl AsRef<str> for ConverterType {
    fn as_ref(&self) -> &str {
        match self {
            ConverterType::S2tw => "s2tw",
            ConverterType::Zhconv => "zhconv",
            ConverterType::Opencc => "opencc",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Outcome of converting one file
pub enum ConvertResult {
    /// A language block was found and rewritten
    Ok,
    /// No language block was found, the content was passed through
    Ignored,
}

#[derive(Debug, Serialize, Deserialize)]
/// One row of a terminology table CSV file
pub struct TermTableCell {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Target")]
    pub target: String,
}
