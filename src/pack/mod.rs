//! Language pack conversion.
//!
//! A language pack is the object literal assigned to `window.i18n.languages.zh` in a
//! packed Cocos Creator `project.js`, closed by the following `cc._RF.pop()` call:
//!
//! ```text
//! window.i18n.languages.zh = { key1: "充值", key2: "激光" }, cc._RF.pop()
//! ```
//!
//! Only the quoted values of `key<N>` entries are rewritten. Everything else,
//! including the block markers and the keys, is kept byte for byte.
pub mod entry;

pub use entry::EntryTransform;

use crate::ext::fancy_regex::FancyRegexExt;
use crate::types::*;
use crate::utils::encoding::*;
use crate::utils::files::*;
use anyhow::Result;
use fancy_regex::Regex;

lazy_static::lazy_static! {
    static ref BLOCK_RE: Regex = Regex::new(
        r"(?s)(window\.i18n\.languages\.zh\s*=\s*\{)(.*?)(\}\s*,\s*cc\._RF\.pop\(\))"
    )
    .unwrap();
    static ref ENTRY_RE: Regex = Regex::new(r#"(\bkey\d+:\s*)"([^"]*)""#).unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of converting a document in memory.
pub struct PackReport {
    /// The rewritten document.
    pub content: String,
    /// Number of language blocks found.
    pub blocks: usize,
    /// Number of entry values rewritten.
    pub entries: usize,
}

impl PackReport {
    pub fn is_changed(&self) -> bool {
        self.blocks > 0
    }
}

/// Rewrites the entry values inside every language block of `content`.
///
/// Content without a language block is returned unchanged.
pub fn convert_content(content: &str, transform: &EntryTransform) -> Result<PackReport> {
    let mut blocks = 0;
    let mut entries = 0;
    let result = BLOCK_RE.try_replace_all(content, |block| {
        blocks += 1;
        let inner = ENTRY_RE.try_replace_all(&block[2], |entry| {
            entries += 1;
            let converted = transform.transform(&entry[2])?;
            Ok(format!("{}\"{}\"", &entry[1], converted))
        })?;
        Ok(format!("{}{}{}", &block[1], inner, &block[3]))
    })?;
    Ok(PackReport {
        content: result.into_owned(),
        blocks,
        entries,
    })
}

/// Converts the language pack in a file and writes the result back to the same path.
///
/// The file is read once and overwritten with a single write, in the encoding
/// it was decoded with. Files without a language block are written back
/// unchanged and reported as [ConvertResult::Ignored].
pub fn convert_file(
    filename: &str,
    encoding: Encoding,
    transform: &EntryTransform,
) -> Result<(ConvertResult, PackReport)> {
    let data = read_file(filename)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", filename, e))?;
    let (content, encoding) = decode_detect(encoding, &data)?;
    let report = convert_content(&content, transform)?;
    let out = encode_string(encoding, &report.content)?;
    write_file(filename, &out)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", filename, e))?;
    let result = if report.is_changed() {
        ConvertResult::Ok
    } else {
        ConvertResult::Ignored
    };
    Ok((result, report))
}
