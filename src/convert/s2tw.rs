//! OpenCC `s2tw` conversion with the bundled OpenCC dictionaries.
//!
//! Text is converted with the Simplified to Traditional phrase and character
//! dictionaries, then with the Taiwan variant dictionary. Both steps use maximum
//! forward matching like OpenCC. Only characters are converted: punctuation and
//! regional vocabulary stay as they are.
use super::base::*;
use anyhow::Result;
use std::collections::HashMap;

include_flate::flate!(static ST_CHARACTERS: str from "data/opencc/STCharacters.txt" with zstd);
include_flate::flate!(static ST_PHRASES: str from "data/opencc/STPhrases.txt" with zstd);
include_flate::flate!(static TW_VARIANTS: str from "data/opencc/TWVariants.txt" with zstd);

#[derive(Debug, Default)]
/// A conversion dictionary matched by maximum forward matching.
pub struct Dict {
    map: HashMap<String, String>,
    /// Longest key, in chars.
    max_len: usize,
}

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads entries in OpenCC text format. Later entries replace earlier ones.
    pub fn load(&mut self, data: &str) -> Result<()> {
        for (index, line) in data.lines().enumerate() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, values) = line.split_once('\t').ok_or_else(|| {
                anyhow::anyhow!("Invalid dictionary line {}: {}", index + 1, line)
            })?;
            let value = values.split(' ').next().unwrap_or_default();
            if key.is_empty() || value.is_empty() {
                return Err(anyhow::anyhow!(
                    "Invalid dictionary line {}: {}",
                    index + 1,
                    line
                ));
            }
            self.insert(key, value);
        }
        Ok(())
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        self.max_len = self.max_len.max(key.chars().count());
        self.map.insert(key, value.into());
    }

    /// Replaces the longest dictionary key starting at each position.
    /// Text without a matching key is copied unchanged.
    pub fn convert(&self, text: &str) -> String {
        if self.map.is_empty() {
            return text.to_owned();
        }
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let chars = bounds.len() - 1;
        let mut out = String::with_capacity(text.len());
        let mut i = 0;
        while i < chars {
            let longest = self.max_len.min(chars - i);
            let matched = (1..=longest).rev().find_map(|len| {
                self.map
                    .get(&text[bounds[i]..bounds[i + len]])
                    .map(|value| (len, value))
            });
            match matched {
                Some((len, value)) => {
                    out.push_str(value);
                    i += len;
                }
                None => {
                    out.push_str(&text[bounds[i]..bounds[i + 1]]);
                    i += 1;
                }
            }
        }
        out
    }
}

#[derive(Debug)]
/// Converts Simplified Chinese to Traditional Chinese with Taiwan character variants.
pub struct S2twConverter {
    chain: Vec<Dict>,
}

impl S2twConverter {
    pub fn new() -> Result<Self> {
        let mut st = Dict::new();
        st.load(&ST_CHARACTERS)?;
        st.load(&ST_PHRASES)?;
        let mut tw = Dict::new();
        tw.load(&TW_VARIANTS)?;
        Ok(Self::with_chain(vec![st, tw]))
    }

    /// Creates a converter which applies the dictionaries in order.
    pub fn with_chain(chain: Vec<Dict>) -> Self {
        Self { chain }
    }
}

impl TextConverter for S2twConverter {
    fn convert(&self, text: &str) -> Result<String> {
        let mut text = text.to_owned();
        for dict in self.chain.iter() {
            text = dict.convert(&text);
        }
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "s2tw"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dict_longest_match() {
        let mut dict = Dict::new();
        dict.load("头\t頭\n发\t發 髮\n头发\t頭髮\n").unwrap();
        assert_eq!(dict.convert("头发"), "頭髮");
        assert_eq!(dict.convert("发头"), "發頭");
        assert_eq!(dict.convert("a头b"), "a頭b");
        assert_eq!(dict.convert(""), "");
    }

    #[test]
    fn test_dict_invalid_line() {
        let mut dict = Dict::new();
        assert!(dict.load("头 頭\n").is_err());
        assert!(dict.load("头\t\n").is_err());
        assert_eq!(dict.convert("头"), "头");
    }

    #[test]
    fn test_chain_order() {
        let mut first = Dict::new();
        first.insert("里", "裏");
        let mut second = Dict::new();
        second.insert("裏", "裡");
        let conv = S2twConverter::with_chain(vec![first, second]);
        assert_eq!(conv.convert("里面").unwrap(), "裡面");
    }

    #[test]
    fn test_s2tw_convert() {
        let conv = S2twConverter::new().unwrap();
        assert_eq!(conv.convert("测试").unwrap(), "測試");
        assert_eq!(conv.convert("头发").unwrap(), "頭髮");
        assert_eq!(conv.convert("里面").unwrap(), "裡面");
        assert_eq!(conv.convert("key1 ABC 123").unwrap(), "key1 ABC 123");
    }

    #[test]
    fn test_s2tw_keeps_punctuation_and_vocabulary() {
        let conv = S2twConverter::new().unwrap();
        assert_eq!(conv.convert("“你好”").unwrap(), "“你好”");
        assert_eq!(conv.convert("软件视频").unwrap(), "軟件視頻");
        assert_eq!(conv.convert("充值激光").unwrap(), "充值激光");
    }
}
