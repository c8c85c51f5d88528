//!Extensions for fancy_regex crate.
use anyhow::Result;
use fancy_regex::{Captures, Regex};
use std::borrow::Cow;

/// Extension trait for [fancy_regex::Regex] to provide more convenient methods.
pub trait FancyRegexExt {
    /// Replaces every non-overlapping match with the string returned by `rep`.
    /// Like [Regex::replace_all], but both matching errors and errors returned by `rep` are propagated.
    /// Text between matches is copied unchanged.
    fn try_replace_all<'t, F>(&self, input: &'t str, rep: F) -> Result<Cow<'t, str>>
    where
        F: FnMut(&Captures<'_>) -> Result<String>;
}

impl FancyRegexExt for Regex {
    fn try_replace_all<'t, F>(&self, input: &'t str, mut rep: F) -> Result<Cow<'t, str>>
    where
        F: FnMut(&Captures<'_>) -> Result<String>,
    {
        let mut result: Option<String> = None;
        let mut last = 0;
        for caps in self.captures_iter(input) {
            let caps = caps?;
            let whole = caps
                .get(0)
                .ok_or_else(|| anyhow::anyhow!("Regex match without group 0"))?;
            let replacement = rep(&caps)?;
            let out = result.get_or_insert_with(|| String::with_capacity(input.len()));
            out.push_str(&input[last..whole.start()]);
            out.push_str(&replacement);
            last = whole.end();
        }
        Ok(match result {
            Some(mut out) => {
                out.push_str(&input[last..]);
                Cow::Owned(out)
            }
            None => Cow::Borrowed(input),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_replace_all() {
        let re = Regex::new(r"(\d+)").unwrap();
        let s = re
            .try_replace_all("a1b22c", |caps| Ok(format!("<{}>", &caps[1])))
            .unwrap();
        assert_eq!(s, "a<1>b<22>c");
    }

    #[test]
    fn test_try_replace_all_no_match() {
        let re = Regex::new(r"\d+").unwrap();
        let s = re.try_replace_all("abc", |_| Ok(String::new())).unwrap();
        assert!(matches!(s, Cow::Borrowed("abc")));
    }

    #[test]
    fn test_try_replace_all_error() {
        let re = Regex::new(r"\d+").unwrap();
        let mut calls = 0;
        let err = re.try_replace_all("1 2 3", |_| {
            calls += 1;
            Err(anyhow::anyhow!("stop"))
        });
        assert!(err.is_err());
        assert_eq!(calls, 1);
    }
}
