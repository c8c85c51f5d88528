//! Extensions for other crates.
pub mod fancy_regex;
