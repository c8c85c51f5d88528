//! A Rust library for converting Simplified Chinese language packs embedded in game client scripts
//! to Traditional Chinese (Taiwan).
pub mod convert;
pub mod ext;
pub mod pack;
pub mod types;
pub mod utils;

lazy_static::lazy_static! {
    pub static ref COUNTER: utils::counter::Counter = utils::counter::Counter::new();
}
