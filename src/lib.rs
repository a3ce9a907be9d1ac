//! Cheap classification of raw json bytes.
//!
//! [`sniff`] holds the predicates, [`value`] the undecoded buffer types that
//! expose them, and the remaining modules back the `jsniff` binary.

pub mod cli;
pub mod error;
pub mod input;
pub mod render;
pub mod sniff;
pub mod value;

pub use error::{Result, SniffError};
pub use sniff::ValueKind;
pub use value::{Object, RawJson};
