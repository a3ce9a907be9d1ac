//! Predicates that classify raw json bytes without parsing them.
//!
//! Everything here takes a borrowed `&[u8]`, returns a plain answer and never
//! fails: malformed, empty or truncated input is simply `false`. Only
//! [`is_number`] checks a full grammar; the structural checks look at
//! delimiters and can be fooled by malformed json.

mod delimiter;
mod kind;
mod literal;
mod number;
mod whitespace;

pub use delimiter::{is_array, is_empty_array, is_empty_object, is_object, is_string};
pub use kind::{classify, dispatch, ValueKind};
pub use literal::{contains_escape, is_bool, is_false, is_null, is_true, unquote, FALSE, NULL, TRUE};
pub use number::{is_number, looks_like_number, looks_like_string};
pub use whitespace::trim;
