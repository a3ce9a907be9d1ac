mod object;
mod raw;

pub use object::Object;
pub use raw::RawJson;
