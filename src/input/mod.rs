mod detector;
mod peek;
mod records;

pub use detector::{sniff_format, InputFormat};
pub use peek::PeekableReader;
pub use records::{read_records, Record};
