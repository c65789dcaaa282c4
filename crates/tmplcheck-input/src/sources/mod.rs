//! Input source implementations.
//!
//! - [`ArgSource`] - Inline text given on the command line
//! - [`FileSource`] - A file checked against the payload's allow-list
//! - [`StdinSource`] - Piped stdin

mod arg;
mod file;
mod stdin;

pub use arg::ArgSource;
pub use file::{read_payload_file, FileSource};
pub use stdin::StdinSource;
