//! Input collection for template checks.
//!
//! `tmplcheck-input` acquires the two payloads of a check request, the
//! template and the data, from inline arguments, files or piped stdin, and
//! enforces the boundary rules before anything reaches the core:
//!
//! - file extensions must be on the payload's allow-list ([`limits`])
//! - payloads are capped at [`DEFAULT_MAX_SIZE`] bytes unless configured
//! - file content must be UTF-8
//!
//! # Quick Start
//!
//! ```
//! use tmplcheck_input::{ArgSource, FileSource, InputChain, MockStdin, PayloadKind, StdinSource};
//!
//! // Inline text first, then a file, then piped stdin.
//! let template = InputChain::new(PayloadKind::Template)
//!     .try_source(ArgSource::new(Some("Hello {{ name }}".into())))
//!     .try_source(FileSource::new(None, PayloadKind::Template))
//!     .try_source(StdinSource::with_reader(MockStdin::terminal()))
//!     .resolve()
//!     .unwrap();
//! assert_eq!(template.value, "Hello {{ name }}");
//! ```

mod chain;
mod collector;
pub mod env;
mod error;
pub mod flags;
pub mod limits;
pub mod sources;

pub use chain::InputChain;
pub use collector::{InputCollector, InputSourceKind, ResolvedInput};
pub use env::{MockStdin, RealStdin, StdinReader};
pub use error::InputError;
pub use flags::parse_flag;
pub use limits::{
    extension_of, DataFileKind, PayloadKind, DATA_EXTENSIONS, DEFAULT_MAX_SIZE,
    TEMPLATE_EXTENSIONS,
};
pub use sources::{read_payload_file, ArgSource, FileSource, StdinSource};
