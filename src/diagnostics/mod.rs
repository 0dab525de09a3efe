//! Error carrier, source positions and diagnostic rendering.

pub mod error;
pub mod rendering;
pub mod source_map;

pub use error::{ErrorKind, ErrorOrigin, LexError};
pub use rendering::{render_diagnostic, render_error};
pub use source_map::SourceMap;
