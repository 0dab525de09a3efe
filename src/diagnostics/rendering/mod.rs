pub mod source;

pub use source::{render_diagnostic, render_error};
