pub mod diagnostics;
pub mod driver;
pub mod syntax;
