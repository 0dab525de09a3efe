//! Pipeline glue: source text -> tokens -> pre-grammar check.
//!
//! The driver is the single place errors are caught. Callers render
//! [`DriverError::Compile`] through a [`SourceMap`].

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::diagnostics::{LexError, SourceMap, render_error};
use crate::syntax::{DeclaredSet, PreGrammar, Token, lex};

/// Result of a successful run over one source text.
#[derive(Debug)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub declared: DeclaredSet,
    /// Unmatched `begin` count. Reported, not enforced.
    pub begin_end_balance: i64,
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("could not open file {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("{file}: {error}")]
    Compile {
        file: String,
        error: LexError,
        map: SourceMap,
    },
}

impl DriverError {
    /// Text written to stderr for this error.
    pub fn report(&self) -> String {
        match self {
            DriverError::Io { .. } => format!("Error: {self}\n"),
            DriverError::Compile { file, error, map } => render_error(map, file, error),
        }
    }
}

/// Lex and check one source text, given as `&str` or raw bytes.
pub fn compile<S: AsRef<[u8]> + ?Sized>(source: &S) -> Result<Compilation, LexError> {
    let tokens = lex(source)?;
    tracing::debug!(token_count = tokens.len(), "lexed source");

    let mut pre_grammar = PreGrammar::new(&tokens);
    pre_grammar.parse_code()?;
    let begin_end_balance = pre_grammar.begin_end_balance();
    let declared = pre_grammar.into_declared();
    tracing::debug!(declared_count = declared.len(), "pre-grammar check passed");

    if begin_end_balance != 0 {
        tracing::debug!(begin_end_balance, "unbalanced begin/end accepted");
    }

    Ok(Compilation {
        tokens,
        declared,
        begin_end_balance,
    })
}

/// Raw file contents. Encoding is not checked here; a non-ASCII byte is a
/// lexical error with a location.
pub fn read_source(path: &Path) -> Result<Vec<u8>, DriverError> {
    fs::read(path).map_err(|source| DriverError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read, lex and check the file at `path`. On a compile error the returned
/// error carries the source map needed to render it.
pub fn compile_file(path: &Path) -> Result<Compilation, DriverError> {
    let source = read_source(path)?;
    compile(&source).map_err(|error| {
        tracing::debug!(origin = ?error.origin(), offset = error.offset, "compilation failed");
        DriverError::Compile {
            file: path.display().to_string(),
            error,
            map: SourceMap::from_bytes(&source),
        }
    })
}

/// One `<start> <Kind> <text>` line per token.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{token}")?;
    }
    out.flush()
}
