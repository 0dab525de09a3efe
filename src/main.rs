//! `lex` - tokenize a source file and check its declaration block.
//!
//! ```bash
//! lex program.pas
//! lex -o program.out program.pas
//! ```
//!
//! Prints one `<offset> <Kind> <text>` line per token on success. On error
//! prints a located diagnostic to stderr and exits with status 1.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use paslex::driver::{self, write_tokens};

#[derive(Parser, Debug)]
#[command(name = "lex", version, about = "Tokenize a source file and check its declarations")]
struct Args {
    /// Source file to tokenize
    #[arg(value_name = "input_file")]
    input: PathBuf,

    /// Output file. Accepted, but tokens are still written to stdout
    #[arg(short = 'o', value_name = "output_file", overrides_with = "output")]
    output: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Writes clap's message for `err` and returns the exit status. Help and
/// version succeed, every usage error exits 1, and so does a failed write.
fn finish_usage<W: Write>(err: &clap::Error, out: &mut W) -> u8 {
    let code = u8::from(err.use_stderr());
    match write!(out, "{}", err.render()).and_then(|()| out.flush()) {
        Ok(()) => code,
        Err(io_err) => {
            eprintln!("Error: {io_err}");
            1
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = if err.use_stderr() {
                finish_usage(&err, &mut io::stderr().lock())
            } else {
                finish_usage(&err, &mut io::stdout().lock())
            };
            return ExitCode::from(code);
        }
    };

    init_tracing(args.verbose);

    if let Some(output) = &args.output {
        tracing::info!(output = %output.display(), "output file ignored; writing tokens to stdout");
    }

    let compilation = match driver::compile_file(&args.input) {
        Ok(compilation) => compilation,
        Err(err) => {
            eprint!("{}", err.report());
            return ExitCode::FAILURE;
        }
    };

    let mut out = BufWriter::new(io::stdout().lock());
    if let Err(err) = write_tokens(&mut out, &compilation.tokens) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
