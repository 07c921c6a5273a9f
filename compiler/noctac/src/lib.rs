//! Nocta toolchain driver.
//!
//! Thin glue over `nocta_lexer`: read one source unit (a whole file or
//! a single REPL line), scan it, print every token to stdout, and
//! render any diagnostics to stderr. No parser exists yet, so the
//! token listing is the program's output.
//!
//! Exit policy: file mode exits nonzero if the scan reported any error,
//! but only after the full token list has been printed. The REPL never
//! exits on a bad line: every scan result is independent, so there is
//! no error state to carry over or reset.

use std::io::{self, BufRead, Write};
use std::sync::Once;

use nocta_diagnostic::Diagnostic;
use nocta_lexer::{scan, Token};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call once at startup; safe to call again. Active only when
/// `RUST_LOG` is set, e.g. `RUST_LOG=noctac=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Render a token listing, one token per line.
pub fn render_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

/// Write diagnostics to stderr in their console form.
fn report(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{diagnostic}");
    }
}

/// Scan one source unit, print its tokens, and report its diagnostics.
///
/// Returns whether the scan produced any error, so callers can decide
/// exit status.
pub fn run_source(source: &str) -> bool {
    let result = scan(source);
    tracing::debug!(
        tokens = result.tokens.len(),
        diagnostics = result.diagnostics.len(),
        "scanned source unit"
    );

    print!("{}", render_tokens(&result.tokens));
    report(&result.diagnostics);
    result.has_errors()
}

/// Scan a whole file. Returns whether any error was reported.
pub fn run_file(path: &str) -> io::Result<bool> {
    let source = std::fs::read_to_string(path)?;
    tracing::debug!(path, bytes = source.len(), "scanning file");
    Ok(run_source(&source))
}

/// Interactive mode: scan one line of standard input at a time until
/// EOF. A malformed line is reported and the session continues.
pub fn run_prompt() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        run_source(&line?);
    }
    Ok(())
}
