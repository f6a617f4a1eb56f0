//! Backtracking matcher for Mu command syntax.
//!
//! Given a [`SyntaxGraph`] describing the legal shapes of a command line,
//! the matcher decides which shape a token stream takes and binds the
//! command's arguments on the way. The same walk, given a
//! [`CompletionSink`], enumerates every valid candidate for the word being
//! typed instead.
//!
//! The search is depth-first with full backtracking:
//! - the remaining work is a persistent [`ContinuationStack`], so taking a
//!   choice point is O(1);
//! - each choice point logs the argument slots bound under it, so
//!   abandoning a branch undoes exactly its bindings;
//! - a [`StepLimit`] bounds the search, since looping or explosive grammars
//!   are not rejected up front.
//!
//! # Example
//!
//! ```
//! use mu_syntax::{ArgumentBundle, StringArgument, SyntaxGraph, TokenList};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut g = SyntaxGraph::new();
//! let echo = g.symbol("echo");
//! let msg = g.argument("msg");
//! let root = g.sequence([echo, msg]);
//!
//! let mut bundle = ArgumentBundle::new().with(StringArgument::new("msg"))?;
//! let mut source = TokenList::from_line("echo hello");
//! mu_parse::parse(&g, root, None, &mut source, &mut bundle)?;
//! assert_eq!(bundle.value("msg").as_deref(), Some("hello"));
//! # Ok(())
//! # }
//! ```

mod choice;
mod config;
mod error;
mod matcher;
mod stack;

use std::sync::Once;

pub use config::{MatchConfig, StepLimit, DEFAULT_STEP_LIMIT};
pub use error::MatchError;
pub use matcher::{MatchStats, Matcher};
pub use stack::ContinuationStack;

use mu_syntax::{ArgumentBundle, CompletionSink, SyntaxGraph, SyntaxId, TokenSource};

/// Parse with the default step limit.
///
/// See [`Matcher::parse`].
pub fn parse<S: TokenSource + ?Sized>(
    graph: &SyntaxGraph,
    root: SyntaxId,
    completion: Option<&mut dyn CompletionSink>,
    source: &mut S,
    bundle: &mut ArgumentBundle,
) -> Result<MatchStats, MatchError> {
    Matcher::new(graph).parse(root, completion, source, bundle)
}

/// Parse with an explicit step limit. Zero or negative means unbounded.
pub fn parse_with_limit<S: TokenSource + ?Sized>(
    graph: &SyntaxGraph,
    root: SyntaxId,
    completion: Option<&mut dyn CompletionSink>,
    source: &mut S,
    bundle: &mut ArgumentBundle,
    step_limit: impl Into<StepLimit>,
) -> Result<MatchStats, MatchError> {
    Matcher::new(graph)
        .with_config(MatchConfig::default().with_step_limit(step_limit))
        .parse(root, completion, source, bundle)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=mu_parse=debug` or `RUST_LOG=mu_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            // The host may already have installed its own subscriber.
            if let Err(err) = installed {
                tracing::debug!(%err, "kept existing tracing subscriber");
            }
        }
    });
}
