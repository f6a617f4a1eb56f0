//! `init_tracing` alongside a subscriber the host already installed.
//!
//! Runs as its own test binary: the global subscriber is process-wide.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use mu_syntax::{ArgumentBundle, SyntaxGraph, TokenList};
use tracing_subscriber::util::SubscriberInitExt;

#[test]
fn init_tracing_keeps_host_subscriber() {
    std::env::set_var("RUST_LOG", "mu_parse=debug");
    tracing_subscriber::registry().try_init().unwrap();

    mu_parse::init_tracing();
    mu_parse::init_tracing();

    let mut g = SyntaxGraph::new();
    let root = g.symbol("ls");
    let mut bundle = ArgumentBundle::new();
    let mut source = TokenList::from_line("ls");
    mu_parse::parse(&g, root, None, &mut source, &mut bundle).unwrap();
}
