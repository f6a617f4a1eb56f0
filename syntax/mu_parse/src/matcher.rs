//! The backtracking matcher.
//!
//! One iterative loop serves both modes. Each step pops the most urgent node
//! off the continuation stack and either consumes a token, binds an argument,
//! expands a sequence, or takes a choice point at an alternation. Any
//! mismatch, argument rejection, or premature end of the grammar triggers a
//! backtrack through the [`ChoiceLedger`].
//!
//! In normal mode the first complete match wins and running out of choice
//! points is a failure. In completion mode (a [`CompletionSink`] is supplied)
//! the matcher never stops at a match: every alternative is explored so that
//! every candidate for the word under the cursor is reported, and running
//! out of choice points is how the parse ends.

use mu_syntax::{
    ArgIndex, ArgumentBundle, CompletionSink, SyntaxGraph, SyntaxId, SyntaxNode, Token,
    TokenSource,
};
use tracing::{debug, enabled, trace, Level};

use crate::choice::ChoiceLedger;
use crate::{ContinuationStack, MatchConfig, MatchError};

/// Search cost of a finished parse.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchStats {
    /// Nodes popped off the continuation stack.
    pub steps: usize,
    /// Times a mismatch sent the matcher back to a choice point.
    pub backtracks: usize,
    /// Choice points taken, one per alternation visited.
    pub choice_points: usize,
}

/// Matches token streams against one syntax graph.
#[derive(Clone, Copy, Debug)]
pub struct Matcher<'g> {
    graph: &'g SyntaxGraph,
    config: MatchConfig,
}

impl<'g> Matcher<'g> {
    pub fn new(graph: &'g SyntaxGraph) -> Self {
        Matcher {
            graph,
            config: MatchConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Match `source` against the syntax rooted at `root`.
    ///
    /// `bundle` is cleared first. With `completion` absent this is a normal
    /// parse: on success the bundle holds the bound values, on failure its
    /// contents are unspecified. With `completion` present, candidates for
    /// the last word are reported to the sink and running out of
    /// alternatives is a successful end.
    pub fn parse<S: TokenSource + ?Sized>(
        &self,
        root: SyntaxId,
        mut completion: Option<&mut dyn CompletionSink>,
        source: &mut S,
        bundle: &mut ArgumentBundle,
    ) -> Result<MatchStats, MatchError> {
        bundle.clear();
        let completing = completion.is_some();
        let mut stack = ContinuationStack::new();
        stack.push(root);
        let mut ledger = ChoiceLedger::new();
        let mut stats = MatchStats::default();

        debug!(root = %self.graph.display(root), completing, "parse started");

        loop {
            let Some(id) = stack.pop() else {
                // The syntax is exhausted. Success unless input is left over,
                // or a completion still has alternatives to explore.
                if source.has_next() {
                    trace!("syntax exhausted before input");
                } else if completing && !ledger.is_empty() {
                    trace!("exploring remaining alternatives for completion");
                } else {
                    break;
                }
                stats.backtracks += 1;
                match resume(&mut ledger, source, bundle, completing, stats)? {
                    Some(resumed) => stack = resumed,
                    None => return Ok(stats),
                }
                continue;
            };

            stats.steps += 1;
            if self.config.step_limit.is_exceeded(stats.steps) {
                let limit = self.config.step_limit.get().unwrap_or(usize::MAX);
                debug!(limit, "step limit exceeded");
                return Err(MatchError::StepLimitExceeded { limit });
            }

            let node = self
                .graph
                .get(id)
                .ok_or(MatchError::UnknownNode { id })?;
            if enabled!(Level::TRACE) {
                trace!(
                    step = stats.steps,
                    node = %self.graph.display(id),
                    next = ?source.peek().map(|token| token.text.as_str()),
                    choice_points = ledger.len(),
                    rest = %self.render(&stack),
                    "trying"
                );
            }

            let backtrack = match node {
                SyntaxNode::Symbol(symbol) => {
                    match_symbol(symbol, completion.as_deref_mut(), source)
                }
                SyntaxNode::Argument(label) => {
                    let arg = lookup(bundle, label)?;
                    match source.next_token() {
                        None => {
                            if let Some(sink) = completion.as_deref_mut() {
                                bundle.complete(arg, sink, "");
                            }
                            true
                        }
                        Some(token) => match completion.as_deref_mut() {
                            // The user is still typing this word: offer
                            // values instead of binding a partial one.
                            Some(sink)
                                if !source.has_next() && !source.whitespace_after_last() =>
                            {
                                bundle.complete(arg, sink, &token.text);
                                sink.set_completion_start(token.start);
                                true
                            }
                            _ => !bind(arg, &token, bundle, &mut ledger),
                        },
                    }
                }
                SyntaxNode::Preset { arg, value } => {
                    let arg = lookup(bundle, arg)?;
                    !bind(arg, &Token::synthetic(&**value), bundle, &mut ledger)
                }
                SyntaxNode::Sequence(elements) => {
                    stack.push_all(elements);
                    false
                }
                SyntaxNode::Alternation(choices) => match choices.first() {
                    Some(first) => {
                        ledger.push(source.tell(), stack.clone(), choices);
                        stats.choice_points += 1;
                        if let Some(first) = first {
                            stack.push(*first);
                        }
                        false
                    }
                    None => true,
                },
                SyntaxNode::BackReference(label) => {
                    return Err(MatchError::UnresolvedBackReference {
                        label: label.to_string(),
                    });
                }
            };

            if backtrack {
                stats.backtracks += 1;
                match resume(&mut ledger, source, bundle, completing, stats)? {
                    Some(resumed) => stack = resumed,
                    None => return Ok(stats),
                }
            }
        }

        debug!(?stats, "parse succeeded");
        Ok(stats)
    }

    /// Render the continuation, most urgent first.
    fn render(&self, stack: &ContinuationStack) -> String {
        stack
            .iter()
            .map(|id| self.graph.display(id).to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Resume at the next alternative. `None` ends a completion parse;
/// running out in normal mode is an error.
fn resume<S: TokenSource + ?Sized>(
    ledger: &mut ChoiceLedger<'_>,
    source: &mut S,
    bundle: &mut ArgumentBundle,
    completing: bool,
    stats: MatchStats,
) -> Result<Option<ContinuationStack>, MatchError> {
    match ledger.resume(source, bundle) {
        Some(resumed) => Ok(Some(resumed)),
        None if completing => {
            debug!(?stats, "completion finished");
            Ok(None)
        }
        None => {
            debug!(?stats, "ran out of alternatives");
            Err(MatchError::NoAlternatives)
        }
    }
}

/// Match one symbol. Returns true to backtrack.
fn match_symbol<S: TokenSource + ?Sized>(
    symbol: &str,
    completion: Option<&mut (dyn CompletionSink + '_)>,
    source: &mut S,
) -> bool {
    let token = source.next_token();
    let Some(sink) = completion else {
        return token.map_or(true, |token| token.text != symbol);
    };
    let Some(token) = token else {
        sink.add_completion(symbol.to_string());
        return true;
    };
    if source.whitespace_after_last() {
        return token.text != symbol;
    }
    // Last word, still being typed.
    if symbol.starts_with(token.text.as_str()) {
        sink.add_completion(symbol.to_string());
        sink.set_completion_start(token.start);
    }
    true
}

/// Feed `token` to a slot. Returns true if it was accepted.
fn bind(
    arg: ArgIndex,
    token: &Token,
    bundle: &mut ArgumentBundle,
    ledger: &mut ChoiceLedger<'_>,
) -> bool {
    match bundle.accept(arg, token) {
        Ok(()) => {
            ledger.record(arg);
            true
        }
        Err(rejection) => {
            trace!(%rejection, "argument rejected token");
            false
        }
    }
}

fn lookup(bundle: &ArgumentBundle, label: &str) -> Result<ArgIndex, MatchError> {
    bundle
        .lookup(label)
        .ok_or_else(|| MatchError::UnknownArgument {
            label: label.to_string(),
        })
}
