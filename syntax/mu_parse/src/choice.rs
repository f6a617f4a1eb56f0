//! Choice points and the ledger that backtracking unwinds.
//!
//! A choice point is taken at every alternation. It remembers where the
//! token source was, what was left to match after the alternation, which
//! alternative is being tried, and which argument slots have accepted a
//! value since that alternative started. Undoing that log restores the
//! bundle to the state it had when the alternative was entered, however deep
//! the abandoned branch went: bindings made under a nested choice point are
//! logged there, and that choice point is always unwound first.

use mu_syntax::{ArgIndex, ArgumentBundle, SyntaxId, TokenSource};
use smallvec::SmallVec;
use tracing::debug;

use crate::ContinuationStack;

struct ChoicePoint<'g> {
    source_pos: usize,
    /// Continuation after the alternation, excluding its alternatives.
    stack: ContinuationStack,
    choices: &'g [Option<SyntaxId>],
    cursor: usize,
    /// Slots that accepted a value under the current alternative, in order.
    modified: SmallVec<[ArgIndex; 4]>,
}

/// Stack of outstanding choice points, most recent last.
#[derive(Default)]
pub(crate) struct ChoiceLedger<'g> {
    points: Vec<ChoicePoint<'g>>,
}

impl<'g> ChoiceLedger<'g> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }

    /// Take a choice point positioned on the first alternative.
    pub(crate) fn push(
        &mut self,
        source_pos: usize,
        stack: ContinuationStack,
        choices: &'g [Option<SyntaxId>],
    ) {
        debug!(
            depth = self.points.len() + 1,
            source_pos,
            alternatives = choices.len(),
            "pushed choice point"
        );
        self.points.push(ChoicePoint {
            source_pos,
            stack,
            choices,
            cursor: 0,
            modified: SmallVec::new(),
        });
    }

    /// Log a successful `accept` against the most recent choice point.
    ///
    /// With no choice point outstanding there is nothing to backtrack to,
    /// so nothing is logged.
    pub(crate) fn record(&mut self, arg: ArgIndex) {
        if let Some(point) = self.points.last_mut() {
            point.modified.push(arg);
        }
    }

    /// Backtrack to the next untried alternative.
    ///
    /// Unwinds choice points from the most recent, undoing their logged
    /// bindings and discarding those with no alternatives left. On finding
    /// one with an alternative left, rewinds `source` and returns the
    /// continuation to resume with, the chosen alternative on top. Returns
    /// `None` once the ledger is exhausted.
    pub(crate) fn resume<S: TokenSource + ?Sized>(
        &mut self,
        source: &mut S,
        bundle: &mut ArgumentBundle,
    ) -> Option<ContinuationStack> {
        loop {
            let depth = self.points.len();
            let point = self.points.last_mut()?;
            for &arg in point.modified.iter().rev() {
                bundle.undo_last_value(arg);
            }
            if !point.modified.is_empty() {
                debug!(undone = point.modified.len(), "undid argument values");
                point.modified.clear();
            }

            let last = point.choices.len().saturating_sub(1);
            if point.cursor < last {
                point.cursor += 1;
                source.seek(point.source_pos);
                // Nothing will restore from the saved continuation after the
                // last alternative, so that one can have it outright.
                let mut stack = if point.cursor == last {
                    std::mem::take(&mut point.stack)
                } else {
                    point.stack.clone()
                };
                if let Some(choice) = point.choices.get(point.cursor).copied().flatten() {
                    stack.push(choice);
                }
                debug!(
                    depth,
                    alternative = point.cursor,
                    source_pos = point.source_pos,
                    "taking next alternative"
                );
                return Some(stack);
            }

            self.points.pop();
            debug!(depth = depth - 1, "popped exhausted choice point");
        }
    }
}
