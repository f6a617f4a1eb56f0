//! Terminal matcher errors.
//!
//! Token-level mismatches and argument rejections never appear here: they
//! drive backtracking. A [`MatchError`] ends the parse call.

use mu_syntax::SyntaxId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// Every alternative failed to match the input (normal mode only).
    #[error("ran out of alternatives")]
    NoAlternatives,

    /// The step budget ran out before the parse finished.
    #[error(
        "parse exceeded the step limit ({limit}); either the command line is too large \
         or the syntax is too complex"
    )]
    StepLimitExceeded { limit: usize },

    /// A back-reference was reached that `SyntaxGraph::resolve` never
    /// replaced.
    #[error("found an unresolved back-reference to '{label}'")]
    UnresolvedBackReference { label: String },

    /// A node ID that is not in the graph.
    #[error("syntax refers to unknown node {id}")]
    UnknownNode { id: SyntaxId },

    /// An argument or preset names a slot the bundle lacks.
    #[error("syntax refers to unknown argument '{label}'")]
    UnknownArgument { label: String },
}

impl MatchError {
    /// The grammar is too complex for the input within the step budget.
    pub fn is_step_limit(&self) -> bool {
        matches!(self, MatchError::StepLimitExceeded { .. })
    }

    /// The grammar itself is broken, whatever the input.
    pub fn is_malformed_grammar(&self) -> bool {
        matches!(
            self,
            MatchError::UnresolvedBackReference { .. }
                | MatchError::UnknownNode { .. }
                | MatchError::UnknownArgument { .. }
        )
    }
}
