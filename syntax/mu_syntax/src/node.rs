//! The six kinds of syntax node.

use crate::SyntaxId;

/// A node in a Mu syntax graph.
///
/// Nodes are immutable once pushed into a [`SyntaxGraph`](crate::SyntaxGraph)
/// except for [`SyntaxGraph::resolve`](crate::SyntaxGraph::resolve), which
/// rewrites child references that point at back-references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntaxNode {
    /// Matches one token whose text equals the symbol exactly.
    Symbol(Box<str>),

    /// Consumes one token and feeds it to the named argument slot.
    Argument(Box<str>),

    /// Feeds a fixed value to the named argument slot without consuming
    /// a token.
    Preset {
        /// Label of the argument slot.
        arg: Box<str>,
        /// Value fed to the slot.
        value: Box<str>,
    },

    /// All children must match, in order.
    Sequence(Box<[SyntaxId]>),

    /// Exactly one alternative must match. Earlier alternatives take
    /// priority. `None` is the empty alternative, which matches nothing.
    Alternation(Box<[Option<SyntaxId>]>),

    /// Placeholder for the node carrying this label. Must be resolved away
    /// before matching.
    BackReference(Box<str>),
}

impl SyntaxNode {
    /// Short name of the node kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SyntaxNode::Symbol(_) => "symbol",
            SyntaxNode::Argument(_) => "argument",
            SyntaxNode::Preset { .. } => "preset",
            SyntaxNode::Sequence(_) => "sequence",
            SyntaxNode::Alternation(_) => "alternation",
            SyntaxNode::BackReference(_) => "back-reference",
        }
    }

    /// Iterate over the child IDs of this node. Empty alternatives are
    /// skipped.
    pub fn children(&self) -> impl Iterator<Item = SyntaxId> + '_ {
        let elements: &[SyntaxId] = match self {
            SyntaxNode::Sequence(elements) => elements,
            _ => &[],
        };
        let choices: &[Option<SyntaxId>] = match self {
            SyntaxNode::Alternation(choices) => choices,
            _ => &[],
        };
        elements
            .iter()
            .copied()
            .chain(choices.iter().filter_map(|choice| *choice))
    }

    /// Mutable access to every child slot, used when resolving
    /// back-references in place.
    pub(crate) fn for_each_child_mut(&mut self, mut f: impl FnMut(&mut SyntaxId)) {
        match self {
            SyntaxNode::Sequence(elements) => elements.iter_mut().for_each(f),
            SyntaxNode::Alternation(choices) => {
                for choice in choices.iter_mut().flatten() {
                    f(choice);
                }
            }
            SyntaxNode::Symbol(_)
            | SyntaxNode::Argument(_)
            | SyntaxNode::Preset { .. }
            | SyntaxNode::BackReference(_) => {}
        }
    }
}
