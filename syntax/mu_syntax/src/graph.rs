//! Flat arena holding a Mu syntax graph.
//!
//! Nodes are appended with the builder methods ([`SyntaxGraph::symbol`],
//! [`SyntaxGraph::sequence`], ...) and referenced by [`SyntaxId`]. Because a
//! node can only name children that already exist, the only way to build a
//! loop is through a [`SyntaxNode::BackReference`] to a labelled node, which
//! [`SyntaxGraph::resolve`] then rewrites into a direct reference.
//!
//! ```
//! use mu_syntax::{GrammarError, SyntaxGraph};
//!
//! # fn main() -> Result<(), GrammarError> {
//! let mut g = SyntaxGraph::new();
//! let more = g.back_reference("files");
//! let file = g.argument("file");
//! let tail = g.sequence([file, more]);
//! let files = g.optional(tail);
//! g.set_label(files, "files")?;
//! g.resolve()?;
//! assert_eq!(g.display(files).to_string(), "((<file> <<files>>) | ())");
//! # Ok(())
//! # }
//! ```

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{SyntaxId, SyntaxNode};

/// Errors raised while building or resolving a syntax graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    /// Two nodes were given the same label.
    #[error("duplicate syntax label '{label}'")]
    DuplicateLabel { label: String },

    /// A back-reference names a label no node carries.
    #[error("back-reference to unknown label '{label}'")]
    UnknownLabel { label: String },

    /// Labels are targets of back-references, so they cannot sit on a
    /// back-reference themselves.
    #[error("cannot label back-reference node {id}")]
    LabelledBackReference { id: SyntaxId },

    /// A child link still points at a back-reference: `resolve` was not
    /// run after the back-reference was added.
    #[error("node {parent} refers to unresolved back-reference '{label}'")]
    UnresolvedBackReference { parent: SyntaxId, label: String },

    /// An ID that is not in this graph.
    #[error("no syntax node {id}")]
    UnknownNode { id: SyntaxId },

    /// A node names a child that is not in this graph.
    #[error("node {parent} refers to missing node {child}")]
    DanglingReference { parent: SyntaxId, child: SyntaxId },

    /// An alternation with nothing to choose from.
    #[error("alternation {id} has no alternatives")]
    EmptyAlternation { id: SyntaxId },

    /// Two argument slots share a label.
    #[error("duplicate argument '{label}'")]
    DuplicateArgument { label: String },
}

/// Arena of syntax nodes.
#[derive(Clone, Debug, Default)]
pub struct SyntaxGraph {
    nodes: Vec<SyntaxNode>,
    /// Label per node, parallel to `nodes`.
    labels: Vec<Option<Box<str>>>,
    by_label: FxHashMap<Box<str>, SyntaxId>,
}

impl SyntaxGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node. Returns `None` for IDs from another graph.
    #[inline]
    pub fn get(&self, id: SyntaxId) -> Option<&SyntaxNode> {
        self.nodes.get(id.index())
    }

    /// The label attached to a node, if any.
    pub fn label(&self, id: SyntaxId) -> Option<&str> {
        self.labels.get(id.index())?.as_deref()
    }

    /// Find the node carrying `label`.
    pub fn find_label(&self, label: &str) -> Option<SyntaxId> {
        self.by_label.get(label).copied()
    }

    /// Append a node and return its ID.
    pub fn push(&mut self, node: SyntaxNode) -> SyntaxId {
        let index = u32::try_from(self.nodes.len()).unwrap_or(u32::MAX);
        self.nodes.push(node);
        self.labels.push(None);
        SyntaxId::new(index)
    }

    pub fn symbol(&mut self, text: impl Into<Box<str>>) -> SyntaxId {
        self.push(SyntaxNode::Symbol(text.into()))
    }

    pub fn argument(&mut self, arg: impl Into<Box<str>>) -> SyntaxId {
        self.push(SyntaxNode::Argument(arg.into()))
    }

    pub fn preset(&mut self, arg: impl Into<Box<str>>, value: impl Into<Box<str>>) -> SyntaxId {
        self.push(SyntaxNode::Preset {
            arg: arg.into(),
            value: value.into(),
        })
    }

    pub fn sequence(&mut self, elements: impl IntoIterator<Item = SyntaxId>) -> SyntaxId {
        self.push(SyntaxNode::Sequence(elements.into_iter().collect()))
    }

    /// Alternation over non-empty choices.
    pub fn alternation(&mut self, choices: impl IntoIterator<Item = SyntaxId>) -> SyntaxId {
        self.push(SyntaxNode::Alternation(
            choices.into_iter().map(Some).collect(),
        ))
    }

    /// Alternation where `None` entries stand for the empty choice.
    pub fn alternation_with_empty(
        &mut self,
        choices: impl IntoIterator<Item = Option<SyntaxId>>,
    ) -> SyntaxId {
        self.push(SyntaxNode::Alternation(choices.into_iter().collect()))
    }

    /// `child` or nothing, preferring `child`.
    pub fn optional(&mut self, child: SyntaxId) -> SyntaxId {
        self.alternation_with_empty([Some(child), None])
    }

    pub fn back_reference(&mut self, label: impl Into<Box<str>>) -> SyntaxId {
        self.push(SyntaxNode::BackReference(label.into()))
    }

    /// Attach a label so back-references can name this node.
    pub fn set_label(&mut self, id: SyntaxId, label: &str) -> Result<(), GrammarError> {
        let Some(node) = self.nodes.get(id.index()) else {
            return Err(GrammarError::UnknownNode { id });
        };
        if matches!(node, SyntaxNode::BackReference(_)) {
            return Err(GrammarError::LabelledBackReference { id });
        }
        if self.by_label.contains_key(label) {
            return Err(GrammarError::DuplicateLabel {
                label: label.to_string(),
            });
        }
        self.by_label.insert(label.into(), id);
        self.labels[id.index()] = Some(label.into());
        Ok(())
    }

    /// Rewrite every child reference to a back-reference into a reference
    /// to the labelled node, then check the graph is well formed.
    ///
    /// Back-reference nodes stay in the arena but are no longer reachable
    /// through any child link. A root that is itself a back-reference is the
    /// caller's to resolve with [`SyntaxGraph::find_label`].
    pub fn resolve(&mut self) -> Result<(), GrammarError> {
        let mut targets: Vec<Option<SyntaxId>> = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let target = match node {
                SyntaxNode::BackReference(label) => {
                    let target =
                        self.find_label(label)
                            .ok_or_else(|| GrammarError::UnknownLabel {
                                label: label.to_string(),
                            })?;
                    Some(target)
                }
                _ => None,
            };
            targets.push(target);
        }

        for node in &mut self.nodes {
            node.for_each_child_mut(|child| {
                if let Some(Some(target)) = targets.get(child.index()) {
                    *child = *target;
                }
            });
        }

        self.check()
    }

    /// Verify every child link is in range, no child link points at a
    /// back-reference, and every alternation has at least one choice.
    pub fn check(&self) -> Result<(), GrammarError> {
        for (index, node) in self.nodes.iter().enumerate() {
            let id = SyntaxId::new(u32::try_from(index).unwrap_or(u32::MAX));
            if let SyntaxNode::Alternation(choices) = node {
                if choices.is_empty() {
                    return Err(GrammarError::EmptyAlternation { id });
                }
            }
            for child in node.children() {
                match self.get(child) {
                    None => {
                        return Err(GrammarError::DanglingReference { parent: id, child });
                    }
                    Some(SyntaxNode::BackReference(label)) => {
                        return Err(GrammarError::UnresolvedBackReference {
                            parent: id,
                            label: label.to_string(),
                        });
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }

    /// Render a node in compact form for diagnostics.
    pub fn display(&self, id: SyntaxId) -> DisplaySyntax<'_> {
        DisplaySyntax { graph: self, id }
    }
}

/// [`fmt::Display`] adapter returned by [`SyntaxGraph::display`].
///
/// Labelled nodes below the top level print as `<<label>>`, which also keeps
/// rendering finite on looping graphs.
pub struct DisplaySyntax<'g> {
    graph: &'g SyntaxGraph,
    id: SyntaxId,
}

impl DisplaySyntax<'_> {
    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: SyntaxId, top: bool) -> fmt::Result {
        if !top {
            if let Some(label) = self.graph.label(id) {
                return write!(f, "<<{label}>>");
            }
        }
        let Some(node) = self.graph.get(id) else {
            return write!(f, "?{id}");
        };
        match node {
            SyntaxNode::Symbol(symbol) => f.write_str(symbol),
            SyntaxNode::Argument(arg) => write!(f, "<{arg}>"),
            SyntaxNode::Preset { arg, value } => write!(f, "<{arg}={value}>"),
            SyntaxNode::BackReference(label) => write!(f, "^{label}"),
            SyntaxNode::Sequence(elements) => {
                f.write_str("(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    self.write_node(f, *element, false)?;
                }
                f.write_str(")")
            }
            SyntaxNode::Alternation(choices) => {
                f.write_str("(")?;
                for (i, choice) in choices.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    match choice {
                        Some(choice) => self.write_node(f, *choice, false)?,
                        None => f.write_str("()")?,
                    }
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for DisplaySyntax<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.id, true)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
