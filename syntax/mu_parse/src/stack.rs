//! Persistent continuation stack.
//!
//! The stack is a singly-linked list of immutable, reference-counted frames
//! with a private head pointer per view. Cloning a view is O(1) and shares
//! every frame; pushing allocates one new frame in front of the shared tail
//! and popping just moves the head. No frame is ever mutated after it is
//! linked, so a choice point's saved view can never see later changes to the
//! live stack.

use std::fmt;
use std::rc::Rc;

use mu_syntax::SyntaxId;

struct Frame {
    node: SyntaxId,
    next: Option<Rc<Frame>>,
}

/// Remaining match obligations, most urgent on top.
#[derive(Clone, Default)]
pub struct ContinuationStack {
    head: Option<Rc<Frame>>,
    len: usize,
}

impl ContinuationStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The node on top, if any.
    pub fn peek(&self) -> Option<SyntaxId> {
        self.head.as_ref().map(|frame| frame.node)
    }

    pub fn push(&mut self, node: SyntaxId) {
        let next = self.head.take();
        self.head = Some(Rc::new(Frame { node, next }));
        self.len += 1;
    }

    /// Push `nodes` so that `nodes[0]` ends up on top.
    pub fn push_all(&mut self, nodes: &[SyntaxId]) {
        for &node in nodes.iter().rev() {
            self.push(node);
        }
    }

    pub fn pop(&mut self) -> Option<SyntaxId> {
        let frame = self.head.take()?;
        self.head = frame.next.clone();
        self.len -= 1;
        Some(frame.node)
    }

    /// Nodes from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = SyntaxId> + '_ {
        let mut cursor = self.head.as_deref();
        std::iter::from_fn(move || {
            let frame = cursor?;
            cursor = frame.next.as_deref();
            Some(frame.node)
        })
    }
}

impl Drop for ContinuationStack {
    fn drop(&mut self) {
        // Unlink uniquely owned frames one at a time; the default recursive
        // drop would overflow the call stack on very deep continuations.
        let mut next = self.head.take();
        while let Some(frame) = next {
            match Rc::try_unwrap(frame) {
                Ok(mut frame) => next = frame.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl fmt::Debug for ContinuationStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
