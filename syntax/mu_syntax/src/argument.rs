//! Argument slots and the bundle that owns them.
//!
//! An [`Argument`] is a named slot holding a stack of accepted values. The
//! matcher pushes values with [`Argument::accept`] as it binds tokens, and
//! pops them with [`Argument::undo_last_value`] when it backtracks past the
//! binding, so a slot must be able to restore exactly the state it had before
//! each accepted value.

mod kinds;

use rustc_hash::FxHashMap;

use crate::{CompletionSink, GrammarError, Token};

pub use kinds::{EnumArgument, IntegerArgument, StringArgument};

/// An argument refused a token value.
///
/// Rejections are local: the matcher treats them as a mismatch and tries
/// another alternative.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxRejection {
    /// A single-valued argument already holds a value.
    #[error("argument '{label}' already has a value")]
    AlreadySet { label: String },

    /// The value is not one of the argument's choices.
    #[error("'{value}' is not a valid {label}")]
    NotAChoice { label: String, value: String },

    /// The value does not parse as an integer.
    #[error("'{value}' is not a number")]
    NotANumber { value: String },

    /// The integer is outside the argument's range.
    #[error("{value} is outside the range {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },

    /// The index names no slot in this bundle.
    #[error("no argument slot {index}")]
    NoSuchSlot { index: usize },
}

/// A named binding slot.
pub trait Argument {
    /// The name grammar nodes use to refer to this slot.
    fn label(&self) -> &str;

    /// Validate `token` and push its value.
    fn accept(&mut self, token: &Token) -> Result<(), SyntaxRejection>;

    /// Pop the most recently accepted value.
    ///
    /// Only called once per successful `accept` being undone.
    fn undo_last_value(&mut self);

    /// Offer candidates for a value starting with `partial`.
    fn complete(&self, sink: &mut dyn CompletionSink, partial: &str);

    /// Drop every value.
    fn clear(&mut self);

    /// Number of values currently held.
    fn value_count(&self) -> usize;

    /// Current values, oldest first, rendered as text.
    fn rendered_values(&self) -> Vec<String>;
}

/// Index of a slot within an [`ArgumentBundle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArgIndex(u32);

impl ArgIndex {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The set of argument slots a command's syntax binds into.
#[derive(Default)]
pub struct ArgumentBundle {
    slots: Vec<Box<dyn Argument>>,
    by_label: FxHashMap<Box<str>, ArgIndex>,
}

impl ArgumentBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a slot. Labels must be unique within the bundle.
    pub fn add(&mut self, argument: impl Argument + 'static) -> Result<ArgIndex, GrammarError> {
        let label = argument.label();
        if self.by_label.contains_key(label) {
            return Err(GrammarError::DuplicateArgument {
                label: label.to_string(),
            });
        }
        let index = ArgIndex(u32::try_from(self.slots.len()).unwrap_or(u32::MAX));
        self.by_label.insert(label.into(), index);
        self.slots.push(Box::new(argument));
        Ok(index)
    }

    /// Builder form of [`ArgumentBundle::add`].
    pub fn with(mut self, argument: impl Argument + 'static) -> Result<Self, GrammarError> {
        self.add(argument)?;
        Ok(self)
    }

    pub fn lookup(&self, label: &str) -> Option<ArgIndex> {
        self.by_label.get(label).copied()
    }

    pub fn get(&self, index: ArgIndex) -> Option<&dyn Argument> {
        self.slots.get(index.index()).map(|slot| &**slot)
    }

    pub fn by_label(&self, label: &str) -> Option<&dyn Argument> {
        self.get(self.lookup(label)?)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Feed a token to a slot. An index from another bundle that is out of
    /// range here is rejected.
    pub fn accept(&mut self, index: ArgIndex, token: &Token) -> Result<(), SyntaxRejection> {
        match self.slots.get_mut(index.index()) {
            Some(slot) => slot.accept(token),
            None => Err(SyntaxRejection::NoSuchSlot {
                index: index.index(),
            }),
        }
    }

    /// Undo the last value accepted by a slot.
    pub fn undo_last_value(&mut self, index: ArgIndex) {
        if let Some(slot) = self.slots.get_mut(index.index()) {
            slot.undo_last_value();
        }
    }

    /// Ask a slot for completions of `partial`.
    pub fn complete(&self, index: ArgIndex, sink: &mut dyn CompletionSink, partial: &str) {
        if let Some(slot) = self.slots.get(index.index()) {
            slot.complete(sink, partial);
        }
    }

    /// Reset every slot to empty.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }

    /// The most recent value bound to `label`.
    pub fn value(&self, label: &str) -> Option<String> {
        self.by_label(label)?.rendered_values().pop()
    }

    /// All values bound to `label`, oldest first.
    pub fn values(&self, label: &str) -> Vec<String> {
        self.by_label(label)
            .map(|slot| slot.rendered_values())
            .unwrap_or_default()
    }

    /// Labels with at least one value, with their values.
    pub fn bound(&self) -> impl Iterator<Item = (&str, Vec<String>)> {
        self.slots
            .iter()
            .filter(|slot| slot.value_count() > 0)
            .map(|slot| (slot.label(), slot.rendered_values()))
    }
}

impl std::fmt::Debug for ArgumentBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.slots.iter().map(|slot| (slot.label(), slot.rendered_values())))
            .finish()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
