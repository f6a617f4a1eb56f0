//! Stock argument kinds.

use crate::{CompletionSink, Token};

use super::{Argument, SyntaxRejection};

/// Integer ranges at most this wide complete by listing their members.
const INTEGER_COMPLETION_SPAN: i64 = 20;

/// Value stack shared by the stock kinds.
#[derive(Clone, Debug)]
struct Values<T> {
    label: Box<str>,
    multiple: bool,
    values: Vec<T>,
}

impl<T> Values<T> {
    fn new(label: &str, multiple: bool) -> Self {
        Values {
            label: label.into(),
            multiple,
            values: Vec::new(),
        }
    }

    fn push(&mut self, value: T) -> Result<(), SyntaxRejection> {
        if !self.multiple && !self.values.is_empty() {
            return Err(SyntaxRejection::AlreadySet {
                label: self.label.to_string(),
            });
        }
        self.values.push(value);
        Ok(())
    }
}

/// Accepts any token text.
#[derive(Clone, Debug)]
pub struct StringArgument {
    values: Values<String>,
}

impl StringArgument {
    /// A single-valued string slot.
    pub fn new(label: &str) -> Self {
        StringArgument {
            values: Values::new(label, false),
        }
    }

    /// A slot accepting any number of values.
    pub fn multiple(label: &str) -> Self {
        StringArgument {
            values: Values::new(label, true),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values.values
    }
}

impl Argument for StringArgument {
    fn label(&self) -> &str {
        &self.values.label
    }

    fn accept(&mut self, token: &Token) -> Result<(), SyntaxRejection> {
        self.values.push(token.text.clone())
    }

    fn undo_last_value(&mut self) {
        self.values.values.pop();
    }

    fn complete(&self, _sink: &mut dyn CompletionSink, _partial: &str) {}

    fn clear(&mut self) {
        self.values.values.clear();
    }

    fn value_count(&self) -> usize {
        self.values.values.len()
    }

    fn rendered_values(&self) -> Vec<String> {
        self.values.values.clone()
    }
}

/// Accepts one of a fixed set of words, and completes them.
#[derive(Clone, Debug)]
pub struct EnumArgument {
    choices: Vec<Box<str>>,
    values: Values<usize>,
}

impl EnumArgument {
    pub fn new<I, S>(label: &str, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        EnumArgument {
            choices: choices.into_iter().map(Into::into).collect(),
            values: Values::new(label, false),
        }
    }

    /// Allow the slot to hold more than one value.
    #[must_use]
    pub fn multiple(mut self) -> Self {
        self.values.multiple = true;
        self
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.values.iter().map(|&i| &*self.choices[i])
    }
}

impl Argument for EnumArgument {
    fn label(&self) -> &str {
        &self.values.label
    }

    fn accept(&mut self, token: &Token) -> Result<(), SyntaxRejection> {
        let Some(choice) = self.choices.iter().position(|c| **c == *token.text) else {
            return Err(SyntaxRejection::NotAChoice {
                label: self.values.label.to_string(),
                value: token.text.clone(),
            });
        };
        self.values.push(choice)
    }

    fn undo_last_value(&mut self) {
        self.values.values.pop();
    }

    fn complete(&self, sink: &mut dyn CompletionSink, partial: &str) {
        for choice in &self.choices {
            if choice.starts_with(partial) {
                sink.add_completion(choice.to_string());
            }
        }
    }

    fn clear(&mut self) {
        self.values.values.clear();
    }

    fn value_count(&self) -> usize {
        self.values.values.len()
    }

    fn rendered_values(&self) -> Vec<String> {
        self.values().map(str::to_string).collect()
    }
}

/// Accepts decimal integers within an inclusive range.
#[derive(Clone, Debug)]
pub struct IntegerArgument {
    min: i64,
    max: i64,
    values: Values<i64>,
}

impl IntegerArgument {
    pub fn new(label: &str) -> Self {
        Self::in_range(label, i64::MIN, i64::MAX)
    }

    pub fn in_range(label: &str, min: i64, max: i64) -> Self {
        IntegerArgument {
            min,
            max,
            values: Values::new(label, false),
        }
    }

    #[must_use]
    pub fn multiple(mut self) -> Self {
        self.values.multiple = true;
        self
    }

    pub fn values(&self) -> &[i64] {
        &self.values.values
    }
}

impl Argument for IntegerArgument {
    fn label(&self) -> &str {
        &self.values.label
    }

    fn accept(&mut self, token: &Token) -> Result<(), SyntaxRejection> {
        let value: i64 = token
            .text
            .parse()
            .map_err(|_| SyntaxRejection::NotANumber {
                value: token.text.clone(),
            })?;
        if value < self.min || value > self.max {
            return Err(SyntaxRejection::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }
        self.values.push(value)
    }

    fn undo_last_value(&mut self) {
        self.values.values.pop();
    }

    fn complete(&self, sink: &mut dyn CompletionSink, partial: &str) {
        let narrow = self
            .max
            .checked_sub(self.min)
            .is_some_and(|span| span < INTEGER_COMPLETION_SPAN);
        if !narrow {
            return;
        }
        for value in self.min..=self.max {
            let text = value.to_string();
            if text.starts_with(partial) {
                sink.add_completion(text);
            }
        }
    }

    fn clear(&mut self) {
        self.values.values.clear();
    }

    fn value_count(&self) -> usize {
        self.values.values.len()
    }

    fn rendered_values(&self) -> Vec<String> {
        self.values.values.iter().map(i64::to_string).collect()
    }
}
