//! Completion sinks.

use std::collections::BTreeSet;

/// Receives completion candidates during a completion parse.
pub trait CompletionSink {
    /// Record one candidate for the word being completed.
    fn add_completion(&mut self, candidate: String);

    /// Byte offset in the input where the completed word starts.
    fn set_completion_start(&mut self, offset: usize);
}

/// Sorted, de-duplicated set of completion candidates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Completions {
    candidates: BTreeSet<String>,
    start: Option<usize>,
}

impl Completions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates in sorted order.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(String::as_str)
    }

    /// Where the completed word starts, if any completion anchored it.
    /// `None` means the candidates follow the end of the input.
    pub fn start(&self) -> Option<usize> {
        self.start
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Text to substitute for the word being completed.
    ///
    /// A single candidate completes to itself followed by a space; several
    /// candidates complete to their longest common prefix.
    pub fn completion(&self) -> Option<String> {
        let mut iter = self.candidates.iter();
        let first = iter.next()?;
        if self.candidates.len() == 1 {
            return Some(format!("{first} "));
        }
        let mut prefix_len = first.len();
        for candidate in iter {
            prefix_len = first
                .char_indices()
                .zip(candidate.chars())
                .take_while(|((_, a), b)| a == b)
                .last()
                .map_or(0, |((i, a), _)| i + a.len_utf8())
                .min(prefix_len);
        }
        Some(first[..prefix_len].to_string())
    }
}

impl CompletionSink for Completions {
    fn add_completion(&mut self, candidate: String) {
        self.candidates.insert(candidate);
    }

    fn set_completion_start(&mut self, offset: usize) {
        self.start = Some(offset);
    }
}
