//! Grammar graph and collaborator interfaces for Mu command syntax.
//!
//! A Mu syntax is a small graph of six node kinds (symbols, argument
//! references, presets, sequences, alternations and back-references) stored
//! flat in a [`SyntaxGraph`] arena. The matcher in `mu_parse` walks that
//! graph against a [`TokenSource`], binding values into the [`Argument`]
//! slots of an [`ArgumentBundle`] and, during completion, reporting
//! candidates to a [`CompletionSink`].
//!
//! The traits here are the matcher's view of its collaborators. The crate
//! also ships small reference implementations of each one ([`TokenList`],
//! [`StringArgument`], [`EnumArgument`], [`IntegerArgument`],
//! [`Completions`]) so a grammar can be exercised without a shell around it.

mod argument;
mod completion;
mod graph;
mod node;
mod source;
mod syntax_id;

pub use argument::{
    ArgIndex, Argument, ArgumentBundle, EnumArgument, IntegerArgument, StringArgument,
    SyntaxRejection,
};
pub use completion::{CompletionSink, Completions};
pub use graph::{DisplaySyntax, GrammarError, SyntaxGraph};
pub use node::SyntaxNode;
pub use source::{Token, TokenList, TokenSource};
pub use syntax_id::SyntaxId;
