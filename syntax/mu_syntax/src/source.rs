//! Tokens and the token source consumed by the matcher.

/// One lexical token of a command line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// The token text, after any unquoting done by the lexer.
    pub text: String,
    /// Byte offset of the token's first character in the original input.
    pub start: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        Token {
            text: text.into(),
            start,
        }
    }

    /// A token that did not come from input, such as a preset value.
    pub fn synthetic(text: impl Into<String>) -> Self {
        Token::new(text, 0)
    }
}

/// Sequential, seekable stream of tokens.
///
/// Positions returned by [`TokenSource::tell`] are only meaningful to the
/// same source's [`TokenSource::seek`].
pub trait TokenSource {
    /// True if [`TokenSource::next_token`] would return a token.
    fn has_next(&self) -> bool;

    /// The next token, without consuming it.
    fn peek(&self) -> Option<&Token>;

    /// Consume and return the next token.
    fn next_token(&mut self) -> Option<Token>;

    /// Current position.
    fn tell(&self) -> usize;

    /// Rewind (or advance) to a position previously returned by `tell`.
    fn seek(&mut self, pos: usize);

    /// True if whitespace follows the most recently consumed token.
    ///
    /// During completion this tells a finished word (`"cd "`) from one the
    /// user is still typing (`"cd"`).
    fn whitespace_after_last(&self) -> bool;
}

/// In-memory [`TokenSource`] over a pre-split command line.
#[derive(Clone, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
    pos: usize,
    trailing_whitespace: bool,
}

impl TokenList {
    /// Wrap already-lexed tokens. `trailing_whitespace` records whether the
    /// raw input ended with whitespace after the last token.
    pub fn new(tokens: Vec<Token>, trailing_whitespace: bool) -> Self {
        TokenList {
            tokens,
            pos: 0,
            trailing_whitespace,
        }
    }

    /// Split a line on whitespace. No quoting or escapes: this is a
    /// convenience for callers that already have simple words.
    pub fn from_line(line: &str) -> Self {
        let mut tokens = Vec::new();
        let mut word_start = None;
        for (offset, ch) in line.char_indices() {
            match (ch.is_whitespace(), word_start) {
                (true, Some(start)) => {
                    tokens.push(Token::new(&line[start..offset], start));
                    word_start = None;
                }
                (false, None) => word_start = Some(offset),
                _ => {}
            }
        }
        if let Some(start) = word_start {
            tokens.push(Token::new(&line[start..], start));
        }
        let trailing_whitespace = line.ends_with(char::is_whitespace);
        TokenList::new(tokens, trailing_whitespace)
    }

    /// Number of tokens, consumed or not.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl TokenSource for TokenList {
    #[inline]
    fn has_next(&self) -> bool {
        self.pos < self.tokens.len()
    }

    #[inline]
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos)?.clone();
        self.pos += 1;
        Some(token)
    }

    #[inline]
    fn tell(&self) -> usize {
        self.pos
    }

    fn seek(&mut self, pos: usize) {
        debug_assert!(
            pos <= self.tokens.len(),
            "token position {} out of bounds (max {})",
            pos,
            self.tokens.len()
        );
        self.pos = pos.min(self.tokens.len());
    }

    fn whitespace_after_last(&self) -> bool {
        // Tokens are whitespace separated, so only the final one can be
        // directly followed by end of input.
        self.has_next() || self.trailing_whitespace
    }
}
