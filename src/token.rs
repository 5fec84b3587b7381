//! Tokens shared by the header scanners, and the one-token pushback stream
//! the parsers read them through.

/// A lexical class. Each scanner emits the subset its grammar needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    Eof,
    Whitespace,
    Word,
    Quote,
    Semicolon,
    LessThan,
    GreaterThan,
    Equals,
    Star,
    Slash,
    Comma,

    // reserved `Link` attribute names
    Rel,
    HrefLang,
    Media,
    Title,
    Type,
}

/// A scanner yields one `(token, literal)` pair per call, borrowing the
/// literal from the input. End of input is the `Eof` token, repeated.
pub(crate) trait Scan<'a> {
    fn scan(&mut self) -> (Token, &'a str);
}

/// Whether `c` is whitespace to be coalesced into a single token.
pub(crate) fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Byte length of the leading run of `input` matching `pred`.
pub(crate) fn run_len(input: &str, pred: impl Fn(char) -> bool) -> usize {
    input.find(|c: char| !pred(c)).unwrap_or_else(|| input.len())
}

/// Pulls tokens from a scanner, holding at most one pushed-back token.
#[derive(Debug)]
pub(crate) struct Lookahead<'a, S> {
    scanner: S,
    /// The token most recently handed out.
    last: Option<(Token, &'a str)>,
    /// The token to hand out again on the next pull.
    pending: Option<(Token, &'a str)>,
}

impl<'a, S: Scan<'a>> Lookahead<'a, S> {
    pub(crate) fn new(scanner: S) -> Self {
        Self {
            scanner,
            last: None,
            pending: None,
        }
    }

    pub(crate) fn scan(&mut self) -> (Token, &'a str) {
        let next = match self.pending.take() {
            Some(pending) => pending,
            None => self.scanner.scan(),
        };
        self.last = Some(next);
        next
    }

    /// Scan, skipping a single whitespace token. Scanners coalesce
    /// whitespace, so one extra pull is always enough.
    pub(crate) fn scan_ignore_whitespace(&mut self) -> (Token, &'a str) {
        match self.scan() {
            (Token::Whitespace, _) => self.scan(),
            next => next,
        }
    }

    /// Re-present the last scanned token on the next pull. Only one token
    /// can be pushed back; a second call before a pull is a no-op.
    pub(crate) fn unscan(&mut self) {
        if let Some(last) = self.last.take() {
            self.pending = Some(last);
        }
    }
}
