use crate::token::{is_whitespace, run_len, Scan, Token};

/// Lexer for an `Accept` header value.
#[derive(Debug)]
pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

fn is_symbol(c: char) -> bool {
    matches!(c, '/' | ';' | '=' | ',')
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn scanned(&mut self, token: Token, len: usize) -> (Token, &'a str) {
        let literal = &self.input[self.pos..self.pos + len];
        self.pos += len;
        (token, literal)
    }
}

impl<'a> Scan<'a> for Scanner<'a> {
    fn scan(&mut self) -> (Token, &'a str) {
        let rest = &self.input[self.pos..];
        let c = match rest.chars().next() {
            Some(c) => c,
            None => return self.scanned(Token::Eof, 0),
        };

        if is_whitespace(c) {
            let len = run_len(rest, is_whitespace);
            return self.scanned(Token::Whitespace, len);
        }

        let symbol = match c {
            '/' => Token::Slash,
            ';' => Token::Semicolon,
            '=' => Token::Equals,
            ',' => Token::Comma,
            _ => {
                let len = run_len(rest, |c| !(is_whitespace(c) || is_symbol(c)));
                return self.scanned(Token::Word, len);
            }
        };
        self.scanned(symbol, 1)
    }
}
