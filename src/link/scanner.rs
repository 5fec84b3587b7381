use crate::token::{is_whitespace, run_len, Scan, Token};

/// Lexer for a `Link` header value.
///
/// `*` and the reserved attribute names are context sensitive: directly
/// after a `"` or `<` they are plain word material. Between `<` and `>`
/// every char but whitespace is word material, so a target keeps its
/// query string.
#[derive(Debug)]
pub(crate) struct Scanner<'a> {
    input: &'a str,
    /// Byte offset of the next unread char.
    pos: usize,
    /// The last token emitted.
    last: Option<Token>,
    /// Inside `<...>`.
    in_brackets: bool,
}

fn is_symbol(c: char) -> bool {
    matches!(c, '"' | ';' | '<' | '>' | '=')
}

fn in_literal_context(last: Option<Token>) -> bool {
    matches!(last, Some(Token::Quote) | Some(Token::LessThan))
}

fn keyword(word: &str) -> Option<Token> {
    match word {
        "rel" => Some(Token::Rel),
        "hreflang" => Some(Token::HrefLang),
        "media" => Some(Token::Media),
        "title" => Some(Token::Title),
        "type" => Some(Token::Type),
        _ => None,
    }
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            last: None,
            in_brackets: false,
        }
    }

    fn scan_word(&mut self) -> (Token, &'a str) {
        let literal = in_literal_context(self.last);
        let rest = &self.input[self.pos..];
        let len = run_len(rest, |c| {
            !(is_whitespace(c) || is_symbol(c) || (c == '*' && !literal))
        });

        let token = if literal {
            Token::Word
        } else {
            keyword(&rest[..len]).unwrap_or(Token::Word)
        };
        self.scanned(token, len)
    }

    fn scan_target(&mut self) -> (Token, &'a str) {
        let rest = &self.input[self.pos..];
        let len = run_len(rest, |c| !(is_whitespace(c) || c == '>'));
        self.scanned(Token::Word, len)
    }

    fn scanned(&mut self, token: Token, len: usize) -> (Token, &'a str) {
        let literal = &self.input[self.pos..self.pos + len];
        self.pos += len;
        self.last = Some(token);
        match token {
            Token::LessThan => self.in_brackets = true,
            Token::GreaterThan => self.in_brackets = false,
            _ => {}
        }
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

        if self.in_brackets && c != '>' {
            return self.scan_target();
        }

        if c == '*' && !in_literal_context(self.last) {
            return self.scanned(Token::Star, 1);
        }

        let symbol = match c {
            '"' => Token::Quote,
            ';' => Token::Semicolon,
            '<' => Token::LessThan,
            '>' => Token::GreaterThan,
            '=' => Token::Equals,
            _ => return self.scan_word(),
        };
        self.scanned(symbol, 1)
    }
}
