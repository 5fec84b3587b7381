use log::trace;

use super::scanner::Scanner;
use super::{Accept, MediaRange};
use crate::token::{Lookahead, Token};
use crate::{Error, Result};

/// Parser for `media-range (, media-range)*`.
#[derive(Debug)]
pub(crate) struct Parser<'a> {
    stream: Lookahead<'a, Scanner<'a>>,
}

fn invalid(expected: &str, found: (Token, &str)) -> Error {
    trace!(
        "accept: expected {}, found {:?} {:?}",
        expected,
        found.0,
        found.1
    );
    Error::InvalidMediaRange
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            stream: Lookahead::new(Scanner::new(input)),
        }
    }

    /// Parse a whole header value. No ranges at all means `*/*`.
    pub(crate) fn parse(mut self) -> Result<Accept> {
        let mut media_ranges = vec![];
        while let Some(range) = self.media_range()? {
            media_ranges.push(range);
        }

        if media_ranges.is_empty() {
            media_ranges.push(MediaRange::any());
        }
        Ok(Accept::new(media_ranges))
    }

    /// Parse exactly one media range and nothing after it.
    pub(crate) fn single(mut self) -> Result<MediaRange> {
        let range = match self.media_range()? {
            Some(range) => range,
            None => return Err(Error::InvalidMediaRange),
        };

        match self.stream.scan_ignore_whitespace() {
            (Token::Eof, _) => Ok(range),
            next => Err(invalid("end of input", next)),
        }
    }

    /// Parse the next range, or `None` at the end of input.
    fn media_range(&mut self) -> Result<Option<MediaRange>> {
        let type_name = match self.stream.scan_ignore_whitespace() {
            (Token::Eof, _) => return Ok(None),
            (Token::Comma, _) => match self.stream.scan_ignore_whitespace() {
                (Token::Word, literal) => literal,
                next => return Err(invalid("a type", next)),
            },
            (Token::Word, literal) => literal,
            next => return Err(invalid("a type", next)),
        };

        let next = self.stream.scan_ignore_whitespace();
        if next.0 != Token::Slash {
            return Err(invalid("`/`", next));
        }

        let subtype_name = match self.stream.scan_ignore_whitespace() {
            (Token::Word, literal) => literal,
            next => return Err(invalid("a subtype", next)),
        };

        let mut range = MediaRange::new(type_name, subtype_name)?;
        self.params(&mut range)?;
        Ok(Some(range))
    }

    /// `(; name=value)*`, up to the next `,` or the end of input.
    fn params(&mut self, range: &mut MediaRange) -> Result<()> {
        loop {
            match self.stream.scan_ignore_whitespace() {
                (Token::Eof, _) => return Ok(()),
                (Token::Comma, _) => {
                    self.stream.unscan();
                    return Ok(());
                }
                (Token::Semicolon, _) => {}
                next => return Err(invalid("`;` or `,`", next)),
            }

            let name = match self.stream.scan_ignore_whitespace() {
                (Token::Word, literal) => literal,
                next => return Err(invalid("a parameter name", next)),
            };

            let next = self.stream.scan_ignore_whitespace();
            if next.0 != Token::Equals {
                return Err(invalid("`=`", next));
            }

            let value = match self.stream.scan_ignore_whitespace() {
                (Token::Word, literal) => literal,
                next => return Err(invalid("a parameter value", next)),
            };

            range.set_param(name, value)?;
        }
    }
}
