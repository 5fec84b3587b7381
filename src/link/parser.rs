use log::trace;
use serde_json::Value;

use super::scanner::Scanner;
use super::Link;
use crate::token::{Lookahead, Token};
use crate::{Error, Result, UriRef};

/// A parsed `key[*]=value` pair.
#[derive(Debug)]
struct Attribute<'a> {
    key: Token,
    name: &'a str,
    value: &'a str,
    starred: bool,
}

/// Recursive-descent parser for `<uri> (; attribute)*`.
#[derive(Debug)]
pub(crate) struct Parser<'a> {
    stream: Lookahead<'a, Scanner<'a>>,
}

fn unexpected(expected: &str, found: (Token, &str), err: Error) -> Error {
    trace!(
        "link: expected {}, found {:?} {:?}: {}",
        expected,
        found.0,
        found.1,
        err
    );
    err
}

fn is_attribute_name(token: Token) -> bool {
    matches!(
        token,
        Token::Rel | Token::HrefLang | Token::Media | Token::Title | Token::Type | Token::Word
    )
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            stream: Lookahead::new(Scanner::new(input)),
        }
    }

    pub(crate) fn parse(mut self) -> Result<Link> {
        let mut link = Link::new(self.href()?);

        while let Some(attr) = self.attribute()? {
            let value = attr.value.to_owned();
            match attr.key {
                Token::Rel => link.rel = value,
                Token::HrefLang => link.hreflang = value,
                Token::Media => link.media = value,
                Token::Title if attr.starred => link.title_star = value,
                Token::Title => link.title = value,
                Token::Type => link.r#type = value,
                Token::Word => link.extend(attr.name, Value::String(value))?,
                _ => return Err(Error::InvalidLink),
            }
        }

        Ok(link)
    }

    fn href(&mut self) -> Result<UriRef> {
        let next = self.stream.scan_ignore_whitespace();
        if next.0 != Token::LessThan {
            return Err(unexpected("`<`", next, Error::InvalidLink));
        }

        let next = self.stream.scan_ignore_whitespace();
        if next.0 != Token::Word {
            return Err(unexpected("a uri", next, Error::InvalidLink));
        }
        let href = UriRef::parse(next.1).map_err(|err| {
            trace!("link: {:?} is not a uri: {}", next.1, err);
            Error::InvalidUri(err)
        })?;

        let next = self.stream.scan_ignore_whitespace();
        if next.0 != Token::GreaterThan {
            return Err(unexpected("`>`", next, Error::InvalidLink));
        }

        self.terminated()?;
        Ok(href)
    }

    /// Parse the next attribute, or `None` at the end of input.
    fn attribute(&mut self) -> Result<Option<Attribute<'a>>> {
        let (key, name) = match self.stream.scan_ignore_whitespace() {
            (Token::Eof, _) => return Ok(None),
            next if is_attribute_name(next.0) => next,
            next => return Err(unexpected("an attribute name", next, Error::InvalidLink)),
        };

        let mut starred = false;
        loop {
            match self.stream.scan_ignore_whitespace() {
                (Token::Star, _) => starred = true,
                (Token::Equals, _) => break,
                next => return Err(unexpected("`=`", next, Error::InvalidLink)),
            }
        }

        let value = self.attribute_value()?;
        Ok(Some(Attribute {
            key,
            name,
            value,
            starred,
        }))
    }

    /// A bare word or a quoted one. `""` is the empty value, and only the
    /// end of input may follow it.
    fn attribute_value(&mut self) -> Result<&'a str> {
        let mut quote_opened = false;
        let mut quote_closed = false;
        let mut value_read = false;

        let value = loop {
            match self.stream.scan_ignore_whitespace() {
                (Token::Quote, _) => {
                    if quote_opened {
                        quote_closed = true;
                        value_read = true;
                    }
                    quote_opened = true;
                }
                (Token::Word, literal) if !value_read => break literal,
                next @ (Token::Word, _) => {
                    return Err(unexpected("`;`", next, Error::MissingSemicolon))
                }
                next if !value_read => {
                    return Err(unexpected("a value", next, Error::MissingAttrValue))
                }
                (Token::Eof, _) => break "",
                next => return Err(unexpected("the end of input", next, Error::InvalidLink)),
            }
        };

        if quote_opened && !quote_closed {
            let next = self.stream.scan_ignore_whitespace();
            if next.0 != Token::Quote {
                return Err(unexpected("`\"`", next, Error::MissingClosingQuote));
            }
        }

        self.terminated()?;
        Ok(value)
    }

    /// Expect `;` or the end of input.
    fn terminated(&mut self) -> Result<()> {
        match self.stream.scan_ignore_whitespace() {
            (Token::Semicolon, _) | (Token::Eof, _) => Ok(()),
            next => Err(unexpected("`;`", next, Error::MissingSemicolon)),
        }
    }
}
