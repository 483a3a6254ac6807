use std::{iter::Peekable, str::CharIndices};

use serde::{Deserialize, Serialize};

use crate::{error::Error, result::Result};

/// A tag suggestion returned by the autocomplete endpoint.
///
/// ```rust
/// use rule34::Suggestion;
///
/// let suggestion = Suggestion::new("blue_eyes (12345)", "blue_eyes");
/// assert_eq!(suggestion.count().unwrap(), 12345);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    label: String,
    value: String,
}

impl Suggestion {
    /// Creates a suggestion from its label and value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Returns the human-readable label, e.g. `blue_eyes (12345)`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the tag to search with.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the post count embedded in the label.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingCount`] if the label has no `(<digits>)` group.
    pub fn count(&self) -> Result<u64> {
        extract_count(&self.label).ok_or_else(|| Error::MissingCount(self.label.clone()))
    }
}

/// Finds the first `(` immediately followed by digits and `)` and parses the digits.
fn extract_count(label: &str) -> Option<u64> {
    label.match_indices('(').find_map(|(start, _)| {
        let rest = &label[start + 1..];
        let end = rest.find(')')?;
        let digits = &rest[..end];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    })
}

/// Parses an autocomplete body into suggestions.
///
/// The body is a list literal of flat objects with string values, in either
/// single or double quotes, e.g. `[{"label":"solo (10)","value":"solo"}]`.
/// Keys other than `label` and `value` are skipped. Anything else is rejected;
/// the body is never evaluated.
///
/// # Errors
///
/// Fails with [`Error::Autocomplete`] on any deviation from the grammar, or if an
/// object lacks `label` or `value`.
pub fn parse_suggestions(body: &str) -> Result<Vec<Suggestion>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut parser = LiteralParser::new(body);
    let suggestions = parser.list()?;
    parser.end()?;
    Ok(suggestions)
}

struct LiteralParser<'a> {
    src: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> LiteralParser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
        }
    }

    fn position(&mut self) -> usize {
        self.chars.peek().map_or(self.src.len(), |&(i, _)| i)
    }

    fn fail<T>(&mut self, reason: impl Into<String>) -> Result<T> {
        Err(Error::Autocomplete {
            position: self.position(),
            reason: reason.into(),
        })
    }

    fn skip_ws(&mut self) {
        while self.chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_ws();
        self.chars.peek().map(|&(_, c)| c)
    }

    fn expect(&mut self, want: char) -> Result<()> {
        match self.peek() {
            Some(c) if c == want => {
                self.chars.next();
                Ok(())
            }
            Some(c) => self.fail(format!("expected `{want}`, found `{c}`")),
            None => self.fail(format!("expected `{want}`, found end of input")),
        }
    }

    /// Consumes a `,` and reports whether `close` follows it (a trailing comma).
    fn separator(&mut self, close: char) -> Result<bool> {
        match self.peek() {
            Some(',') => {
                self.chars.next();
                Ok(self.peek() == Some(close))
            }
            Some(c) if c == close => Ok(true),
            Some(c) => self.fail(format!("expected `,` or `{close}`, found `{c}`")),
            None => self.fail(format!("expected `,` or `{close}`, found end of input")),
        }
    }

    fn list(&mut self) -> Result<Vec<Suggestion>> {
        self.expect('[')?;
        let mut out = Vec::new();
        if self.peek() != Some(']') {
            loop {
                out.push(self.object()?);
                if self.separator(']')? {
                    break;
                }
            }
        }
        self.expect(']')?;
        Ok(out)
    }

    fn object(&mut self) -> Result<Suggestion> {
        let start = self.position();
        self.expect('{')?;
        let (mut label, mut value) = (None, None);
        if self.peek() != Some('}') {
            loop {
                let key = self.string()?;
                self.expect(':')?;
                let val = self.string()?;
                match key.as_str() {
                    "label" => label = Some(val),
                    "value" => value = Some(val),
                    _ => {}
                }
                if self.separator('}')? {
                    break;
                }
            }
        }
        self.expect('}')?;

        match (label, value) {
            (Some(label), Some(value)) => Ok(Suggestion { label, value }),
            _ => Err(Error::Autocomplete {
                position: start,
                reason: "object is missing `label` or `value`".to_string(),
            }),
        }
    }

    fn string(&mut self) -> Result<String> {
        let quote = match self.peek() {
            Some(q @ ('"' | '\'')) => q,
            Some(c) => return self.fail(format!("expected a quoted string, found `{c}`")),
            None => return self.fail("expected a quoted string, found end of input"),
        };
        self.chars.next();

        let mut out = String::new();
        loop {
            match self.chars.next() {
                Some((_, c)) if c == quote => return Ok(out),
                Some((_, '\\')) => out.push(self.escape()?),
                Some((_, c)) if c.is_control() => {
                    return self.fail("control character inside string")
                }
                Some((_, c)) => out.push(c),
                None => return self.fail("unterminated string"),
            }
        }
    }

    fn escape(&mut self) -> Result<char> {
        match self.chars.next() {
            Some((_, c @ ('"' | '\'' | '\\' | '/'))) => Ok(c),
            Some((_, 'n')) => Ok('\n'),
            Some((_, 'r')) => Ok('\r'),
            Some((_, 't')) => Ok('\t'),
            Some((_, 'b')) => Ok('\u{8}'),
            Some((_, 'f')) => Ok('\u{c}'),
            Some((_, 'u')) => self.unicode(),
            Some((_, c)) => self.fail(format!("unknown escape `\\{c}`")),
            None => self.fail("unterminated escape"),
        }
    }

    fn unicode(&mut self) -> Result<char> {
        let high = self.hex4()?;
        if !(0xD800..0xDC00).contains(&high) {
            return char::from_u32(high).map_or_else(|| self.fail("invalid unicode escape"), Ok);
        }
        // surrogate pair
        if self.chars.next().map(|(_, c)| c) != Some('\\')
            || self.chars.next().map(|(_, c)| c) != Some('u')
        {
            return self.fail("unpaired surrogate");
        }
        let low = self.hex4()?;
        if !(0xDC00..0xE000).contains(&low) {
            return self.fail("invalid low surrogate");
        }
        let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        char::from_u32(code).map_or_else(|| self.fail("invalid unicode escape"), Ok)
    }

    fn hex4(&mut self) -> Result<u32> {
        let mut code = 0;
        for _ in 0..4 {
            match self.chars.next().and_then(|(_, c)| c.to_digit(16)) {
                Some(d) => code = code * 16 + d,
                None => return self.fail("expected four hex digits"),
            }
        }
        Ok(code)
    }

    fn end(&mut self) -> Result<()> {
        match self.peek() {
            None => Ok(()),
            Some(c) => self.fail(format!("unexpected `{c}` after list")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_from_label() {
        assert_eq!(Suggestion::new("blue_eyes (12345)", "blue_eyes").count().unwrap(), 12345);
        assert_eq!(Suggestion::new("fate_(series) (77)", "fate_(series)").count().unwrap(), 77);
        assert!(matches!(
            Suggestion::new("blue_eyes", "blue_eyes").count(),
            Err(Error::MissingCount(_))
        ));
        assert!(Suggestion::new("blue_eyes ()", "blue_eyes").count().is_err());
    }

    #[test]
    fn parses_double_quoted_list() {
        let body = r#"[{"label":"blue_eyes (12345)","value":"blue_eyes","type":"general"},{"label":"blue_hair (999)","value":"blue_hair"}]"#;
        let got = parse_suggestions(body).unwrap();

        assert_eq!(
            got,
            [
                Suggestion::new("blue_eyes (12345)", "blue_eyes"),
                Suggestion::new("blue_hair (999)", "blue_hair"),
            ]
        );
    }

    #[test]
    fn parses_single_quotes_escapes_and_trailing_commas() {
        let body = " [ {'label': 'it\\'s \\u00e9 (1)', 'value': 'it\\'s',}, ]\n";
        let got = parse_suggestions(body).unwrap();
        assert_eq!(got, [Suggestion::new("it's é (1)", "it's")]);
    }

    #[test]
    fn empty_bodies() {
        assert!(parse_suggestions("").unwrap().is_empty());
        assert!(parse_suggestions("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_anything_that_is_not_the_literal() {
        let bad = [
            "__import__('os').system('true')",
            "[{'label': 'a (1)', 'value': 'a'}] + []",
            "[{'label': 'a (1)', 'value': 1}]",
            "[{'label': 'a (1)'}]",
            "[{'label': 'a (1)', 'value': 'a'}",
            "[{'label': 'a (1)' 'value': 'a'}]",
            "[{'label': 'a (1), 'value': 'a'}]",
            "[,]",
        ];
        for body in bad {
            assert!(
                matches!(parse_suggestions(body), Err(Error::Autocomplete { .. })),
                "{body}"
            );
        }
    }
}
