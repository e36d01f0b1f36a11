use crate::GraphQLSource;
use crate::GraphQLSyntaxError;
use crate::ParseResult;
use crate::source_location::is_paragraph_or_line_separator;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use std::borrow::Cow;

/// Reads the next token of `source` at or after the byte offset `from`.
///
/// Ignored text (whitespace, commas, line terminators and `#` comments) is
/// skipped first. At or past the end of the body an `Eof` token positioned
/// at that offset is returned, so repeated calls keep yielding `Eof`.
///
/// The lexer is stateless: the parser calls this with the end offset of
/// the previous token.
pub fn read_token(source: &GraphQLSource, from: u32) -> ParseResult<GraphQLToken<'_>> {
    TokenReader {
        source,
        body: source.body(),
        pos: from as usize,
    }
    .read()
}

/// A cursor over [`read_token`] that remembers where the previous token
/// ended.
///
/// Iterating yields every token up to and including `Eof`, or up to and
/// including the first error, and then stops.
pub struct GraphQLLexer<'src> {
    source: &'src GraphQLSource,
    position: u32,
    finished: bool,
}

impl<'src> GraphQLLexer<'src> {
    pub fn new(source: &'src GraphQLSource) -> Self {
        Self {
            source,
            position: 0,
            finished: false,
        }
    }

    /// Byte offset the next token will be read from.
    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn next_token(&mut self) -> ParseResult<GraphQLToken<'src>> {
        let token = read_token(self.source, self.position)?;
        self.position = token.end;
        Ok(token)
    }

    /// Moves the cursor to `position` before reading.
    pub fn next_token_from(&mut self, position: u32) -> ParseResult<GraphQLToken<'src>> {
        self.position = position;
        self.finished = false;
        self.next_token()
    }
}

impl<'src> Iterator for GraphQLLexer<'src> {
    type Item = ParseResult<GraphQLToken<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        self.finished = match &result {
            Ok(token) => token.kind == GraphQLTokenKind::Eof,
            Err(_) => true,
        };
        Some(result)
    }
}

struct TokenReader<'src> {
    source: &'src GraphQLSource,
    body: &'src str,
    pos: usize,
}

impl<'src> TokenReader<'src> {
    fn bytes(&self) -> &'src [u8] {
        self.body.as_bytes()
    }

    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.bytes().get(pos).copied()
    }

    fn error(&self, pos: usize, description: impl Into<String>) -> GraphQLSyntaxError {
        GraphQLSyntaxError::lexer_error(self.source, pos as u32, description)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    fn read(mut self) -> ParseResult<GraphQLToken<'src>> {
        self.skip_ignored();
        let start = self.pos;

        let Some(byte) = self.byte_at(start) else {
            return Ok(self.punctuator(GraphQLTokenKind::Eof, start, start));
        };

        if let Some(kind) = GraphQLTokenKind::from_punctuator(byte) {
            return Ok(self.punctuator(kind, start, start + 1));
        }

        match byte {
            b'.' if self.bytes()[start + 1..].starts_with(b"..") => {
                Ok(self.punctuator(GraphQLTokenKind::Spread, start, start + 3))
            },
            b'_' | b'a'..=b'z' | b'A'..=b'Z' => Ok(self.read_name(start)),
            b'-' | b'0'..=b'9' => self.read_number(start),
            b'"' => self.read_string(start),
            _ => Err(self.unexpected_character(start)),
        }
    }

    fn punctuator(&self, kind: GraphQLTokenKind, start: usize, end: usize) -> GraphQLToken<'src> {
        GraphQLToken::punctuator(kind, start as u32, end as u32)
    }

    fn unexpected_character(&self, pos: usize) -> GraphQLSyntaxError {
        let ch = self
            .body
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.error(pos, format!("Unexpected character \"{}\"", describe_char(ch)))
    }

    // =========================================================================
    // Ignored text
    // =========================================================================

    fn skip_ignored(&mut self) {
        let bytes = self.bytes();
        while let Some(&byte) = bytes.get(self.pos) {
            match byte {
                b' ' | b',' | 0x09..=0x0D => self.pos += 1,
                // U+00A0
                0xC2 if bytes.get(self.pos + 1) == Some(&0xA0) => self.pos += 2,
                0xE2 if is_paragraph_or_line_separator(&bytes[self.pos..]) => self.pos += 3,
                b'#' => self.skip_comment(),
                _ => break,
            }
        }
    }

    /// Skips from `#` up to, but not including, the next line terminator.
    fn skip_comment(&mut self) {
        let bytes = self.bytes();
        let mut pos = self.pos + 1;
        while let Some(offset) = memchr::memchr3(b'\n', b'\r', 0xE2, &bytes[pos..]) {
            let idx = pos + offset;
            if bytes[idx] != 0xE2 || is_paragraph_or_line_separator(&bytes[idx..]) {
                self.pos = idx;
                return;
            }
            pos = idx + 1;
        }
        self.pos = bytes.len();
    }

    // =========================================================================
    // Names and numbers
    // =========================================================================

    /// Reads `[_A-Za-z][_0-9A-Za-z]*`; the first byte is already known to
    /// be a name start.
    fn read_name(&self, start: usize) -> GraphQLToken<'src> {
        let bytes = self.bytes();
        let mut end = start + 1;
        while bytes
            .get(end)
            .is_some_and(|byte| *byte == b'_' || byte.is_ascii_alphanumeric())
        {
            end += 1;
        }
        GraphQLToken::with_value(
            GraphQLTokenKind::Name,
            start as u32,
            end as u32,
            &self.body[start..end],
        )
    }

    /// Reads `-?(0|[1-9][0-9]*)(\.[0-9]+(e-?[0-9]+)?)?`.
    ///
    /// An exponent is only recognized after a fractional part, and only
    /// with a lower-case `e`.
    fn read_number(&self, start: usize) -> ParseResult<GraphQLToken<'src>> {
        let mut pos = start;
        let mut kind = GraphQLTokenKind::Int;

        if self.byte_at(pos) == Some(b'-') {
            pos += 1;
        }

        match self.byte_at(pos) {
            Some(b'0') => {
                pos += 1;
                if self.byte_at(pos).is_some_and(|byte| byte.is_ascii_digit()) {
                    return Err(self.error(pos, "Invalid number"));
                }
            },
            Some(b'1'..=b'9') => pos = self.skip_digits(pos),
            _ => return Err(self.error(pos, "Invalid number")),
        }

        if self.byte_at(pos) == Some(b'.') {
            kind = GraphQLTokenKind::Float;
            pos = self.read_digits(pos + 1)?;

            if self.byte_at(pos) == Some(b'e') {
                pos += 1;
                if self.byte_at(pos) == Some(b'-') {
                    pos += 1;
                }
                pos = self.read_digits(pos)?;
            }
        }

        Ok(GraphQLToken::with_value(
            kind,
            start as u32,
            pos as u32,
            &self.body[start..pos],
        ))
    }

    fn skip_digits(&self, mut pos: usize) -> usize {
        while self.byte_at(pos).is_some_and(|byte| byte.is_ascii_digit()) {
            pos += 1;
        }
        pos
    }

    /// Like `skip_digits` but requires at least one digit.
    fn read_digits(&self, pos: usize) -> ParseResult<usize> {
        if !self.byte_at(pos).is_some_and(|byte| byte.is_ascii_digit()) {
            return Err(self.error(pos, "Invalid number"));
        }
        Ok(self.skip_digits(pos))
    }

    // =========================================================================
    // Strings
    // =========================================================================

    fn read_string(&self, start: usize) -> ParseResult<GraphQLToken<'src>> {
        let bytes = self.bytes();
        let mut pos = start + 1;
        let mut chunk_start = pos;
        // Only allocated once an escape sequence is seen.
        let mut decoded: Option<String> = None;

        loop {
            let Some(&byte) = bytes.get(pos) else {
                return Err(self.error(pos, "Unterminated string"));
            };
            match byte {
                b'"' => break,
                b'\n' | b'\r' => return Err(self.error(pos, "Unterminated string")),
                0xE2 if is_paragraph_or_line_separator(&bytes[pos..]) => {
                    return Err(self.error(pos, "Unterminated string"));
                },
                b'\\' => {
                    let value = decoded.get_or_insert_with(String::new);
                    value.push_str(&self.body[chunk_start..pos]);
                    pos += 1;
                    let Some(&escape) = bytes.get(pos) else {
                        return Err(self.error(pos, "Unterminated string"));
                    };
                    let ch = match escape {
                        b'"' => '"',
                        b'/' => '/',
                        b'\\' => '\\',
                        b'b' => '\u{0008}',
                        b'f' => '\u{000C}',
                        b'n' => '\n',
                        b'r' => '\r',
                        b't' => '\t',
                        b'u' => {
                            let (ch, next) = self.read_unicode_escape(pos)?;
                            pos = next - 1;
                            ch
                        },
                        _ => return Err(self.error(pos, "Bad character escape sequence")),
                    };
                    value.push(ch);
                    pos += 1;
                    chunk_start = pos;
                },
                _ => pos += 1,
            }
        }

        let value = match decoded {
            Some(mut value) => {
                value.push_str(&self.body[chunk_start..pos]);
                Cow::Owned(value)
            },
            None => Cow::Borrowed(&self.body[chunk_start..pos]),
        };
        Ok(GraphQLToken::with_value(
            GraphQLTokenKind::String,
            start as u32,
            (pos + 1) as u32,
            value,
        ))
    }

    /// Decodes `uXXXX` at `u_pos`, returning the character and the offset
    /// just past the escape.
    ///
    /// A high surrogate immediately followed by a `\uXXXX` low surrogate is
    /// combined into one scalar value; any other surrogate is rejected.
    fn read_unicode_escape(&self, u_pos: usize) -> ParseResult<(char, usize)> {
        let bytes = self.bytes();
        let bad_escape = || self.error(u_pos, "Bad character escape sequence");

        let code = parse_hex4(bytes.get(u_pos + 1..u_pos + 5)).ok_or_else(bad_escape)?;
        if let Some(ch) = char::from_u32(code) {
            return Ok((ch, u_pos + 5));
        }

        if (0xD800..0xDC00).contains(&code)
            && bytes.get(u_pos + 5..u_pos + 7) == Some(b"\\u".as_slice())
            && let Some(low) = parse_hex4(bytes.get(u_pos + 7..u_pos + 11))
            && (0xDC00..0xE000).contains(&low)
            && let Some(ch) = char::from_u32(0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00))
        {
            return Ok((ch, u_pos + 11));
        }

        Err(bad_escape())
    }
}

fn parse_hex4(digits: Option<&[u8]>) -> Option<u32> {
    digits?
        .iter()
        .try_fold(0u32, |acc, byte| Some(acc * 16 + (*byte as char).to_digit(16)?))
}

/// Renders a character for an "Unexpected character" message. Control
/// characters are shown as `\uXXXX`.
fn describe_char(ch: char) -> String {
    if ch.is_control() {
        format!("\\u{:04X}", ch as u32)
    } else {
        ch.to_string()
    }
}
