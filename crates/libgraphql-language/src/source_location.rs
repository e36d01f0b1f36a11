use crate::GraphQLSource;

/// A 1-based line and column within a source body.
///
/// Lines are separated by `\r\n`, `\n`, `\r`, U+2028 and U+2029. Columns
/// count Unicode scalar values from the start of the line.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Computes the line and column of the byte `offset` in `body`.
    ///
    /// Offsets past the end of the body are clamped to its length.
    pub fn from_offset(body: &str, offset: u32) -> Self {
        let offset = (offset as usize).min(body.len());
        let mut line = 1;
        let mut line_start = 0;
        for (idx, len) in line_terminators(body) {
            if idx >= offset {
                break;
            }
            line += 1;
            line_start = idx + len;
        }

        let column = body.as_bytes()[line_start.min(offset)..offset]
            .iter()
            .filter(|byte| !is_utf8_continuation(**byte))
            .count()
            + 1;

        Self { line, column }
    }
}

/// Renders up to three numbered lines around `location` with a caret under
/// the offending column.
///
/// ```text
/// 2: {
/// 3:   field(arg: ?)
///                 ^
/// 4: }
/// ```
///
/// Line numbers are right-aligned to the width of the following line's
/// number. The previous line is omitted on line 1 and the next line is
/// omitted on the last line.
pub fn highlight_source_at_location(source: &GraphQLSource, location: SourceLocation) -> String {
    let lines = split_lines(source.body());
    let line = location.line;
    let next_line_num = (line + 1).to_string();
    let pad = next_line_num.len();

    let mut out = String::new();
    if line >= 2 {
        let text = lines.get(line - 2).copied().unwrap_or("");
        out.push_str(&format!("{:>pad$}: {text}\n", line - 1));
    }
    let text = lines.get(line - 1).copied().unwrap_or("");
    out.push_str(&format!("{line:>pad$}: {text}\n"));
    out.push_str(&" ".repeat(2 + pad + location.column.saturating_sub(1)));
    out.push_str("^\n");
    if line < lines.len() {
        out.push_str(&format!("{next_line_num:>pad$}: {}\n", lines[line]));
    }
    out
}

/// Splits `body` on line terminators. A body ending in a terminator yields
/// a trailing empty line.
pub(crate) fn split_lines(body: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut line_start = 0;
    for (idx, len) in line_terminators(body) {
        lines.push(&body[line_start..idx]);
        line_start = idx + len;
    }
    lines.push(&body[line_start..]);
    lines
}

/// Yields `(byte_offset, byte_len)` for each line terminator in `body`.
///
/// `\r\n` is a single two-byte terminator.
pub(crate) fn line_terminators(body: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    let bytes = body.as_bytes();
    let mut pos = 0;
    std::iter::from_fn(move || {
        while pos < bytes.len() {
            // 0xE2 is the lead byte of U+2028 and U+2029.
            let idx = pos + memchr::memchr3(b'\n', b'\r', 0xE2, &bytes[pos..])?;
            let len = match bytes[idx] {
                b'\r' if bytes.get(idx + 1) == Some(&b'\n') => 2,
                b'\n' | b'\r' => 1,
                _ if is_paragraph_or_line_separator(&bytes[idx..]) => 3,
                _ => {
                    pos = idx + 1;
                    continue;
                }
            };
            pos = idx + len;
            return Some((idx, len));
        }
        None
    })
}

/// Returns `true` if `bytes` starts with the UTF-8 encoding of U+2028 or
/// U+2029.
pub(crate) fn is_paragraph_or_line_separator(bytes: &[u8]) -> bool {
    matches!(bytes, [0xE2, 0x80, 0xA8 | 0xA9, ..])
}

fn is_utf8_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}
