//! JSON syntax highlighting
//!
//! Splits rendered JSON into classified spans. Hosts decide how each kind is
//! styled; the spans always reassemble to the original text.

/// Token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Object key, quotes included
    Key,
    /// String value, quotes included
    String,
    Number,
    Boolean,
    Null,
    /// Braces, brackets, commas and colons
    Punctuation,
    Whitespace,
    /// Anything the tokenizer does not recognize
    Other,
}

/// A classified slice of the highlighted text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Tokenize JSON text into spans
pub fn highlight(text: &str) -> Vec<Span<'_>> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        let kind = match bytes[pos] {
            b' ' | b'\t' | b'\n' | b'\r' => {
                while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t' | b'\n' | b'\r') {
                    pos += 1;
                }
                TokenKind::Whitespace
            }
            b'{' | b'}' | b'[' | b']' | b',' | b':' => {
                pos += 1;
                TokenKind::Punctuation
            }
            b'"' => {
                pos = string_end(bytes, pos);
                if is_key(bytes, pos) {
                    TokenKind::Key
                } else {
                    TokenKind::String
                }
            }
            b'-' | b'0'..=b'9' => {
                while pos < bytes.len()
                    && matches!(bytes[pos], b'-' | b'+' | b'.' | b'e' | b'E' | b'0'..=b'9')
                {
                    pos += 1;
                }
                TokenKind::Number
            }
            _ => {
                let rest = &text[pos..];
                if rest.starts_with("true") {
                    pos += 4;
                    TokenKind::Boolean
                } else if rest.starts_with("false") {
                    pos += 5;
                    TokenKind::Boolean
                } else if rest.starts_with("null") {
                    pos += 4;
                    TokenKind::Null
                } else {
                    // Run of unrecognized chars, kept on UTF-8 boundaries
                    for (offset, ch) in rest.char_indices() {
                        if offset > 0 && ch.is_ascii() && starts_token(ch as u8) {
                            break;
                        }
                        pos = start + offset + ch.len_utf8();
                    }
                    TokenKind::Other
                }
            }
        };

        spans.push(Span {
            kind,
            text: &text[start..pos],
        });
    }

    spans
}

/// Position just past the closing quote of the string starting at `start`
fn string_end(bytes: &[u8], start: usize) -> usize {
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'"' => return pos + 1,
            _ => pos += 1,
        }
    }
    bytes.len()
}

/// A string is a key when the next non-whitespace byte is a colon
fn is_key(bytes: &[u8], mut pos: usize) -> bool {
    while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t' | b'\n' | b'\r') {
        pos += 1;
    }
    pos < bytes.len() && bytes[pos] == b':'
}

fn starts_token(byte: u8) -> bool {
    matches!(
        byte,
        b' ' | b'\t' | b'\n' | b'\r' | b'{' | b'}' | b'[' | b']' | b',' | b':' | b'"' | b'-'
            | b'0'..=b'9' | b't' | b'f' | b'n'
    )
}
