//! Quoting for keyword and qualifier values.
//!
//! Values are emitted bare unless they contain whitespace or a double quote. Quoted values use
//! conventional string-literal escaping, so `say "hi"` becomes `"say \"hi\""`.

use std::borrow::Cow;

use unicode_general_category::{GeneralCategory, get_general_category};

/// Characters that force a value to be quoted.
const QUOTE_TRIGGERS: &[char] = &[' ', '"', '\t', '\r', '\n'];

/// Returns true if `value` must be wrapped in double quotes.
pub fn needs_quoting(value: &str) -> bool {
    value.contains(QUOTE_TRIGGERS)
}

/// Quotes `value` only if it contains whitespace or a double quote.
///
/// Safe values are borrowed unchanged; colons, hyphens and backslashes on their own never
/// trigger quoting.
pub fn quote(value: &str) -> Cow<'_, str> {
    if needs_quoting(value) {
        Cow::Owned(quote_always(value))
    } else {
        Cow::Borrowed(value)
    }
}

/// Wraps `value` in double quotes, escaping its contents.
fn quote_always(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        push_escaped(&mut out, c);
    }
    out.push('"');
    out
}

/// Appends one character to a quoted literal, escaping it if needed.
fn push_escaped(out: &mut String, c: char) {
    match c {
        '"' => out.push_str("\\\""),
        '\\' => out.push_str("\\\\"),
        '\u{07}' => out.push_str("\\a"),
        '\u{08}' => out.push_str("\\b"),
        '\u{0c}' => out.push_str("\\f"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\u{0b}' => out.push_str("\\v"),
        c if is_printable(c) => out.push(c),
        c => {
            let code = u32::from(c);
            let escaped = if code < 0x80 {
                format!("\\x{code:02x}")
            } else if code < 0x1_0000 {
                format!("\\u{code:04x}")
            } else {
                format!("\\U{code:08x}")
            };
            out.push_str(&escaped);
        }
    }
}

/// Reports whether a character can appear unescaped inside a quoted literal.
///
/// Letters, marks, numbers, punctuation and symbols are printable, as is the ASCII space. Other
/// separators and every `C*` category (control, format, private use, surrogate, unassigned) are
/// escaped.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::PrivateUse
            | GeneralCategory::Surrogate
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}
