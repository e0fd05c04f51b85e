//! Typed-string coercion shared by the parser and the encoder.
//!
//! Inference order is fixed: integer, then float, then boolean, else the
//! string itself. The encoder runs the same inference to decide whether a
//! string has to be quoted to survive a round trip.

use crate::Value;

/// Infers the type of `raw` with booleans enabled.
///
/// # Examples
///
/// ```rust
/// use serde_xini::coerce::to_typed;
/// use serde_xini::Value;
///
/// assert_eq!(to_typed("23"), Value::Integer(23));
/// assert_eq!(to_typed("34.5"), Value::Float(34.5));
/// assert_eq!(to_typed("TRUE"), Value::Bool(true));
/// assert_eq!(to_typed("ab cd"), Value::from("ab cd"));
/// ```
#[must_use]
pub fn to_typed(raw: &str) -> Value {
    to_typed_with(raw, true)
}

/// Infers the type of `raw`, optionally leaving `true` / `false` as strings.
#[must_use]
pub fn to_typed_with(raw: &str, parse_bool: bool) -> Value {
    let s = raw.trim();

    if let Ok(i) = s.parse::<i64>() {
        return Value::Integer(i);
    }

    if looks_like_float(s) {
        if let Ok(f) = s.parse::<f64>() {
            return Value::Float(f);
        }
    }

    if parse_bool {
        if s.eq_ignore_ascii_case("true") {
            return Value::Bool(true);
        }
        if s.eq_ignore_ascii_case("false") {
            return Value::Bool(false);
        }
    }

    Value::String(s.to_string())
}

// `f64::from_str` also accepts "inf", "NaN" and "infinity"; those stay strings.
fn looks_like_float(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
        && s
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'))
}

/// Returns the content of `s` if it is wrapped in a matching pair of `"` or `'`.
///
/// Only the outer pair is removed; the content is returned verbatim.
///
/// # Examples
///
/// ```rust
/// use serde_xini::coerce::unquote;
///
/// assert_eq!(unquote("\"some value\""), Some("some value"));
/// assert_eq!(unquote("'a \"b\"'"), Some("a \"b\""));
/// assert_eq!(unquote("\"mismatched'"), None);
/// assert_eq!(unquote("\""), None);
/// ```
#[must_use]
pub fn unquote(s: &str) -> Option<&str> {
    if s.len() < 2 {
        return None;
    }
    let wrapped = (s.starts_with('"') && s.ends_with('"'))
        || (s.starts_with('\'') && s.ends_with('\''));
    if wrapped {
        Some(&s[1..s.len() - 1])
    } else {
        None
    }
}

/// Returns `true` for a line that opens or closes a multi-line block.
#[must_use]
pub fn is_block_sentinel(s: &str) -> bool {
    s == "'''" || s == "\"\"\""
}

/// Splits the interior of an inline list into typed items.
///
/// Items are trimmed and empty items dropped, so `""` yields an empty list.
/// Quoted items keep their content verbatim; everything else goes through
/// [`to_typed_with`].
///
/// # Examples
///
/// ```rust
/// use serde_xini::coerce::to_typed_list;
/// use serde_xini::Value;
///
/// let items = to_typed_list("ab, 23, 34.5, \"x, y\"", true);
/// assert_eq!(
///     items,
///     vec![
///         Value::from("ab"),
///         Value::Integer(23),
///         Value::Float(34.5),
///         Value::from("x, y"),
///     ]
/// );
/// ```
#[must_use]
pub fn to_typed_list(interior: &str, parse_bool: bool) -> Vec<Value> {
    split_items(interior)
        .into_iter()
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| match unquote(item) {
            Some(content) => Value::String(content.to_string()),
            None => to_typed_with(item, parse_bool),
        })
        .collect()
}

/// Splits on commas, except inside a quoted item.
///
/// A quoted item starts with `"` or `'` and ends at the first matching quote
/// that is followed only by whitespace and then a comma or the end of input.
/// An item whose quote never closes that way is split on the next comma.
fn split_items(interior: &str) -> Vec<&str> {
    let bytes = interior.as_bytes();
    let len = bytes.len();
    let mut items = Vec::new();
    let mut start = 0;

    loop {
        let mut first = start;
        while first < len && bytes[first].is_ascii_whitespace() {
            first += 1;
        }

        if first < len && matches!(bytes[first], b'"' | b'\'') {
            if let Some(end) = closing_quote(bytes, first) {
                items.push(&interior[start..end]);
                if end >= len {
                    break;
                }
                start = end + 1;
                continue;
            }
        }

        match interior[start..].find(',') {
            Some(offset) => {
                items.push(&interior[start..start + offset]);
                start += offset + 1;
            }
            None => {
                items.push(&interior[start..]);
                break;
            }
        }
    }

    items
}

/// Returns the index of the comma (or `len`) ending the quoted item opened at `open`.
fn closing_quote(bytes: &[u8], open: usize) -> Option<usize> {
    let quote = bytes[open];
    let len = bytes.len();

    for j in open + 1..len {
        if bytes[j] != quote {
            continue;
        }
        let mut k = j + 1;
        while k < len && bytes[k].is_ascii_whitespace() {
            k += 1;
        }
        if k == len || bytes[k] == b',' {
            return Some(k);
        }
    }

    None
}
