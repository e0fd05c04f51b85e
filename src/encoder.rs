//! INI encoding.
//!
//! The [`Encoder`] writes a [`Document`] back out as text. Output is meant to
//! parse back into the same values, not to reproduce the original layout.
//!
//! ## Layout
//!
//! - Default-section entries first, without a header
//! - Then one `[name]` block per named section, blocks separated by a blank line
//! - Lists as inline lists: `tags = [ab, 23, 34.5]`
//! - Maps as one `key[sub] = value` line per entry
//! - Multi-line strings as `'''` blocks
//!
//! ```rust
//! use serde_xini::{decode, encode};
//!
//! let doc = decode("[simpleMap]\nval_one = 567\nval_two = 'some value'").unwrap();
//! assert_eq!(
//!     encode(&doc).unwrap(),
//!     "[simpleMap]\nval_one = 567\nval_two = some value\n"
//! );
//! ```

use crate::document::is_section;
use crate::map::parse_index;
use crate::{coerce, Document, EncodeOptions, Error, IniMap, Result, Value};
use tracing::debug;

/// The INI encoder.
///
/// Stateless apart from its options; one encoder can encode any number of documents.
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    pub fn new(options: EncodeOptions) -> Self {
        Encoder { options }
    }

    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Replaces the reserved flags word of this encoder's options.
    pub fn set_flags(&mut self, flags: u32) {
        self.options.flags = flags;
    }

    /// Encodes a whole document.
    ///
    /// # Errors
    ///
    /// Only in strict mode: [`Error::UnsupportedValue`] for values the format
    /// cannot express, such as a map nested inside a map entry, a non-finite
    /// float, or a section name too short to be read back as a header.
    pub fn encode(&self, document: &Document) -> Result<String> {
        self.encode_map(document.as_map())
    }

    /// Encodes a [`Value::Map`] as a document.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedType`] if `value` is not a map, plus the strict-mode
    /// errors of [`encode`](Self::encode).
    pub fn encode_value(&self, value: &Value) -> Result<String> {
        match value {
            Value::Map(map) => self.encode_map(map),
            other => Err(Error::unsupported_type(&format!(
                "a document must be a map, found {}",
                other.kind()
            ))),
        }
    }

    fn encode_map(&self, data: &IniMap) -> Result<String> {
        let mut defaults = Vec::new();
        let mut sections = Vec::new();

        for (key, value) in data {
            if is_section(value) {
                sections.push(self.encode_section(key, value)?);
            } else {
                defaults.push((key, value));
            }
        }

        let mut output = String::with_capacity(256);
        if !defaults.is_empty() {
            output.push_str(&self.encode_entries(defaults, false)?.join("\n"));
            output.push('\n');
        }

        if sections.is_empty() {
            return Ok(output);
        }

        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&sections.join("\n\n"));
        output.push('\n');
        Ok(output)
    }

    fn encode_section(&self, name: &str, value: &Value) -> Result<String> {
        // `[X]` does not parse as a header.
        if name.len() < 2 {
            self.lossy(&format!("section name '{}' is too short to be read back", name))?;
        }

        let mut lines = vec![format!("[{}]", name)];
        match value {
            Value::Map(map) => lines.extend(self.encode_entries(map.iter(), true)?),
            Value::List(items) => {
                for item in items {
                    let Value::Map(element) = item else {
                        continue;
                    };
                    if element.len() != 1 {
                        self.lossy(&format!(
                            "list element with {} keys in section '{}' is split into one element per key",
                            element.len(),
                            name
                        ))?;
                    }
                    for (sub_key, sub_value) in element {
                        lines.push(format!("[{}] = {}", sub_key, self.render_value(sub_value)?));
                    }
                }
            }
            _ => {}
        }

        Ok(lines.join("\n"))
    }

    /// Writes `key = value` lines. `[] = value` appends only inside a section,
    /// so the default section keeps integer keys as written.
    fn encode_entries<'a, I>(&self, entries: I, in_section: bool) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = (&'a String, &'a Value)>,
    {
        let mut lines = Vec::new();

        for (position, (key, value)) in entries.into_iter().enumerate() {
            if let Some(index) = parse_index(key) {
                let text = self.render_value(value)?;
                if in_section && index == position as i64 {
                    lines.push(format!("[] = {}", text));
                } else {
                    lines.push(format!("{} = {}", key, text));
                }
                continue;
            }

            match value {
                Value::Map(map) if !map.is_list_shaped() => {
                    for (sub_key, sub_value) in map {
                        lines.push(format!(
                            "{}[{}] = {}",
                            key,
                            sub_key,
                            self.render_value(sub_value)?
                        ));
                    }
                }
                _ => lines.push(format!("{} = {}", key, self.render_value(value)?)),
            }
        }

        Ok(lines)
    }

    /// Renders a value in `key = <here>` position.
    fn render_value(&self, value: &Value) -> Result<String> {
        match value {
            Value::List(items) => self.render_list(items.iter()),
            Value::Map(map) if map.is_list_shaped() => self.render_list(map.values()),
            Value::Map(_) => {
                self.lossy("a map cannot be nested inside another map or list")?;
                self.render_value(&Value::String(value.to_string()))
            }
            Value::String(s) if s.contains('\n') => self.render_block(s),
            Value::String(s) => Ok(quote_scalar(s)),
            scalar => self.render_bare(scalar),
        }
    }

    /// Writes a `'''` block. Content lines that would read as a closing
    /// sentinel are dropped.
    fn render_block(&self, s: &str) -> Result<String> {
        if s.contains("\r\n") || s.ends_with('\r') {
            self.lossy("a carriage return before a line break is normalized away on read")?;
        }

        let mut lines = Vec::new();
        for line in s.split('\n') {
            if coerce::is_block_sentinel(line.trim()) {
                self.lossy("a line holding only ''' or \"\"\" would close the multi-line block")?;
                continue;
            }
            lines.push(line);
        }
        Ok(format!("'''\n{}\n'''", lines.join("\n")))
    }

    fn render_list<'a, I>(&self, items: I) -> Result<String>
    where
        I: Iterator<Item = &'a Value>,
    {
        let rendered = items
            .map(|item| self.render_item(item))
            .collect::<Result<Vec<_>>>()?;
        Ok(format!(
            "[{}]",
            rendered.join(self.options.list_separator.as_str())
        ))
    }

    /// Renders a value inside an inline list.
    fn render_item(&self, value: &Value) -> Result<String> {
        match value {
            Value::String(s) if s.contains('\n') => {
                self.lossy("an inline list item cannot span lines")?;
                self.quote_item_or_lossy(&s.replace('\n', " "))
            }
            Value::String(s) => self.quote_item_or_lossy(s),
            Value::List(_) | Value::Map(_) => {
                self.lossy("an inline list cannot contain a list or map")?;
                self.quote_item_or_lossy(&value.to_string())
            }
            scalar => self.render_bare(scalar),
        }
    }

    fn quote_item_or_lossy(&self, s: &str) -> Result<String> {
        match quote_item(s) {
            Some(text) => Ok(text),
            None => {
                self.lossy("an inline list item holds both quote kinds before a comma")?;
                Ok(format!("\"{}\"", s))
            }
        }
    }

    /// Integers, floats and booleans, which are never quoted.
    fn render_bare(&self, value: &Value) -> Result<String> {
        match value {
            Value::Float(f) if !f.is_finite() => {
                self.lossy(&format!("non-finite float {}", f))?;
                Ok(f.to_string())
            }
            // Debug formatting keeps a fraction or exponent, so `3.0` stays a float.
            Value::Float(f) => Ok(format!("{:?}", f)),
            other => Ok(other.to_string()),
        }
    }

    /// Fails in strict mode; otherwise notes the lossy write and lets it through.
    fn lossy(&self, what: &str) -> Result<()> {
        if self.options.strict {
            return Err(Error::unsupported_value(what));
        }
        debug!(reason = what, "writing value that will not read back unchanged");
        Ok(())
    }
}

/// Quotes a single-line string in `key = <here>` position.
///
/// The parser strips exactly one outer pair of quotes, so the content never
/// needs escaping.
fn quote_scalar(s: &str) -> String {
    if !needs_quotes(s) {
        return s.to_string();
    }
    if s.contains('"') && !s.contains('\'') {
        format!("'{}'", s)
    } else {
        format!("\"{}\"", s)
    }
}

/// Quotes a string inside an inline list.
///
/// Returns `None` when neither quote character can wrap `s` without the list
/// reader ending the item early.
fn quote_item(s: &str) -> Option<String> {
    let needs = needs_quotes(s)
        || s.contains(',')
        || s.starts_with('"')
        || s.starts_with('\'');
    if !needs {
        return Some(s.to_string());
    }
    let order = if s.contains('"') && !s.contains('\'') {
        ['\'', '"']
    } else {
        ['"', '\'']
    };
    order
        .into_iter()
        .find(|&quote| !closes_early(s, quote))
        .map(|quote| format!("{0}{1}{0}", quote, s))
}

/// Returns `true` if `quote` occurs in `s` followed by optional whitespace
/// and a comma, which the list reader takes as the end of a quoted item.
fn closes_early(s: &str, quote: char) -> bool {
    s.match_indices(quote).any(|(i, _)| {
        s[i + 1..]
            .trim_start_matches(|c: char| c.is_ascii_whitespace())
            .starts_with(',')
    })
}

/// Returns `true` if `s` written bare would read back as something else.
///
/// Inner spaces are fine; the parser trims only the ends.
fn needs_quotes(s: &str) -> bool {
    s.is_empty()
        || s.trim() != s
        || !coerce::to_typed(s).is_string()
        || (s.starts_with('[') && s.ends_with(']'))
        || coerce::unquote(s).is_some()
        || coerce::is_block_sentinel(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_scalar() {
        assert_eq!(quote_scalar("ab cd"), "ab cd");
        assert_eq!(quote_scalar(""), "\"\"");
        assert_eq!(quote_scalar("23"), "\"23\"");
        assert_eq!(quote_scalar("True"), "\"True\"");
        assert_eq!(quote_scalar(" padded"), "\" padded\"");
        assert_eq!(quote_scalar("[a, b]"), "\"[a, b]\"");
        assert_eq!(quote_scalar("'quoted'"), "\"'quoted'\"");
        assert_eq!(quote_scalar("\"both\" 'kinds' "), "\"\"both\" 'kinds' \"");
        assert_eq!(quote_scalar("say \"hi\""), "say \"hi\"");
    }

    #[test]
    fn test_quote_item() {
        assert_eq!(quote_item("ab").unwrap(), "ab");
        assert_eq!(quote_item("some value").unwrap(), "some value");
        assert_eq!(quote_item("a,b").unwrap(), "\"a,b\"");
        assert_eq!(quote_item("\"x\", y").unwrap(), "'\"x\", y'");
        assert_eq!(quote_item("34.5").unwrap(), "\"34.5\"");
        assert_eq!(quote_item("\"x\", 'y").unwrap(), "'\"x\", 'y'");
        assert_eq!(quote_item("\"a\", 'b', c"), None);
    }

    #[test]
    fn test_closes_early() {
        assert!(closes_early("\"x\", y", '"'));
        assert!(closes_early("a' ,b", '\''));
        assert!(!closes_early("a\"b, c", '"'));
        assert!(!closes_early("a, b", '"'));
    }

    #[test]
    fn test_render_block() {
        let lenient = Encoder::default();
        assert_eq!(lenient.render_block("a\nb").unwrap(), "'''\na\nb\n'''");
        assert_eq!(
            lenient.render_block("a\n  '''  \nb").unwrap(),
            "'''\na\nb\n'''"
        );

        let strict = Encoder::new(EncodeOptions::strict());
        assert!(strict.render_block("a\n\"\"\"\nb").is_err());
        assert!(strict.render_block("a\r\nb").is_err());
        assert!(strict.render_block("a\rb\nc").is_ok());
    }

    #[test]
    fn test_floats_keep_their_type() {
        let encoder = Encoder::default();
        assert_eq!(encoder.render_bare(&Value::Float(3.0)).unwrap(), "3.0");
        assert_eq!(encoder.render_bare(&Value::Float(34.5)).unwrap(), "34.5");
        assert_eq!(encoder.render_bare(&Value::Float(1e100)).unwrap(), "1e100");
    }

    #[test]
    fn test_strict_rejects_nan() {
        let strict = Encoder::new(EncodeOptions::strict());
        let err = strict.render_bare(&Value::Float(f64::NAN)).unwrap_err();
        assert!(matches!(err, Error::UnsupportedValue(_)));

        let lenient = Encoder::default();
        assert_eq!(lenient.render_bare(&Value::Float(f64::NAN)).unwrap(), "NaN");
    }
}
